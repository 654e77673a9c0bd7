//! Core library for tracking recruitment plans through their workflow.
//!
//! A recruitment plan is approved, sources candidates, trains them and hands
//! the trainees over to the requesting team. The status recorded on a plan
//! can lag behind what actually happened downstream, so this crate derives a
//! canonical status and a four-stage timeline from the plan plus signals
//! gathered from the request, candidate and training subsystems.
//!
//! # Layers
//!
//! - [`workflow`]: pure derivation (status, timeline, rejection notes)
//! - [`tracker`]: async aggregation and enrichment over a [`PlanSource`]
//! - [`source`]: the collaborator trait and its SQLite-backed implementation
//! - [`display`]: markdown formatting for the CLI and MCP server
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use recruit_core::{params::ListPlans, display::Plans, SqliteSourceBuilder, Tracker};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let source = SqliteSourceBuilder::new()
//!     .with_database_path(Some("recruit.db"))
//!     .build()
//!     .await?;
//! let tracker = Tracker::new(source);
//!
//! let plans = tracker.list_plans(&ListPlans::default()).await?;
//! println!("{}", Plans(plans));
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod source;
pub mod tracker;
pub mod workflow;

// Re-export commonly used types
pub use db::Database;
pub use display::{ActionResult, ImportResult, OperationStatus, PlanAction, Plans};
pub use error::{RecruitError, Result};
pub use models::{
    Candidate, Plan, PlanFilter, PlanMetadata, RequestDetail, Snapshot, StageStatus, StatusKind,
    Timeline, TimelineStep,
};
pub use params::{Id, ListPlans, RejectPlan, ShowPlan};
pub use source::{PlanSource, SqliteSource, SqliteSourceBuilder};
pub use tracker::{PlanBoard, PlanDetail, RefreshTicket, Tracker};
pub use workflow::{
    build_workflow_timeline, derive_plan_status, parse_reject_annotation, RejectAnnotation,
};
