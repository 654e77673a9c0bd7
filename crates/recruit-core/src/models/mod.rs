//! Data models for recruitment plans and their derived views.
//!
//! Plans, source requests and candidates are owned by external subsystems;
//! this crate only reads them. [`PlanMetadata`] and the [`Timeline`] are
//! derived values, rebuilt on every refresh and never written back.
//!
//! Display implementations for these models live in
//! [`crate::display::models`].
//!
//! # Examples
//!
//! ```rust
//! use recruit_core::models::{Plan, SourceRequest, StatusKind, TechQuantity};
//!
//! let mut plan = Plan::new(1, "Kế hoạch tuyển dụng Java");
//! plan.request = Some(SourceRequest {
//!     request_id: 7,
//!     tech_quantities: vec![
//!         TechQuantity { technology_name: "Java".into(), requested_count: 3 },
//!         TechQuantity { technology_name: "React".into(), requested_count: 2 },
//!     ],
//!     ..Default::default()
//! });
//!
//! assert_eq!(plan.status, StatusKind::New);
//! assert_eq!(plan.output_required(), 5);
//! assert_eq!(plan.input_required(), 10);
//! ```

pub mod filters;
pub mod metadata;
pub mod plan;
pub mod snapshot;
pub mod status;
pub mod timeline;

#[cfg(test)]
mod tests;

pub use filters::{find_by_plan_name, find_by_request_title, CreatedOn, PlanFilter};
pub use metadata::{Candidate, PlanMetadata, RequestDetail, HIRED_MARKER};
pub use plan::{coerce_count, PersonRef, Plan, SourceRequest, TechQuantity, INPUT_RATIO};
pub use snapshot::{Snapshot, Trainee};
pub use status::{StageStatus, StatusKind};
pub use timeline::{StepKey, Timeline, TimelineStep};
