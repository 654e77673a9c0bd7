//! Async orchestration over a [`PlanSource`].
//!
//! The [`Tracker`] fetches plans and their downstream signals, hands them to
//! the pure [`crate::workflow`] functions and returns enriched results. It
//! is the only layer that performs I/O on behalf of the workflow engine.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  CLI / MCP      │    │    Tracker      │    │   PlanSource    │
//! │  (presentation) │───▶│ (aggregate,     │───▶│ (subsystems or  │
//! │                 │    │  enrich, act)   │    │  SQLite mirror) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Collaborator failures during aggregation and enrichment are logged and
//! replaced with defaults; they never fail the call. Plan actions and the
//! bulk plan read do propagate errors.
//!
//! ## Submodules
//!
//! - [`aggregate`]: per-plan metadata fan-out
//! - [`enrich`]: list-wide status enrichment, filtering and plan detail
//! - [`actions`]: confirm and reject
//! - [`board`]: list state with refresh supersession

use serde::Serialize;

use crate::{
    models::{Plan, PlanMetadata, StatusKind, Timeline},
    source::PlanSource,
};

pub mod actions;
pub mod aggregate;
pub mod board;
pub mod enrich;

pub use board::{PlanBoard, RefreshTicket};

/// Prefix stored in front of the reason when a plan is rejected.
pub const REJECT_NOTE_PREFIX: &str = "Kế hoạch tuyển dụng: ";

/// Coordinates lookups against a [`PlanSource`].
#[derive(Debug, Clone)]
pub struct Tracker<S> {
    source: S,
}

impl<S: PlanSource> Tracker<S> {
    /// Creates a tracker over the given collaborator.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// The underlying collaborator.
    pub fn source(&self) -> &S {
        &self.source
    }
}

/// Everything the detail view shows for one plan.
#[derive(Debug, Clone, Serialize)]
pub struct PlanDetail {
    /// The plan, with its status replaced by the canonical status
    pub plan: Plan,
    pub metadata: PlanMetadata,
    pub status: StatusKind,
    pub timeline: Timeline,
}
