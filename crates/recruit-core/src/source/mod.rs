//! Collaborator interface to the subsystems that own plan data.
//!
//! The tracker never talks to a transport directly; it goes through a
//! [`PlanSource`]. Implementations apply their own timeout and retry policy
//! and report failures as errors, which the tracker logs and replaces with
//! defaults.

use std::future::Future;

use crate::{
    error::Result,
    models::{Candidate, Plan, RequestDetail},
};

pub mod builder;
pub mod sqlite;

pub use builder::SqliteSourceBuilder;
pub use sqlite::SqliteSource;

/// Lookups and actions offered by the plan, request, candidate and training
/// subsystems.
pub trait PlanSource: Send + Sync {
    /// Bulk read of all plans.
    fn fetch_plans(&self) -> impl Future<Output = Result<Vec<Plan>>> + Send;

    /// Number of trainees handed over for a plan; `None` when the subsystem
    /// returned no usable number.
    fn fetch_handover_count(&self, plan_id: u64)
        -> impl Future<Output = Result<Option<u64>>> + Send;

    /// Detail of a staffing request; `None` when it does not exist.
    fn fetch_request_detail(
        &self,
        request_id: u64,
    ) -> impl Future<Output = Result<Option<RequestDetail>>> + Send;

    /// Candidates sourced for a plan.
    fn fetch_candidates(&self, plan_id: u64) -> impl Future<Output = Result<Vec<Candidate>>> + Send;

    /// Number of trainees enrolled for a plan; `None` when the subsystem
    /// returned no usable number.
    fn fetch_training_count(&self, plan_id: u64)
        -> impl Future<Output = Result<Option<u64>>> + Send;

    /// Marks a plan as confirmed and returns the updated record.
    fn confirm_plan(&self, plan_id: u64) -> impl Future<Output = Result<Plan>> + Send;

    /// Marks a plan as rejected with the given note and returns the updated
    /// record.
    fn reject_plan(&self, plan_id: u64, reason: &str)
        -> impl Future<Output = Result<Plan>> + Send;
}
