//! Snapshot of subsystem data loaded into the local store.

use serde::{Deserialize, Serialize};

use super::{Candidate, Plan, RequestDetail};

/// A trainee enrolled in a plan's training; `delivered` marks a handover.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Trainee {
    pub plan_id: u64,

    #[serde(default)]
    pub full_name: String,

    #[serde(default)]
    pub delivered: bool,
}

/// Bulk import payload mirroring the plan, request, candidate and training
/// subsystems.
///
/// Plans embed their source request (with technology rows); request status
/// and rejection reason come from `requests`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub requests: Vec<RequestDetail>,

    #[serde(default)]
    pub plans: Vec<Plan>,

    #[serde(default)]
    pub candidates: Vec<Candidate>,

    #[serde(default)]
    pub trainees: Vec<Trainee>,
}

impl Snapshot {
    /// Parses a snapshot from its JSON text.
    pub fn from_json(text: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}
