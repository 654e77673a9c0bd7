//! Per-plan metadata gathered from the related subsystems.

use serde::{Deserialize, Serialize};

use super::StatusKind;

/// Candidate status marking a hired/onboarded candidate.
pub const HIRED_MARKER: &str = "đã nhận việc";

/// A candidate sourced for a plan, as listed by the candidate subsystem.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Candidate {
    pub plan_id: u64,

    #[serde(default)]
    pub full_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl Candidate {
    /// Whether the candidate's status is the hired marker (case and
    /// surrounding whitespace ignored).
    pub fn is_hired(&self) -> bool {
        self.status
            .as_deref()
            .is_some_and(|status| status.trim().to_lowercase() == HIRED_MARKER)
    }
}

/// Reply of the request subsystem for a single staffing request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RequestDetail {
    pub request_id: u64,

    #[serde(default)]
    pub request_title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<StatusKind>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reject_reason: Option<String>,
}

/// Ephemeral aggregate of downstream signals for one plan.
///
/// Rebuilt on every detail refresh and never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanMetadata {
    #[serde(default)]
    pub handover_count: Option<u64>,

    #[serde(default)]
    pub delivered_count: Option<u64>,

    #[serde(default)]
    pub request_status: Option<StatusKind>,

    #[serde(default)]
    pub request_reject_reason: String,

    #[serde(default)]
    pub candidate_count: u64,

    #[serde(default)]
    pub candidate_passed_count: u64,

    #[serde(default)]
    pub training_count: u64,
}

impl Default for PlanMetadata {
    /// Baseline used when no plan is selected.
    fn default() -> Self {
        Self {
            handover_count: Some(0),
            delivered_count: None,
            request_status: None,
            request_reject_reason: String::new(),
            candidate_count: 0,
            candidate_passed_count: 0,
            training_count: 0,
        }
    }
}

impl PlanMetadata {
    /// Metadata carrying only the signals the list view resolves per plan.
    pub fn for_listing(handover_count: u64, request_reject_reason: impl Into<String>) -> Self {
        Self {
            handover_count: Some(handover_count),
            delivered_count: Some(handover_count),
            request_reject_reason: request_reject_reason.into(),
            ..Self::default()
        }
    }

    /// Handover count with the delivered count as fallback.
    pub fn resolved_handover(&self) -> Option<u64> {
        self.handover_count.or(self.delivered_count)
    }

    pub fn has_reject_reason(&self) -> bool {
        !self.request_reject_reason.trim().is_empty()
    }
}
