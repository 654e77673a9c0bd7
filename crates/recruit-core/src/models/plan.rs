//! Plan model definition and related functionality.

use jiff::{civil::Date, Timestamp};
use serde::{Deserialize, Deserializer, Serialize};

use super::StatusKind;

/// Reference to a user account as embedded by the plan subsystem.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PersonRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl PersonRef {
    /// Creates a reference that only knows the person's full name.
    pub fn named(full_name: impl Into<String>) -> Self {
        Self {
            full_name: Some(full_name.into()),
            email: None,
        }
    }
}

/// One technology row of a staffing request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TechQuantity {
    /// Technology or role being staffed
    pub technology_name: String,

    /// Number of people requested for this technology
    #[serde(default)]
    pub requested_count: u32,
}

/// Staffing request a plan was created from.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SourceRequest {
    pub request_id: u64,

    #[serde(default)]
    pub request_title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<PersonRef>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by_name: Option<String>,

    /// Requested headcount per technology, in request order
    #[serde(default)]
    pub tech_quantities: Vec<TechQuantity>,
}

impl SourceRequest {
    /// Total headcount requested across all technology rows.
    pub fn output_required(&self) -> u64 {
        self.tech_quantities
            .iter()
            .map(|row| u64::from(row.requested_count))
            .sum()
    }

    /// Sourcing target: two candidate inputs per output position.
    pub fn input_required(&self) -> u64 {
        self.output_required() * INPUT_RATIO
    }
}

/// Candidates sourced per requested output position.
pub const INPUT_RATIO: u64 = 2;

/// Represents a recruitment plan as reported by the plan subsystem.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Plan {
    /// Unique identifier for the plan
    pub id: u64,

    /// Display name of the plan
    pub plan_name: String,

    /// Recorded status; overwritten with the canonical status after enrichment
    #[serde(default)]
    pub status: StatusKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recruitment_deadline: Option<Date>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_deadline: Option<Date>,

    /// Free text; carries the rejection reason once the plan is rejected
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<PersonRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmed_by: Option<PersonRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmed_by_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<PersonRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_by_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejected_by: Option<PersonRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejected_by_name: Option<String>,

    /// Plan-level handover count, when the plan subsystem embeds one
    #[serde(
        default,
        deserialize_with = "lenient_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub handover_count: Option<u64>,

    /// Older name of `handover_count`, still sent by some records
    #[serde(
        default,
        deserialize_with = "lenient_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub delivered_count: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_reject_reason: Option<String>,

    /// Source request (shared with the request subsystem)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request: Option<SourceRequest>,
}

impl Plan {
    /// Creates a plan in `NEW` state with only the required fields set.
    pub fn new(id: u64, plan_name: impl Into<String>) -> Self {
        Self {
            id,
            plan_name: plan_name.into(),
            status: StatusKind::New,
            created_at: None,
            updated_at: None,
            recruitment_deadline: None,
            delivery_deadline: None,
            note: None,
            created_by: None,
            created_by_name: None,
            confirmed_by: None,
            confirmed_by_name: None,
            updated_by: None,
            updated_by_name: None,
            rejected_by: None,
            rejected_by_name: None,
            handover_count: None,
            delivered_count: None,
            request_reject_reason: None,
            request: None,
        }
    }

    /// Total requested headcount, 0 when no request is attached.
    pub fn output_required(&self) -> u64 {
        self.request
            .as_ref()
            .map_or(0, SourceRequest::output_required)
    }

    /// Candidate sourcing target, 0 when no request is attached.
    pub fn input_required(&self) -> u64 {
        self.request
            .as_ref()
            .map_or(0, SourceRequest::input_required)
    }

    pub fn request_id(&self) -> Option<u64> {
        self.request.as_ref().map(|request| request.request_id)
    }

    /// Name shown as the sender of the plan in lists.
    pub fn sender_name(&self) -> &str {
        crate::workflow::sender_name(self)
    }
}

/// Accepts a number, a numeric string, or anything else (treated as absent).
fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(coerce_count))
}

/// Permissive numeric coercion for counts reported by other subsystems.
///
/// Non-negative integers, integral floats and numeric strings are accepted;
/// everything else yields `None`.
pub fn coerce_count(value: &serde_json::Value) -> Option<u64> {
    match value {
        serde_json::Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0 && f.fract() == 0.0).map(|f| f as u64)),
        serde_json::Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    }
}
