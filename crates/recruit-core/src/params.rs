//! Parameter structures shared by the CLI and MCP interfaces.
//!
//! These types carry no framework derives beyond serde (and JSON schema
//! behind the `schema` feature). Interface layers wrap or convert into them:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{RecruitError, Result};

/// Generic parameters for operations requiring just a plan ID.
///
/// Used by approve_plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Id {
    /// The ID of the plan to operate on
    pub id: u64,
}

/// Parameters for listing plans.
///
/// Every field is optional; an empty value lists everything.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ListPlans {
    /// Case-insensitive substring of the plan name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Canonical status to keep (e.g. 'NEW', 'CONFIRMED', 'FAILED')
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Creation date: 'YYYY', 'YYYY-MM' or 'YYYY-MM-DD'
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

/// Parameters for opening one plan.
///
/// A plan is picked by `id`, or else by its exact name, or else by the title
/// of its source request (names and titles ignore case).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ShowPlan {
    /// The ID of the plan to display
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Exact plan name, used when no ID is given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Exact source request title, used when neither ID nor name is given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request: Option<String>,
}

impl From<Id> for ShowPlan {
    fn from(val: Id) -> Self {
        ShowPlan {
            id: Some(val.id),
            ..Default::default()
        }
    }
}

/// Parameters for rejecting a plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct RejectPlan {
    /// The ID of the plan to reject
    pub id: u64,
    /// Why the plan is rejected (required, must not be blank)
    pub reason: String,
}

impl RejectPlan {
    /// Returns the trimmed reason, rejecting blank input.
    ///
    /// ```rust
    /// use recruit_core::params::RejectPlan;
    ///
    /// let params = RejectPlan { id: 1, reason: "  Ngân sách bị cắt ".to_string() };
    /// assert_eq!(params.validated_reason().unwrap(), "Ngân sách bị cắt");
    ///
    /// let blank = RejectPlan { id: 1, reason: "   ".to_string() };
    /// assert!(blank.validated_reason().is_err());
    /// ```
    pub fn validated_reason(&self) -> Result<&str> {
        let reason = self.reason.trim();
        if reason.is_empty() {
            return Err(RecruitError::invalid_input("reason").with_reason(
                "A rejection reason is required. Please describe why the plan is rejected.",
            ));
        }
        Ok(reason)
    }
}
