//! Result wrapper types for displaying operation outcomes.

use std::{fmt, path::Path};

use crate::models::Plan;

/// Which action was applied to a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanAction {
    Confirmed,
    Rejected,
}

/// Wrapper type for displaying the result of a confirm or reject action,
/// followed by the updated plan.
///
/// # Examples
///
/// ```rust
/// use recruit_core::{
///     display::{ActionResult, PlanAction},
///     models::Plan,
/// };
///
/// let result = ActionResult::new(PlanAction::Confirmed, Plan::new(3, "Kế hoạch .NET"));
/// assert!(result.to_string().starts_with("Confirmed plan with ID: 3"));
/// ```
pub struct ActionResult {
    pub action: PlanAction,
    pub resource: Plan,
}

impl ActionResult {
    pub fn new(action: PlanAction, resource: Plan) -> Self {
        Self { action, resource }
    }
}

impl fmt::Display for ActionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self.action {
            PlanAction::Confirmed => "Confirmed",
            PlanAction::Rejected => "Rejected",
        };
        writeln!(f, "{verb} plan with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the outcome of a snapshot import.
pub struct ImportResult<'a> {
    pub path: &'a Path,
    pub plans: usize,
}

impl fmt::Display for ImportResult<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Imported {} plan(s) from {}",
            self.plans,
            self.path.display()
        )
    }
}
