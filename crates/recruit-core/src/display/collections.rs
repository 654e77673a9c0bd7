//! Collection wrapper types for displaying groups of domain objects.

use std::{fmt, ops::Index};

use super::datetime::LocalDateTime;
use crate::models::{Plan, Timeline};

/// Newtype wrapper for displaying a plan list.
///
/// Each plan is shown as a compact entry: name, canonical status, sender and
/// creation time. Empty lists print a single notice.
///
/// # Examples
///
/// ```rust
/// use recruit_core::{display::Plans, models::Plan};
///
/// let plans = Plans(vec![Plan::new(1, "Kế hoạch React")]);
/// let output = format!("{}", plans);
/// assert!(output.contains("Kế hoạch React (ID: 1)"));
/// assert!(output.contains("Mới tạo"));
///
/// assert_eq!(format!("{}", Plans(vec![])), "No plans found.\n");
/// ```
pub struct Plans(pub Vec<Plan>);

impl Plans {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of plans in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the plans.
    pub fn iter(&self) -> std::slice::Iter<'_, Plan> {
        self.0.iter()
    }
}

impl Index<usize> for Plans {
    type Output = Plan;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for Plans {
    type Item = Plan;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Plans {
    type Item = &'a Plan;
    type IntoIter = std::slice::Iter<'a, Plan>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Plans {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No plans found.");
        }

        for plan in &self.0 {
            writeln!(f, "## {} (ID: {})", plan.plan_name, plan.id)?;
            writeln!(f)?;
            writeln!(f, "- **Status**: {}", plan.status)?;
            if let Some(request) = &plan.request {
                writeln!(f, "- **Request**: {}", request.request_title)?;
            }
            writeln!(f, "- **Sent by**: {}", plan.sender_name())?;
            if let Some(created_at) = &plan.created_at {
                writeln!(f, "- **Created**: {}", LocalDateTime(created_at))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Borrowing wrapper for displaying a four-stage timeline in order.
pub struct TimelineView<'a>(pub &'a Timeline);

impl fmt::Display for TimelineView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in self.0 {
            write!(f, "{step}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;
    use crate::models::{PersonRef, StatusKind};

    fn create_test_plan() -> Plan {
        let mut plan = Plan::new(7, "Kế hoạch Python");
        plan.status = StatusKind::Rejected;
        plan.created_at = Some(Timestamp::from_second(1640995200).unwrap()); // 2022-01-01 00:00:00 UTC
        plan.created_by = Some(PersonRef::named("Nguyễn Văn A"));
        plan.rejected_by_name = Some("Phạm D".to_string());
        plan
    }

    #[test]
    fn test_plans_display() {
        let plans = Plans(vec![create_test_plan()]);
        let output = format!("{plans}");

        assert!(output.contains("## Kế hoạch Python (ID: 7)"));
        assert!(output.contains("- **Status**: Bị từ chối"));
        assert!(output.contains("- **Sent by**: Phạm D"));
        assert!(output.contains("- **Created**: "));
    }

    #[test]
    fn test_plans_collection_methods() {
        let plans = Plans(vec![create_test_plan(), Plan::new(8, "Kế hoạch Go")]);

        assert_eq!(plans.len(), 2);
        assert!(!plans.is_empty());
        assert_eq!(plans[1].plan_name, "Kế hoạch Go");
        assert_eq!(plans.iter().filter(|p| p.status == StatusKind::New).count(), 1);
    }
}
