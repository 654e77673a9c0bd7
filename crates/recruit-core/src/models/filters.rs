//! Filter types for querying plan lists.

use std::{fmt, str::FromStr};

use jiff::{civil::Date, tz::TimeZone, Timestamp};

use super::{Plan, StatusKind};
use crate::{error::RecruitError, workflow::derive_plan_status};

/// Creation-date granularity used when filtering plans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreatedOn {
    /// Exact calendar day
    Day(Date),
    /// Any day of the given month
    Month { year: i16, month: i8 },
    /// Any day of the given year
    Year(i16),
}

impl CreatedOn {
    /// Whether a creation timestamp falls in this period, evaluated in the
    /// given time zone.
    pub fn matches_in(&self, created_at: &Timestamp, tz: &TimeZone) -> bool {
        let date = created_at.to_zoned(tz.clone()).date();
        match *self {
            CreatedOn::Day(day) => date == day,
            CreatedOn::Month { year, month } => date.year() == year && date.month() == month,
            CreatedOn::Year(year) => date.year() == year,
        }
    }
}

impl FromStr for CreatedOn {
    type Err = String;

    /// Parses `YYYY`, `YYYY-MM` or `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || format!("Invalid date filter: {s} (expected YYYY, YYYY-MM or YYYY-MM-DD)");
        let parts: Vec<&str> = s.trim().split('-').collect();
        let year = parts
            .first()
            .and_then(|y| y.parse::<i16>().ok())
            .ok_or_else(invalid)?;
        match parts.len() {
            1 => Ok(CreatedOn::Year(year)),
            2 => {
                let month = parts[1]
                    .parse::<i8>()
                    .ok()
                    .filter(|m| (1..=12).contains(m))
                    .ok_or_else(invalid)?;
                Ok(CreatedOn::Month { year, month })
            }
            3 => {
                let date = s.trim().parse::<Date>().map_err(|_| invalid())?;
                Ok(CreatedOn::Day(date))
            }
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for CreatedOn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreatedOn::Day(date) => write!(f, "{date}"),
            CreatedOn::Month { year, month } => write!(f, "{year:04}-{month:02}"),
            CreatedOn::Year(year) => write!(f, "{year:04}"),
        }
    }
}

/// Filter options for plan lists.
#[derive(Debug, Clone, Default)]
pub struct PlanFilter {
    /// Filter by plan name (case-insensitive partial match)
    pub name_contains: Option<String>,

    /// Filter by canonical status derived from plan-embedded signals
    pub status: Option<StatusKind>,

    /// Filter by creation date
    pub created_on: Option<CreatedOn>,
}

impl PlanFilter {
    /// Whether a plan passes every configured criterion.
    pub fn matches(&self, plan: &Plan, tz: &TimeZone) -> bool {
        if let Some(name) = self.name_contains.as_deref().map(str::trim) {
            if !name.is_empty()
                && !plan
                    .plan_name
                    .to_lowercase()
                    .contains(&name.to_lowercase())
            {
                return false;
            }
        }

        if let Some(status) = &self.status {
            if &derive_plan_status(plan, None) != status {
                return false;
            }
        }

        if let Some(created_on) = &self.created_on {
            match &plan.created_at {
                Some(created_at) if created_on.matches_in(created_at, tz) => {}
                _ => return false,
            }
        }

        true
    }

    /// Filters plans and orders them newest first.
    ///
    /// Plans without a creation timestamp sort after dated ones.
    pub fn apply(&self, plans: &[Plan], tz: &TimeZone) -> Vec<Plan> {
        let mut filtered: Vec<Plan> = plans
            .iter()
            .filter(|plan| self.matches(plan, tz))
            .cloned()
            .collect();
        filtered.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        filtered
    }
}

impl TryFrom<&crate::params::ListPlans> for PlanFilter {
    type Error = RecruitError;

    /// Convert ListPlans parameters to a PlanFilter, validating the date.
    ///
    /// ```rust
    /// use recruit_core::{models::{CreatedOn, PlanFilter, StatusKind}, params::ListPlans};
    ///
    /// let params = ListPlans {
    ///     name: Some("java".to_string()),
    ///     status: Some("failed".to_string()),
    ///     date: Some("2025-03".to_string()),
    /// };
    /// let filter = PlanFilter::try_from(&params).unwrap();
    /// assert_eq!(filter.status, Some(StatusKind::Failed));
    /// assert_eq!(filter.created_on, Some(CreatedOn::Month { year: 2025, month: 3 }));
    /// ```
    fn try_from(params: &crate::params::ListPlans) -> Result<Self, Self::Error> {
        let created_on = params
            .date
            .as_deref()
            .map(str::parse::<CreatedOn>)
            .transpose()
            .map_err(|reason| RecruitError::invalid_input("date").with_reason(reason))?;

        Ok(Self {
            name_contains: params.name.clone(),
            status: params.status.as_deref().map(StatusKind::normalize),
            created_on,
        })
    }
}

/// Finds a plan by exact name, ignoring case.
pub fn find_by_plan_name<'a>(plans: &'a [Plan], name: &str) -> Option<&'a Plan> {
    let wanted = name.to_lowercase();
    plans.iter().find(|p| p.plan_name.to_lowercase() == wanted)
}

/// Finds a plan by the title of its source request, ignoring case.
pub fn find_by_request_title<'a>(plans: &'a [Plan], title: &str) -> Option<&'a Plan> {
    let wanted = title.to_lowercase();
    plans.iter().find(|p| {
        p.request
            .as_ref()
            .is_some_and(|r| r.request_title.to_lowercase() == wanted)
    })
}
