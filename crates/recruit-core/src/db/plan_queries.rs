//! Plan reads and status actions.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension, Row};
use serde::{Deserialize, Serialize};

use super::utils::{count_optional, json_optional, parse_optional, sql_id};
use crate::{
    error::{DatabaseResultExt, RecruitError, Result},
    models::{PersonRef, Plan, SourceRequest, StatusKind, TechQuantity},
};

const PLAN_COLUMNS: &str = "p.id, p.plan_name, p.status, p.created_at, p.updated_at, \
     p.recruitment_deadline, p.delivery_deadline, p.note, p.people, p.handover_count, \
     p.delivered_count, p.request_reject_reason, r.request_id, r.request_title, \
     r.created_by, r.created_by_name";
const PLAN_FROM: &str = "FROM plans p LEFT JOIN requests r ON r.request_id = p.request_id";
const SELECT_TECH_ROWS_SQL: &str = "SELECT technology_name, requested_count FROM tech_quantities \
     WHERE request_id = ?1 ORDER BY position";
const UPDATE_PLAN_STATUS_SQL: &str = "UPDATE plans SET status = ?1, updated_at = ?2 WHERE id = ?3";
const UPDATE_PLAN_REJECT_SQL: &str =
    "UPDATE plans SET status = ?1, note = ?2, updated_at = ?3 WHERE id = ?4";

/// Actor references of a plan, stored together as one JSON column.
#[derive(Debug, Default, Serialize, Deserialize)]
pub(crate) struct PlanPeople {
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
}

impl From<&Plan> for PlanPeople {
    fn from(plan: &Plan) -> Self {
        Self {
            created_by: plan.created_by.clone(),
            created_by_name: plan.created_by_name.clone(),
            confirmed_by: plan.confirmed_by.clone(),
            confirmed_by_name: plan.confirmed_by_name.clone(),
            updated_by: plan.updated_by.clone(),
            updated_by_name: plan.updated_by_name.clone(),
            rejected_by: plan.rejected_by.clone(),
            rejected_by_name: plan.rejected_by_name.clone(),
        }
    }
}

fn plan_from_row(row: &Row<'_>) -> rusqlite::Result<Plan> {
    let status: String = row.get(2)?;
    let people: PlanPeople = json_optional(row, 8)?.unwrap_or_default();
    let request = match row.get::<_, Option<i64>>(12)? {
        Some(request_id) => Some(SourceRequest {
            request_id: request_id as u64,
            request_title: row.get::<_, Option<String>>(13)?.unwrap_or_default(),
            created_by: json_optional(row, 14)?,
            created_by_name: row.get(15)?,
            tech_quantities: Vec::new(),
        }),
        None => None,
    };

    Ok(Plan {
        id: row.get::<_, i64>(0)? as u64,
        plan_name: row.get(1)?,
        status: StatusKind::normalize(&status),
        created_at: parse_optional(row, 3)?,
        updated_at: parse_optional(row, 4)?,
        recruitment_deadline: parse_optional(row, 5)?,
        delivery_deadline: parse_optional(row, 6)?,
        note: row.get(7)?,
        created_by: people.created_by,
        created_by_name: people.created_by_name,
        confirmed_by: people.confirmed_by,
        confirmed_by_name: people.confirmed_by_name,
        updated_by: people.updated_by,
        updated_by_name: people.updated_by_name,
        rejected_by: people.rejected_by,
        rejected_by_name: people.rejected_by_name,
        handover_count: count_optional(row, 9)?,
        delivered_count: count_optional(row, 10)?,
        request_reject_reason: row.get(11)?,
        request,
    })
}

impl super::Database {
    /// Lists every plan with its source request and technology rows.
    pub fn list_plans(&self) -> Result<Vec<Plan>> {
        let query = format!("SELECT {PLAN_COLUMNS} {PLAN_FROM} ORDER BY p.id");
        let mut stmt = self
            .connection
            .prepare(&query)
            .db_context("Failed to prepare query")?;

        let mut plans = stmt
            .query_map([], plan_from_row)
            .db_context("Failed to query plans")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to read plan row")?;

        for plan in &mut plans {
            self.attach_tech_rows(plan)?;
        }

        Ok(plans)
    }

    /// Retrieves a plan by its ID.
    pub fn get_plan(&self, id: u64) -> Result<Option<Plan>> {
        let query = format!("SELECT {PLAN_COLUMNS} {PLAN_FROM} WHERE p.id = ?1");
        let mut plan = self
            .connection
            .query_row(&query, params![sql_id("id", id)?], plan_from_row)
            .optional()
            .db_context("Failed to query plan")?;

        if let Some(ref mut plan) = plan {
            self.attach_tech_rows(plan)?;
        }

        Ok(plan)
    }

    fn attach_tech_rows(&self, plan: &mut Plan) -> Result<()> {
        let Some(request) = plan.request.as_mut() else {
            return Ok(());
        };

        let mut stmt = self
            .connection
            .prepare(SELECT_TECH_ROWS_SQL)
            .db_context("Failed to prepare query")?;
        request.tech_quantities = stmt
            .query_map(params![sql_id("request_id", request.request_id)?], |row| {
                Ok(TechQuantity {
                    technology_name: row.get(0)?,
                    requested_count: row.get::<_, i64>(1)?.clamp(0, i64::from(u32::MAX)) as u32,
                })
            })
            .db_context("Failed to query technology rows")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to read technology row")?;

        Ok(())
    }

    /// Records the plan as confirmed.
    pub fn confirm_plan(&mut self, id: u64) -> Result<Plan> {
        let now = Timestamp::now().to_string();
        let changed = self
            .connection
            .execute(
                UPDATE_PLAN_STATUS_SQL,
                params![StatusKind::Confirmed.as_str(), now, sql_id("id", id)?],
            )
            .db_context("Failed to confirm plan")?;

        self.updated_plan(id, changed)
    }

    /// Records the plan as rejected, storing the reason as its note.
    pub fn reject_plan(&mut self, id: u64, reason: &str) -> Result<Plan> {
        let now = Timestamp::now().to_string();
        let changed = self
            .connection
            .execute(
                UPDATE_PLAN_REJECT_SQL,
                params![StatusKind::Rejected.as_str(), reason, now, sql_id("id", id)?],
            )
            .db_context("Failed to reject plan")?;

        self.updated_plan(id, changed)
    }

    fn updated_plan(&self, id: u64, changed: usize) -> Result<Plan> {
        if changed == 0 {
            return Err(RecruitError::PlanNotFound { id });
        }
        self.get_plan(id)?
            .ok_or(RecruitError::PlanNotFound { id })
    }
}
