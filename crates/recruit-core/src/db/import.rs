//! Bulk loading of subsystem snapshots.

use std::collections::BTreeSet;

use rusqlite::{params, Transaction};

use super::{
    plan_queries::PlanPeople,
    utils::{sql_id, to_json},
};
use crate::{
    error::{DatabaseResultExt, Result},
    models::{Plan, RequestDetail, Snapshot, SourceRequest},
};

const UPSERT_REQUEST_SQL: &str = "INSERT INTO requests (request_id, request_title, created_by, created_by_name)
     VALUES (?1, ?2, ?3, ?4)
     ON CONFLICT(request_id) DO UPDATE SET
         request_title = excluded.request_title,
         created_by = excluded.created_by,
         created_by_name = excluded.created_by_name";

const UPSERT_REQUEST_DETAIL_SQL: &str = "INSERT INTO requests (request_id, request_title, status, reject_reason)
     VALUES (?1, ?2, ?3, ?4)
     ON CONFLICT(request_id) DO UPDATE SET
         request_title = CASE WHEN excluded.request_title <> '' THEN excluded.request_title
                              ELSE requests.request_title END,
         status = excluded.status,
         reject_reason = excluded.reject_reason";

const UPSERT_PLAN_SQL: &str = "INSERT INTO plans (id, plan_name, status, created_at, updated_at,
         recruitment_deadline, delivery_deadline, note, people, handover_count,
         delivered_count, request_reject_reason, request_id)
     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)
     ON CONFLICT(id) DO UPDATE SET
         plan_name = excluded.plan_name,
         status = excluded.status,
         created_at = excluded.created_at,
         updated_at = excluded.updated_at,
         recruitment_deadline = excluded.recruitment_deadline,
         delivery_deadline = excluded.delivery_deadline,
         note = excluded.note,
         people = excluded.people,
         handover_count = excluded.handover_count,
         delivered_count = excluded.delivered_count,
         request_reject_reason = excluded.request_reject_reason,
         request_id = excluded.request_id";

impl super::Database {
    /// Loads a snapshot in a single transaction and returns the number of
    /// plans written.
    ///
    /// Requests and plans are upserted by id. Candidates and trainees
    /// replace the existing rows of every plan they mention.
    pub fn import_snapshot(&mut self, snapshot: &Snapshot) -> Result<usize> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to start transaction")?;

        for request in snapshot.plans.iter().filter_map(|plan| plan.request.as_ref()) {
            upsert_request(&tx, request)?;
        }
        for detail in &snapshot.requests {
            upsert_request_detail(&tx, detail)?;
        }
        for plan in &snapshot.plans {
            upsert_plan(&tx, plan)?;
        }

        let candidate_plans: BTreeSet<u64> =
            snapshot.candidates.iter().map(|c| c.plan_id).collect();
        for plan_id in candidate_plans {
            tx.execute("DELETE FROM candidates WHERE plan_id = ?1", params![sql_id("plan_id", plan_id)?])
                .db_context("Failed to clear candidates")?;
        }
        for candidate in &snapshot.candidates {
            tx.execute(
                "INSERT INTO candidates (plan_id, full_name, status) VALUES (?1, ?2, ?3)",
                params![sql_id("plan_id", candidate.plan_id)?, candidate.full_name, candidate.status],
            )
            .db_context("Failed to insert candidate")?;
        }

        let trainee_plans: BTreeSet<u64> = snapshot.trainees.iter().map(|t| t.plan_id).collect();
        for plan_id in trainee_plans {
            tx.execute("DELETE FROM trainees WHERE plan_id = ?1", params![sql_id("plan_id", plan_id)?])
                .db_context("Failed to clear trainees")?;
        }
        for trainee in &snapshot.trainees {
            tx.execute(
                "INSERT INTO trainees (plan_id, full_name, delivered) VALUES (?1, ?2, ?3)",
                params![sql_id("plan_id", trainee.plan_id)?, trainee.full_name, trainee.delivered],
            )
            .db_context("Failed to insert trainee")?;
        }

        tx.commit().db_context("Failed to commit snapshot")?;

        log::debug!(
            "Imported {} plans, {} requests, {} candidates, {} trainees",
            snapshot.plans.len(),
            snapshot.requests.len(),
            snapshot.candidates.len(),
            snapshot.trainees.len()
        );

        Ok(snapshot.plans.len())
    }
}

fn upsert_request(tx: &Transaction<'_>, request: &SourceRequest) -> Result<()> {
    tx.execute(
        UPSERT_REQUEST_SQL,
        params![
            sql_id("request_id", request.request_id)?,
            request.request_title,
            to_json(&request.created_by)?,
            request.created_by_name,
        ],
    )
    .db_context("Failed to upsert request")?;

    tx.execute(
        "DELETE FROM tech_quantities WHERE request_id = ?1",
        params![sql_id("request_id", request.request_id)?],
    )
    .db_context("Failed to clear technology rows")?;

    for (position, row) in request.tech_quantities.iter().enumerate() {
        tx.execute(
            "INSERT INTO tech_quantities (request_id, position, technology_name, requested_count)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                sql_id("request_id", request.request_id)?,
                sql_id("position", position as u64)?,
                row.technology_name,
                i64::from(row.requested_count),
            ],
        )
        .db_context("Failed to insert technology row")?;
    }

    Ok(())
}

fn upsert_request_detail(tx: &Transaction<'_>, detail: &RequestDetail) -> Result<()> {
    tx.execute(
        UPSERT_REQUEST_DETAIL_SQL,
        params![
            sql_id("request_id", detail.request_id)?,
            detail.request_title,
            detail.status.as_ref().map(|status| status.as_str().to_string()),
            detail.reject_reason,
        ],
    )
    .db_context("Failed to upsert request detail")?;
    Ok(())
}

fn upsert_plan(tx: &Transaction<'_>, plan: &Plan) -> Result<()> {
    let people = serde_json::to_string(&PlanPeople::from(plan))?;
    tx.execute(
        UPSERT_PLAN_SQL,
        params![
            sql_id("id", plan.id)?,
            plan.plan_name,
            plan.status.as_str(),
            plan.created_at.map(|ts| ts.to_string()),
            plan.updated_at.map(|ts| ts.to_string()),
            plan.recruitment_deadline.map(|d| d.to_string()),
            plan.delivery_deadline.map(|d| d.to_string()),
            plan.note,
            people,
            plan.handover_count
                .map(|n| sql_id("handover_count", n))
                .transpose()?,
            plan.delivered_count
                .map(|n| sql_id("delivered_count", n))
                .transpose()?,
            plan.request_reject_reason,
            plan.request_id()
                .map(|id| sql_id("request_id", id))
                .transpose()?,
        ],
    )
    .db_context("Failed to upsert plan")?;
    Ok(())
}
