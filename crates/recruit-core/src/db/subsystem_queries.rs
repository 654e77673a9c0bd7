//! Lookups answered on behalf of the request, candidate and training
//! subsystems.

use rusqlite::{params, OptionalExtension};

use super::utils::sql_id;

use crate::{
    error::{DatabaseResultExt, Result},
    models::{Candidate, RequestDetail, StatusKind},
};

const COUNT_DELIVERED_SQL: &str =
    "SELECT COUNT(*) FROM trainees WHERE plan_id = ?1 AND delivered <> 0";
const COUNT_TRAINEES_SQL: &str = "SELECT COUNT(*) FROM trainees WHERE plan_id = ?1";
const SELECT_CANDIDATES_SQL: &str =
    "SELECT plan_id, full_name, status FROM candidates WHERE plan_id = ?1 ORDER BY id";
const SELECT_REQUEST_SQL: &str =
    "SELECT request_id, request_title, status, reject_reason FROM requests WHERE request_id = ?1";

impl super::Database {
    /// Number of trainees of a plan that were handed over.
    pub fn handover_count(&self, plan_id: u64) -> Result<u64> {
        self.count(COUNT_DELIVERED_SQL, plan_id, "Failed to count handed-over trainees")
    }

    /// Number of trainees enrolled for a plan.
    pub fn training_count(&self, plan_id: u64) -> Result<u64> {
        self.count(COUNT_TRAINEES_SQL, plan_id, "Failed to count trainees")
    }

    fn count(&self, sql: &str, plan_id: u64, message: &str) -> Result<u64> {
        let count: i64 = self
            .connection
            .query_row(sql, params![sql_id("plan_id", plan_id)?], |row| row.get(0))
            .db_context(message)?;
        Ok(u64::try_from(count).unwrap_or(0))
    }

    /// Candidates sourced for a plan, in insertion order.
    pub fn list_candidates(&self, plan_id: u64) -> Result<Vec<Candidate>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_CANDIDATES_SQL)
            .db_context("Failed to prepare query")?;

        let candidates = stmt
            .query_map(params![sql_id("plan_id", plan_id)?], |row| {
                Ok(Candidate {
                    plan_id: row.get::<_, i64>(0)? as u64,
                    full_name: row.get(1)?,
                    status: row.get(2)?,
                })
            })
            .db_context("Failed to query candidates")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to read candidate row")?;

        Ok(candidates)
    }

    /// Status and rejection reason of a staffing request.
    pub fn get_request_detail(&self, request_id: u64) -> Result<Option<RequestDetail>> {
        self.connection
            .query_row(SELECT_REQUEST_SQL, params![sql_id("request_id", request_id)?], |row| {
                let status: Option<String> = row.get(2)?;
                Ok(RequestDetail {
                    request_id: row.get::<_, i64>(0)? as u64,
                    request_title: row.get(1)?,
                    status: status.as_deref().map(StatusKind::normalize),
                    reject_reason: row.get(3)?,
                })
            })
            .optional()
            .db_context("Failed to query request")
    }
}
