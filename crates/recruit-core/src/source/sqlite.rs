//! [`PlanSource`] backed by the local SQLite mirror.

use std::path::PathBuf;

use tokio::task;

use super::PlanSource;
use crate::{
    db::Database,
    error::{RecruitError, Result},
    models::{Candidate, Plan, RequestDetail, Snapshot},
};

/// Serves collaborator lookups from a SQLite database file.
///
/// Every call opens its own connection on the blocking pool, so independent
/// lookups never wait on each other.
#[derive(Debug, Clone)]
pub struct SqliteSource {
    pub(crate) db_path: PathBuf,
}

impl SqliteSource {
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    /// Path of the backing database file.
    pub fn database_path(&self) -> &PathBuf {
        &self.db_path
    }

    /// Runs a database operation on the blocking pool.
    async fn with_database<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();
        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            op(&mut db)
        })
        .await
        .map_err(RecruitError::join)?
    }

    /// Loads a snapshot of subsystem data, upserting by id.
    pub async fn import_snapshot(&self, snapshot: Snapshot) -> Result<usize> {
        self.with_database(move |db| db.import_snapshot(&snapshot))
            .await
    }
}

impl PlanSource for SqliteSource {
    async fn fetch_plans(&self) -> Result<Vec<Plan>> {
        self.with_database(|db| db.list_plans()).await
    }

    async fn fetch_handover_count(&self, plan_id: u64) -> Result<Option<u64>> {
        self.with_database(move |db| db.handover_count(plan_id).map(Some))
            .await
    }

    async fn fetch_request_detail(&self, request_id: u64) -> Result<Option<RequestDetail>> {
        self.with_database(move |db| db.get_request_detail(request_id))
            .await
    }

    async fn fetch_candidates(&self, plan_id: u64) -> Result<Vec<Candidate>> {
        self.with_database(move |db| db.list_candidates(plan_id))
            .await
    }

    async fn fetch_training_count(&self, plan_id: u64) -> Result<Option<u64>> {
        self.with_database(move |db| db.training_count(plan_id).map(Some))
            .await
    }

    async fn confirm_plan(&self, plan_id: u64) -> Result<Plan> {
        self.with_database(move |db| db.confirm_plan(plan_id)).await
    }

    async fn reject_plan(&self, plan_id: u64, reason: &str) -> Result<Plan> {
        let reason = reason.to_string();
        self.with_database(move |db| db.reject_plan(plan_id, &reason))
            .await
    }
}
