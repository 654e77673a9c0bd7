#![allow(dead_code)]

use std::{
    collections::{HashMap, HashSet},
    path::PathBuf,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
};

use recruit_core::{
    models::{PersonRef, SourceRequest, TechQuantity},
    Candidate, Plan, PlanSource, RecruitError, RequestDetail, Result, SqliteSource,
    SqliteSourceBuilder, StatusKind,
};
use tempfile::TempDir;
use tokio::sync::Barrier;

/// Collaborator lookups the fake can be told to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lookup {
    Handover,
    Candidates,
    Training,
    Request,
}

/// In-memory collaborator with per-lookup failure injection.
#[derive(Default)]
pub struct FakeSource {
    pub plans: Mutex<Vec<Plan>>,
    pub handover: HashMap<u64, Option<u64>>,
    pub training: HashMap<u64, Option<u64>>,
    pub candidates: HashMap<u64, Vec<Candidate>>,
    pub requests: HashMap<u64, RequestDetail>,
    failing: HashSet<(Lookup, u64)>,
    gated: HashSet<(Lookup, u64)>,
    barrier: Option<Arc<Barrier>>,
    pub lookups: AtomicUsize,
}

impl FakeSource {
    pub fn with_plans(plans: Vec<Plan>) -> Self {
        Self {
            plans: Mutex::new(plans),
            ..Default::default()
        }
    }

    /// Makes `lookup` fail for the given plan or request id.
    pub fn fail(mut self, lookup: Lookup, id: u64) -> Self {
        self.failing.insert((lookup, id));
        self
    }

    /// Makes the given lookups wait until all of them are in flight at once.
    ///
    /// Awaiting them one after another never gets past the barrier.
    pub fn rendezvous(mut self, lookups: &[(Lookup, u64)]) -> Self {
        self.gated = lookups.iter().copied().collect();
        self.barrier = Some(Arc::new(Barrier::new(lookups.len())));
        self
    }

    async fn enter(&self, lookup: Lookup, id: u64) -> Result<()> {
        if let Some(barrier) = &self.barrier {
            if self.gated.contains(&(lookup, id)) {
                barrier.wait().await;
            }
        }
        self.check(lookup, id)
    }

    fn check(&self, lookup: Lookup, id: u64) -> Result<()> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        if self.failing.contains(&(lookup, id)) {
            return Err(RecruitError::lookup(
                format!("{lookup:?}"),
                format!("simulated outage for {id}"),
            ));
        }
        Ok(())
    }

    fn update(&self, plan_id: u64, apply: impl FnOnce(&mut Plan)) -> Result<Plan> {
        let mut plans = self.plans.lock().unwrap();
        let plan = plans
            .iter_mut()
            .find(|p| p.id == plan_id)
            .ok_or(RecruitError::PlanNotFound { id: plan_id })?;
        apply(plan);
        Ok(plan.clone())
    }
}

impl PlanSource for FakeSource {
    async fn fetch_plans(&self) -> Result<Vec<Plan>> {
        Ok(self.plans.lock().unwrap().clone())
    }

    async fn fetch_handover_count(&self, plan_id: u64) -> Result<Option<u64>> {
        self.enter(Lookup::Handover, plan_id).await?;
        Ok(self.handover.get(&plan_id).copied().flatten())
    }

    async fn fetch_request_detail(&self, request_id: u64) -> Result<Option<RequestDetail>> {
        self.enter(Lookup::Request, request_id).await?;
        Ok(self.requests.get(&request_id).cloned())
    }

    async fn fetch_candidates(&self, plan_id: u64) -> Result<Vec<Candidate>> {
        self.enter(Lookup::Candidates, plan_id).await?;
        Ok(self.candidates.get(&plan_id).cloned().unwrap_or_default())
    }

    async fn fetch_training_count(&self, plan_id: u64) -> Result<Option<u64>> {
        self.enter(Lookup::Training, plan_id).await?;
        Ok(self.training.get(&plan_id).copied().flatten())
    }

    async fn confirm_plan(&self, plan_id: u64) -> Result<Plan> {
        self.update(plan_id, |plan| plan.status = StatusKind::Confirmed)
    }

    async fn reject_plan(&self, plan_id: u64, reason: &str) -> Result<Plan> {
        self.update(plan_id, |plan| {
            plan.status = StatusKind::Rejected;
            plan.note = Some(reason.to_string());
        })
    }
}

/// A plan attached to a request asking for `headcount` people.
pub fn staffed_plan(id: u64, name: &str, status: StatusKind, headcount: u32) -> Plan {
    let mut plan = Plan::new(id, name);
    plan.status = status;
    plan.created_by = Some(PersonRef::named("Nguyễn Văn A"));
    plan.request = Some(SourceRequest {
        request_id: id + 100,
        request_title: format!("Nhu cầu {name}"),
        tech_quantities: vec![TechQuantity {
            technology_name: "Java".to_string(),
            requested_count: headcount,
        }],
        ..Default::default()
    });
    plan
}

pub fn candidate(plan_id: u64, status: &str) -> Candidate {
    Candidate {
        plan_id,
        full_name: format!("Ứng viên {plan_id}"),
        status: Some(status.to_string()),
    }
}

/// Helper function to create a SQLite-backed source in a temporary directory
pub async fn create_test_source() -> (TempDir, SqliteSource) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path: PathBuf = temp_dir.path().join("nested").join("test.db");
    let source = SqliteSourceBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create source");
    (temp_dir, source)
}
