//! In-memory plan list with refresh supersession.

use log::debug;
use tokio::sync::Mutex;

use super::Tracker;
use crate::{
    error::Result,
    models::{Plan, StatusKind},
    source::PlanSource,
};

/// Proof that a refresh was started; only the newest ticket can commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshTicket(u64);

/// The last enriched plan list.
///
/// Refreshes are tagged with a [`RefreshTicket`]. Starting a new refresh
/// invalidates every older ticket, so a slow refresh finishing after a
/// newer one is dropped instead of overwriting fresher data.
#[derive(Debug, Default)]
pub struct PlanBoard {
    plans: Vec<Plan>,
    generation: u64,
}

impl PlanBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn plans(&self) -> &[Plan] {
        &self.plans
    }

    /// Starts a refresh, superseding any refresh still in flight.
    pub fn begin_refresh(&mut self) -> RefreshTicket {
        self.generation += 1;
        RefreshTicket(self.generation)
    }

    /// Stores the result of a refresh.
    ///
    /// Returns `false` and leaves the board untouched when a newer refresh
    /// was started after `ticket` was issued.
    pub fn commit(&mut self, ticket: RefreshTicket, plans: Vec<Plan>) -> bool {
        if ticket.0 != self.generation {
            debug!(
                "Discarding stale refresh {} (current {})",
                ticket.0, self.generation
            );
            return false;
        }
        self.plans = plans;
        true
    }

    /// Sets the status of one plan, leaving every other entry untouched.
    ///
    /// Returns `false` when the plan is not on the board.
    pub fn apply_status(&mut self, plan_id: u64, status: StatusKind) -> bool {
        match self.plans.iter_mut().find(|plan| plan.id == plan_id) {
            Some(plan) => {
                plan.status = status;
                true
            }
            None => false,
        }
    }

    /// Swaps in an updated plan by identity.
    ///
    /// Returns `false` when the plan is not on the board.
    pub fn replace(&mut self, updated: Plan) -> bool {
        match self.plans.iter_mut().find(|plan| plan.id == updated.id) {
            Some(plan) => {
                *plan = updated;
                true
            }
            None => false,
        }
    }
}

impl<S: PlanSource> Tracker<S> {
    /// Fetches and enriches all plans, then commits them to a shared board.
    ///
    /// The board lock is held only to take the ticket and to commit, never
    /// across lookups. Returns whether the result was kept.
    pub async fn refresh_board(&self, board: &Mutex<PlanBoard>) -> Result<bool> {
        let ticket = board.lock().await.begin_refresh();
        let plans = self.source.fetch_plans().await?;
        let enriched = self.enrich_plan_list(plans).await;
        Ok(board.lock().await.commit(ticket, enriched))
    }
}
