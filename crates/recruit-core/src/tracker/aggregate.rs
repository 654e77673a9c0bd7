//! Per-plan metadata aggregation.

use std::future::Future;

use log::{debug, warn};

use super::Tracker;
use crate::{error::Result, models::PlanMetadata, source::PlanSource};

/// Awaits a lookup only when it was issued.
async fn issued<T, F>(lookup: Option<F>) -> Option<Result<T>>
where
    F: Future<Output = Result<T>>,
{
    match lookup {
        Some(lookup) => Some(lookup.await),
        None => None,
    }
}

/// Unwraps an issued lookup, logging and discarding a failure.
fn settle<T>(outcome: Option<Result<T>>, what: &str, plan_id: Option<u64>) -> Option<T> {
    match outcome? {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Lookup '{what}' for plan {plan_id:?} failed: {e}");
            None
        }
    }
}

impl<S: PlanSource> Tracker<S> {
    /// Gathers downstream signals for a plan, starting from the baseline.
    ///
    /// See [`Tracker::refresh_metadata`].
    pub async fn aggregate_metadata(
        &self,
        plan_id: Option<u64>,
        request_id: Option<u64>,
    ) -> PlanMetadata {
        self.refresh_metadata(plan_id, request_id, &PlanMetadata::default())
            .await
    }

    /// Gathers downstream signals for a plan.
    ///
    /// The handover count, candidate list and training count are looked up
    /// by `plan_id` and the request detail by `request_id`, all at once. A
    /// lookup whose id is absent is not issued. A failed lookup is logged
    /// and its field falls back to its default. When nothing could be
    /// issued, or every issued lookup fails, `previous` is returned
    /// unchanged.
    pub async fn refresh_metadata(
        &self,
        plan_id: Option<u64>,
        request_id: Option<u64>,
        previous: &PlanMetadata,
    ) -> PlanMetadata {
        let (handover, candidates, training, request) = tokio::join!(
            issued(plan_id.map(|id| self.source.fetch_handover_count(id))),
            issued(plan_id.map(|id| self.source.fetch_candidates(id))),
            issued(plan_id.map(|id| self.source.fetch_training_count(id))),
            issued(request_id.map(|id| self.source.fetch_request_detail(id))),
        );

        let outcomes = [
            handover.as_ref().map(|outcome| outcome.is_ok()),
            candidates.as_ref().map(|outcome| outcome.is_ok()),
            training.as_ref().map(|outcome| outcome.is_ok()),
            request.as_ref().map(|outcome| outcome.is_ok()),
        ];
        let issued_count = outcomes.iter().flatten().count();
        let succeeded = outcomes.iter().flatten().filter(|ok| **ok).count();
        if issued_count == 0 {
            return previous.clone();
        }
        if succeeded == 0 {
            warn!(
                "All {issued_count} metadata lookups for plan {plan_id:?} failed; keeping previous metadata"
            );
            return previous.clone();
        }

        // A failed handover lookup stays absent so plan-level counts apply.
        let handover_count =
            settle(handover, "handover-count", plan_id).map(|count| count.unwrap_or(0));
        let candidates = settle(candidates, "candidates", plan_id).unwrap_or_default();
        let training_count = settle(training, "training-count", plan_id)
            .flatten()
            .unwrap_or(0);
        let request = settle(request, "request-detail", plan_id).flatten();

        let metadata = PlanMetadata {
            handover_count,
            delivered_count: handover_count,
            request_status: request.as_ref().and_then(|detail| detail.status.clone()),
            request_reject_reason: request
                .and_then(|detail| detail.reject_reason)
                .unwrap_or_default(),
            candidate_count: candidates.len() as u64,
            candidate_passed_count: candidates.iter().filter(|c| c.is_hired()).count() as u64,
            training_count,
        };

        debug!("Aggregated metadata for plan {plan_id:?}: {metadata:?}");
        metadata
    }
}
