//! Canonical status derivation.
//!
//! This is the only place where a recorded `COMPLETED` may be downgraded to
//! `FAILED`. Presentation code must call [`derive_plan_status`] instead of
//! reading `Plan::status` directly.

use crate::models::{Plan, PlanMetadata, StatusKind};

/// Computes the canonical status of a plan.
///
/// Pure function of its inputs. When `metadata` is `None` only the signals
/// embedded in the plan itself are used.
///
/// A plan recorded as `COMPLETED` that handed over fewer people than
/// requested and carries a rejection reason is reported as `FAILED`.
/// Everything else passes through unchanged.
///
/// ```rust
/// use recruit_core::{
///     models::{Plan, PlanMetadata, SourceRequest, StatusKind, TechQuantity},
///     workflow::derive_plan_status,
/// };
///
/// let mut plan = Plan::new(1, "Kế hoạch Java");
/// plan.status = StatusKind::Completed;
/// plan.request = Some(SourceRequest {
///     request_id: 1,
///     tech_quantities: vec![TechQuantity { technology_name: "Java".into(), requested_count: 10 }],
///     ..Default::default()
/// });
///
/// let mut metadata = PlanMetadata::for_listing(4, "x");
/// assert_eq!(derive_plan_status(&plan, Some(&metadata)), StatusKind::Failed);
///
/// metadata = PlanMetadata::for_listing(10, "");
/// assert_eq!(derive_plan_status(&plan, Some(&metadata)), StatusKind::Completed);
/// ```
pub fn derive_plan_status(plan: &Plan, metadata: Option<&PlanMetadata>) -> StatusKind {
    let recorded = &plan.status;
    if *recorded == StatusKind::Failed {
        return StatusKind::Failed;
    }

    let output_required = plan.output_required();
    let handover_count = resolve_handover_count(plan, metadata);

    if *recorded == StatusKind::Completed
        && output_required > 0
        && handover_count < output_required
        && has_reject_reason(plan, metadata)
    {
        return StatusKind::Failed;
    }

    recorded.clone()
}

/// Handover count from the freshest source available.
///
/// Metadata handover count, metadata delivered count, then the plan-level
/// equivalents; 0 when none is known.
pub fn resolve_handover_count(plan: &Plan, metadata: Option<&PlanMetadata>) -> u64 {
    metadata
        .and_then(PlanMetadata::resolved_handover)
        .or(plan.handover_count)
        .or(plan.delivered_count)
        .unwrap_or(0)
}

/// Whether the metadata or the plan carries a non-blank rejection reason.
pub fn has_reject_reason(plan: &Plan, metadata: Option<&PlanMetadata>) -> bool {
    metadata.is_some_and(PlanMetadata::has_reject_reason)
        || plan
            .request_reject_reason
            .as_deref()
            .is_some_and(|reason| !reason.trim().is_empty())
}
