//! Actor name resolution for plans.
//!
//! Each role is an ordered [`FallbackChain`] over the person references a
//! plan may carry. The literal defaults are what presentation shows when no
//! name was recorded at all.

use super::fallback::FallbackChain;
use crate::models::{PersonRef, Plan, StatusKind};

/// Shown when no approver was recorded.
pub const DEFAULT_APPROVER: &str = "Người phê duyệt";
/// Shown when a person could not be resolved.
pub const UNKNOWN_ACTOR: &str = "Không rõ";

fn full_name(person: &Option<PersonRef>) -> Option<&str> {
    person.as_ref()?.full_name.as_deref()
}

fn email(person: &Option<PersonRef>) -> Option<&str> {
    person.as_ref()?.email.as_deref()
}

fn confirmed_by_full_name(plan: &Plan) -> Option<&str> {
    full_name(&plan.confirmed_by)
}

fn confirmed_by_email(plan: &Plan) -> Option<&str> {
    email(&plan.confirmed_by)
}

fn confirmed_by_name(plan: &Plan) -> Option<&str> {
    plan.confirmed_by_name.as_deref()
}

fn updated_by_full_name(plan: &Plan) -> Option<&str> {
    full_name(&plan.updated_by)
}

fn updated_by_email(plan: &Plan) -> Option<&str> {
    email(&plan.updated_by)
}

fn updated_by_name(plan: &Plan) -> Option<&str> {
    plan.updated_by_name.as_deref()
}

fn rejected_by_full_name(plan: &Plan) -> Option<&str> {
    full_name(&plan.rejected_by)
}

fn rejected_by_email(plan: &Plan) -> Option<&str> {
    email(&plan.rejected_by)
}

fn rejected_by_name(plan: &Plan) -> Option<&str> {
    plan.rejected_by_name.as_deref()
}

fn created_by_full_name(plan: &Plan) -> Option<&str> {
    full_name(&plan.created_by)
}

fn created_by_name(plan: &Plan) -> Option<&str> {
    plan.created_by_name.as_deref()
}

fn request_creator_full_name(plan: &Plan) -> Option<&str> {
    full_name(&plan.request.as_ref()?.created_by)
}

fn request_creator_name(plan: &Plan) -> Option<&str> {
    plan.request.as_ref()?.created_by_name.as_deref()
}

const APPROVER: FallbackChain<Plan> = FallbackChain::new(&[
    confirmed_by_full_name,
    confirmed_by_email,
    confirmed_by_name,
    updated_by_full_name,
    updated_by_email,
    updated_by_name,
]);

const REJECTER: FallbackChain<Plan> =
    FallbackChain::new(&[rejected_by_full_name, rejected_by_email, rejected_by_name]);

const CREATOR: FallbackChain<Plan> = FallbackChain::new(&[
    created_by_full_name,
    created_by_name,
    request_creator_full_name,
    request_creator_name,
]);

const SENDER: FallbackChain<Plan> = FallbackChain::new(&[
    request_creator_full_name,
    request_creator_name,
    created_by_name,
]);

/// Who approved the plan.
pub fn approver_name(plan: &Plan) -> &str {
    APPROVER.resolve_or(plan, DEFAULT_APPROVER)
}

/// Who rejected the plan: the recorded rejecter, otherwise the approver
/// (which ends in [`DEFAULT_APPROVER`]).
pub fn rejecter_name(plan: &Plan) -> &str {
    REJECTER
        .first_present(plan)
        .unwrap_or_else(|| approver_name(plan))
}

/// Who created the plan (or its source request).
pub fn creator_name(plan: &Plan) -> &str {
    CREATOR.resolve_or(plan, UNKNOWN_ACTOR)
}

/// Name shown in the "sent by" column of the plan list.
///
/// Rejected and canceled plans show who turned them down when known.
pub fn sender_name(plan: &Plan) -> &str {
    let sender = SENDER.first_present(plan);
    if matches!(plan.status, StatusKind::Rejected | StatusKind::Canceled) {
        rejected_by_name(plan)
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .or(sender)
            .unwrap_or(UNKNOWN_ACTOR)
    } else {
        sender.unwrap_or(UNKNOWN_ACTOR)
    }
}
