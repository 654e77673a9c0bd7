//! Four-stage workflow timeline.
//!
//! The timeline is recomputed from scratch on every call from the canonical
//! status and the latest metadata. No earlier timeline is consulted, so a
//! stage may go back to pending when a refresh reports lower counts.

use super::{
    actors::{approver_name, creator_name, rejecter_name},
    annotation::parse_reject_annotation,
    derive::{derive_plan_status, has_reject_reason, resolve_handover_count},
};
use crate::models::{
    Plan, PlanMetadata, StageStatus, StatusKind, StepKey, Timeline, TimelineStep,
};

/// Actor placeholder for stages nobody has worked on yet.
pub const NOT_STARTED: &str = "Chưa thực hiện";
/// Plan label used when the plan has no name.
const DEFAULT_PLAN_LABEL: &str = "Kế hoạch tuyển dụng";
/// Step 0 detail when a rejected plan carries no note.
pub const NO_REASON_RECORDED: &str = "Không có lý do cụ thể được ghi lại.";
/// Handover rejection text when no reason was recorded.
pub const NO_INTERN_QUALIFIED: &str = "Không có thực tập sinh nào đạt yêu cầu để bàn giao.";

/// Builds the ordered timeline for a plan.
///
/// Always returns exactly four steps keyed `plan-approve`, `candidate`,
/// `training` and `handover`.
///
/// ```rust
/// use recruit_core::{
///     models::{Plan, PlanMetadata, StageStatus, StatusKind},
///     workflow::build_workflow_timeline,
/// };
///
/// let mut plan = Plan::new(1, "Kế hoạch Java");
/// plan.status = StatusKind::Rejected;
/// plan.note = Some("Thiếu ngân sách".into());
///
/// let steps = build_workflow_timeline(&plan, &PlanMetadata::default());
/// assert_eq!(steps[0].status, StageStatus::Rejected);
/// assert_eq!(steps[0].detail, "Thiếu ngân sách");
/// assert!(steps[1..].iter().all(|s| s.status == StageStatus::Pending));
/// ```
pub fn build_workflow_timeline(plan: &Plan, metadata: &PlanMetadata) -> Timeline {
    let status = derive_plan_status(plan, Some(metadata));
    let plan_label = match plan.plan_name.trim() {
        "" => DEFAULT_PLAN_LABEL,
        name => name,
    };
    let creator = creator_name(plan);

    let mut steps = initial_steps(plan_label, creator);

    if status.is_approved() {
        let approve = &mut steps[StepKey::PlanApprove.index()];
        approve.status = StageStatus::Success;
        approve.actor = approver_name(plan).to_string();
        approve.detail = format!("\"{plan_label}\" đã được phê duyệt");
    } else if status.is_rejection() {
        apply_rejection(&mut steps, plan);
        return steps;
    }

    if status != StatusKind::New {
        let candidate_count = metadata.candidate_count;
        let denominator = plan.input_required().max(plan.output_required());
        let candidate = &mut steps[StepKey::Candidate.index()];
        candidate.actor = stage_actor(&candidate.actor, creator);
        candidate.status = success_if(candidate_count > 0);
        candidate.detail = if denominator > 0 {
            format!("Số lượng ứng viên ứng tuyển: {candidate_count}/{denominator}")
        } else {
            format!("Số lượng ứng viên ứng tuyển: {candidate_count}")
        };

        let training_count = metadata.training_count;
        let training = &mut steps[StepKey::Training.index()];
        training.actor = stage_actor(&training.actor, creator);
        training.status = success_if(training_count > 0);
        training.detail = format!("Số lượng TTS tham gia đào tạo: {training_count}");
    }

    let output_required = plan.output_required();
    if output_required > 0 {
        let handover = &mut steps[StepKey::Handover.index()];
        handover.actor = stage_actor(&handover.actor, creator);
        resolve_handover(handover, plan, metadata, &status, output_required);
    }

    steps
}

fn initial_steps(plan_label: &str, creator: &str) -> Timeline {
    let step = |key: StepKey, actor: &str, detail: String| TimelineStep {
        key,
        title: key.title().to_string(),
        status: StageStatus::Pending,
        actor: actor.to_string(),
        detail,
        reject_reason: None,
    };

    [
        step(
            StepKey::PlanApprove,
            creator,
            format!("Chờ phê duyệt \"{plan_label}\" để triển khai tuyển dụng"),
        ),
        step(
            StepKey::Candidate,
            NOT_STARTED,
            "Chờ kế hoạch được duyệt trước khi quản lý ứng viên".to_string(),
        ),
        step(
            StepKey::Training,
            NOT_STARTED,
            "Chờ ứng viên đạt yêu cầu để đưa vào đào tạo".to_string(),
        ),
        step(
            StepKey::Handover,
            NOT_STARTED,
            "Chờ bàn giao nhân sự".to_string(),
        ),
    ]
}

/// Marks approval as rejected and short-circuits the later stages.
fn apply_rejection(steps: &mut Timeline, plan: &Plan) {
    let reason = plan
        .note
        .as_deref()
        .map(str::trim)
        .filter(|note| !note.is_empty())
        .unwrap_or(NO_REASON_RECORDED)
        .to_string();

    let approve = &mut steps[StepKey::PlanApprove.index()];
    approve.status = StageStatus::Rejected;
    approve.actor = rejecter_name(plan).to_string();
    approve.detail = reason.clone();
    approve.reject_reason = Some(reason);

    steps[StepKey::Candidate.index()].detail =
        "Kế hoạch đã bị từ chối, không thực hiện quản lý ứng viên.".to_string();
    steps[StepKey::Training.index()].detail =
        "Kế hoạch đã bị từ chối, không tổ chức đào tạo.".to_string();
    steps[StepKey::Handover.index()].detail =
        "Kế hoạch đã bị từ chối, không bàn giao nhân sự.".to_string();
}

fn resolve_handover(
    step: &mut TimelineStep,
    plan: &Plan,
    metadata: &PlanMetadata,
    status: &StatusKind,
    output_required: u64,
) {
    let handover_count = resolve_handover_count(plan, Some(metadata));
    let has_reason = has_reject_reason(plan, Some(metadata));
    let delivered_all = handover_count >= output_required;

    // The recorded status is checked before any override was applied.
    let failed = *status == StatusKind::Failed
        || (has_reason && plan.status == StatusKind::Completed && !delivered_all)
        || (*status == StatusKind::Completed && has_reason);

    if *status == StatusKind::Completed && !has_reason && delivered_all {
        step.status = StageStatus::Success;
        step.detail = format!("Đã bàn giao nhân sự: {handover_count}/{output_required}");
    } else if failed {
        step.status = StageStatus::Rejected;
        step.detail = if handover_count > 0 {
            format!("Chỉ bàn giao được {handover_count}/{output_required} nhân sự")
        } else {
            format!("Không bàn giao được nhân sự nào (0/{output_required}).")
        };
        step.reject_reason = Some(handover_reject_text(plan, metadata));
    } else {
        step.status = StageStatus::Pending;
        step.detail = format!("Đã bàn giao nhân sự: {handover_count}/{output_required}");
    }
}

fn handover_reject_text(plan: &Plan, metadata: &PlanMetadata) -> String {
    let parsed = parse_reject_annotation(&metadata.request_reject_reason);
    let text = [
        Some(parsed.reason.as_str()),
        Some(metadata.request_reject_reason.as_str()),
        plan.request_reject_reason.as_deref(),
    ]
    .into_iter()
    .flatten()
    .map(str::trim)
    .find(|text| !text.is_empty())
    .unwrap_or(NO_INTERN_QUALIFIED)
    .to_string();
    text
}

fn stage_actor(current: &str, creator: &str) -> String {
    if current.is_empty() || current == NOT_STARTED {
        creator.to_string()
    } else {
        current.to_string()
    }
}

fn success_if(done: bool) -> StageStatus {
    if done {
        StageStatus::Success
    } else {
        StageStatus::Pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PersonRef, SourceRequest, TechQuantity};

    fn plan(status: StatusKind, output: u32) -> Plan {
        let mut plan = Plan::new(9, "Kế hoạch tuyển dụng React tháng 3, 2025");
        plan.status = status;
        plan.created_by = Some(PersonRef::named("HR Lan"));
        plan.confirmed_by = Some(PersonRef::named("QLDT Minh"));
        if output > 0 {
            plan.request = Some(SourceRequest {
                request_id: 3,
                request_title: "Nhu cầu nhân sự React".to_string(),
                tech_quantities: vec![TechQuantity {
                    technology_name: "React".to_string(),
                    requested_count: output,
                }],
                ..Default::default()
            });
        }
        plan
    }

    fn metadata(handover: u64, reason: &str, candidates: u64, trainings: u64) -> PlanMetadata {
        PlanMetadata {
            handover_count: Some(handover),
            delivered_count: Some(handover),
            request_reject_reason: reason.to_string(),
            candidate_count: candidates,
            training_count: trainings,
            ..PlanMetadata::default()
        }
    }

    #[test]
    fn test_keys_are_fixed_and_ordered() {
        let steps = build_workflow_timeline(&plan(StatusKind::New, 2), &PlanMetadata::default());
        let keys: Vec<StepKey> = steps.iter().map(|s| s.key).collect();
        assert_eq!(keys, StepKey::ALL.to_vec());
    }

    #[test]
    fn test_new_plan_is_all_pending() {
        let steps = build_workflow_timeline(&plan(StatusKind::New, 2), &metadata(0, "", 5, 3));
        assert!(steps.iter().all(|s| s.status == StageStatus::Pending));
        assert_eq!(steps[0].actor, "HR Lan");
        assert_eq!(steps[1].actor, NOT_STARTED);
        assert_eq!(steps[3].detail, "Đã bàn giao nhân sự: 0/2");
    }

    #[test]
    fn test_confirmed_plan_progress() {
        let steps =
            build_workflow_timeline(&plan(StatusKind::Confirmed, 3), &metadata(1, "", 4, 0));
        assert_eq!(steps[0].status, StageStatus::Success);
        assert_eq!(steps[0].actor, "QLDT Minh");
        assert_eq!(steps[1].status, StageStatus::Success);
        assert_eq!(steps[1].detail, "Số lượng ứng viên ứng tuyển: 4/6");
        assert_eq!(steps[1].actor, "HR Lan");
        assert_eq!(steps[2].status, StageStatus::Pending);
        assert_eq!(steps[2].detail, "Số lượng TTS tham gia đào tạo: 0");
        assert_eq!(steps[3].status, StageStatus::Pending);
        assert_eq!(steps[3].detail, "Đã bàn giao nhân sự: 1/3");
    }

    #[test]
    fn test_rejected_plan_short_circuits() {
        let mut rejected = plan(StatusKind::Rejected, 3);
        rejected.note = Some("  Kế hoạch tuyển dụng: thiếu ngân sách ".to_string());
        rejected.rejected_by_name = Some("QLDT Minh".to_string());

        let steps = build_workflow_timeline(&rejected, &metadata(3, "", 9, 9));
        assert_eq!(steps.len(), 4);
        assert_eq!(steps[0].status, StageStatus::Rejected);
        assert_eq!(steps[0].detail, "Kế hoạch tuyển dụng: thiếu ngân sách");
        assert_eq!(steps[0].actor, "QLDT Minh");
        assert!(steps[1..].iter().all(|s| s.status == StageStatus::Pending));
        assert!(steps[3].detail.contains("không bàn giao nhân sự"));
    }

    #[test]
    fn test_rejected_plan_without_rejecter_shows_approver_literal() {
        let mut rejected = Plan::new(10, "Kế hoạch tuyển dụng Go");
        rejected.status = StatusKind::Rejected;
        rejected.created_by_name = Some("HR Lan".to_string());

        let steps = build_workflow_timeline(&rejected, &PlanMetadata::default());
        assert_eq!(steps[0].actor, "Người phê duyệt");
    }

    #[test]
    fn test_canceled_without_note_uses_placeholder() {
        let steps = build_workflow_timeline(&plan(StatusKind::Canceled, 0), &PlanMetadata::default());
        assert_eq!(steps[0].status, StageStatus::Rejected);
        assert_eq!(steps[0].detail, NO_REASON_RECORDED);
        assert_eq!(steps[0].reject_reason.as_deref(), Some(NO_REASON_RECORDED));
    }

    #[test]
    fn test_completed_handover_success() {
        let steps =
            build_workflow_timeline(&plan(StatusKind::Completed, 2), &metadata(2, "", 4, 2));
        assert!(steps.iter().all(|s| s.status == StageStatus::Success));
        assert_eq!(steps[3].detail, "Đã bàn giao nhân sự: 2/2");
    }

    #[test]
    fn test_completed_with_shortfall_and_reason_fails_handover() {
        let reason = "Người từ chối nhu cầu: Minh. Lý do: TTS không đạt";
        let steps =
            build_workflow_timeline(&plan(StatusKind::Completed, 5), &metadata(2, reason, 8, 4));
        assert_eq!(steps[0].status, StageStatus::Success);
        assert_eq!(steps[3].status, StageStatus::Rejected);
        assert_eq!(steps[3].detail, "Chỉ bàn giao được 2/5 nhân sự");
        assert_eq!(steps[3].reject_reason.as_deref(), Some("TTS không đạt"));
    }

    #[test]
    fn test_failed_with_zero_handover_uses_default_reason() {
        let steps = build_workflow_timeline(&plan(StatusKind::Failed, 4), &metadata(0, "", 0, 0));
        assert_eq!(steps[3].status, StageStatus::Rejected);
        assert_eq!(steps[3].detail, "Không bàn giao được nhân sự nào (0/4).");
        assert_eq!(steps[3].reject_reason.as_deref(), Some(NO_INTERN_QUALIFIED));
    }

    #[test]
    fn test_completed_full_delivery_with_reason_is_rejected() {
        let steps =
            build_workflow_timeline(&plan(StatusKind::Completed, 2), &metadata(2, "ghi chú", 2, 2));
        assert_eq!(steps[3].status, StageStatus::Rejected);
        assert_eq!(steps[3].detail, "Chỉ bàn giao được 2/2 nhân sự");
        assert_eq!(steps[3].reject_reason.as_deref(), Some("ghi chú"));
    }

    #[test]
    fn test_handover_untouched_without_output_required() {
        for status in [
            StatusKind::New,
            StatusKind::Confirmed,
            StatusKind::Completed,
            StatusKind::Failed,
        ] {
            for handover in [0, 3] {
                let steps = build_workflow_timeline(&plan(status.clone(), 0), &metadata(handover, "x", 1, 1));
                assert_eq!(steps[3].status, StageStatus::Pending);
                assert_eq!(steps[3].detail, "Chờ bàn giao nhân sự");
                assert_eq!(steps[3].actor, NOT_STARTED);
            }
        }
    }

    #[test]
    fn test_missing_request_shows_raw_candidate_count() {
        let steps =
            build_workflow_timeline(&plan(StatusKind::Confirmed, 0), &metadata(0, "", 3, 0));
        assert_eq!(steps[1].detail, "Số lượng ứng viên ứng tuyển: 3");
    }

    #[test]
    fn test_recompute_reverts_stage_when_counts_drop() {
        let confirmed = plan(StatusKind::Confirmed, 2);
        let before = build_workflow_timeline(&confirmed, &metadata(0, "", 3, 1));
        assert_eq!(before[1].status, StageStatus::Success);

        let after = build_workflow_timeline(&confirmed, &metadata(0, "", 0, 1));
        assert_eq!(after[1].status, StageStatus::Pending);
    }

    #[test]
    fn test_unnamed_plan_uses_default_label() {
        let mut unnamed = plan(StatusKind::New, 1);
        unnamed.plan_name = "  ".to_string();
        let steps = build_workflow_timeline(&unnamed, &PlanMetadata::default());
        assert!(steps[0].detail.contains(DEFAULT_PLAN_LABEL));
    }
}
