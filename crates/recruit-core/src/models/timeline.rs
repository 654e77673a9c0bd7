//! Workflow timeline model definitions.

use serde::{Deserialize, Serialize};

use super::StageStatus;

/// Fixed keys of the four workflow stages, in business order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum StepKey {
    PlanApprove,
    Candidate,
    Training,
    Handover,
}

impl StepKey {
    /// All stages in the order they are presented.
    pub const ALL: [StepKey; 4] = [
        StepKey::PlanApprove,
        StepKey::Candidate,
        StepKey::Training,
        StepKey::Handover,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StepKey::PlanApprove => "plan-approve",
            StepKey::Candidate => "candidate",
            StepKey::Training => "training",
            StepKey::Handover => "handover",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            StepKey::PlanApprove => "Phê duyệt kế hoạch",
            StepKey::Candidate => "Quản lý ứng viên",
            StepKey::Training => "Đào tạo",
            StepKey::Handover => "Bàn giao nhân sự",
        }
    }

    /// Position of the stage within the timeline.
    pub fn index(&self) -> usize {
        match self {
            StepKey::PlanApprove => 0,
            StepKey::Candidate => 1,
            StepKey::Training => 2,
            StepKey::Handover => 3,
        }
    }
}

/// One stage of a plan's workflow timeline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimelineStep {
    pub key: StepKey,

    pub title: String,

    pub status: StageStatus,

    /// Who performed (or is expected to perform) the stage
    pub actor: String,

    /// Human-readable progress or outcome
    pub detail: String,

    /// Why the stage was rejected, only set for rejected stages
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reject_reason: Option<String>,
}

/// Ordered four-stage timeline of a plan.
pub type Timeline = [TimelineStep; 4];
