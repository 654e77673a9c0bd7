//! Status enumerations for plans and timeline stages.

use std::{convert::Infallible, str::FromStr};

use serde::{Deserialize, Serialize};

/// Canonical lifecycle status of a recruitment plan.
///
/// Parsing never fails: values outside the known set are kept verbatim
/// (upper-cased) in [`StatusKind::Other`] so they can be passed through to
/// presentation unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StatusKind {
    /// Plan was created and awaits approval
    #[default]
    New,

    /// Plan was approved
    Confirmed,

    /// Plan was rejected by an approver
    Rejected,

    /// Plan was canceled
    Canceled,

    /// All personnel were handed over
    Completed,

    /// Plan ended without meeting its headcount
    Failed,

    /// Unrecognized status, kept upper-cased
    Other(String),
}

impl StatusKind {
    /// Normalizes a raw recorded status (trim + upper-case) into a status kind.
    ///
    /// `FAILURE` is accepted as an alias of `FAILED`.
    ///
    /// ```rust
    /// use recruit_core::models::StatusKind;
    ///
    /// assert_eq!(StatusKind::normalize(" completed "), StatusKind::Completed);
    /// assert_eq!(StatusKind::normalize("failure"), StatusKind::Failed);
    /// assert_eq!(
    ///     StatusKind::normalize("on_hold"),
    ///     StatusKind::Other("ON_HOLD".to_string())
    /// );
    /// ```
    pub fn normalize(raw: &str) -> Self {
        let upper = raw.trim().to_uppercase();
        match upper.as_str() {
            "NEW" => StatusKind::New,
            "CONFIRMED" => StatusKind::Confirmed,
            "REJECTED" => StatusKind::Rejected,
            "CANCELED" => StatusKind::Canceled,
            "COMPLETED" => StatusKind::Completed,
            "FAILED" | "FAILURE" => StatusKind::Failed,
            _ => StatusKind::Other(upper),
        }
    }

    /// Wire representation of the status.
    pub fn as_str(&self) -> &str {
        match self {
            StatusKind::New => "NEW",
            StatusKind::Confirmed => "CONFIRMED",
            StatusKind::Rejected => "REJECTED",
            StatusKind::Canceled => "CANCELED",
            StatusKind::Completed => "COMPLETED",
            StatusKind::Failed => "FAILED",
            StatusKind::Other(raw) => raw,
        }
    }

    /// Human-readable label shown in plan lists and detail headers.
    pub fn label(&self) -> &str {
        match self {
            StatusKind::New => "Mới tạo",
            StatusKind::Confirmed => "Đã xác nhận",
            StatusKind::Rejected => "Bị từ chối",
            StatusKind::Canceled => "Đã hủy",
            StatusKind::Completed => "Đã hoàn thành",
            StatusKind::Failed => "Thất bại",
            StatusKind::Other(raw) if raw.is_empty() => "Không rõ",
            StatusKind::Other(raw) => raw,
        }
    }

    /// Whether the plan was turned down before any work started.
    pub fn is_rejection(&self) -> bool {
        matches!(self, StatusKind::Rejected | StatusKind::Canceled)
    }

    /// Whether the plan passed the approval stage.
    pub fn is_approved(&self) -> bool {
        matches!(
            self,
            StatusKind::Confirmed | StatusKind::Completed | StatusKind::Failed
        )
    }
}

impl FromStr for StatusKind {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::normalize(s))
    }
}

impl From<String> for StatusKind {
    fn from(value: String) -> Self {
        Self::normalize(&value)
    }
}

impl From<StatusKind> for String {
    fn from(value: StatusKind) -> Self {
        value.as_str().to_string()
    }
}

/// Presentation state of a single timeline stage.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StageStatus {
    /// Stage has not been reached or is still in progress
    #[default]
    Pending,

    /// Stage finished successfully
    Success,

    /// Stage was turned down or failed
    Rejected,
}

impl StageStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StageStatus::Pending => "pending",
            StageStatus::Success => "success",
            StageStatus::Rejected => "rejected",
        }
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// ```rust
    /// use recruit_core::models::StageStatus;
    ///
    /// assert_eq!(StageStatus::Success.with_icon(), "✓ Hoàn thành");
    /// assert_eq!(StageStatus::Pending.with_icon(), "• Đang chờ");
    /// assert_eq!(StageStatus::Rejected.with_icon(), "✕ Từ chối");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            StageStatus::Success => "✓ Hoàn thành",
            StageStatus::Pending => "• Đang chờ",
            StageStatus::Rejected => "✕ Từ chối",
        }
    }
}
