//! Parser for free-text rejection notes.
//!
//! Older records pack who rejected and why into a single string, e.g.
//! `"Người từ chối kế hoạch: An. Lý do: Thiếu ngân sách."`. This module only
//! reads that legacy shape; it never produces it.

use serde::{Deserialize, Serialize};

/// Marker preceding the name of whoever rejected a plan.
pub const PLAN_REJECTER_LABEL: &str = "Người từ chối kế hoạch:";
/// Marker preceding the name of whoever rejected a staffing request.
pub const REQUEST_REJECTER_LABEL: &str = "Người từ chối nhu cầu:";
/// Marker preceding the rejection reason.
pub const REASON_LABEL: &str = "Lý do:";

/// Structured form of a rejection note.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectAnnotation {
    pub actor: String,
    pub reason: String,
}

/// Extracts `{actor, reason}` from a rejection note.
///
/// Never fails: without a reason marker the whole trimmed note is the
/// reason, and without an actor marker the actor is empty.
///
/// ```rust
/// use recruit_core::workflow::parse_reject_annotation;
///
/// let parsed = parse_reject_annotation("Người từ chối kế hoạch: Alice. Lý do: Budget cut.");
/// assert_eq!(parsed.actor, "Alice");
/// assert_eq!(parsed.reason, "Budget cut.");
/// ```
pub fn parse_reject_annotation(raw: &str) -> RejectAnnotation {
    if raw.is_empty() {
        return RejectAnnotation::default();
    }

    let reason_start = raw.find(REASON_LABEL);
    let reason = match reason_start {
        Some(idx) => raw[idx + REASON_LABEL.len()..].trim(),
        None => raw.trim(),
    };

    let actor_start = raw
        .find(PLAN_REJECTER_LABEL)
        .map(|idx| idx + PLAN_REJECTER_LABEL.len())
        .or_else(|| {
            raw.find(REQUEST_REJECTER_LABEL)
                .map(|idx| idx + REQUEST_REJECTER_LABEL.len())
        });

    let actor = actor_start
        .and_then(|start| raw.get(start..reason_start.unwrap_or(raw.len())))
        .map(|segment| {
            segment
                .trim_end_matches(|c: char| c == '.' || c.is_whitespace())
                .trim()
        })
        .unwrap_or_default();

    RejectAnnotation {
        actor: actor.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plan_rejecter_and_reason() {
        let parsed = parse_reject_annotation("Người từ chối kế hoạch: Alice. Lý do: Budget cut.");
        assert_eq!(parsed.actor, "Alice");
        assert_eq!(parsed.reason, "Budget cut.");
    }

    #[test]
    fn test_parse_request_rejecter() {
        let parsed =
            parse_reject_annotation("Người từ chối nhu cầu: Trần Bình... Lý do:  Không đủ TTS ");
        assert_eq!(parsed.actor, "Trần Bình");
        assert_eq!(parsed.reason, "Không đủ TTS");
    }

    #[test]
    fn test_parse_empty_input() {
        assert_eq!(parse_reject_annotation(""), RejectAnnotation::default());
    }

    #[test]
    fn test_parse_without_markers_uses_whole_text() {
        let parsed = parse_reject_annotation("  Ứng viên không đạt yêu cầu  ");
        assert_eq!(parsed.actor, "");
        assert_eq!(parsed.reason, "Ứng viên không đạt yêu cầu");
    }

    #[test]
    fn test_parse_actor_without_reason_marker() {
        let parsed = parse_reject_annotation("Người từ chối kế hoạch: Lan.");
        assert_eq!(parsed.actor, "Lan");
        assert_eq!(parsed.reason, "Người từ chối kế hoạch: Lan.");
    }

    #[test]
    fn test_parse_reason_before_actor_yields_empty_actor() {
        let parsed = parse_reject_annotation("Lý do: trễ hạn. Người từ chối kế hoạch: Minh");
        assert_eq!(parsed.actor, "");
        assert_eq!(parsed.reason, "trễ hạn. Người từ chối kế hoạch: Minh");
    }
}
