//! Error handling utilities for MCP server

use recruit_core::RecruitError;
use rmcp::ErrorData;

/// Helper to convert tracker errors to MCP errors
///
/// Caller mistakes (unknown plan, bad filter, blank reason, plan not
/// awaiting approval) become `invalid_params`; everything else is internal.
pub fn to_mcp_error(message: &str, error: &RecruitError) -> ErrorData {
    let text = format!("{message}: {error}");
    match error {
        RecruitError::PlanNotFound { .. } | RecruitError::InvalidInput { .. } => {
            ErrorData::invalid_params(text, None)
        }
        _ => ErrorData::internal_error(text, None),
    }
}

#[cfg(test)]
mod tests {
    use rmcp::model::ErrorCode;

    use super::*;

    #[test]
    fn test_caller_errors_are_invalid_params() {
        let err = to_mcp_error("Failed to show plan", &RecruitError::PlanNotFound { id: 9 });
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
        assert!(err.message.contains("Plan with ID 9 not found"));

        let err = to_mcp_error(
            "Failed to reject plan",
            &RecruitError::invalid_input("reason").with_reason("A rejection reason is required"),
        );
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    }

    #[test]
    fn test_other_errors_are_internal() {
        let err = to_mcp_error(
            "Failed to list plans",
            &RecruitError::lookup("plans", "connection refused"),
        );
        assert_eq!(err.code, ErrorCode::INTERNAL_ERROR);
    }
}
