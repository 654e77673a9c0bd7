//! MCP tool handlers implementation

use std::{collections::HashMap, sync::Arc};

use jiff::tz::TimeZone;
use log::debug;
use recruit_core::{
    display::{ActionResult, PlanAction, Plans},
    params as core, PlanBoard, PlanFilter, PlanMetadata, SqliteSource, Tracker,
};
use rmcp::{
    handler::server::tool::Parameters,
    model::{CallToolResult, Content},
    ErrorData,
};
use schemars::JsonSchema;
use serde::Deserialize;
use tokio::sync::Mutex;

use super::errors::to_mcp_error;

/// Generic MCP wrapper for core parameter types with serde integration
///
/// `#[serde(transparent)]` passes (de)serialization straight through to the
/// wrapped core type, so the JSON shape of a tool argument is exactly the
/// shape of the core parameter struct.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

pub type Id = McpParams<core::Id>;
pub type ListPlans = McpParams<core::ListPlans>;
pub type RejectPlan = McpParams<core::RejectPlan>;
pub type ShowPlan = McpParams<core::ShowPlan>;

pub type McpResult = Result<CallToolResult, ErrorData>;

/// Handler implementations for the MCP server
///
/// The board holds the last enriched plan list. Detail metadata is cached per
/// plan so a refresh whose lookups all fail falls back to what was last shown.
pub struct McpHandlers {
    tracker: Arc<Tracker<SqliteSource>>,
    board: Arc<Mutex<PlanBoard>>,
    details: Arc<Mutex<HashMap<u64, PlanMetadata>>>,
}

impl McpHandlers {
    pub fn new(
        tracker: Arc<Tracker<SqliteSource>>,
        board: Arc<Mutex<PlanBoard>>,
        details: Arc<Mutex<HashMap<u64, PlanMetadata>>>,
    ) -> Self {
        Self {
            tracker,
            board,
            details,
        }
    }

    pub async fn list_plans(&self, Parameters(params): Parameters<ListPlans>) -> McpResult {
        debug!("list_plans: {:?}", params);

        let filter = PlanFilter::try_from(params.as_ref())
            .map_err(|e| to_mcp_error("Invalid plan filter", &e))?;

        self.tracker
            .refresh_board(&self.board)
            .await
            .map_err(|e| to_mcp_error("Failed to list plans", &e))?;

        let plans = filter.apply(self.board.lock().await.plans(), &TimeZone::system());
        let title = if plans.is_empty() {
            "No plans found"
        } else {
            "Recruitment Plans"
        };

        let result = format!("# {}\n\n{}", title, Plans(plans));
        Ok(CallToolResult::success(vec![Content::text(result)]))
    }

    pub async fn show_plan(&self, Parameters(params): Parameters<ShowPlan>) -> McpResult {
        debug!("show_plan: {:?}", params);

        let id = self
            .tracker
            .locate_plan(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to show plan", &e))?
            .id;

        let previous = self
            .details
            .lock()
            .await
            .get(&id)
            .cloned()
            .unwrap_or_default();

        let detail = self
            .tracker
            .plan_detail(id, &previous)
            .await
            .map_err(|e| to_mcp_error("Failed to show plan", &e))?;

        self.details.lock().await.insert(id, detail.metadata.clone());
        self.board
            .lock()
            .await
            .apply_status(id, detail.status.clone());

        Ok(CallToolResult::success(vec![Content::text(
            detail.to_string(),
        )]))
    }

    pub async fn approve_plan(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("approve_plan: {:?}", params);

        let plan = self
            .tracker
            .confirm_plan(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to approve plan", &e))?;

        self.board.lock().await.replace(plan.clone());

        let result = ActionResult::new(PlanAction::Confirmed, plan);
        Ok(CallToolResult::success(vec![Content::text(
            result.to_string(),
        )]))
    }

    pub async fn reject_plan(&self, Parameters(params): Parameters<RejectPlan>) -> McpResult {
        debug!("reject_plan: {:?}", params);

        let plan = self
            .tracker
            .reject_plan(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to reject plan", &e))?;

        self.board.lock().await.replace(plan.clone());

        let result = ActionResult::new(PlanAction::Rejected, plan);
        Ok(CallToolResult::success(vec![Content::text(
            result.to_string(),
        )]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_are_transparent() {
        let params: RejectPlan =
            serde_json::from_str(r#"{"id": 4, "reason": "Trùng lặp"}"#).unwrap();
        assert_eq!(params.as_ref().id, 4);
        assert_eq!(params.as_ref().reason, "Trùng lặp");

        let params: ShowPlan =
            serde_json::from_str(r#"{"request": "Nhu cầu Java"}"#).unwrap();
        assert_eq!(params.as_ref().request.as_deref(), Some("Nhu cầu Java"));

        let params: ListPlans = serde_json::from_str("{}").unwrap();
        assert!(params.as_ref().status.is_none());
    }
}
