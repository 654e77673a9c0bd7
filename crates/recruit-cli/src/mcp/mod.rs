//! MCP server implementation for the recruitment tracker
//!
//! Exposes plan listing, plan details with the workflow timeline, and the
//! approve/reject actions to AI assistants over stdio.

use std::{collections::HashMap, future::Future, sync::Arc};

use anyhow::Result;
use log::{debug, error, info};
use recruit_core::{PlanBoard, PlanMetadata, SqliteSource, Tracker};
use rmcp::{
    handler::server::{router::tool::ToolRouter, tool::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use tokio::{
    signal::unix::{signal, SignalKind},
    sync::Mutex,
};

pub mod errors;
pub mod handlers;

pub use handlers::{Id, ListPlans, McpResult, RejectPlan, ShowPlan};

/// MCP server for recruitment plans
#[derive(Clone)]
pub struct RecruitMcpServer {
    tracker: Arc<Tracker<SqliteSource>>,
    board: Arc<Mutex<PlanBoard>>,
    details: Arc<Mutex<HashMap<u64, PlanMetadata>>>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl RecruitMcpServer {
    pub fn new(source: SqliteSource) -> Self {
        Self {
            tracker: Arc::new(Tracker::new(source)),
            board: Arc::new(Mutex::new(PlanBoard::new())),
            details: Arc::new(Mutex::new(HashMap::new())),
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> handlers::McpHandlers {
        handlers::McpHandlers::new(
            self.tracker.clone(),
            self.board.clone(),
            self.details.clone(),
        )
    }

    #[tool(
        name = "list_plans",
        description = "List recruitment plans with their canonical status, derived from downstream progress (sourcing, training, handover) rather than the raw recorded value. Optional filters: name (case-insensitive substring), status (NEW, CONFIRMED, REJECTED, CANCELED, COMPLETED, FAILED) and date ('YYYY', 'YYYY-MM' or 'YYYY-MM-DD' of creation). Newest plans first."
    )]
    async fn list_plans(&self, params: Parameters<ListPlans>) -> McpResult {
        self.handlers().list_plans(params).await
    }

    #[tool(
        name = "show_plan",
        description = "Show one plan, picked by id, or else by exact plan name (name), or else by the exact title of its source request (request); names and titles ignore case. Returns the request, headcount, technologies, progress counts (candidates sourced and hired, trainees, handovers) and the four-stage workflow timeline (plan approval, candidate management, training, handover) with the actor, a progress detail and any rejection reason for each stage."
    )]
    async fn show_plan(&self, params: Parameters<ShowPlan>) -> McpResult {
        self.handlers().show_plan(params).await
    }

    #[tool(
        name = "approve_plan",
        description = "Approve a plan that is awaiting approval (canonical status NEW). Fails for plans in any other status. Returns the updated plan."
    )]
    async fn approve_plan(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().approve_plan(params).await
    }

    #[tool(
        name = "reject_plan",
        description = "Reject a plan that is awaiting approval (canonical status NEW). A non-blank reason is required and is stored as the plan note. Returns the updated plan."
    )]
    async fn reject_plan(&self, params: Parameters<RejectPlan>) -> McpResult {
        self.handlers().reject_plan(params).await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for RecruitMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "recruit".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            instructions: Some(r#"Recruit tracks recruitment plans (Kế hoạch tuyển dụng) from the hiring request through approval, candidate sourcing, training and handover.

## Core Concepts
- **Request**: the hiring need a plan answers; it can itself be approved or rejected
- **Plan**: headcount per technology, deadlines and the people who created, confirmed or rejected it
- **Canonical status**: NEW, CONFIRMED, REJECTED, CANCELED, COMPLETED or FAILED, derived from the recorded status plus downstream progress. A plan recorded as COMPLETED whose handovers fall short of the required output is reported as FAILED only when a rejection reason was recorded for it or its request; without one it stays COMPLETED

## Workflow
1. Use `list_plans` to see plans, optionally filtered by name, status or creation date
2. Use `show_plan` (by id, plan name or request title) to inspect the progress counts and the four-stage timeline (plan approval, candidate management, training, handover)
3. Use `approve_plan` or `reject_plan` (with a reason) on plans whose status is NEW

Labels in the output are Vietnamese, as recorded by the source systems."#.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: RecruitMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting recruit MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use recruit_core::SqliteSourceBuilder;
    use tempfile::TempDir;

    use super::*;

    #[tokio::test]
    async fn test_server_exposes_plan_tools() {
        let temp_dir = TempDir::new().unwrap();
        let source = SqliteSourceBuilder::new()
            .with_database_path(Some(temp_dir.path().join("test.db")))
            .build()
            .await
            .unwrap();

        let server = RecruitMcpServer::new(source);
        let mut names: Vec<_> = server
            .tool_router
            .list_all()
            .into_iter()
            .map(|tool| tool.name.to_string())
            .collect();
        names.sort();
        assert_eq!(
            names,
            ["approve_plan", "list_plans", "reject_plan", "show_plan"]
        );

        let info = server.get_info();
        assert_eq!(info.server_info.name, "recruit");
        assert!(info.capabilities.tools.is_some());
    }
}
