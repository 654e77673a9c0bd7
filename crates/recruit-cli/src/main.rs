//! Recruitment plan tracker CLI
//!
//! Lists plans with their canonical status, shows the workflow timeline,
//! approves or rejects pending plans, imports snapshots and serves MCP.

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use mcp::{run_stdio_server, RecruitMcpServer};
use recruit_core::{params::ListPlans, SqliteSourceBuilder};
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let source = SqliteSourceBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to open plan database")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("recruit started");

    match command {
        Some(Plan { command }) => {
            Cli::new(source, renderer)
                .handle_plan_command(command)
                .await
        }
        Some(Import(args)) => Cli::new(source, renderer).import(args).await,
        Some(Serve) => {
            info!("Starting recruit MCP server");
            run_stdio_server(RecruitMcpServer::new(source))
                .await
                .context("MCP server failed")
        }
        None => {
            Cli::new(source, renderer)
                .list_plans(&ListPlans::default())
                .await
        }
    }
}
