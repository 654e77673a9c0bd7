use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{ImportArgs, PlanCommands};

/// Track recruitment plans through approval, sourcing, training and handover
///
/// Plans are read from a local mirror of the plan, request, candidate and
/// training subsystems. Every listed status is the canonical status derived
/// from downstream progress, not the raw recorded value. Run without a
/// command to list all plans.
#[derive(Parser)]
#[command(version, about, name = "recruit")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/recruit/recruit.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the recruit CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Inspect, approve and reject plans
    #[command(alias = "p")]
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// Load a JSON snapshot of subsystem data into the local mirror
    Import(ImportArgs),
    /// Start the MCP server
    Serve,
}
