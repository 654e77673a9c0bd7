//! Command argument wrappers and their handlers.
//!
//! Each clap struct converts into a core parameter type from
//! [`recruit_core::params`], keeping clap attributes out of the core crate:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Tracker
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use log::debug;
use recruit_core::{
    display::{ActionResult, ImportResult, PlanAction, Plans},
    params::{Id, ListPlans, RejectPlan, ShowPlan},
    PlanMetadata, Snapshot, SqliteSource, Tracker,
};

use crate::renderer::TerminalRenderer;

/// List plans with their canonical status
#[derive(Args)]
pub struct ListPlansArgs {
    /// Only plans whose name contains this text (case-insensitive)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Only plans with this canonical status (NEW, CONFIRMED, REJECTED,
    /// CANCELED, COMPLETED, FAILED)
    #[arg(short, long)]
    pub status: Option<String>,

    /// Only plans created on this date: YYYY, YYYY-MM or YYYY-MM-DD
    #[arg(short, long)]
    pub date: Option<String>,
}

impl From<ListPlansArgs> for ListPlans {
    fn from(val: ListPlansArgs) -> Self {
        ListPlans {
            name: val.name,
            status: val.status,
            date: val.date,
        }
    }
}

/// Show a plan with its progress and four-stage timeline
#[derive(Args)]
pub struct ShowPlanArgs {
    /// ID of the plan to display
    #[arg(required_unless_present_any = ["name", "request"])]
    pub id: Option<u64>,

    /// Open the plan with this exact name instead (case-insensitive)
    #[arg(long, conflicts_with = "id")]
    pub name: Option<String>,

    /// Open the plan created from this request title instead
    /// (case-insensitive)
    #[arg(long, conflicts_with_all = ["id", "name"])]
    pub request: Option<String>,
}

impl From<ShowPlanArgs> for ShowPlan {
    fn from(val: ShowPlanArgs) -> Self {
        ShowPlan {
            id: val.id,
            name: val.name,
            request: val.request,
        }
    }
}

/// Approve a plan that is awaiting approval
#[derive(Args)]
pub struct ApprovePlanArgs {
    /// ID of the plan to approve
    pub id: u64,
}

impl From<ApprovePlanArgs> for Id {
    fn from(val: ApprovePlanArgs) -> Self {
        Id { id: val.id }
    }
}

/// Reject a plan that is awaiting approval
#[derive(Args)]
pub struct RejectPlanArgs {
    /// ID of the plan to reject
    pub id: u64,

    /// Why the plan is rejected
    #[arg(short, long)]
    pub reason: String,
}

impl From<RejectPlanArgs> for RejectPlan {
    fn from(val: RejectPlanArgs) -> Self {
        RejectPlan {
            id: val.id,
            reason: val.reason,
        }
    }
}

/// Load a snapshot file
#[derive(Args)]
pub struct ImportArgs {
    /// JSON file with `requests`, `plans`, `candidates` and `trainees`
    pub file: PathBuf,
}

#[derive(Subcommand)]
pub enum PlanCommands {
    /// List plans
    #[command(alias = "ls")]
    List(ListPlansArgs),
    /// Show plan details and timeline
    Show(ShowPlanArgs),
    /// Approve a NEW plan
    Approve(ApprovePlanArgs),
    /// Reject a NEW plan with a reason
    Reject(RejectPlanArgs),
}

/// Runs commands against a tracker and renders their output.
pub struct Cli {
    tracker: Tracker<SqliteSource>,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(source: SqliteSource, renderer: TerminalRenderer) -> Self {
        Self {
            tracker: Tracker::new(source),
            renderer,
        }
    }

    pub async fn handle_plan_command(&self, command: PlanCommands) -> Result<()> {
        match command {
            PlanCommands::List(args) => self.list_plans(&args.into()).await,
            PlanCommands::Show(args) => self.show_plan(&args.into()).await,
            PlanCommands::Approve(args) => self.approve_plan(&args.into()).await,
            PlanCommands::Reject(args) => self.reject_plan(&args.into()).await,
        }
    }

    pub async fn list_plans(&self, params: &ListPlans) -> Result<()> {
        let plans = self
            .tracker
            .list_plans(params)
            .await
            .context("Failed to list plans")?;

        let title = if plans.is_empty() {
            "No plans found"
        } else {
            "Recruitment Plans"
        };
        self.renderer.render(&format!("# {title}\n\n"))?;
        if !plans.is_empty() {
            self.renderer.render(&Plans(plans).to_string())?;
        }
        Ok(())
    }

    async fn show_plan(&self, params: &ShowPlan) -> Result<()> {
        let detail = self
            .tracker
            .show_plan(params, &PlanMetadata::default())
            .await
            .context("Failed to show plan")?;

        self.renderer.render(&detail.to_string())
    }

    async fn approve_plan(&self, params: &Id) -> Result<()> {
        let plan = self
            .tracker
            .confirm_plan(params)
            .await
            .with_context(|| format!("Failed to approve plan {}", params.id))?;

        self.renderer
            .render(&ActionResult::new(PlanAction::Confirmed, plan).to_string())
    }

    async fn reject_plan(&self, params: &RejectPlan) -> Result<()> {
        let plan = self
            .tracker
            .reject_plan(params)
            .await
            .with_context(|| format!("Failed to reject plan {}", params.id))?;

        self.renderer
            .render(&ActionResult::new(PlanAction::Rejected, plan).to_string())
    }

    pub async fn import(&self, args: ImportArgs) -> Result<()> {
        let text = std::fs::read_to_string(&args.file)
            .with_context(|| format!("Failed to read {}", args.file.display()))?;
        let snapshot = Snapshot::from_json(&text)
            .with_context(|| format!("Invalid snapshot in {}", args.file.display()))?;
        debug!(
            "Snapshot has {} plans and {} requests",
            snapshot.plans.len(),
            snapshot.requests.len()
        );

        let plans = self
            .tracker
            .source()
            .import_snapshot(snapshot)
            .await
            .context("Failed to import snapshot")?;

        self.renderer.render(
            &ImportResult {
                path: &args.file,
                plans,
            }
            .to_string(),
        )
    }
}
