//! Static snapshot builder for the governance console.
//!
//! Loads a dataset, computes the derived views, and writes the rendered
//! console page into a clean output directory.
//!
//! ## Usage
//!
//! ```bash
//! # Render the bundled dataset to dist/
//! cargo run --bin console_build
//!
//! # Render a custom dataset, focused on high-risk workflows
//! cargo run --bin console_build -- --data governance.yaml --risk high
//!
//! # Just print the aggregate health score
//! cargo run --bin console_build -- --score-only
//! ```

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use nicole_console::render::{render_page, SnapshotMeta};
use nicole_console::{
    compute_status_score, DashboardData, RiskSelector, WorkflowFilter, WorkflowSelector,
};

#[derive(Parser)]
#[command(name = "console_build")]
#[command(about = "Render the governance console to a static page")]
struct Cli {
    /// Dataset file (.yaml, .yml, or .json). Uses the bundled dataset
    /// when omitted.
    #[arg(long)]
    data: Option<PathBuf>,

    /// Output directory for the rendered page.
    #[arg(long, default_value = "dist")]
    out: PathBuf,

    /// Workflow id to focus the timeline on ("all" keeps every workflow).
    #[arg(long, default_value = "all")]
    workflow: String,

    /// Risk tier to focus the timeline on ("all" keeps every tier).
    #[arg(long, default_value = "all")]
    risk: String,

    /// Print the health score and exit without writing output.
    #[arg(long)]
    score_only: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let data = match &cli.data {
        Some(path) => DashboardData::load(path)
            .with_context(|| format!("loading dataset {}", path.display()))?,
        None => DashboardData::bundled().context("parsing bundled dataset")?,
    };
    info!(
        layers = data.layers.len(),
        modules = data.modules.len(),
        workflows = data.workflows.len(),
        "dataset ready"
    );

    if cli.score_only {
        let score = compute_status_score(&data.modules)?;
        println!("{score:.2}");
        return Ok(());
    }

    let filter = WorkflowFilter {
        workflow_id: WorkflowSelector::from(cli.workflow.as_str()),
        risk: RiskSelector::from(cli.risk.as_str()),
    };
    let meta = SnapshotMeta::capture(&data);
    let page = render_page(&data, &filter, &meta);

    if cli.out.exists() {
        fs::remove_dir_all(&cli.out)
            .with_context(|| format!("cleaning output directory {}", cli.out.display()))?;
    }
    fs::create_dir_all(&cli.out)
        .with_context(|| format!("creating output directory {}", cli.out.display()))?;

    let index = cli.out.join("index.html");
    fs::write(&index, page).with_context(|| format!("writing {}", index.display()))?;
    info!(path = %index.display(), "console snapshot written");

    Ok(())
}
