//! Workflow validator CLI.
//!
//! Usage:
//!   workflow-validator                        # validates "Video generator.json"
//!   workflow-validator path/to/workflow.json
//!   workflow-validator --format json flow.json

mod cli;

use std::io::IsTerminal;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use workflow_validator::report::{EXIT_LOAD_ERROR, Report};
use workflow_validator::parse::WorkflowDocument;
use workflow_validator::{parse, validate};

use crate::cli::{Cli, ReportFormat};

pub const TRACING_TARGET_CLI: &str = "workflow_validator::cli";

/// Shown in the progress line when the workflow has no name.
const UNNAMED_WORKFLOW: &str = "<untitled workflow>";

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(error) = init_tracing(&cli.log_level) {
        eprintln!("Warning: {error:#}");
    }

    match run(&cli) {
        Ok(code) => ExitCode::from(code),
        Err(error) => {
            tracing::error!(target: TRACING_TARGET_CLI, error = %error, "validation aborted");
            eprintln!("{}", format!("Error loading workflow: {error:#}").red());
            ExitCode::from(EXIT_LOAD_ERROR)
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<u8> {
    let text = cli.format == ReportFormat::Text;
    let color = text && !cli.no_color && std::io::stdout().is_terminal();

    if text {
        println!("{}", paint("🔍 Starting workflow validation...", color));
    }

    let workflow = parse::load(&cli.file)
        .with_context(|| format!("could not load '{}'", cli.file.display()))?;

    if text {
        for line in load_summary(&workflow) {
            println!("{}", paint(&line, color));
        }
    }

    let report = Report::from(validate::validate_workflow(&workflow));
    tracing::info!(
        target: TRACING_TARGET_CLI,
        status = ?report.status,
        errors = report.errors.len(),
        warnings = report.warnings.len(),
        "validation complete"
    );

    match cli.format {
        ReportFormat::Text => print!("{}", report.render(color)),
        ReportFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&report).context("failed to serialize report")?
        ),
    }

    Ok(report.exit_code())
}

/// Progress lines printed once the document has loaded.
fn load_summary(workflow: &WorkflowDocument) -> [String; 2] {
    let name = workflow.name.as_deref().unwrap_or(UNNAMED_WORKFLOW);
    [
        format!("Loaded workflow: \"{}\"", name),
        format!("Found {} nodes", workflow.nodes().len()),
    ]
}

fn paint(text: &str, color: bool) -> String {
    if color {
        text.blue().to_string()
    } else {
        text.to_string()
    }
}

/// Initializes tracing on stderr so stdout only carries the report.
fn init_tracing(default_filter: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .context("invalid log filter")?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    Ok(())
}
