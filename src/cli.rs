use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use workflow_validator::parse::DEFAULT_WORKFLOW_FILE;

#[derive(Parser, Debug)]
#[command(name = "workflow-validator", version)]
#[command(about = "Static validator for node-graph workflow definitions")]
#[command(
    long_about = "Checks a workflow export for structural problems, per-node configuration \
                  errors, dangling connections and incomplete credential references. \
                  Exits 0 when there are no errors, 1 when validation fails and 2 when \
                  the document cannot be loaded."
)]
pub struct Cli {
    /// Workflow JSON file to validate.
    #[arg(env = "WORKFLOW_FILE", default_value = DEFAULT_WORKFLOW_FILE)]
    pub file: PathBuf,

    /// Report format written to stdout.
    #[arg(long, short = 'f', env = "WORKFLOW_REPORT_FORMAT", value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    /// Disable ANSI colors in the text report.
    #[arg(long)]
    pub no_color: bool,

    /// Log filter used when RUST_LOG is not set (e.g. `debug`).
    #[arg(long, env = "WORKFLOW_LOG_LEVEL", default_value = "warn")]
    pub log_level: String,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[clap(rename_all = "lower")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}
