use clap::Parser;
use std::path::PathBuf;

use project_model_view::application::dto::OutputFormat;

/// Project a resolved dependency graph into client-facing dependency descriptions
#[derive(Parser, Debug)]
#[command(name = "project-model-view")]
#[command(version)]
#[command(
    about = "Project a resolved dependency graph into client-facing dependency descriptions",
    long_about = None
)]
pub struct Args {
    /// Path to the resolution snapshot (JSON)
    #[arg(short, long, value_name = "FILE")]
    pub snapshot: PathBuf,

    /// Previous resolution snapshot to diff against
    #[arg(short, long, value_name = "FILE")]
    pub previous: Option<PathBuf>,

    /// Output format: json or markdown [default: json]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Only emit descriptions that were added or changed since the previous snapshot
    #[arg(long)]
    pub only_changed: bool,

    /// Emit single-line JSON
    #[arg(long)]
    pub compact: bool,

    /// Exit with code 1 when descriptions changed since the previous snapshot
    #[arg(long)]
    pub fail_on_change: bool,

    /// Path to a config file (defaults to project-model-view.config.yml next to the snapshot)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output on stderr
    #[arg(short, long)]
    pub quiet: bool,
}
