//! CLI command definitions and argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Lexcite CLI - research and verify legal citations for a motion.
#[derive(Debug, Parser)]
#[command(name = "lexcite")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Emit JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Plan search tasks for a request without executing them
    Plan(PlanArgs),

    /// Execute a full citation research run
    Run(RunArgs),
}

/// Arguments for the plan command.
#[derive(Debug, Parser)]
pub struct PlanArgs {
    /// Path to the research request JSON file
    #[arg(short, long)]
    pub request: PathBuf,
}

/// Arguments for the run command.
#[derive(Debug, Parser)]
pub struct RunArgs {
    /// Path to the research request JSON file
    #[arg(short, long)]
    pub request: PathBuf,

    /// Offline fixtures: JSON map of query -> opinion hits
    #[arg(long, conflicts_with = "live")]
    pub fixtures: Option<PathBuf>,

    /// Search the live opinion service instead of fixtures
    #[arg(long)]
    pub live: bool,

    /// Search API endpoint (live mode)
    #[arg(long, env = "LEXCITE_API_URL")]
    pub api_url: Option<String>,

    /// Search API token (live mode)
    #[arg(long, env = "LEXCITE_API_TOKEN")]
    pub token: Option<String>,

    /// Directory for run checkpoints
    #[arg(long, default_value = ".lexcite/checkpoints")]
    pub checkpoint_dir: PathBuf,
}
