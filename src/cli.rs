use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::Stage;
use crate::output::ColorMode;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "commit-guard")]
#[command(author, version, about = "Commit validation hook - run configurable checks on committed files")]
#[command(long_about = "Runs the configured checks against the files of a commit, per repository path.\n\n\
    Exit codes:\n  \
    0 - All checks passed\n  \
    1 - A check failed; the commit is rejected\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress informational output (diagnostics are still printed)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Also write debug logs to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the checks for a commit stage
    Run(RunArgs),

    /// Show which checks would run, and in what order, without running them
    Plan(PlanArgs),

    /// List the registered checks
    Checks,

    /// Configuration file utilities
    Config(ConfigArgs),
}

/// Options shared by commands that build a configuration for a commit.
#[derive(clap::Args, Debug)]
pub struct CommitArgs {
    /// Commit stage
    #[arg(value_enum)]
    pub stage: Stage,

    /// Property file describing global and per-path settings
    #[arg(short, long)]
    pub config: PathBuf,

    /// Read committed file paths from this file, one per line ("-" for stdin)
    #[arg(long)]
    pub files_from: Option<PathBuf>,

    /// Committed file paths, relative to the repository root
    pub files: Vec<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct RunArgs {
    #[command(flatten)]
    pub commit: CommitArgs,

    /// Emit structured (JSON lines) diagnostics
    #[arg(long)]
    pub structured: bool,

    /// Write diagnostics to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct PlanArgs {
    #[command(flatten)]
    pub commit: CommitArgs,
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Validate a property file for both stages
    Validate {
        /// Path to the property file
        #[arg(short, long)]
        config: PathBuf,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
