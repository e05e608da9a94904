use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "wfdoc-runner")]
#[command(about = "Validate and repair workflow JSON documents")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Check every workflow file in a directory against the schema and integrity rules.
    Validate(ValidateCommand),
    /// Repair missing or malformed fields in place, keeping a timestamped backup.
    Fix(FixCommand),
}

#[derive(Debug, Clone, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ValidateCommand {
    /// Directory containing workflow files (default: ./workflow).
    pub workflow_dir: Option<PathBuf>,
    #[arg(long)]
    pub config: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, clap::Args)]
pub struct FixCommand {
    /// Directory containing workflow files (default: ./workflow).
    pub workflow_dir: Option<PathBuf>,
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Where original files are copied before they are rewritten.
    #[arg(long)]
    pub backup_dir: Option<PathBuf>,
    /// Report the changes without creating backups or writing files.
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
