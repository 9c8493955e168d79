//! CLI command definitions and dispatch.

pub mod code;
pub mod config;
pub mod serve;
pub mod snapshot;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use labinv_core::config::AppConfig;
use labinv_core::error::AppError;

/// LabInv: laboratory storage and item inventory
#[derive(Debug, Parser)]
#[command(name = "labinv", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file (extension optional)
    #[arg(short, long, default_value = "config/default")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the LabInv server
    Serve(serve::ServeArgs),
    /// Configuration management
    Config(config::ConfigArgs),
    /// Generate link-code images
    Code(code::CodeArgs),
    /// Inspect persisted session snapshots
    Snapshot(snapshot::SnapshotArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Serve(args) => serve::execute(args, &self.config).await,
            Commands::Config(args) => config::execute(args, &self.config, self.format).await,
            Commands::Code(args) => code::execute(args, &self.config).await,
            Commands::Snapshot(args) => snapshot::execute(args, &self.config, self.format).await,
        }
    }
}

/// Helper: load configuration from file
pub fn load_config(config_path: &str) -> Result<AppConfig, AppError> {
    AppConfig::load(config_path)
}
