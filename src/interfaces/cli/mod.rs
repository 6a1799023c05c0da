//! CLI interface module
//!
//! Runs clap-parsed commands against the configured storage.

pub mod commands;

use std::fmt;

use crate::cli::{Commands, ConfigCommands};
use crate::errors::ClickrankError;
use crate::storage::StorageFactory;
use commands::{config_generate, record_click, show_analytics, show_ranking};

#[derive(Debug)]
pub enum CliError {
    StorageError(String),
    NotFound(String),
    CommandError(String),
}

impl CliError {
    /// Format as simple output
    pub fn format_simple(&self) -> String {
        match self {
            CliError::StorageError(msg) => format!("Storage error: {}", msg),
            CliError::NotFound(msg) => format!("Not found: {}", msg),
            CliError::CommandError(msg) => format!("Command error: {}", msg),
        }
    }

    /// Format as colored output
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        match self {
            CliError::StorageError(msg) => {
                format!("{} {}", "Storage error:".red().bold(), msg.white())
            }
            CliError::NotFound(msg) => {
                format!("{} {}", "Not found:".yellow().bold(), msg.white())
            }
            CliError::CommandError(msg) => {
                format!("{} {}", "Command error:".red().bold(), msg.white())
            }
        }
    }

    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotFound(_) => 2,
            _ => 1,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CliError {}

impl From<ClickrankError> for CliError {
    fn from(err: ClickrankError) -> Self {
        match err {
            ClickrankError::NotFound(msg) => CliError::NotFound(msg),
            other => CliError::StorageError(other.format_simple()),
        }
    }
}

/// Run a CLI command from clap-parsed input
///
/// `config generate` runs without a database connection.
pub async fn run_cli_command(cmd: Commands) -> Result<(), CliError> {
    match cmd {
        Commands::Rank { json, badge } => {
            show_ranking(StorageFactory::create().await?, json, badge).await
        }
        Commands::Click { listing_id } => {
            record_click(StorageFactory::create().await?, listing_id).await
        }
        Commands::Analytics { json } => {
            show_analytics(StorageFactory::create().await?, json).await
        }
        Commands::Config {
            action: ConfigCommands::Generate { output_path, force },
        } => config_generate(output_path, force),
    }
}
