//! Command-line interface definitions using clap
//!
//! This module defines the CLI structure for clickrank using clap's derive macros.

use clap::{Parser, Subcommand};

use crate::ranking::Badge;

/// clickrank - click-driven popularity badges for time-bounded listings
#[derive(Parser)]
#[command(name = "clickrank")]
#[command(version)]
#[command(about = "Rank active listings by clicks and assign popularity badges", long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(long, short = 'c', global = true, default_value = crate::config::DEFAULT_CONFIG_PATH)]
    pub config: String,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Show active listings with their click counts and badges
    Rank {
        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Only show listings holding this badge (popular, notable, rising)
        #[arg(long)]
        badge: Option<Badge>,
    },

    /// Record a click on a listing and print its destination URL
    Click {
        /// Listing id
        listing_id: i64,
    },

    /// Show all-time click totals for every listing (expired included)
    Analytics {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Configuration management commands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Generate example configuration file (prints to stdout without a path)
    Generate {
        /// Output path
        output_path: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
