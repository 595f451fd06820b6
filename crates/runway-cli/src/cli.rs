//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Runway - See where your balance is heading
#[derive(Parser)]
#[command(name = "runway")]
#[command(about = "Recurring-bill detection and cash-flow forecasting", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to ~/.local/share/runway/config/runway.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Reference date as YYYY-MM-DD (defaults to today, UTC)
    ///
    /// Everything on or before this date is history; everything after it is
    /// a confirmed future transaction.
    #[arg(long, global = true)]
    pub today: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List recurring expenses detected in the ledger
    Patterns {
        /// Transaction file (CSV or .json)
        #[arg(short, long)]
        file: PathBuf,

        /// Output JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Project the balance forward
    Forecast {
        /// Transaction file (CSV or .json)
        #[arg(short, long)]
        file: PathBuf,

        /// Starting balance (defaults to the ledger balance as of --today)
        #[arg(short, long, allow_hyphen_values = true)]
        balance: Option<f64>,

        /// Months to project, at most 1200 (defaults to config horizon)
        #[arg(short, long)]
        months: Option<u32>,

        /// Output JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Print a SHA-256 digest of the forecast
        #[arg(long)]
        digest: bool,
    },

    /// Warn about shortfalls and large upcoming bills
    Outlook {
        /// Transaction file (CSV or .json)
        #[arg(short, long)]
        file: PathBuf,

        /// Starting balance (defaults to the ledger balance as of --today)
        #[arg(short, long, allow_hyphen_values = true)]
        balance: Option<f64>,

        /// Months to project, at most 1200 (defaults to config horizon)
        #[arg(short, long)]
        months: Option<u32>,

        /// Large-bill threshold (defaults to config)
        #[arg(short, long, allow_hyphen_values = true)]
        threshold: Option<f64>,

        /// Output JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show the ledger balance as of --today
    Balance {
        /// Transaction file (CSV or .json)
        #[arg(short, long)]
        file: PathBuf,
    },
}
