//! Runway CLI - Cash-flow forecaster
//!
//! Usage:
//!   runway patterns --file ledger.csv          List recurring expenses
//!   runway forecast --file ledger.csv          Project the balance forward
//!   runway outlook --file ledger.csv           Shortfall and large-bill warnings
//!   runway balance --file ledger.csv           Current ledger balance

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact().with_writer(std::io::stderr))
        .init();

    let ctx = commands::RunContext::new(cli.config.as_deref(), cli.today.as_deref())?;

    match cli.command {
        Commands::Patterns { file, json } => commands::cmd_patterns(&ctx, &file, json),
        Commands::Forecast {
            file,
            balance,
            months,
            json,
            digest,
        } => commands::cmd_forecast(
            &ctx,
            &file,
            commands::ForecastOptions {
                balance,
                months,
                json,
                digest,
            },
        ),
        Commands::Outlook {
            file,
            balance,
            months,
            threshold,
            json,
        } => commands::cmd_outlook(&ctx, &file, balance, months, threshold, json),
        Commands::Balance { file } => commands::cmd_balance(&ctx, &file),
    }
}
