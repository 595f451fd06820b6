//! Shared command utilities
//!
//! This module contains:
//! - `RunContext` - Config and reference date shared by every command
//! - `load_ledger` - Load a transaction file with CLI-friendly errors
//! - `cmd_balance` - Show the ledger balance as of the reference date

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use runway_core::{current_balance, import, split_at_reference, EngineConfig, Transaction};
use tracing::debug;

use super::format_money;

/// Everything a command needs besides its own arguments
#[derive(Debug, Clone)]
pub struct RunContext {
    pub config: EngineConfig,
    pub today: NaiveDate,
}

impl RunContext {
    pub fn new(config_path: Option<&Path>, today: Option<&str>) -> Result<Self> {
        let config = EngineConfig::load(config_path).context("Failed to load config")?;
        let today = resolve_today(today)?;
        debug!("Reference date {}", today);
        Ok(Self { config, today })
    }
}

/// Parse `--today`, defaulting to the current UTC date
pub fn resolve_today(today: Option<&str>) -> Result<NaiveDate> {
    match today {
        Some(s) => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .context("Invalid --today format (use YYYY-MM-DD)"),
        None => Ok(Utc::now().date_naive()),
    }
}

/// Load a transaction file
pub fn load_ledger(file: &Path) -> Result<Vec<Transaction>> {
    import::load_transactions(file)
        .with_context(|| format!("Failed to load transactions from {}", file.display()))
}

/// Use the explicit balance, or fall back to the ledger balance
pub fn starting_balance(ctx: &RunContext, txs: &[Transaction], balance: Option<f64>) -> f64 {
    balance.unwrap_or_else(|| current_balance(txs, ctx.today))
}

pub fn cmd_balance(ctx: &RunContext, file: &Path) -> Result<()> {
    let txs = load_ledger(file)?;
    let (past, future) = split_at_reference(&txs, ctx.today);

    println!();
    println!("💰 Balance as of {}", ctx.today);
    println!("   ─────────────────────────────");
    println!("   {}", format_money(current_balance(&txs, ctx.today)));
    println!(
        "   From {} past transactions ({} scheduled after today)",
        past.len(),
        future.len()
    );

    Ok(())
}
