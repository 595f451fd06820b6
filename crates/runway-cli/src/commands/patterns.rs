//! Recurring pattern command implementations

use std::path::Path;

use anyhow::Result;
use runway_core::PatternDetector;

use super::{format_money, load_ledger, truncate, RunContext};

pub fn cmd_patterns(ctx: &RunContext, file: &Path, json: bool) -> Result<()> {
    let txs = load_ledger(file)?;
    let detector = PatternDetector::with_config(ctx.config.detection.clone());
    let patterns = detector.detect(&txs, ctx.today);

    if json {
        println!("{}", serde_json::to_string_pretty(&patterns)?);
        return Ok(());
    }

    if patterns.is_empty() {
        println!("No recurring bills detected.");
        println!(
            "   Looked for expenses repeating {}+ times since {}",
            detector.config().min_occurrences,
            detector.lookback_start(ctx.today)
        );
        return Ok(());
    }

    println!();
    println!("🔁 Recurring Expenses");
    println!("   ─────────────────────────────────────────────────────────────");

    for p in &patterns {
        println!(
            "   {:24} │ {:16} │ {:>11} │ last {}",
            truncate(&p.description, 24),
            truncate(&p.category, 16),
            format_money(p.avg_amount),
            p.last_occurrence
        );
    }

    let monthly: f64 = patterns.iter().map(|p| p.avg_amount).sum();
    println!();
    println!("   {} patterns, {} per month", patterns.len(), format_money(monthly));

    Ok(())
}
