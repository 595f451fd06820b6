//! Forecast and outlook command implementations

use std::path::Path;

use anyhow::{Context, Result};
use runway_core::config::{validate_horizon, validate_threshold};
use runway_core::{analyze_outlook, Forecast, ForecastStatus, OutlookConfig, Severity};

use super::{format_money, load_ledger, starting_balance, truncate, RunContext};

/// Output switches for `runway forecast`
#[derive(Debug, Clone, Default)]
pub struct ForecastOptions {
    pub balance: Option<f64>,
    pub months: Option<u32>,
    pub json: bool,
    pub digest: bool,
}

/// Build a forecast from a ledger file using the context's config
pub fn build_forecast(
    ctx: &RunContext,
    file: &Path,
    balance: Option<f64>,
    months: Option<u32>,
) -> Result<(Forecast, f64)> {
    let months = match months {
        Some(m) => validate_horizon(m).context("Invalid --months")?,
        None => ctx.config.forecast.horizon_months,
    };
    let txs = load_ledger(file)?;
    let start = starting_balance(ctx, &txs, balance);

    let forecast = ctx
        .config
        .generator()
        .generate_with_horizon(&txs, start, ctx.today, months);

    Ok((forecast, start))
}

pub fn cmd_forecast(ctx: &RunContext, file: &Path, opts: ForecastOptions) -> Result<()> {
    let (forecast, start) = build_forecast(ctx, file, opts.balance, opts.months)?;

    if opts.json {
        println!("{}", serde_json::to_string_pretty(&forecast)?);
    } else {
        print_timeline(&forecast, start, ctx);
    }

    if opts.digest {
        println!("digest: {}", forecast.digest());
    }

    Ok(())
}

fn print_timeline(forecast: &Forecast, start: f64, ctx: &RunContext) {
    println!();
    println!("📈 Forecast from {} (start {})", ctx.today, format_money(start));
    println!("   ─────────────────────────────────────────────────────────────");

    if forecast.is_empty() {
        println!("   No recurring bills or scheduled transactions ahead.");
        return;
    }

    for (item, point) in forecast.forecast.iter().zip(&forecast.projected_balance) {
        let marker = match item.status {
            ForecastStatus::Predicted => "~",
            ForecastStatus::Confirmed => " ",
        };
        println!(
            "   {} {}{:24} │ {:>11} │ {:>12}",
            item.date,
            marker,
            truncate(&item.description, 24),
            format_money(item.signed_amount()),
            format_money(point.balance)
        );
    }

    println!();
    println!(
        "   {} predicted (~), {} confirmed",
        forecast.predicted().count(),
        forecast.confirmed().count()
    );
}

pub fn cmd_outlook(
    ctx: &RunContext,
    file: &Path,
    balance: Option<f64>,
    months: Option<u32>,
    threshold: Option<f64>,
    json: bool,
) -> Result<()> {
    let materiality_threshold = match threshold {
        Some(t) => validate_threshold(t).context("Invalid --threshold")?,
        None => ctx.config.outlook.materiality_threshold,
    };
    let (forecast, _) = build_forecast(ctx, file, balance, months)?;

    let config = OutlookConfig {
        materiality_threshold,
    };
    let outlook = analyze_outlook(&forecast, &config);

    if json {
        println!("{}", serde_json::to_string_pretty(&outlook)?);
        return Ok(());
    }

    println!();
    println!("🔭 Outlook ({})", outlook.severity);
    println!("   ─────────────────────────────────────────────────────────────");

    match outlook.first_shortfall {
        Some(point) => println!(
            "   ⚠️  Balance drops to {} on {}",
            format_money(point.balance),
            point.date
        ),
        None => println!("   ✅ Balance stays positive"),
    }

    if let Some(low) = outlook.lowest_point {
        println!("   Lowest point: {} on {}", format_money(low.balance), low.date);
    }
    println!(
        "   Predicted recurring spend: {}",
        format_money(outlook.total_predicted)
    );

    if !outlook.large_bills.is_empty() {
        println!();
        println!(
            "   Large bills (≥ {}):",
            format_money(config.materiality_threshold)
        );
        for bill in &outlook.large_bills {
            println!(
                "   {} {:24} │ {:>11}",
                bill.date,
                truncate(&bill.description, 24),
                format_money(bill.amount)
            );
        }
    }

    if outlook.severity == Severity::Alert {
        println!();
        println!("   Consider moving money or delaying bills before the shortfall date.");
    }

    Ok(())
}
