//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `core` - Shared run context (config, reference date, ledger loading) and `balance`
//! - `patterns` - Recurring expense listing
//! - `forecast` - Balance projection and outlook warnings

pub mod core;
pub mod forecast;
pub mod patterns;

// Re-export command functions for main.rs
pub use self::core::*;
pub use forecast::*;
pub use patterns::*;

/// Truncate a string to a maximum number of characters, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Format a signed money amount as `$1,234.56` / `-$1,234.56`
pub fn format_money(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let cents = format!("{:.2}", amount.abs());
    let (whole, frac) = cents.split_once('.').unwrap_or((cents.as_str(), "00"));

    let mut grouped = String::new();
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}${}.{}", sign, grouped, frac)
}
