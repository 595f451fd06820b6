//! Shortfall and large-bill analysis over a forecast

use tracing::debug;

use crate::models::Forecast;

use super::types::{ForecastOutlook, Severity};

/// Outlook configuration
#[derive(Debug, Clone, PartialEq)]
pub struct OutlookConfig {
    /// Predicted bills at or above this amount are called out
    pub materiality_threshold: f64,
}

impl Default for OutlookConfig {
    fn default() -> Self {
        Self {
            materiality_threshold: 500.0,
        }
    }
}

/// Summarize a forecast: shortfall risk, lowest point and large upcoming bills.
///
/// Severity is `Alert` when the balance goes negative, `Attention` when a
/// large bill is coming, `Info` otherwise.
pub fn analyze_outlook(forecast: &Forecast, config: &OutlookConfig) -> ForecastOutlook {
    let lowest_point = forecast
        .projected_balance
        .iter()
        .copied()
        .reduce(|low, p| if p.balance < low.balance { p } else { low });

    let first_shortfall = forecast
        .projected_balance
        .iter()
        .find(|p| p.balance < 0.0)
        .copied();

    let large_bills: Vec<_> = forecast
        .predicted()
        .filter(|item| item.amount >= config.materiality_threshold)
        .cloned()
        .collect();

    let total_predicted: f64 = forecast.predicted().map(|item| item.amount).sum();

    let at_risk = first_shortfall.is_some();
    let severity = if at_risk {
        Severity::Alert
    } else if !large_bills.is_empty() {
        Severity::Attention
    } else {
        Severity::Info
    };

    debug!(
        "Outlook: severity {}, {} large bills, shortfall {:?}",
        severity,
        large_bills.len(),
        first_shortfall.map(|p| p.date)
    );

    ForecastOutlook {
        lowest_point,
        first_shortfall,
        at_risk,
        large_bills,
        total_predicted,
        severity,
    }
}
