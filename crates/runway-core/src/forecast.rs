//! Cash-flow forecasting
//!
//! Projects each recurring pattern forward month by month, merges the
//! projections with confirmed future transactions and walks the merged
//! timeline to produce a running balance.
//!
//! Predicted items are never reconciled against confirmed ones: a projected
//! rent payment and an already-booked rent payment both appear.

use chrono::{Datelike, Months, NaiveDate};
use tracing::{debug, info, warn};

use crate::detect::{DetectionConfig, PatternDetector};
use crate::models::{BalancePoint, Forecast, ForecastItem, RecurringPattern, Transaction};

/// Longest horizon a forecast will project (100 years)
pub const MAX_HORIZON_MONTHS: u32 = 1200;

/// Forecast configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastConfig {
    /// Number of whole months to project patterns over
    pub horizon_months: u32,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self { horizon_months: 3 }
    }
}

/// Builds a balance-annotated forward timeline from a ledger
#[derive(Debug, Clone, Default)]
pub struct ForecastGenerator {
    detector: PatternDetector,
    config: ForecastConfig,
}

impl ForecastGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(detection: DetectionConfig, config: ForecastConfig) -> Self {
        Self {
            detector: PatternDetector::with_config(detection),
            config,
        }
    }

    pub fn detector(&self) -> &PatternDetector {
        &self.detector
    }

    pub fn config(&self) -> &ForecastConfig {
        &self.config
    }

    /// Forecast over the configured horizon
    pub fn generate(
        &self,
        transactions: &[Transaction],
        current_balance: f64,
        reference_date: NaiveDate,
    ) -> Forecast {
        self.generate_with_horizon(
            transactions,
            current_balance,
            reference_date,
            self.config.horizon_months,
        )
    }

    /// Forecast over an explicit horizon of `months`.
    ///
    /// `current_balance` is the caller's balance as of `reference_date`;
    /// every balance point is relative to it. Horizons beyond
    /// [`MAX_HORIZON_MONTHS`] are capped.
    pub fn generate_with_horizon(
        &self,
        transactions: &[Transaction],
        current_balance: f64,
        reference_date: NaiveDate,
        months: u32,
    ) -> Forecast {
        let months = if months > MAX_HORIZON_MONTHS {
            warn!(
                "Horizon of {} months capped at {}",
                months, MAX_HORIZON_MONTHS
            );
            MAX_HORIZON_MONTHS
        } else {
            months
        };

        let patterns = self.detector.detect(transactions, reference_date);

        let mut items = project_patterns(&patterns, reference_date, months);
        let predicted_count = items.len();

        items.extend(
            transactions
                .iter()
                .filter(|tx| tx.date > reference_date)
                .map(ForecastItem::confirmed),
        );
        let confirmed_count = items.len() - predicted_count;

        // Stable: same-date items keep predicted-then-confirmed order
        items.sort_by_key(|item| item.date);

        let projected_balance = running_balance(current_balance, &items);

        info!(
            "Forecast: {} predicted + {} confirmed items over {} months from {}",
            predicted_count, confirmed_count, months, reference_date
        );

        Forecast {
            forecast: items,
            projected_balance,
        }
    }
}

/// Synthesize one item per pattern per month, month-major.
///
/// Stops at the first month that falls outside the representable date range;
/// every later month would too.
fn project_patterns(
    patterns: &[RecurringPattern],
    reference_date: NaiveDate,
    months: u32,
) -> Vec<ForecastItem> {
    let mut items = Vec::new();

    'months: for offset in 0..months {
        for pattern in patterns {
            match project_date(pattern.last_occurrence, reference_date, offset) {
                Some(date) => {
                    debug!("Projecting {:?} on {}", pattern.description, date);
                    items.push(ForecastItem::predicted(pattern, date));
                }
                None => {
                    warn!(
                        "Stopping projection at month offset {}: date out of range",
                        offset
                    );
                    break 'months;
                }
            }
        }
    }

    items
}

/// Date of a projected occurrence.
///
/// The target month is `reference_date`'s month + 1 + `offset`. The day is
/// `last_occurrence`'s day of month, clamped to the last day of the target
/// month (a 31st projected into April lands on April 30).
///
/// Returns `None` only when the target month is outside chrono's range. The
/// result depends on `offset` alone, never on the pattern, so once an offset
/// is out of range all larger ones are too.
pub fn project_date(
    last_occurrence: NaiveDate,
    reference_date: NaiveDate,
    offset: u32,
) -> Option<NaiveDate> {
    let month_start = reference_date.with_day(1)?;
    let target_start = month_start.checked_add_months(Months::new(offset.checked_add(1)?))?;
    let target_end = target_start
        .checked_add_months(Months::new(1))
        .and_then(|d| d.pred_opt())?;

    let day = last_occurrence.day().min(target_end.day());
    target_start.with_day(day)
}

/// Walk `items` in order, applying each signed amount to `start`.
///
/// Produces exactly one point per item; days without items are not
/// interpolated.
pub fn running_balance(start: f64, items: &[ForecastItem]) -> Vec<BalancePoint> {
    items
        .iter()
        .scan(start, |balance, item| {
            *balance += item.signed_amount();
            Some(BalancePoint {
                date: item.date,
                balance: *balance,
            })
        })
        .collect()
}
