//! Recurring-pattern detection
//!
//! Scans expense history for descriptions that repeat inside a lookback
//! window and turns each qualifying group into a [`RecurringPattern`].
//!
//! Grouping is by normalized description (trimmed, lowercased), so
//! "Netflix" and "netflix " land in the same group. No interval or amount
//! consistency is required: two or more hits in the window are enough.

use chrono::{Months, NaiveDate};
use std::collections::HashMap;
use tracing::{debug, info};

use crate::models::{RecurringPattern, Transaction};

/// Detection configuration
#[derive(Debug, Clone, PartialEq)]
pub struct DetectionConfig {
    /// How many calendar months back from the reference date to look.
    /// Defaults to 7, the effective window of the reference behaviour.
    pub lookback_months: u32,
    /// Minimum transactions in the window for a group to count as recurring
    pub min_occurrences: usize,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            lookback_months: 7,
            min_occurrences: 2,
        }
    }
}

/// Extracts monthly recurring expense patterns from a ledger
#[derive(Debug, Clone, Default)]
pub struct PatternDetector {
    config: DetectionConfig,
}

/// Transactions sharing one normalized description
struct Group<'a> {
    transactions: Vec<&'a Transaction>,
}

impl<'a> Group<'a> {
    /// Most recent transaction; the earliest one in input order wins a tie
    fn latest(&self) -> Option<&'a Transaction> {
        self.transactions
            .iter()
            .copied()
            .reduce(|best, tx| if tx.date > best.date { tx } else { best })
    }

    fn to_pattern(&self) -> Option<RecurringPattern> {
        let latest = self.latest()?;
        let total: f64 = self.transactions.iter().map(|t| t.amount).sum();

        Some(RecurringPattern {
            description: latest.description.clone(),
            category: latest.category.clone(),
            avg_amount: total / self.transactions.len() as f64,
            last_occurrence: latest.date,
        })
    }
}

impl PatternDetector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DetectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DetectionConfig {
        &self.config
    }

    /// First day included in the lookback window
    pub fn lookback_start(&self, reference_date: NaiveDate) -> NaiveDate {
        reference_date
            .checked_sub_months(Months::new(self.config.lookback_months))
            .unwrap_or(NaiveDate::MIN)
    }

    /// Detect recurring expense patterns as of `reference_date`.
    ///
    /// Only expenses dated inside `[lookback_start, reference_date]` are
    /// grouped. Patterns come back in the order their group was first seen
    /// in `transactions`.
    pub fn detect(
        &self,
        transactions: &[Transaction],
        reference_date: NaiveDate,
    ) -> Vec<RecurringPattern> {
        let window_start = self.lookback_start(reference_date);

        let mut index: HashMap<String, usize> = HashMap::new();
        let mut groups: Vec<Group<'_>> = Vec::new();

        for tx in transactions {
            if !tx.is_expense() {
                continue;
            }
            if tx.date < window_start || tx.date > reference_date {
                continue;
            }

            let key = normalize_description(&tx.description);
            let slot = *index.entry(key).or_insert_with(|| {
                groups.push(Group {
                    transactions: Vec::new(),
                });
                groups.len() - 1
            });
            groups[slot].transactions.push(tx);
        }

        let patterns: Vec<RecurringPattern> = groups
            .iter()
            .filter(|g| g.transactions.len() >= self.config.min_occurrences)
            .filter_map(|g| g.to_pattern())
            .inspect(|p| {
                debug!(
                    "Recurring pattern: {:?} ({}) avg ${:.2}, last seen {}",
                    p.description, p.category, p.avg_amount, p.last_occurrence
                )
            })
            .collect();

        info!(
            "Pattern detection: {} patterns from {} expense groups since {}",
            patterns.len(),
            groups.len(),
            window_start
        );

        patterns
    }
}

/// Grouping key for a description: trimmed and lowercased.
///
/// An empty description is still a valid key.
pub fn normalize_description(description: &str) -> String {
    description.trim().to_lowercase()
}
