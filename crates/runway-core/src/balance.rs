//! Balance summarization over the ledger

use chrono::NaiveDate;

use crate::models::Transaction;

/// Sum of signed amounts for everything dated on or before `reference_date`.
///
/// This is the starting balance a forecast expects.
pub fn current_balance(transactions: &[Transaction], reference_date: NaiveDate) -> f64 {
    transactions
        .iter()
        .filter(|tx| tx.date <= reference_date)
        .map(Transaction::signed_amount)
        .sum()
}

/// Split a ledger into (history, future) around `reference_date`.
///
/// History includes the reference date itself; future is strictly after it.
pub fn split_at_reference(
    transactions: &[Transaction],
    reference_date: NaiveDate,
) -> (Vec<&Transaction>, Vec<&Transaction>) {
    transactions
        .iter()
        .partition(|tx| tx.date <= reference_date)
}
