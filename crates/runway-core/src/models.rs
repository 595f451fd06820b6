//! Domain models for Runway

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Direction of a transaction. Amounts are always non-negative; the sign
/// lives here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    /// Apply this direction to a non-negative amount
    pub fn sign(&self, amount: f64) -> f64 {
        match self {
            Self::Income => amount,
            Self::Expense => -amount,
        }
    }
}

impl std::str::FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" | "credit" => Ok(Self::Income),
            "expense" | "debit" => Ok(Self::Expense),
            _ => Err(format!("Unknown transaction type: {}", s)),
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A ledger transaction supplied by the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub date: NaiveDate,
    /// Always >= 0; see `kind` for direction
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
}

impl Transaction {
    pub fn new(
        date: NaiveDate,
        amount: f64,
        kind: TransactionType,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date,
            amount,
            kind,
            category: category.into(),
            description: description.into(),
        }
    }

    /// Effect of this transaction on an account balance
    pub fn signed_amount(&self) -> f64 {
        self.kind.sign(self.amount)
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }
}

/// An expense inferred to repeat monthly
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurringPattern {
    /// Original casing, taken from the most recent matching transaction
    pub description: String,
    pub category: String,
    /// Simple mean over every matching transaction in the lookback window
    pub avg_amount: f64,
    pub last_occurrence: NaiveDate,
}

/// Where a forecast item came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ForecastStatus {
    /// Synthesized from a recurring pattern
    Predicted,
    /// A real future transaction already in the ledger
    Confirmed,
}

impl ForecastStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Predicted => "predicted",
            Self::Confirmed => "confirmed",
        }
    }
}

impl std::fmt::Display for ForecastStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single dated event on the projected timeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastItem {
    pub date: NaiveDate,
    pub amount: f64,
    pub description: String,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub status: ForecastStatus,
}

impl ForecastItem {
    /// Project a pattern onto `date`. Patterns only come from expenses, so
    /// predicted items are always expenses.
    pub fn predicted(pattern: &RecurringPattern, date: NaiveDate) -> Self {
        Self {
            date,
            amount: pattern.avg_amount,
            description: pattern.description.clone(),
            category: pattern.category.clone(),
            kind: TransactionType::Expense,
            status: ForecastStatus::Predicted,
        }
    }

    /// Pass a future ledger transaction through unchanged
    pub fn confirmed(tx: &Transaction) -> Self {
        Self {
            date: tx.date,
            amount: tx.amount,
            description: tx.description.clone(),
            category: tx.category.clone(),
            kind: tx.kind,
            status: ForecastStatus::Confirmed,
        }
    }

    pub fn signed_amount(&self) -> f64 {
        self.kind.sign(self.amount)
    }

    pub fn is_predicted(&self) -> bool {
        self.status == ForecastStatus::Predicted
    }
}

/// Running account total right after the item on `date` is applied
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BalancePoint {
    pub date: NaiveDate,
    pub balance: f64,
}

/// Result of a forecast run. Both lists are sorted ascending by date and
/// `projected_balance[i]` belongs to `forecast[i]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Forecast {
    pub forecast: Vec<ForecastItem>,
    pub projected_balance: Vec<BalancePoint>,
}

impl Forecast {
    pub fn is_empty(&self) -> bool {
        self.forecast.is_empty()
    }

    pub fn predicted(&self) -> impl Iterator<Item = &ForecastItem> {
        self.forecast.iter().filter(|i| i.is_predicted())
    }

    pub fn confirmed(&self) -> impl Iterator<Item = &ForecastItem> {
        self.forecast.iter().filter(|i| !i.is_predicted())
    }

    /// Balance after the last item, if any
    pub fn closing_balance(&self) -> Option<f64> {
        self.projected_balance.last().map(|p| p.balance)
    }

    /// Hex SHA-256 of the canonical JSON rendering.
    ///
    /// Two runs over the same ledger, balance and reference date yield the
    /// same digest.
    ///
    /// Serializing a `Forecast` into memory cannot fail: it holds only
    /// strings, dates, unit enums and `f64`s (non-finite values are written
    /// as `null`), with no maps and no fallible custom `Serialize` impls.
    pub fn digest(&self) -> String {
        let canonical = serde_json::to_vec(self).unwrap_or_default();
        let mut hasher = Sha256::new();
        hasher.update(&canonical);
        hex::encode(hasher.finalize())
    }
}
