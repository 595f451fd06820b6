//! Runway Core Library
//!
//! Cash-flow forecasting for a personal ledger:
//! - Recurring expense detection over a lookback window
//! - Month-by-month projection of recurring expenses
//! - Merge with confirmed future transactions and running balance
//! - Shortfall and large-bill outlook
//! - CSV/JSON transaction loading and TOML configuration
//!
//! Detection and forecasting are pure: they take the ledger and an explicit
//! reference date and never read the clock.

pub mod balance;
pub mod config;
pub mod detect;
pub mod error;
pub mod forecast;
pub mod import;
pub mod insights;
pub mod models;

pub use balance::{current_balance, split_at_reference};
pub use config::EngineConfig;
pub use detect::{normalize_description, DetectionConfig, PatternDetector};
pub use error::{Error, Result};
pub use forecast::{project_date, running_balance, ForecastConfig, ForecastGenerator};
pub use insights::{analyze_outlook, ForecastOutlook, OutlookConfig, Severity};
pub use models::{
    BalancePoint, Forecast, ForecastItem, ForecastStatus, RecurringPattern, Transaction,
    TransactionType,
};
