//! Forecast insights
//!
//! Turns a finished [`Forecast`](crate::models::Forecast) into something a
//! user can act on:
//!
//! - **Shortfall warning** - whether and when the projected balance goes
//!   negative
//! - **Large bills** - predicted expenses above a materiality threshold
//!
//! ## Usage
//!
//! ```rust,ignore
//! use runway_core::insights::{analyze_outlook, OutlookConfig};
//!
//! let outlook = analyze_outlook(&forecast, &OutlookConfig::default());
//! if outlook.at_risk {
//!     println!("Shortfall on {}", outlook.first_shortfall.unwrap().date);
//! }
//! ```

pub mod outlook;
pub mod types;

pub use outlook::{analyze_outlook, OutlookConfig};
pub use types::{ForecastOutlook, Severity};
