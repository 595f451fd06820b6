//! Core types for forecast insights

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{BalancePoint, ForecastItem};

/// Severity level of an outlook
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Informational - no action needed
    Info,
    /// A large bill is coming
    Attention,
    /// The balance goes negative
    Alert,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Attention => "attention",
            Severity::Alert => "alert",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Summary of a forecast for alerting and charting layers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastOutlook {
    /// Lowest projected balance (earliest one on ties)
    pub lowest_point: Option<BalancePoint>,
    /// First point where the balance drops below zero
    pub first_shortfall: Option<BalancePoint>,
    /// True when any projected balance is negative
    pub at_risk: bool,
    /// Predicted items at or above the materiality threshold, in timeline order
    pub large_bills: Vec<ForecastItem>,
    /// Sum of all predicted amounts
    pub total_predicted: f64,
    pub severity: Severity,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_names_and_order() {
        for s in [Severity::Info, Severity::Attention, Severity::Alert] {
            assert_eq!(
                serde_json::to_string(&s).unwrap(),
                format!("\"{}\"", s.as_str())
            );
            assert_eq!(s.to_string(), s.as_str());
        }
        assert!(Severity::Alert > Severity::Attention);
        assert!(Severity::Attention > Severity::Info);
    }
}
