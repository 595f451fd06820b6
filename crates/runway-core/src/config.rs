//! Engine configuration
//!
//! ## Configuration Resolution
//!
//! Config is loaded with a three-step resolution:
//! 1. Explicit path (e.g. `--config`), if the file exists
//! 2. Override in data dir (~/.local/share/runway/config/runway.toml)
//! 3. Embedded defaults (compiled into binary)

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, warn};

use crate::detect::DetectionConfig;
use crate::error::{Error, Result};
use crate::forecast::{ForecastConfig, ForecastGenerator, MAX_HORIZON_MONTHS};
use crate::insights::OutlookConfig;

/// Embedded default config (compiled into binary)
const DEFAULT_CONFIG: &str = include_str!("../../../config/runway.toml");

/// Full engine configuration
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EngineConfig {
    pub detection: DetectionConfig,
    pub forecast: ForecastConfig,
    pub outlook: OutlookConfig,
}

impl EngineConfig {
    /// Load configuration, preferring `path` when it exists
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let candidate = match path {
            Some(p) if p.exists() => Some(p.to_path_buf()),
            Some(p) => {
                warn!("Config {} not found, using defaults", p.display());
                None
            }
            None => default_config_path().filter(|p| p.exists()),
        };

        match candidate {
            Some(p) => {
                debug!("Loading config from {}", p.display());
                let content = fs::read_to_string(&p).map_err(|e| {
                    Error::Config(format!("Failed to read {}: {}", p.display(), e))
                })?;
                Self::parse(&content)
            }
            None => Self::parse(DEFAULT_CONFIG),
        }
    }

    /// Parse TOML config content on top of the built-in defaults
    pub fn parse(content: &str) -> Result<Self> {
        let raw: RawConfig = toml::from_str(content)
            .map_err(|e| Error::Config(format!("Invalid config TOML: {}", e)))?;

        let mut config = Self::default();

        if let Some(detection) = raw.detection {
            if let Some(months) = detection.lookback_months {
                config.detection.lookback_months = months;
            }
            if let Some(min) = detection.min_occurrences {
                if min == 0 {
                    return Err(Error::Config(
                        "detection.min_occurrences must be at least 1".into(),
                    ));
                }
                if min < 2 {
                    warn!("detection.min_occurrences = 1 projects one-off purchases");
                }
                config.detection.min_occurrences = min;
            }
        }

        if let Some(forecast) = raw.forecast {
            if let Some(months) = forecast.horizon_months {
                config.forecast.horizon_months = validate_horizon(months)?;
            }
        }

        if let Some(outlook) = raw.outlook {
            if let Some(threshold) = outlook.materiality_threshold {
                config.outlook.materiality_threshold = validate_threshold(threshold)?;
            }
        }

        Ok(config)
    }

    /// Forecast generator wired with this detection and forecast config
    pub fn generator(&self) -> ForecastGenerator {
        ForecastGenerator::with_config(self.detection.clone(), self.forecast.clone())
    }
}

/// Check a forecast horizon from config or the command line
pub fn validate_horizon(months: u32) -> Result<u32> {
    if months > MAX_HORIZON_MONTHS {
        return Err(Error::Config(format!(
            "forecast.horizon_months must be at most {}, got {}",
            MAX_HORIZON_MONTHS, months
        )));
    }
    Ok(months)
}

/// Check a large-bill threshold from config or the command line
pub fn validate_threshold(threshold: f64) -> Result<f64> {
    if !threshold.is_finite() || threshold < 0.0 {
        return Err(Error::Config(format!(
            "outlook.materiality_threshold must be a non-negative number, got {}",
            threshold
        )));
    }
    Ok(threshold)
}

/// Default config override path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("runway").join("config").join("runway.toml"))
}

/// Raw config structure for TOML parsing
#[derive(Debug, Deserialize)]
struct RawConfig {
    detection: Option<RawDetection>,
    forecast: Option<RawForecast>,
    outlook: Option<RawOutlook>,
}

#[derive(Debug, Deserialize)]
struct RawDetection {
    lookback_months: Option<u32>,
    min_occurrences: Option<usize>,
}

#[derive(Debug, Deserialize)]
struct RawForecast {
    horizon_months: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct RawOutlook {
    materiality_threshold: Option<f64>,
}
