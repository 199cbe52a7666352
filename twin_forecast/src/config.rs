//! Engine configuration
//!
//! Defaults reproduce the dashboard's fixed parameters. The forecast horizon is
//! not configurable; see [`crate::models::FORECAST_HORIZON`].

use crate::error::{ForecastError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Tunable parameters shared by every strategy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    /// Upper bound for the moving-average window
    pub max_window: usize,
    /// Slopes with magnitude at or below this are reported as stable
    pub trend_threshold: f64,
    /// Minimum valid samples before a regression is attempted
    pub min_regression_samples: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_window: 5,
            trend_threshold: 0.01,
            min_regression_samples: 2,
        }
    }
}

impl EngineConfig {
    /// Check parameter ranges
    pub fn validate(&self) -> Result<()> {
        if self.max_window == 0 {
            return Err(ForecastError::InvalidParameter(
                "maxWindow must be greater than zero".to_string(),
            ));
        }
        if !self.trend_threshold.is_finite() || self.trend_threshold < 0.0 {
            return Err(ForecastError::InvalidParameter(format!(
                "trendThreshold must be a non-negative number, got {}",
                self.trend_threshold
            )));
        }
        if self.min_regression_samples < 2 {
            return Err(ForecastError::InvalidParameter(format!(
                "minRegressionSamples must be at least 2, got {}",
                self.min_regression_samples
            )));
        }
        Ok(())
    }

    /// Parse and validate a JSON document. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON configuration file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}
