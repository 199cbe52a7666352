//! Forecasting strategies and their shared result types

use crate::data::DataPoint;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use series_math::Trend;
use tracing::debug;

pub mod linear_regression;
pub mod moving_average;
pub mod persistence;

pub use linear_regression::LinearRegressionModel;
pub use moving_average::MovingAverageModel;
pub use persistence::PersistenceModel;

/// Number of steps every strategy forecasts
pub const FORECAST_HORIZON: usize = 5;

/// One forecast step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionPoint {
    /// 1-based step relative to the most recent sample
    pub step: usize,
    /// Display label, `t+{step}`
    pub label: String,
    /// Forecast value
    pub value: f64,
}

/// Strategy-specific figures shown next to a forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Diagnostics {
    LinearRegression {
        /// `y = {slope}x + {intercept}`
        equation: String,
        /// Slope rounded to 3 decimals
        slope: f64,
        /// Intercept rounded to 2 decimals
        intercept: f64,
        sample_count: usize,
        /// Last valid sample value
        last_value: f64,
        trend: Trend,
    },
    MovingAverage {
        window_size: usize,
        /// Average rounded to 2 decimals
        average: f64,
        last_value: f64,
        sample_count: usize,
    },
    Persistence {
        current_value: f64,
        assumption: String,
        /// Total input records; display only
        record_count: usize,
    },
}

/// Forecast for one (variable, strategy) pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlgorithmResult {
    /// Variable name
    pub variable: String,
    /// Strategy display name
    pub algorithm: String,
    /// Exactly [`FORECAST_HORIZON`] points, steps 1 through 5
    pub predictions: Vec<PredictionPoint>,
    pub diagnostics: Diagnostics,
}

impl AlgorithmResult {
    /// Forecast values in step order
    pub fn values(&self) -> Vec<f64> {
        self.predictions.iter().map(|p| p.value).collect()
    }

    /// Serialize to a JSON string
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Common interface for forecasting strategies
pub trait ForecastStrategy {
    /// Display name of the strategy
    fn name(&self) -> &str;

    /// Forecast a single variable. An error means the variable is skipped.
    fn forecast_variable(&self, data: &[DataPoint], variable: &str) -> Result<AlgorithmResult>;

    /// Forecast every variable in order, omitting the ones that fail
    fn run<S: AsRef<str>>(&self, data: &[DataPoint], variables: &[S]) -> Vec<AlgorithmResult>
    where
        Self: Sized,
    {
        variables
            .iter()
            .filter_map(|variable| {
                let variable = variable.as_ref();
                match self.forecast_variable(data, variable) {
                    Ok(result) => Some(result),
                    Err(err) => {
                        debug!(algorithm = self.name(), variable, %err, "variable skipped");
                        None
                    }
                }
            })
            .collect()
    }
}

/// Build the [`FORECAST_HORIZON`]-step forecast from a per-step generator.
pub fn forecast_steps<F>(mut value_at: F) -> Vec<PredictionPoint>
where
    F: FnMut(usize) -> f64,
{
    (1..=FORECAST_HORIZON)
        .map(|step| PredictionPoint {
            step,
            label: format!("t+{}", step),
            value: value_at(step),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forecast_steps_labels_each_step() {
        let points = forecast_steps(|step| step as f64 * 10.0);
        assert_eq!(points.len(), FORECAST_HORIZON);
        assert_eq!(points[0].step, 1);
        assert_eq!(points[0].label, "t+1");
        assert_eq!(points[4].label, "t+5");
        assert_eq!(points[4].value, 50.0);
    }
}
