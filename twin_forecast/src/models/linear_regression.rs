//! Least-squares trend forecasting
//!
//! Each variable is regressed against record position (0, 1, 2, ...) and the
//! fitted line is extrapolated [`FORECAST_HORIZON`](super::FORECAST_HORIZON)
//! steps past the last valid sample.

use crate::config::EngineConfig;
use crate::data::{DataPoint, ParseFailurePolicy};
use crate::error::{ForecastError, Result};
use crate::models::{forecast_steps, AlgorithmResult, Diagnostics, ForecastStrategy};
use series_math::{round_to, LinearFit, Trend};

/// Ordinary least squares over position-indexed samples
#[derive(Debug, Clone)]
pub struct LinearRegressionModel {
    min_samples: usize,
    trend_threshold: f64,
}

impl LinearRegressionModel {
    pub const NAME: &'static str = "Regresión Lineal";

    /// Unparseable samples are dropped, zeros are kept.
    pub const PARSE_POLICY: ParseFailurePolicy = ParseFailurePolicy::Drop;

    pub fn new(config: &EngineConfig) -> Self {
        Self {
            min_samples: config.min_regression_samples,
            trend_threshold: config.trend_threshold,
        }
    }

    /// Fit and forecast from explicit `(x, y)` samples.
    ///
    /// Predictions are taken at `x = samples.len() + step - 1`, whatever the
    /// sample x values are.
    pub fn forecast_from_samples(
        &self,
        variable: &str,
        samples: &[(f64, f64)],
    ) -> Result<AlgorithmResult> {
        if samples.len() < self.min_samples {
            return Err(ForecastError::InsufficientData(format!(
                "'{}' has {} valid samples, need {}",
                variable,
                samples.len(),
                self.min_samples
            )));
        }

        let fit = LinearFit::from_pairs(samples)?;
        let count = samples.len();
        let predictions =
            forecast_steps(|step| round_to(fit.predict((count + step - 1) as f64), 2));

        let slope = round_to(fit.slope(), 3);
        let intercept = round_to(fit.intercept(), 2);
        let last_value = samples.last().map(|&(_, y)| y).unwrap_or_default();

        Ok(AlgorithmResult {
            variable: variable.to_string(),
            algorithm: Self::NAME.to_string(),
            predictions,
            diagnostics: Diagnostics::LinearRegression {
                equation: format!("y = {:.3}x + {:.2}", slope, intercept),
                slope,
                intercept,
                sample_count: count,
                last_value,
                trend: Trend::classify(fit.slope(), self.trend_threshold),
            },
        })
    }
}

impl Default for LinearRegressionModel {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}

impl ForecastStrategy for LinearRegressionModel {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn forecast_variable(&self, data: &[DataPoint], variable: &str) -> Result<AlgorithmResult> {
        let samples: Vec<(f64, f64)> = data
            .iter()
            .enumerate()
            .filter_map(|(index, point)| {
                Self::PARSE_POLICY
                    .resolve(point.get(variable))
                    .map(|y| (index as f64, y))
            })
            .collect();

        self.forecast_from_samples(variable, &samples)
    }
}
