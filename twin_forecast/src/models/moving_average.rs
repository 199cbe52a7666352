//! Flat forecast from the mean of the most recent samples

use crate::config::EngineConfig;
use crate::data::{DataPoint, ParseFailurePolicy};
use crate::error::{ForecastError, Result};
use crate::models::{forecast_steps, AlgorithmResult, Diagnostics, ForecastStrategy};
use series_math::{round_to, trailing_mean};

/// Simple moving average over the last `min(max_window, records)` values
#[derive(Debug, Clone)]
pub struct MovingAverageModel {
    max_window: usize,
}

impl MovingAverageModel {
    pub const NAME: &'static str = "Media Móvil";

    /// Unparseable values count as zero; non-finite values are then dropped.
    pub const PARSE_POLICY: ParseFailurePolicy = ParseFailurePolicy::CoerceZero;

    pub fn new(config: &EngineConfig) -> Self {
        Self {
            max_window: config.max_window,
        }
    }

    /// Window used for a batch of `records` records
    pub fn window_size(&self, records: usize) -> usize {
        self.max_window.min(records)
    }
}

impl Default for MovingAverageModel {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}

impl ForecastStrategy for MovingAverageModel {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn forecast_variable(&self, data: &[DataPoint], variable: &str) -> Result<AlgorithmResult> {
        let values: Vec<f64> = data
            .iter()
            .filter_map(|point| Self::PARSE_POLICY.resolve(point.get(variable)))
            .filter(|v| v.is_finite())
            .collect();

        let window_size = self.window_size(data.len());
        if window_size == 0 {
            return Err(ForecastError::InsufficientData(
                "no records to average".to_string(),
            ));
        }
        if values.len() < window_size {
            return Err(ForecastError::InsufficientData(format!(
                "'{}' has {} valid values, window needs {}",
                variable,
                values.len(),
                window_size
            )));
        }

        let average = round_to(trailing_mean(&values, window_size)?, 2);
        let last_value = values.last().copied().unwrap_or_default();

        Ok(AlgorithmResult {
            variable: variable.to_string(),
            algorithm: Self::NAME.to_string(),
            predictions: forecast_steps(|_| average),
            diagnostics: Diagnostics::MovingAverage {
                window_size,
                average,
                last_value,
                sample_count: values.len(),
            },
        })
    }
}
