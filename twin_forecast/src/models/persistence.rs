//! Naive persistence (random walk) forecasting

use crate::data::{DataPoint, ParseFailurePolicy};
use crate::error::{ForecastError, Result};
use crate::models::{forecast_steps, AlgorithmResult, Diagnostics, ForecastStrategy};
use tracing::debug;

/// Repeats the current value for every step.
///
/// The first record of the batch is the current sample; history is ignored.
#[derive(Debug, Clone, Default)]
pub struct PersistenceModel;

impl PersistenceModel {
    pub const NAME: &'static str = "Persistencia";

    pub const ASSUMPTION: &'static str = "El valor futuro será igual al valor actual";

    pub const PARSE_POLICY: ParseFailurePolicy = ParseFailurePolicy::CoerceZero;

    pub fn new() -> Self {
        Self
    }
}

impl ForecastStrategy for PersistenceModel {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn forecast_variable(&self, data: &[DataPoint], variable: &str) -> Result<AlgorithmResult> {
        let current = data.first().ok_or_else(|| {
            ForecastError::InsufficientData("no records to take the current value from".to_string())
        })?;

        // Only reachable if the parse policy stops coercing NaN to zero.
        let current_value = Self::PARSE_POLICY
            .resolve(current.get(variable))
            .filter(|v| !v.is_nan())
            .ok_or_else(|| {
                ForecastError::DataError(format!("current value of '{}' is not a number", variable))
            })?;

        Ok(AlgorithmResult {
            variable: variable.to_string(),
            algorithm: Self::NAME.to_string(),
            predictions: forecast_steps(|_| current_value),
            diagnostics: Diagnostics::Persistence {
                current_value,
                assumption: Self::ASSUMPTION.to_string(),
                record_count: data.len(),
            },
        })
    }

    fn run<S: AsRef<str>>(&self, data: &[DataPoint], variables: &[S]) -> Vec<AlgorithmResult>
    where
        Self: Sized,
    {
        if data.is_empty() {
            return Vec::new();
        }

        variables
            .iter()
            .filter_map(|variable| {
                let variable = variable.as_ref();
                self.forecast_variable(data, variable)
                    .map_err(|err| debug!(algorithm = Self::NAME, variable, %err, "variable skipped"))
                    .ok()
            })
            .collect()
    }
}
