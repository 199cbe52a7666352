//! Algorithm dispatch
//!
//! The dashboard names algorithms with string identifiers. [`Algorithm`] is the
//! closed set of strategies those identifiers map to, and [`PredictionEngine`]
//! runs the classifier followed by the chosen strategy.

use crate::classifier::select_numeric_variables;
use crate::config::EngineConfig;
use crate::data::DataPoint;
use crate::error::{ForecastError, Result};
use crate::models::{
    AlgorithmResult, ForecastStrategy, LinearRegressionModel, MovingAverageModel,
    PersistenceModel,
};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

/// Forecasting strategies known to the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    LinearRegression,
    MovingAverage,
    Persistence,
}

impl Algorithm {
    /// Every algorithm, in dispatch-table order
    pub const ALL: [Algorithm; 3] = [
        Algorithm::LinearRegression,
        Algorithm::MovingAverage,
        Algorithm::Persistence,
    ];

    /// Look up an identifier. Matching is exact and case-sensitive.
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "prediccion1" | "regresion-lineal" => Some(Algorithm::LinearRegression),
            "prediccion2" | "media-movil" => Some(Algorithm::MovingAverage),
            "persistencia" => Some(Algorithm::Persistence),
            _ => None,
        }
    }

    /// Identifiers accepted for this algorithm
    pub fn ids(&self) -> &'static [&'static str] {
        match self {
            Algorithm::LinearRegression => &["prediccion1", "regresion-lineal"],
            Algorithm::MovingAverage => &["prediccion2", "media-movil"],
            Algorithm::Persistence => &["persistencia"],
        }
    }

    /// Name shown in results
    pub fn display_name(&self) -> &'static str {
        match self {
            Algorithm::LinearRegression => LinearRegressionModel::NAME,
            Algorithm::MovingAverage => MovingAverageModel::NAME,
            Algorithm::Persistence => PersistenceModel::NAME,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Algorithm {
    type Err = ForecastError;

    fn from_str(s: &str) -> Result<Self> {
        Algorithm::from_id(s).ok_or_else(|| ForecastError::UnknownAlgorithm(s.to_string()))
    }
}

/// Classifier plus strategy dispatch
#[derive(Debug, Clone, Default)]
pub struct PredictionEngine {
    config: EngineConfig,
}

impl PredictionEngine {
    /// Create an engine with a validated configuration
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Forecast `requested` variables with the algorithm named `algorithm_id`.
    ///
    /// Never fails: an unknown identifier, no numeric variables, or variables
    /// without enough data all yield fewer (possibly zero) results.
    pub fn run<S: AsRef<str>>(
        &self,
        algorithm_id: &str,
        data: &[DataPoint],
        requested: &[S],
    ) -> Vec<AlgorithmResult> {
        match Algorithm::from_id(algorithm_id) {
            Some(algorithm) => self.run_algorithm(algorithm, data, requested),
            None => {
                warn!(algorithm_id, "unknown algorithm, skipping");
                Vec::new()
            }
        }
    }

    /// Typed variant of [`PredictionEngine::run`]
    pub fn run_algorithm<S: AsRef<str>>(
        &self,
        algorithm: Algorithm,
        data: &[DataPoint],
        requested: &[S],
    ) -> Vec<AlgorithmResult> {
        let numeric = select_numeric_variables(data, requested);
        if numeric.is_empty() {
            debug!(%algorithm, records = data.len(), "no numeric variables to forecast");
            return Vec::new();
        }

        let results = match algorithm {
            Algorithm::LinearRegression => {
                LinearRegressionModel::new(&self.config).run(data, &numeric)
            }
            Algorithm::MovingAverage => MovingAverageModel::new(&self.config).run(data, &numeric),
            Algorithm::Persistence => PersistenceModel::new().run(data, &numeric),
        };

        debug!(
            %algorithm,
            requested = requested.len(),
            numeric = numeric.len(),
            produced = results.len(),
            "forecast complete"
        );
        results
    }

    /// Run every algorithm and concatenate the results in table order
    pub fn run_all<S: AsRef<str>>(
        &self,
        data: &[DataPoint],
        requested: &[S],
    ) -> Vec<AlgorithmResult> {
        Algorithm::ALL
            .iter()
            .flat_map(|&algorithm| self.run_algorithm(algorithm, data, requested))
            .collect()
    }
}

/// [`PredictionEngine::run`] with the default configuration
pub fn run<S: AsRef<str>>(
    algorithm_id: &str,
    data: &[DataPoint],
    requested: &[S],
) -> Vec<AlgorithmResult> {
    PredictionEngine::default().run(algorithm_id, data, requested)
}
