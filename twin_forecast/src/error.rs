//! Error types for the twin_forecast crate

use series_math::MathError;
use thiserror::Error;

/// Custom error types for the twin_forecast crate
///
/// The engine's `run` entry points never return these; they describe why a
/// single variable was skipped, or why loading input or configuration failed.
#[derive(Debug, Error)]
pub enum ForecastError {
    /// Error related to data validation or processing
    #[error("Data error: {0}")]
    DataError(String),

    /// Error from invalid parameters
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Not enough usable samples for a variable
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    /// Regression denominator was exactly zero
    #[error("Degenerate regression: {0}")]
    DegenerateRegression(String),

    /// Algorithm identifier outside the dispatch table
    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    /// Error from IO operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error from JSON (de)serialization
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Error from CSV parsing
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, ForecastError>;

impl From<MathError> for ForecastError {
    fn from(err: MathError) -> Self {
        match err {
            MathError::InsufficientData(msg) => ForecastError::InsufficientData(msg),
            MathError::DegenerateFit(msg) => ForecastError::DegenerateRegression(msg),
            MathError::InvalidInput(msg) => ForecastError::InvalidParameter(msg),
        }
    }
}
