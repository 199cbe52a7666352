//! # Series Math
//!
//! Numeric primitives for short-horizon forecasting over ordered samples.
//! This crate knows nothing about records or variable names; it works on
//! plain `f64` slices and `(x, y)` pairs.

use thiserror::Error;

// Primitive modules
pub mod moving_averages;
pub mod regression;
pub mod rounding;

pub use moving_averages::{trailing_mean, SimpleMovingAverage};
pub use regression::{LinearFit, Trend};
pub use rounding::round_to;

/// Errors that can occur in series calculations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    #[error("Insufficient data for calculation: {0}")]
    InsufficientData(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Degenerate fit: {0}")]
    DegenerateFit(String),
}

/// Result type for series math operations
pub type Result<T> = std::result::Result<T, MathError>;
