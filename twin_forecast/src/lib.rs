//! # Twin Forecast
//!
//! Short-horizon prediction engine for digital twin monitoring dashboards.
//!
//! Given an ordered batch of loosely-typed records (oldest first) and a list
//! of variable names, the engine keeps the variables whose first sample is
//! numeric and forecasts five steps ahead with one of:
//!
//! - Linear regression against record position
//! - Moving average of the most recent samples
//! - Persistence of the current value
//!
//! ## Quick Start
//!
//! ```rust
//! use twin_forecast::{DataPoint, PredictionEngine};
//!
//! let data = vec![
//!     DataPoint::new("10:00").with_value("temp", "20.0"),
//!     DataPoint::new("10:01").with_value("temp", 21.0),
//!     DataPoint::new("10:02").with_value("temp", "22.0"),
//! ];
//!
//! let engine = PredictionEngine::default();
//! let results = engine.run("regresion-lineal", &data, &["temp"]);
//!
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].values(), vec![23.0, 24.0, 25.0, 26.0, 27.0]);
//! ```
//!
//! Unknown algorithm identifiers and unusable variables never produce errors;
//! they produce fewer results.

pub mod classifier;
pub mod config;
pub mod data;
pub mod engine;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use crate::classifier::select_numeric_variables;
pub use crate::config::EngineConfig;
pub use crate::data::{DataLoader, DataPoint, ParseFailurePolicy};
pub use crate::engine::{run, Algorithm, PredictionEngine};
pub use crate::error::ForecastError;
pub use crate::models::{
    AlgorithmResult, Diagnostics, ForecastStrategy, PredictionPoint, FORECAST_HORIZON,
};
pub use series_math::Trend;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
