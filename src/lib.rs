//! # Twin Workspace
//!
//! Facade over the workspace crates: [`twin_forecast`] (the prediction engine)
//! and [`series_math`] (numeric primitives).
//!
//! ## Example
//!
//! ```
//! use twin_workspace::{DataPoint, PredictionEngine};
//!
//! let data = vec![DataPoint::new("t0").with_value("flow", "7")];
//! let results = PredictionEngine::default().run("persistencia", &data, &["flow"]);
//!
//! assert_eq!(results[0].values(), vec![7.0; 5]);
//! ```

pub use series_math;
pub use twin_forecast;
pub use twin_forecast::{
    Algorithm, AlgorithmResult, DataLoader, DataPoint, Diagnostics, EngineConfig, ForecastError,
    PredictionEngine, PredictionPoint, Trend,
};
