//! Ordinary least squares over `(x, y)` pairs
//!
//! The fit uses the closed-form sums
//! `m = (n·Σxy − Σx·Σy) / (n·Σxx − (Σx)²)` and `b = (Σy − m·Σx) / n`,
//! so results match a straightforward hand calculation bit for bit.

use crate::{MathError, Result};
use serde::{Deserialize, Serialize};

/// Fitted line `y = slope * x + intercept`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    slope: f64,
    intercept: f64,
    samples: usize,
}

impl LinearFit {
    /// Fit a line through the given pairs.
    ///
    /// Fails with [`MathError::InsufficientData`] for fewer than two pairs and
    /// with [`MathError::DegenerateFit`] when every `x` is identical.
    pub fn from_pairs(pairs: &[(f64, f64)]) -> Result<Self> {
        if pairs.len() < 2 {
            return Err(MathError::InsufficientData(format!(
                "Linear regression needs at least 2 points, got {}",
                pairs.len()
            )));
        }

        let n = pairs.len() as f64;
        let (mut sum_x, mut sum_y, mut sum_xy, mut sum_xx) = (0.0, 0.0, 0.0, 0.0);
        for &(x, y) in pairs {
            sum_x += x;
            sum_y += y;
            sum_xy += x * y;
            sum_xx += x * x;
        }

        let denominator = n * sum_xx - sum_x * sum_x;
        if denominator == 0.0 {
            return Err(MathError::DegenerateFit(
                "All x values are identical".to_string(),
            ));
        }

        let slope = (n * sum_xy - sum_x * sum_y) / denominator;
        let intercept = (sum_y - slope * sum_x) / n;

        Ok(Self {
            slope,
            intercept,
            samples: pairs.len(),
        })
    }

    /// Get the slope (trend per x unit)
    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// Get the intercept
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Number of pairs the line was fitted on
    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Evaluate the line at `x`
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Qualitative direction of a fitted slope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    #[serde(rename = "ascendente")]
    Ascending,
    #[serde(rename = "descendente")]
    Descending,
    #[serde(rename = "estable")]
    Stable,
}

impl Trend {
    /// Slopes within `[-threshold, threshold]` are stable.
    pub fn classify(slope: f64, threshold: f64) -> Self {
        if slope > threshold {
            Trend::Ascending
        } else if slope < -threshold {
            Trend::Descending
        } else {
            Trend::Stable
        }
    }

    /// Dashboard label
    pub fn label(&self) -> &'static str {
        match self {
            Trend::Ascending => "ascendente",
            Trend::Descending => "descendente",
            Trend::Stable => "estable",
        }
    }
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fits_exact_line() {
        let pairs = [(0.0, 1.0), (1.0, 3.0), (2.0, 5.0), (3.0, 7.0)];
        let fit = LinearFit::from_pairs(&pairs).unwrap();
        assert_eq!(fit.slope(), 2.0);
        assert_eq!(fit.intercept(), 1.0);
        assert_eq!(fit.samples(), 4);
        assert_eq!(fit.predict(4.0), 9.0);
    }

    #[test]
    fn rejects_single_point() {
        assert!(matches!(
            LinearFit::from_pairs(&[(0.0, 1.0)]),
            Err(MathError::InsufficientData(_))
        ));
    }

    #[test]
    fn rejects_identical_x() {
        let pairs = [(2.0, 1.0), (2.0, 5.0), (2.0, 9.0)];
        assert!(matches!(
            LinearFit::from_pairs(&pairs),
            Err(MathError::DegenerateFit(_))
        ));
    }

    #[test]
    fn classifies_trend_around_threshold() {
        assert_eq!(Trend::classify(0.5, 0.01), Trend::Ascending);
        assert_eq!(Trend::classify(-0.5, 0.01), Trend::Descending);
        assert_eq!(Trend::classify(0.01, 0.01), Trend::Stable);
        assert_eq!(Trend::classify(-0.01, 0.01), Trend::Stable);
        assert_eq!(Trend::Descending.to_string(), "descendente");
    }
}
