//! Moving average calculations
//!
//! - Simple Moving Average (SMA), incremental
//! - Trailing mean over the last `window` values of a slice

use crate::{MathError, Result};
use std::collections::VecDeque;

/// Simple Moving Average (SMA) implementation
#[derive(Debug, Clone)]
pub struct SimpleMovingAverage {
    period: usize,
    values: VecDeque<f64>,
    sum: f64,
}

impl SimpleMovingAverage {
    /// Create a new Simple Moving Average with the specified period
    pub fn new(period: usize) -> Result<Self> {
        if period == 0 {
            return Err(MathError::InvalidInput(
                "Period must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            period,
            values: VecDeque::with_capacity(period),
            sum: 0.0,
        })
    }

    /// Push a new value, evicting the oldest one once the window is full
    pub fn update(&mut self, value: f64) {
        self.values.push_back(value);
        self.sum += value;

        if self.values.len() > self.period {
            if let Some(old_value) = self.values.pop_front() {
                self.sum -= old_value;
            }
        }
    }

    /// Get the current SMA value
    pub fn value(&self) -> Result<f64> {
        if self.values.len() < self.period {
            return Err(MathError::InsufficientData(format!(
                "Need {} values for the moving average, have {}",
                self.period,
                self.values.len()
            )));
        }

        Ok(self.sum / self.period as f64)
    }

    /// Get the current period
    pub fn period(&self) -> usize {
        self.period
    }

    /// Reset the SMA, clearing all values
    pub fn reset(&mut self) {
        self.values.clear();
        self.sum = 0.0;
    }
}

/// Mean of the last `window` entries of `values`.
pub fn trailing_mean(values: &[f64], window: usize) -> Result<f64> {
    let mut sma = SimpleMovingAverage::new(window)?;
    if values.len() < window {
        return Err(MathError::InsufficientData(format!(
            "Need {} values for the moving average, have {}",
            window,
            values.len()
        )));
    }

    for &value in &values[values.len() - window..] {
        sma.update(value);
    }
    sma.value()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sma_rolls_over_period() {
        let mut sma = SimpleMovingAverage::new(3).unwrap();
        sma.update(1.0);
        sma.update(2.0);
        assert!(sma.value().is_err());

        sma.update(3.0);
        assert_eq!(sma.value().unwrap(), 2.0);

        sma.update(6.0);
        assert_eq!(sma.value().unwrap(), 11.0 / 3.0);

        sma.reset();
        assert!(sma.value().is_err());
        assert_eq!(sma.period(), 3);
    }

    #[test]
    fn zero_period_is_rejected() {
        assert!(matches!(
            SimpleMovingAverage::new(0),
            Err(MathError::InvalidInput(_))
        ));
        assert!(matches!(
            trailing_mean(&[1.0], 0),
            Err(MathError::InvalidInput(_))
        ));
    }

    #[test]
    fn trailing_mean_uses_tail() {
        let values = [100.0, 1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(trailing_mean(&values, 5).unwrap(), 3.0);
        assert_eq!(trailing_mean(&values, 2).unwrap(), 4.5);
    }

    #[test]
    fn trailing_mean_needs_full_window() {
        assert!(matches!(
            trailing_mean(&[1.0, 2.0], 3),
            Err(MathError::InsufficientData(_))
        ));
    }
}
