//! Decimal rounding for presentation-grade forecast values

/// Round `value` to `decimals` places, half away from zero.
///
/// Non-finite inputs are returned unchanged.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_requested_places() {
        assert_eq!(round_to(3.14159, 2), 3.14);
        assert_eq!(round_to(3.14159, 3), 3.142);
        assert_eq!(round_to(-2.5, 0), -3.0);
        assert_eq!(round_to(7.0, 2), 7.0);
    }

    #[test]
    fn passes_non_finite_through() {
        assert!(round_to(f64::NAN, 2).is_nan());
        assert_eq!(round_to(f64::INFINITY, 2), f64::INFINITY);
    }
}
