//! Whole-number percentage convention.
//!
//! Every rate that crosses the public API is a whole-number percentage:
//! `5.0` means 5%. Formulas convert to a fraction through [`to_fraction`] and
//! back through [`from_fraction`], and nowhere else, so that a value is never
//! scaled by 100 twice.

/// Scale between whole-number percentages and fractions.
pub const SCALE: f64 = 100.0;

/// Converts a whole-number percentage to a fraction (`5.0` -> `0.05`).
#[inline]
#[must_use]
pub fn to_fraction(pct: f64) -> f64 {
    pct / SCALE
}

/// Converts a fraction to a whole-number percentage (`0.05` -> `5.0`).
#[inline]
#[must_use]
pub fn from_fraction(fraction: f64) -> f64 {
    fraction * SCALE
}

/// Growth factor for one period at the given percentage (`5.0` -> `1.05`).
#[inline]
#[must_use]
pub fn growth_factor(pct: f64) -> f64 {
    1.0 + to_fraction(pct)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_to_fraction() {
        assert_relative_eq!(to_fraction(5.0), 0.05);
        assert_relative_eq!(to_fraction(-2.5), -0.025);
        assert_eq!(to_fraction(0.0), 0.0);
    }

    #[test]
    fn test_from_fraction() {
        assert_relative_eq!(from_fraction(0.067961), 6.7961, epsilon = 1e-12);
    }

    #[test]
    fn test_growth_factor() {
        assert_relative_eq!(growth_factor(10.0), 1.1);
        assert_eq!(growth_factor(-100.0), 0.0);
    }
}
