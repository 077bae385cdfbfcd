//! Numeric helpers shared by the pulse and benchmark crates
//!
//! Gantree: L0_Foundation → Numeric
//!
//! Decimal rounding uses round-half-to-even, so `round_to(0.5, 0) == 0.0`
//! and `round_to(1.5, 0) == 2.0`.

/// Round to a fixed number of decimal places (half-to-even)
#[inline]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}

/// Render a float in shortest round-trip form
///
/// Integral values keep a trailing `.0`, and magnitudes outside
/// `[1e-4, 1e16)` switch to an exponent with at least two digits
/// (`1e-05`, `2.5e+16`).
pub fn format_float(value: f64) -> String {
    let repr = format!("{:?}", value);
    match repr.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => repr,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_round_to_decimals() {
        assert_relative_eq!(round_to(PI / 2.0, 6), 1.570796);
        assert_relative_eq!(round_to(-PI, 6), -3.141593);
        assert_relative_eq!(round_to(1.25e-7, 9), 1.25e-7);
    }

    #[test]
    fn test_round_half_even() {
        assert_eq!(round_to(0.5, 0), 0.0);
        assert_eq!(round_to(1.5, 0), 2.0);
        assert_eq!(round_to(2.5, 0), 2.0);
        assert_eq!(round_to(250.5, 0), 250.0);
    }

    #[test]
    fn test_format_float() {
        assert_eq!(format_float(0.0), "0.0");
        assert_eq!(format_float(3.0), "3.0");
        assert_eq!(format_float(-0.5), "-0.5");
        assert_eq!(format_float(1.570796), "1.570796");
    }

    #[test]
    fn test_format_float_exponent() {
        assert_eq!(format_float(1e-5), "1e-05");
        assert_eq!(format_float(-2.5e-6), "-2.5e-06");
        assert_eq!(format_float(1e16), "1e+16");
    }
}
