//! Decimal rounding used by every published score.

/// Rounds `value` to `decimals` places, halves toward positive infinity.
///
/// `round_half_up(-2.25, 1) == -2.2`, `round_half_up(2.25, 1) == 2.3`.
pub fn round_half_up(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    let rounded = (value * factor + 0.5).floor() / factor;
    // Normalise -0.0 so it serializes as 0.
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// One decimal place, used for culture profiles and gaps.
pub fn round1(value: f64) -> f64 {
    round_half_up(value, 1)
}

/// Two decimal places, used for Likert means and standard deviations.
pub fn round2(value: f64) -> f64 {
    round_half_up(value, 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_positive_halves_up() {
        assert_eq!(round1(2.25), 2.3);
        assert_eq!(round1(15.04), 15.0);
    }

    #[test]
    fn rounds_negative_halves_toward_positive_infinity() {
        assert_eq!(round1(-2.25), -2.2);
        assert_eq!(round1(-0.06), -0.1);
    }

    #[test]
    fn never_returns_negative_zero() {
        let r = round1(-0.04);
        assert_eq!(r, 0.0);
        assert!(r.is_sign_positive());
    }

    #[test]
    fn two_decimal_rounding() {
        assert_eq!(round2(3.14159), 3.14);
        assert_eq!(round2(0.7071), 0.71);
        assert_eq!(round2(4.0), 4.0);
    }
}
