/// Returns the number of digits after the decimal point in the shortest
/// decimal rendering of `unit`.
pub(crate) fn decimals(unit: f64) -> i32 {
    let formatted = format!("{unit}");
    formatted
        .split_once('.')
        .map(|(_, fraction)| fraction.len() as i32)
        .unwrap_or(0)
}

/// Rounds `num` to the same number of decimal places as `unit`.
///
/// Remainder arithmetic on fractional units leaves representation noise
/// behind (`34.65 % 5.0` is `4.649999999999999`), so every intermediate value
/// derived from the unit is passed back through here.
pub(crate) fn round(num: f64, unit: f64) -> f64 {
    round_to(num, decimals(unit))
}

/// Rounds `num` to `places` decimal places, ties away from zero.
pub(crate) fn round_to(num: f64, places: i32) -> f64 {
    let factor = 10_f64.powi(places);
    let scaled = num * factor;
    // values this large have no fractional digits left to round
    if !scaled.is_finite() {
        return num + 0.0;
    }
    // adding zero turns a negative zero into a positive one
    scaled.round() / factor + 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_decimals() {
        assert_eq!(decimals(5.0), 0);
        assert_eq!(decimals(200.0), 0);
        assert_eq!(decimals(0.5), 1);
        assert_eq!(decimals(0.02), 2);
        assert_eq!(decimals(0.05), 2);
    }

    #[test]
    fn follows_unit() {
        assert_eq!(round(34.65 + 5.0 - 34.65 % 5.0, 5.0), 35.0);
        assert_eq!(round(0.1 + 0.2, 0.1), 0.3);
        assert_eq!(round(1.005_000_1, 0.02), 1.01);
        assert_eq!(round(-20.75 + 0.75, 2.0), -20.0);
    }

    #[test]
    fn negative_zero() {
        let rounded = round(-0.001, 1.0);
        assert_eq!(rounded, 0.0);
        assert!(rounded.is_sign_positive());
        assert_eq!(format!("{rounded}"), "0");
    }

    #[test]
    fn overflow() {
        assert_eq!(round_to(f64::MAX, 2), f64::MAX);
        assert_eq!(round_to(-1e307, 2), -1e307);
    }

    #[test]
    fn ties_away_from_zero() {
        assert_eq!(round_to(2.5, 0), 3.0);
        assert_eq!(round_to(-2.5, 0), -3.0);
    }
}
