use crate::round::round;
use crate::Config;

use log::debug;

/// Snap a value down to a multiple of `unit`. The remainder truncates toward
/// zero, so negative values move up instead of down.
fn snap_down(value: f64, unit: f64) -> f64 {
    round(value - value % unit, unit)
}

/// Snap a value up past the next multiple of `unit`.
fn snap_up(value: f64, unit: f64) -> f64 {
    round(value + unit - value % unit, unit)
}

/// Calculates the padded and unit aligned beginning of the range.
pub(crate) fn begin(min: f64, max: f64, unit: f64, config: &Config) -> f64 {
    if min >= 0.0 && max >= 0.0 {
        let pin_to_zero = max - min > config.zero_threshold_scale * max;
        let initial = min - (max - min) / config.cushion_scale;
        if pin_to_zero {
            0.0
        } else {
            snap_down(initial, unit)
        }
    } else {
        // the range is either entirely negative or straddles zero, neither of
        // which is pinned
        let initial = min + (min - max) / config.cushion_scale;
        snap_down(initial, unit)
    }
}

/// Calculates the padded and unit aligned end of the range.
pub(crate) fn end(min: f64, max: f64, unit: f64, config: &Config) -> f64 {
    if min < 0.0 && max < 0.0 {
        let pin_to_zero = max - min > config.zero_threshold_scale * min;
        let initial = max - (min - max) / config.cushion_scale;
        if pin_to_zero {
            0.0
        } else {
            snap_up(initial, unit)
        }
    } else {
        let initial = max + (max - min) / config.cushion_scale;
        snap_up(initial, unit)
    }
}

/// Returns the snapped `(begin, end)` pair, stepped out by one unit wherever
/// snapping left `min` or `max` uncovered.
pub(crate) fn snap(min: f64, max: f64, unit: f64, config: &Config) -> (f64, f64) {
    let mut begin = begin(min, max, unit, config);
    let mut end = end(min, max, unit, config);

    if begin > min {
        debug!("begin: {begin} is above min: {min}, lowering by unit: {unit}");
        begin = round(begin - unit, unit);
    }

    if end < max || end <= begin {
        debug!("end: {end} does not cover max: {max}, raising by unit: {unit}");
        end = round(end + unit, unit);
    }

    (begin, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapped(min: f64, max: f64, unit: f64) -> (f64, f64) {
        snap(min, max, unit, &Config::default())
    }

    #[test]
    fn positive() {
        // 33 > 5/6 * 33 so the begin is pinned
        assert_eq!(snapped(0.0, 33.0, 5.0), (0.0, 35.0));
        // 10 < 5/6 * 60, padded to 49.5 and snapped down
        assert_eq!(snapped(50.0, 60.0, 2.0), (48.0, 62.0));
    }

    #[test]
    fn straddles_zero() {
        assert_eq!(snapped(-20.0, 33.0, 10.0), (-20.0, 40.0));
    }

    #[test]
    fn negative() {
        // any negative range passes the zero threshold on the max side
        assert_eq!(snapped(-20.0, -5.0, 2.0), (-20.0, 0.0));
    }

    #[test]
    fn truncation() {
        assert_eq!(snap_down(-20.75, 2.0), -20.0);
        assert_eq!(snap_down(20.75, 2.0), 20.0);
        assert_eq!(snap_up(-4.25, 2.0), -2.0);
        assert_eq!(snap_up(4.25, 2.0), 6.0);
        assert_eq!(snap_up(4.0, 2.0), 6.0);
    }

    #[test]
    fn coverage() {
        // -23.7 truncates up to -20, above the data
        assert_eq!(begin(-21.0, 33.0, 10.0, &Config::default()), -20.0);
        assert_eq!(snapped(-21.0, 33.0, 10.0), (-30.0, 40.0));
    }

    #[test]
    fn point() {
        assert_eq!(snapped(0.0, 0.0, 0.02), (0.0, 0.02));
        let (begin, end) = snapped(5.0, 5.0, 0.02);
        assert!(begin <= 5.0);
        assert!(end >= 5.0);
        assert!(begin < end);
    }
}
