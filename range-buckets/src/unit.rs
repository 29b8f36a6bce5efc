use crate::round::round_to;
use crate::Config;

/// Selects the major unit for the range `min..=max`. This is the step that
/// bucket boundaries are snapped to, always of the form `{0.2, 0.5, 1, 2}`
/// times a power of ten.
///
/// Zero-width ranges, and units that round away to nothing, fall back to the
/// configured minimum unit.
pub(crate) fn major_unit(min: f64, max: f64, config: &Config) -> f64 {
    let power = (max - min).log10();
    let magnitude = power.floor();

    // mantissa of the span in scientific notation, within 1.0..10.0
    let scale = 10_f64.powf(power - magnitude);

    let multiplier = if scale <= 2.5 {
        0.2
    } else if scale <= 5.0 {
        0.5
    } else if scale <= 7.5 {
        1.0
    } else {
        2.0
    };

    let unit = round_to(
        multiplier * 10_f64.powf(magnitude),
        config.unit_precision as i32,
    );

    if unit == 0.0 || !unit.is_finite() {
        config.min_unit
    } else {
        unit
    }
}
