use crate::{Bucket, BuildError, Error, Layout};

/// Scale factor for the threshold used to pin the begin or end of the range
/// to zero. Ranges that span most of their distance from zero read better
/// when they start (or end) at zero.
pub const ZERO_THRESHOLD_SCALE: f64 = 5.0 / 6.0;

/// The range is padded on each side by `(max - min) / CUSHION_SCALE` so that
/// data points do not sit exactly on a bucket boundary.
pub const CUSHION_SCALE: f64 = 20.0;

/// Smallest unit allowed. Used whenever the selected unit rounds to zero.
pub const MIN_UNIT: f64 = 0.02;

/// Number of decimal places the selected unit is rounded to.
pub const UNIT_PRECISION: u8 = 2;

// past this `10^precision` no longer scales an f64 without losing digits
const MAX_UNIT_PRECISION: u8 = 15;

/// A builder that can be used to override the heuristic constants.
///
/// ```
/// use range_buckets::Builder;
///
/// let config = Builder::new().cushion_scale(10.0).build().unwrap();
/// let buckets = config.buckets(0.0, 33.0, 5).unwrap();
/// assert_eq!(buckets.len(), 4);
/// ```
///
/// With the `serde` feature enabled a `Config` deserializes through the
/// builder, so the same checks apply and omitted fields take their defaults.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Builder {
    zero_threshold_scale: f64,
    cushion_scale: f64,
    min_unit: f64,
    unit_precision: u8,
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}

impl Builder {
    pub fn new() -> Self {
        Self {
            zero_threshold_scale: ZERO_THRESHOLD_SCALE,
            cushion_scale: CUSHION_SCALE,
            min_unit: MIN_UNIT,
            unit_precision: UNIT_PRECISION,
        }
    }

    pub fn zero_threshold_scale(mut self, scale: f64) -> Self {
        self.zero_threshold_scale = scale;
        self
    }

    pub fn cushion_scale(mut self, scale: f64) -> Self {
        self.cushion_scale = scale;
        self
    }

    pub fn min_unit(mut self, unit: f64) -> Self {
        self.min_unit = unit;
        self
    }

    pub fn unit_precision(mut self, decimals: u8) -> Self {
        self.unit_precision = decimals;
        self
    }

    pub fn build(self) -> Result<Config, BuildError> {
        if !self.cushion_scale.is_finite() || self.cushion_scale <= 0.0 {
            return Err(BuildError::CushionScale);
        }

        if !self.zero_threshold_scale.is_finite() || self.zero_threshold_scale < 0.0 {
            return Err(BuildError::ZeroThresholdScale);
        }

        if !self.min_unit.is_finite() || self.min_unit <= 0.0 {
            return Err(BuildError::MinUnit);
        }

        if self.unit_precision > MAX_UNIT_PRECISION {
            return Err(BuildError::UnitPrecision);
        }

        Ok(Config {
            zero_threshold_scale: self.zero_threshold_scale,
            cushion_scale: self.cushion_scale,
            min_unit: self.min_unit,
            unit_precision: self.unit_precision,
        })
    }
}

impl TryFrom<Builder> for Config {
    type Error = BuildError;

    fn try_from(builder: Builder) -> Result<Self, Self::Error> {
        builder.build()
    }
}

/// The tunables of the bucketing heuristic. `Config::default()` matches the
/// spreadsheet axis behavior.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Builder"))]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Config {
    pub(crate) zero_threshold_scale: f64,
    pub(crate) cushion_scale: f64,
    pub(crate) min_unit: f64,
    pub(crate) unit_precision: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            zero_threshold_scale: ZERO_THRESHOLD_SCALE,
            cushion_scale: CUSHION_SCALE,
            min_unit: MIN_UNIT,
            unit_precision: UNIT_PRECISION,
        }
    }
}

impl Config {
    pub fn zero_threshold_scale(&self) -> f64 {
        self.zero_threshold_scale
    }

    pub fn cushion_scale(&self) -> f64 {
        self.cushion_scale
    }

    pub fn min_unit(&self) -> f64 {
        self.min_unit
    }

    pub fn unit_precision(&self) -> u8 {
        self.unit_precision
    }

    /// Split the range `min..=max` into at most `count` buckets.
    pub fn buckets(
        &self,
        min: f64,
        max: f64,
        count: usize,
    ) -> Result<Vec<Bucket>, Error> {
        self.layout(min, max, count).map(|layout| layout.buckets())
    }

    /// Compute the unit, snapped range and bucket size for `min..=max`
    /// without producing the buckets themselves.
    pub fn layout(&self, min: f64, max: f64, count: usize) -> Result<Layout, Error> {
        Layout::new(self, min, max, count)
    }
}
