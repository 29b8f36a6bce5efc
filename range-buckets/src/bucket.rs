use core::ops::Range;

/// A single bucket covering the half-open interval `[min, max)`.
///
/// The last bucket of a sequence is closed at its upper bound so that the
/// sequence covers the end of the snapped range.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Bucket {
    pub(crate) min: f64,
    pub(crate) max: f64,
}

impl Bucket {
    pub(crate) fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    pub fn range(&self) -> Range<f64> {
        self.min..self.max
    }

    /// Returns true if the value falls within `[min, max)`.
    pub fn contains(&self, value: f64) -> bool {
        self.range().contains(&value)
    }
}

impl From<Bucket> for Range<f64> {
    fn from(bucket: Bucket) -> Self {
        bucket.range()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_open() {
        let bucket = Bucket::new(10.0, 20.0);
        assert!(bucket.contains(10.0));
        assert!(bucket.contains(19.99));
        assert!(!bucket.contains(20.0));
        assert!(!bucket.contains(9.99));
        assert_eq!(bucket.width(), 10.0);
        assert_eq!(Range::from(bucket), 10.0..20.0);
    }
}
