use crate::round::round;
use crate::snap::snap;
use crate::unit::major_unit;
use crate::{Bucket, Config, Error};

use log::trace;

/// The plan for splitting a range into buckets: the major unit, the snapped
/// range and the width shared by every bucket.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Layout {
    unit: f64,
    begin: f64,
    end: f64,
    size: f64,
    count: usize,
}

impl Layout {
    pub(crate) fn new(config: &Config, min: f64, max: f64, count: usize) -> Result<Self, Error> {
        if count == 0 {
            return Err(Error::NoBuckets);
        }

        if !min.is_finite() || !max.is_finite() {
            return Err(Error::NonFinite);
        }

        if min > max {
            return Err(Error::InvertedRange);
        }

        if !(max - min).is_finite() {
            return Err(Error::Precision);
        }

        let unit = major_unit(min, max, config);
        let (begin, end) = snap(min, max, unit, config);
        let size = size(begin, end, unit, count);

        trace!(
            "min: {min} max: {max} unit: {unit} begin: {begin} end: {end} size: {size}"
        );

        // boundaries must be finite, ordered and at least a few ulps apart at
        // the largest magnitude they reach, or adjacent buckets collapse
        let top = begin.abs().max(end.abs());
        if !begin.is_finite()
            || !end.is_finite()
            || !size.is_finite()
            || begin >= end
            || size <= top * f64::EPSILON * 4.0
        {
            return Err(Error::Precision);
        }

        Ok(Self {
            unit,
            begin,
            end,
            size,
            count,
        })
    }

    /// The step that all boundaries are aligned to.
    pub fn unit(&self) -> f64 {
        self.unit
    }

    /// The lower bound of the first bucket.
    pub fn begin(&self) -> f64 {
        self.begin
    }

    /// The snapped end of the range. The final bucket may extend beyond this.
    pub fn end(&self) -> f64 {
        self.end
    }

    /// The width of each bucket.
    pub fn size(&self) -> f64 {
        self.size
    }

    /// The requested number of buckets, an upper bound on `buckets().len()`.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Carve the snapped range into buckets. Assembly stops at the first
    /// candidate that would begin at or beyond the end of the range, so fewer
    /// than `count` buckets may be returned.
    pub fn buckets(&self) -> Vec<Bucket> {
        let last = self.count - 1;

        (0..self.count)
            .map(|i| {
                let min = round(self.begin + self.size * i as f64, self.unit);
                let max = if i == last {
                    self.end
                } else {
                    round(self.begin + self.size * (i + 1) as f64, self.unit)
                };
                Bucket::new(min, max)
            })
            .take_while(|bucket| bucket.min < self.end)
            .collect()
    }
}

/// Calculates the bucket size: the even split of the range, rounded up to the
/// next multiple of the unit.
fn size(begin: f64, end: f64, unit: f64, count: usize) -> f64 {
    let even = (end - begin) / count as f64;
    round(even + unit - even % unit, unit)
}
