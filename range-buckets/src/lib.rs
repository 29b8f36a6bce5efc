//! This crate splits a numeric range into a small number of evenly sized
//! buckets whose boundaries fall on round, human friendly values. It can be
//! used to pick axis ticks for a chart or to build range filters for data.
//!
//! The heuristic follows the way spreadsheet charts pick their axis limits
//! (Microsoft KB 214075): a major unit of `{0.2, 0.5, 1, 2}` times a power of
//! ten is chosen from the span of the data, the range is padded by a small
//! cushion and snapped to that unit (pinning to zero when the data nearly
//! starts there), and the snapped range is cut into buckets whose width is a
//! multiple of the unit.
//!
//! ```
//! use range_buckets::buckets;
//!
//! let buckets = buckets(0.0, 33.0, 5).unwrap();
//! let bounds: Vec<(f64, f64)> = buckets.iter().map(|b| (b.min(), b.max())).collect();
//! assert_eq!(bounds, vec![(0.0, 10.0), (10.0, 20.0), (20.0, 30.0), (30.0, 40.0)]);
//! ```
//!
//! The requested count is an upper bound. Rounding the bucket width up to the
//! unit can leave trailing buckets past the end of the range, and those are
//! dropped.

mod bucket;
mod config;
mod errors;
mod layout;
mod round;
mod snap;
mod unit;

pub use bucket::Bucket;
pub use config::{
    Builder, Config, CUSHION_SCALE, MIN_UNIT, UNIT_PRECISION, ZERO_THRESHOLD_SCALE,
};
pub use errors::{BuildError, Error};
pub use layout::Layout;

/// Split the range `min..=max` into at most `count` buckets using the default
/// `Config`.
///
/// The first bucket begins at or below `min`, the last ends at or above `max`,
/// and each bucket begins exactly where the previous one ended.
pub fn buckets(min: f64, max: f64, count: usize) -> Result<Vec<Bucket>, Error> {
    Config::default().buckets(min, max, count)
}
