use thiserror::Error;

/// Errors returned when computing buckets for a range.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("at least one bucket must be requested")]
    NoBuckets,
    #[error("range minimum is greater than the maximum")]
    InvertedRange,
    #[error("range bounds must be finite")]
    NonFinite,
    #[error("range is too large to split into buckets at the selected unit")]
    Precision,
}

/// Errors returned when building a `Config` with invalid parameters.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BuildError {
    #[error("cushion scale must be finite and greater than zero")]
    CushionScale,
    #[error("zero threshold scale must be finite and not negative")]
    ZeroThresholdScale,
    #[error("minimum unit must be finite and greater than zero")]
    MinUnit,
    #[error("unit precision is limited to 15 decimal places")]
    UnitPrecision,
}
