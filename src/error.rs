use thiserror::Error;

/// Errors raised while configuring a builder or constructing an operation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Source identifier is empty after trimming
    #[error("source cannot be empty")]
    EmptySource,

    /// Source identifier contains characters outside `[A-Za-z0-9_-]` or
    /// does not start with an alphanumeric character
    #[error("invalid source {0:?}")]
    InvalidSource(String),

    /// Width or height of an operation is zero
    #[error("{dimension} must be positive")]
    ZeroDimension { dimension: &'static str },

    /// Operation name is not one of `cdn`, `width`, `height`, `cover`
    #[error("unknown operation {0:?} (expected cdn, width, height or cover)")]
    UnknownOperation(String),

    /// Operation needs a dimension that was not given
    #[error("operation {operation:?} requires a {dimension}")]
    MissingDimension {
        operation: String,
        dimension: &'static str,
    },
}

/// Errors raised when validating a width range for srcset generation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RangeError {
    /// One of the bounds is below zero
    #[error("min and max width must be >= 0 (got min={min}, max={max})")]
    NegativeWidth { min: i64, max: i64 },

    /// Upper bound is smaller than the lower bound
    #[error("max width must be >= min width (got min={min}, max={max})")]
    Inverted { min: i64, max: i64 },

    /// Upper bound is zero, leaving no positive width to generate
    #[error("max width must be positive")]
    ZeroMaxWidth,

    /// Tolerance is below the minimum step
    #[error("tolerance must be >= {minimum} (got {tolerance})")]
    ToleranceTooSmall { tolerance: f64, minimum: f64 },

    /// Lower bound lies above the hard width ceiling
    #[error("min width {min} exceeds the maximum width of {ceiling}")]
    AboveCeiling { min: i64, ceiling: u32 },
}

/// Crate-level error used by the CLI and the playground server
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// Builder or operation configuration error
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Width range error
    #[error("range error: {0}")]
    Range(#[from] RangeError),
}
