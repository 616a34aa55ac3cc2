//! Configuration errors
//!
//! The simulation itself cannot fail; only a bad `Tuning` is rejected.

use thiserror::Error;

/// Errors raised while building or validating a `Tuning`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A tunable is NaN or infinite.
    #[error("tuning field `{field}` is not finite")]
    NonFinite {
        /// Name of the offending field.
        field: &'static str,
    },

    /// A range has its minimum above its maximum.
    #[error("tuning range `{field}` is inverted: min {min} > max {max}")]
    InvertedRange {
        /// Name of the offending range.
        field: &'static str,
        /// Configured minimum.
        min: f64,
        /// Configured maximum.
        max: f64,
    },

    /// A scalar is outside the values the simulation can work with.
    #[error("tuning field `{field}` = {value} is out of range (expected {expected})")]
    OutOfRange {
        /// Name of the offending field.
        field: &'static str,
        /// Configured value.
        value: f64,
        /// Human readable description of the accepted values.
        expected: &'static str,
    },

    /// The tuning document could not be parsed.
    #[error("invalid tuning document: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}
