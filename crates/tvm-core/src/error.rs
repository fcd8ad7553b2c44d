//! Error types for the tvm library.
//!
//! Numeric faults raised by the formulas (division by zero, logarithm of a
//! non-positive value, non-convergence) arrive as [`MathError`] and are
//! wrapped unchanged. Input-shape problems (empty or non-numeric sequences)
//! and configuration problems have their own variants.

use thiserror::Error;
use tvm_math::MathError;

/// A specialized Result type for tvm operations.
pub type TvmResult<T> = Result<T, TvmError>;

/// The main error type for tvm operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TvmError {
    /// Numeric fault from a formula or solver.
    #[error(transparent)]
    Math(#[from] MathError),

    /// An operation that needs at least one element received none.
    #[error("Empty sequence: {operation} requires at least one value")]
    EmptySequence {
        /// The operation that was attempted.
        operation: String,
    },

    /// A sequence element is not a number.
    #[error("Non-numeric value at index {index}: {found}")]
    NonNumeric {
        /// Position of the offending element.
        index: usize,
        /// Rendering of the offending element.
        found: String,
    },

    /// Timing flag outside {0, 1}.
    #[error("Invalid timing flag {value}: expected 0 (end) or 1 (begin)")]
    InvalidTiming {
        /// The rejected value.
        value: i64,
    },

    /// Configuration value failed validation.
    #[error("Invalid configuration for {field}: {reason}")]
    InvalidConfig {
        /// Offending field.
        field: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Configuration text could not be parsed.
    #[error("Configuration parse error: {0}")]
    ConfigParse(String),

    /// Configuration file could not be read.
    #[error("I/O error: {0}")]
    Io(String),
}

impl TvmError {
    /// Creates an empty sequence error.
    #[must_use]
    pub fn empty_sequence(operation: impl Into<String>) -> Self {
        Self::EmptySequence {
            operation: operation.into(),
        }
    }

    /// Creates a non-numeric element error.
    #[must_use]
    pub fn non_numeric(index: usize, found: impl Into<String>) -> Self {
        Self::NonNumeric {
            index,
            found: found.into(),
        }
    }

    /// Creates an invalid configuration error.
    #[must_use]
    pub fn invalid_config(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Returns true for type errors (non-numeric input).
    #[must_use]
    pub fn is_type_error(&self) -> bool {
        matches!(self, Self::NonNumeric { .. })
    }

    /// Returns true for domain errors: empty input, division by zero and
    /// arguments outside a function's domain.
    #[must_use]
    pub fn is_domain_error(&self) -> bool {
        matches!(
            self,
            Self::EmptySequence { .. }
                | Self::Math(MathError::DivisionByZero { .. } | MathError::DomainError { .. })
        )
    }
}

impl From<toml::de::Error> for TvmError {
    fn from(err: toml::de::Error) -> Self {
        TvmError::ConfigParse(err.to_string())
    }
}

impl From<std::io::Error> for TvmError {
    fn from(err: std::io::Error) -> Self {
        TvmError::Io(err.to_string())
    }
}
