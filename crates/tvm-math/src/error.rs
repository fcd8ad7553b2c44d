//! Error types for numeric operations.

use thiserror::Error;

/// A specialized Result type for numeric operations.
pub type MathResult<T> = Result<T, MathError>;

/// Errors that can occur during numeric operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// Root-finding algorithm failed to converge.
    #[error("Convergence failed after {iterations} iterations (residual: {residual:.2e})")]
    ConvergenceFailed {
        /// Number of iterations attempted.
        iterations: u32,
        /// Final residual value.
        residual: f64,
    },

    /// Division by zero.
    #[error("Division by zero (divisor: {value:.2e})")]
    DivisionByZero {
        /// The offending divisor.
        value: f64,
    },

    /// Argument outside the domain of a function (e.g. log of a non-positive value).
    #[error("Domain error in {operation}: argument {value}")]
    DomainError {
        /// The operation that was attempted.
        operation: String,
        /// The argument, rendered as text so decimal inputs keep their digits.
        value: String,
    },

    /// Numerical overflow.
    #[error("Numerical overflow in {operation}")]
    Overflow {
        /// The operation that caused overflow.
        operation: String,
    },

    /// Invalid input parameter.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },

    /// Step halving could not reduce the residual of a damped Newton step.
    #[error("Failed to reduce residual at x = {x:.6e} (residual: {residual:.2e})")]
    LineSearchFailed {
        /// Point where the search stalled.
        x: f64,
        /// Residual at that point.
        residual: f64,
    },
}

impl MathError {
    /// Creates a convergence failed error.
    #[must_use]
    pub fn convergence_failed(iterations: u32, residual: f64) -> Self {
        Self::ConvergenceFailed {
            iterations,
            residual,
        }
    }

    /// Creates a domain error.
    #[must_use]
    pub fn domain(operation: impl Into<String>, value: impl ToString) -> Self {
        Self::DomainError {
            operation: operation.into(),
            value: value.to_string(),
        }
    }

    /// Creates an overflow error.
    #[must_use]
    pub fn overflow(operation: impl Into<String>) -> Self {
        Self::Overflow {
            operation: operation.into(),
        }
    }

    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}
