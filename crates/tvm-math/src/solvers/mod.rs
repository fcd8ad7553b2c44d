//! Root-finding algorithms.
//!
//! This module provides Newton-Raphson solvers generic over [`Real`]:
//!
//! - [`newton_raphson`]: quadratic convergence when the derivative is known
//! - [`newton_raphson_numerical`]: derivative estimated by central differences
//!
//! Both are local methods. They converge from a reasonable initial guess and
//! report [`MathError::ConvergenceFailed`](crate::MathError::ConvergenceFailed)
//! once `max_iterations` is exhausted instead of looping forever.
//!
//! # Example: Solving for a Yield
//!
//! ```rust
//! use tvm_math::solvers::{newton_raphson_numerical, SolverConfig};
//!
//! // Pay 95 today, receive 5 a year for 5 years plus 100 at the end
//! let npv = |y: f64| {
//!     let mut pv = -95.0;
//!     for t in 1..=5 {
//!         pv += 5.0 / (1.0 + y).powi(t);
//!     }
//!     Ok(pv + 100.0 / (1.0 + y).powi(5))
//! };
//!
//! let result = newton_raphson_numerical(npv, 0.05, &SolverConfig::default()).unwrap();
//! assert!(result.root > 0.05);
//! ```
//!
//! [`Real`]: crate::numeric::Real

mod newton;

pub use newton::{newton_raphson, newton_raphson_numerical};

use serde::{Deserialize, Serialize};

/// Default tolerance for root-finding algorithms.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Default maximum iterations for root-finding algorithms.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Configuration for root-finding algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Tolerance for convergence.
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
    /// Maximum number of iterations.
    #[serde(default = "default_max_iterations")]
    pub max_iterations: u32,
}

fn default_tolerance() -> f64 {
    DEFAULT_TOLERANCE
}

fn default_max_iterations() -> u32 {
    DEFAULT_MAX_ITERATIONS
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// Result of a root-finding iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverResult<T = f64> {
    /// The root found.
    pub root: T,
    /// Number of iterations used.
    pub iterations: u32,
    /// Final residual (function value at root).
    pub residual: T,
}
