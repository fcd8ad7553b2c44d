//! Solver configuration.
//!
//! [`TvmConfig`] carries the tolerances and iteration caps used by
//! [`rate`](crate::solve::rate) and [`irr`](crate::solve::irr). The defaults
//! reproduce the reference behavior; a TOML file can override any subset of
//! fields:
//!
//! ```toml
//! rate_tolerance = 1e-8
//! irr_max_iterations = 200
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tvm_math::solvers::{SolverConfig, DEFAULT_MAX_ITERATIONS};

use crate::error::{TvmError, TvmResult};

/// Convergence threshold on successive `rate` guesses.
pub const RATE_TOLERANCE: f64 = 1e-6;

/// Convergence threshold on the NPV residual in `irr`.
pub const IRR_TOLERANCE: f64 = 1e-16;

/// Largest accepted tolerance.
const MAX_TOLERANCE: f64 = 1e-4;

/// Largest accepted iteration cap.
const MAX_ITERATIONS_LIMIT: u32 = 10_000;

/// Solver settings for the rate and IRR solvers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TvmConfig {
    /// Newton tolerance for `rate`.
    #[serde(default = "default_rate_tolerance")]
    pub rate_tolerance: f64,

    /// Maximum iterations for `rate`.
    #[serde(default = "default_max_iterations")]
    pub rate_max_iterations: u32,

    /// Newton tolerance for `irr`.
    #[serde(default = "default_irr_tolerance")]
    pub irr_tolerance: f64,

    /// Maximum iterations for `irr`.
    #[serde(default = "default_max_iterations")]
    pub irr_max_iterations: u32,
}

fn default_rate_tolerance() -> f64 {
    RATE_TOLERANCE
}

fn default_irr_tolerance() -> f64 {
    IRR_TOLERANCE
}

fn default_max_iterations() -> u32 {
    DEFAULT_MAX_ITERATIONS
}

impl Default for TvmConfig {
    fn default() -> Self {
        Self {
            rate_tolerance: RATE_TOLERANCE,
            rate_max_iterations: DEFAULT_MAX_ITERATIONS,
            irr_tolerance: IRR_TOLERANCE,
            irr_max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl TvmConfig {
    /// Parses and validates a TOML document. Missing fields take defaults.
    pub fn from_toml_str(text: &str) -> TvmResult<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> TvmResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Sets the `rate` tolerance.
    #[must_use]
    pub fn with_rate_tolerance(mut self, tolerance: f64) -> Self {
        self.rate_tolerance = tolerance;
        self
    }

    /// Sets the `rate` iteration cap.
    #[must_use]
    pub fn with_rate_max_iterations(mut self, max_iterations: u32) -> Self {
        self.rate_max_iterations = max_iterations;
        self
    }

    /// Sets the `irr` tolerance.
    #[must_use]
    pub fn with_irr_tolerance(mut self, tolerance: f64) -> Self {
        self.irr_tolerance = tolerance;
        self
    }

    /// Sets the `irr` iteration cap.
    #[must_use]
    pub fn with_irr_max_iterations(mut self, max_iterations: u32) -> Self {
        self.irr_max_iterations = max_iterations;
        self
    }

    /// Solver settings for `rate`.
    #[must_use]
    pub fn rate_solver(&self) -> SolverConfig {
        SolverConfig::new(self.rate_tolerance, self.rate_max_iterations)
    }

    /// Solver settings for `irr`.
    #[must_use]
    pub fn irr_solver(&self) -> SolverConfig {
        SolverConfig::new(self.irr_tolerance, self.irr_max_iterations)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `TvmError::InvalidConfig` for the first tolerance outside
    /// `(0, 1e-4]` or iteration cap outside `1..=10000`.
    pub fn validate(&self) -> TvmResult<()> {
        validate_tolerance("rate_tolerance", self.rate_tolerance)?;
        validate_iterations("rate_max_iterations", self.rate_max_iterations)?;
        validate_tolerance("irr_tolerance", self.irr_tolerance)?;
        validate_iterations("irr_max_iterations", self.irr_max_iterations)
    }
}

fn validate_tolerance(field: &str, tolerance: f64) -> TvmResult<()> {
    if !(tolerance > 0.0 && tolerance <= MAX_TOLERANCE) {
        return Err(TvmError::invalid_config(
            field,
            format!("tolerance {tolerance} must be in (0, {MAX_TOLERANCE}]"),
        ));
    }
    Ok(())
}

fn validate_iterations(field: &str, max_iterations: u32) -> TvmResult<()> {
    if max_iterations == 0 || max_iterations > MAX_ITERATIONS_LIMIT {
        return Err(TvmError::invalid_config(
            field,
            format!("max iterations must be between 1 and {MAX_ITERATIONS_LIMIT}"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TvmConfig::default();
        assert_eq!(config.rate_solver(), SolverConfig::new(1e-6, 100));
        assert_eq!(config.irr_solver(), SolverConfig::new(1e-16, 100));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config =
            TvmConfig::from_toml_str("rate_tolerance = 1e-8\nirr_max_iterations = 250\n").unwrap();

        assert!((config.rate_tolerance - 1e-8).abs() < f64::EPSILON);
        assert_eq!(config.rate_max_iterations, 100);
        assert!((config.irr_tolerance - IRR_TOLERANCE).abs() < f64::EPSILON);
        assert_eq!(config.irr_max_iterations, 250);
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(TvmConfig::from_toml_str("").unwrap(), TvmConfig::default());
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = TvmConfig::from_toml_str("rate_max_iterations = 0").unwrap_err();
        assert!(matches!(
            err,
            TvmError::InvalidConfig { ref field, .. } if field == "rate_max_iterations"
        ));

        let err = TvmConfig::default().with_irr_tolerance(-1.0).validate().unwrap_err();
        assert!(matches!(
            err,
            TvmError::InvalidConfig { ref field, .. } if field == "irr_tolerance"
        ));

        assert!(TvmConfig::default().with_rate_tolerance(f64::NAN).validate().is_err());
    }

    #[test]
    fn test_malformed_toml() {
        let err = TvmConfig::from_toml_str("rate_tolerance = \"tight\"").unwrap_err();
        assert!(matches!(err, TvmError::ConfigParse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = TvmConfig::from_file("/nonexistent/tvm.toml").unwrap_err();
        assert!(matches!(err, TvmError::Io(_)));
    }
}
