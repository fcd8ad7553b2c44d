//! Newton-Raphson root-finding algorithm.

use log::{debug, trace, warn};

use crate::error::{MathError, MathResult};
use crate::numeric::Real;
use crate::solvers::{SolverConfig, SolverResult};

/// Derivatives smaller than this are treated as zero.
const MIN_DERIVATIVE: f64 = 1e-15;

/// Smallest fraction of the Newton step tried before giving up.
const MIN_DAMPING: f64 = 1e-3;

/// Relative step for central-difference derivatives.
const NUMERICAL_STEP: f64 = 1e-8;

/// Newton-Raphson root-finding algorithm.
///
/// Uses the iteration:
/// `x_{n+1} = x_n - λ f(x_n) / f'(x_n)`
///
/// where `λ` starts at 1 and is halved until `|f|` decreases (down to
/// `1e-3`). Undamped steps are taken whenever they make progress, so the
/// usual quadratic convergence near the root is retained.
///
/// Stops when `|f(x)| < tolerance` or when the full Newton step is smaller
/// than `tolerance`.
///
/// # Arguments
///
/// * `f` - The function for which to find a root
/// * `df` - The derivative of the function
/// * `initial_guess` - Starting point for the iteration
/// * `config` - Solver configuration
///
/// # Example
///
/// ```rust
/// use tvm_math::solvers::{newton_raphson, SolverConfig};
///
/// // Find root of x^2 - 2 (i.e., sqrt(2))
/// let f = |x: f64| Ok(x * x - 2.0);
/// let df = |x: f64| Ok(2.0 * x);
///
/// let result = newton_raphson(f, df, 1.5, &SolverConfig::default()).unwrap();
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-10);
/// ```
pub fn newton_raphson<T, F, DF>(
    f: F,
    df: DF,
    initial_guess: T,
    config: &SolverConfig,
) -> MathResult<SolverResult<T>>
where
    T: Real,
    F: Fn(T) -> MathResult<T>,
    DF: Fn(T) -> MathResult<T>,
{
    let mut x = initial_guess;
    let mut fx = f(x)?;

    for iteration in 0..config.max_iterations {
        trace!("newton iteration {iteration}: x = {x}, f(x) = {fx}");

        // Check for convergence
        if fx.abs().to_f64() < config.tolerance {
            debug!("newton converged after {iteration} iterations at {x}");
            return Ok(SolverResult {
                root: x,
                iterations: iteration,
                residual: fx,
            });
        }

        let dfx = df(x)?;

        // Check for zero derivative
        if dfx.abs().to_f64() < MIN_DERIVATIVE {
            warn!("newton derivative vanished at {x}");
            return Err(MathError::DivisionByZero {
                value: dfx.to_f64(),
            });
        }

        let step = fx.checked_div(dfx)?;

        // Check for step convergence
        if step.abs().to_f64() < config.tolerance {
            x = x - step;
            let final_fx = f(x)?;
            debug!("newton converged after {} iterations at {x}", iteration + 1);
            return Ok(SolverResult {
                root: x,
                iterations: iteration + 1,
                residual: final_fx,
            });
        }

        (x, fx) = damped_step(&f, x, fx, step)?;
    }

    warn!(
        "newton failed to converge in {} iterations (last x = {x})",
        config.max_iterations
    );
    Err(MathError::convergence_failed(
        config.max_iterations,
        fx.abs().to_f64(),
    ))
}

/// Takes the largest fraction of `step` (1, 1/2, 1/4, ...) that reduces `|f|`.
fn damped_step<T, F>(f: &F, x: T, fx: T, step: T) -> MathResult<(T, T)>
where
    T: Real,
    F: Fn(T) -> MathResult<T>,
{
    let half = T::one().checked_div(T::from_i64(2))?;
    let mut factor = T::one();

    loop {
        let candidate = x - step * factor;
        let f_candidate = f(candidate)?;
        if f_candidate.abs() < fx.abs() {
            return Ok((candidate, f_candidate));
        }

        factor = factor * half;
        if factor.to_f64() < MIN_DAMPING {
            return Err(MathError::LineSearchFailed {
                x: x.to_f64(),
                residual: fx.abs().to_f64(),
            });
        }
    }
}

/// Newton-Raphson with numerical derivative estimation.
///
/// Uses central differences with step `1e-8 * max(1, |x|)` when an
/// analytical derivative is not available.
///
/// # Arguments
///
/// * `f` - The function for which to find a root
/// * `initial_guess` - Starting point for the iteration
/// * `config` - Solver configuration
pub fn newton_raphson_numerical<T, F>(
    f: F,
    initial_guess: T,
    config: &SolverConfig,
) -> MathResult<SolverResult<T>>
where
    T: Real,
    F: Fn(T) -> MathResult<T>,
{
    let base_step = T::from_f64(NUMERICAL_STEP)?;
    let two = T::from_i64(2);

    let df = |x: T| {
        let scale = if x.abs() > T::one() { x.abs() } else { T::one() };
        let h = base_step * scale;
        let f1 = f(x + h)?;
        let f2 = f(x - h)?;
        (f1 - f2).checked_div(two * h)
    };

    newton_raphson(&f, df, initial_guess, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[test]
    fn test_sqrt_2() {
        let f = |x: f64| Ok(x * x - 2.0);
        let df = |x: f64| Ok(2.0 * x);

        let result = newton_raphson(f, df, 1.5, &SolverConfig::default()).unwrap();

        assert_relative_eq!(result.root, std::f64::consts::SQRT_2, epsilon = 1e-10);
        assert!(result.iterations < 10); // Should converge quickly
    }

    #[test]
    fn test_cube_root() {
        // Find cube root of 27 (should be 3)
        let f = |x: f64| Ok(x * x * x - 27.0);
        let df = |x: f64| Ok(3.0 * x * x);

        let result = newton_raphson(f, df, 2.0, &SolverConfig::default()).unwrap();

        assert_relative_eq!(result.root, 3.0, epsilon = 1e-10);
    }

    #[test]
    fn test_numerical_derivative() {
        let f = |x: f64| Ok(x * x - 2.0);

        let result = newton_raphson_numerical(f, 1.5, &SolverConfig::default()).unwrap();

        assert_relative_eq!(result.root, std::f64::consts::SQRT_2, epsilon = 1e-8);
    }

    #[test]
    fn test_decimal_sqrt_2() {
        let f = |x: Decimal| Ok(x * x - dec!(2));
        let df = |x: Decimal| Ok(dec!(2) * x);
        let config = SolverConfig::new(1e-20, 50);

        let result = newton_raphson(f, df, dec!(1.5), &config).unwrap();

        assert_eq!(result.root.round_dp(20), dec!(1.41421356237309504880));
    }

    #[test]
    fn test_zero_derivative_error() {
        // f(x) = x^3 - 1 with initial guess at 0 has zero derivative
        let f = |x: f64| Ok(x * x * x - 1.0);
        let df = |x: f64| Ok(3.0 * x * x);

        let result = newton_raphson(f, df, 0.0, &SolverConfig::default());

        assert!(matches!(result, Err(MathError::DivisionByZero { .. })));
    }

    #[test]
    fn test_iteration_cap_reports_failure() {
        // x^2 + 1 has no real root
        let f = |x: f64| Ok(x * x + 1.0);
        let df = |x: f64| Ok(2.0 * x);

        let result = newton_raphson(f, df, 0.5, &SolverConfig::new(1e-12, 5));

        assert!(result.is_err());
    }

    #[test]
    fn test_function_errors_propagate() {
        let f = |x: f64| Real::ln(x);
        let df = |x: f64| 1.0_f64.checked_div(x);

        // ln(x) = 0 at x = 1; a first step from 3.0 lands at a negative x
        let result = newton_raphson(f, df, 3.0, &SolverConfig::default());

        assert!(matches!(result, Err(MathError::DomainError { .. })));
    }

    #[test]
    fn test_convergence_from_close_guess() {
        let f = |x: f64| Ok(x.sin());
        let df = |x: f64| Ok(x.cos());

        let result = newton_raphson(f, df, 0.5, &SolverConfig::new(1e-15, 5));

        assert!(result.is_ok());
    }
}
