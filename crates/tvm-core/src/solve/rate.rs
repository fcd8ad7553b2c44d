//! Interest rate of an annuity.

use log::{debug, trace, warn};
use tvm_math::solvers::SolverConfig;
use tvm_math::{MathError, Real};

use crate::config::TvmConfig;
use crate::error::TvmResult;
use crate::types::Timing;

/// Starting guess used when the caller has no better estimate.
pub const DEFAULT_RATE_GUESS: f64 = 0.10;

/// Each new guess is rounded to this many decimal places.
const GUESS_DP: u32 = 20;

/// Newton step `f(r) / f'(r)` for the amortization identity
///
/// ```text
/// f(r) = fv + pv*(1+r)^n + pmt*(1+r*w)*((1+r)^n - 1)/r
/// ```
///
/// with the derivative taken analytically.
fn newton_step<T: Real>(r: T, n: T, pmt: T, pv: T, fv: T, timing: Timing) -> TvmResult<T> {
    let one = T::one();
    let w = timing.factor::<T>();
    let t1 = (r + one).pow(n)?;
    let t2 = (r + one).pow(n - one)?;
    let due = r * w + one;

    let value = fv + t1 * pv + (pmt * (t1 - one) * due).checked_div(r)?;
    let slope = n * t2 * pv - (pmt * (t1 - one) * due).checked_div(r * r)?
        + (n * pmt * t2 * due).checked_div(r)?
        + (pmt * (t1 - one) * w).checked_div(r)?;

    Ok(value.checked_div(slope)?)
}

/// Periodic interest rate of an annuity.
///
/// Solves `fv + pv*(1+r)^n + pmt*(1+r*w)*((1+r)^n - 1)/r = 0` for `r` by
/// Newton's method from `guess`, stopping once two successive guesses differ
/// by less than `1e-6`. The returned value is the last guess.
///
/// Decimal inputs are solved entirely in decimal arithmetic.
///
/// # Arguments
///
/// * `nper` - Number of periods
/// * `pmt` - Payment made each period
/// * `pv` - Present value
/// * `fv` - Future value remaining after the final payment
/// * `timing` - Whether payments are due at the end or beginning of each period
/// * `guess` - Starting estimate, usually [`DEFAULT_RATE_GUESS`]
///
/// # Errors
///
/// `MathError::ConvergenceFailed` if no convergence within the iteration cap,
/// or the arithmetic fault hit along the way (e.g. a guess of exactly zero
/// divides by zero).
///
/// # Example
///
/// ```rust
/// use tvm_core::solve::{rate, DEFAULT_RATE_GUESS};
/// use tvm_core::types::Timing;
///
/// let r = rate(12.0, 363.78, -3056.00, 0.0, Timing::End, DEFAULT_RATE_GUESS).unwrap();
/// assert!((r - 0.05963422268883278).abs() < 1e-6);
/// ```
pub fn rate<T: Real>(nper: T, pmt: T, pv: T, fv: T, timing: Timing, guess: T) -> TvmResult<T> {
    rate_with_config(
        nper,
        pmt,
        pv,
        fv,
        timing,
        guess,
        &TvmConfig::default().rate_solver(),
    )
}

/// [`rate`] with an explicit tolerance and iteration cap.
pub fn rate_with_config<T: Real>(
    nper: T,
    pmt: T,
    pv: T,
    fv: T,
    timing: Timing,
    guess: T,
    config: &SolverConfig,
) -> TvmResult<T> {
    let mut guess = guess;
    let mut change = f64::INFINITY;

    for iteration in 1..=config.max_iterations {
        let step = newton_step(guess, nper, pmt, pv, fv, timing)?;
        let next_guess = (guess - step).round_dp(GUESS_DP);
        change = (next_guess - guess).abs().to_f64();
        trace!("rate iteration {iteration}: guess = {next_guess}, change = {change:.3e}");

        if change < config.tolerance {
            debug!("rate converged after {iteration} iterations: {next_guess}");
            return Ok(next_guess);
        }
        guess = next_guess;
    }

    warn!(
        "rate failed to converge in {} iterations (nper = {nper}, pmt = {pmt}, pv = {pv}, \
         fv = {fv})",
        config.max_iterations
    );
    Err(MathError::convergence_failed(config.max_iterations, change).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annuity::{fv, pmt};
    use crate::error::TvmError;
    use approx::assert_relative_eq;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[test]
    fn test_rate_reference_value() {
        let r = rate(12.0, 363.78, -3056.00, 0.0, Timing::End, DEFAULT_RATE_GUESS).unwrap();
        assert_relative_eq!(r, 0.05963422268883278, epsilon = 1e-6);
    }

    #[test]
    fn test_rate_begin() {
        let r = rate(12.0, 363.78, -3056.00, 0.0, Timing::Begin, DEFAULT_RATE_GUESS).unwrap();
        assert_relative_eq!(r, 0.07265012823626603, epsilon = 1e-6);
    }

    #[test]
    fn test_rate_recovers_pmt_rate() {
        let payment = pmt(0.015, 24.0, 5000.0, 0.0, Timing::End).unwrap();
        let r = rate(24.0, payment, 5000.0, 0.0, Timing::End, DEFAULT_RATE_GUESS).unwrap();
        assert_relative_eq!(r, 0.015, epsilon = 1e-6);
    }

    #[test]
    fn test_rate_with_future_value() {
        let future = fv(0.004, 36.0, -200.0, -1000.0, Timing::Begin).unwrap();
        let r = rate(36.0, -200.0, -1000.0, future, Timing::Begin, DEFAULT_RATE_GUESS).unwrap();
        assert_relative_eq!(r, 0.004, epsilon = 1e-6);
    }

    #[test]
    fn test_rate_decimal_keeps_precision() {
        let r = rate(
            dec!(12),
            dec!(351.05921357237094229536),
            dec!(-3056.12345678901234567),
            Decimal::ZERO,
            Timing::End,
            dec!(0.10),
        )
        .unwrap();

        assert_eq!((r * dec!(100)).round_dp(2), dec!(5.32));
        assert!((r - dec!(0.0532)).abs() < dec!(0.000000000001));
    }

    #[test]
    fn test_rate_decimal_matches_float() {
        let r = rate(
            dec!(12),
            dec!(363.78),
            dec!(-3056.00),
            Decimal::ZERO,
            Timing::End,
            dec!(0.10),
        )
        .unwrap();
        assert!((r - dec!(0.05963422268883278)).abs() < dec!(0.000001));
    }

    #[test]
    fn test_rate_iteration_cap() {
        let config = SolverConfig::new(1e-6, 1);
        let result = rate_with_config(
            12.0,
            363.78,
            -3056.00,
            0.0,
            Timing::End,
            DEFAULT_RATE_GUESS,
            &config,
        );
        assert!(matches!(
            result,
            Err(TvmError::Math(MathError::ConvergenceFailed { iterations: 1, .. }))
        ));
    }

    #[test]
    fn test_rate_zero_guess_is_division_error() {
        let result = rate(12.0, 363.78, -3056.00, 0.0, Timing::End, 0.0);
        assert!(matches!(
            result,
            Err(TvmError::Math(MathError::DivisionByZero { .. }))
        ));
    }

    #[test]
    fn test_rate_degenerate_flows_do_not_hang() {
        // Paying in and receiving nothing back has no rate
        let result = rate(12.0, -100.0, -1000.0, 0.0, Timing::End, DEFAULT_RATE_GUESS);
        assert!(result.is_err());
    }
}
