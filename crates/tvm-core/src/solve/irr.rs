//! Internal rate of return.

use log::debug;
use rust_decimal::Decimal;
use tvm_math::solvers::{newton_raphson_numerical, SolverConfig};
use tvm_math::{MathResult, Real};

use crate::config::TvmConfig;
use crate::discount::discounted_sum;
use crate::error::TvmResult;

/// Starting point of the IRR search, one unit of `1e-16`.
///
/// Starting next to zero rather than at a typical 10% keeps the search away
/// from the far side of the NPV curve for streams whose root is small.
pub const IRR_INITIAL_GUESS: Decimal = Decimal::from_parts(1, 0, 0, false, 16);

/// Internal rate of return of a periodic cash-flow stream.
///
/// Finds the discount rate at which [`npv`](crate::discount::npv) is zero.
/// The objective is evaluated in [`Decimal`] whatever the input type, so
/// long streams do not accumulate floating-point error across iterations;
/// the converged rate is converted back to `T`.
///
/// The search is a local Newton iteration with a numerical derivative. With
/// several sign changes the stream may have several roots and the one
/// returned is whichever the iteration reaches first.
///
/// # Example
///
/// ```rust
/// use tvm_core::solve::irr;
///
/// let r = irr(&[-100.0, 39.0, 59.0, 55.0, 20.0]).unwrap();
/// assert!((r - 0.28094842116).abs() < 1e-10);
/// ```
pub fn irr<T: Real>(cashflows: &[T]) -> TvmResult<T> {
    irr_with_config(cashflows, &TvmConfig::default().irr_solver())
}

/// [`irr`] with an explicit tolerance and iteration cap.
pub fn irr_with_config<T: Real>(cashflows: &[T], config: &SolverConfig) -> TvmResult<T> {
    let flows = cashflows
        .iter()
        .map(|&cashflow| cashflow.to_decimal())
        .collect::<MathResult<Vec<Decimal>>>()?;

    let objective = |rate: Decimal| discounted_sum(rate, &flows);
    let result = newton_raphson_numerical(objective, IRR_INITIAL_GUESS, config)?;

    debug!(
        "irr of {} cash flows: {} after {} iterations (residual {})",
        flows.len(),
        result.root,
        result.iterations,
        result.residual
    );
    Ok(T::from_decimal(result.root)?)
}
