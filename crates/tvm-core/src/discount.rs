//! Discounting of periodic cash-flow streams.

use tvm_math::{MathResult, Real};

use crate::error::TvmResult;

/// Net present value of a stream of periodic cash flows.
///
/// ```text
/// npv = Σ cashflows[i] / (1 + discount)^(i+1)
/// ```
///
/// The first element is discounted one full period. An empty stream has an
/// NPV of zero.
///
/// The sum is accumulated backwards, `total = (total + cashflow) / (1 + discount)`,
/// so no power of `1 + discount` is ever formed. Large discount rates shrink
/// later terms toward zero, and rates near `-1` grow them, without the
/// intermediate factor overflowing or underflowing to zero in either `f64`
/// or `Decimal`. A discount of exactly `-1` is a division by zero.
///
/// # Example
///
/// ```rust
/// use tvm_core::discount::npv;
///
/// let value = npv(0.281, &[-100.0, 39.0, 59.0, 55.0, 20.0]).unwrap();
/// assert!((value + 0.00661872883563408).abs() < 1e-12);
/// ```
pub fn npv<T: Real>(discount: T, cashflows: &[T]) -> TvmResult<T> {
    Ok(discounted_sum(discount, cashflows)?)
}

/// [`npv`] in the solvers' error type, used as the IRR objective.
pub(crate) fn discounted_sum<T: Real>(discount: T, cashflows: &[T]) -> MathResult<T> {
    let base = T::one() + discount;
    cashflows
        .iter()
        .rev()
        .try_fold(T::zero(), |total, &cashflow| (total + cashflow).checked_div(base))
}
