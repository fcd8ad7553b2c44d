//! Closed-form annuity formulas.
//!
//! All functions share the amortization identity
//!
//! ```text
//! fv + pv*(1+r)^n + pmt*(1+r*w)*((1+r)^n - 1)/r = 0
//! ```
//!
//! where `w` is the [`Timing`] flag, and solve it for one unknown. Rates are
//! decimal fractions per period (0.05 = 5%). Cash paid out is negative, cash
//! received is positive.
//!
//! Only [`nper`] treats a zero rate specially. The others divide by the
//! rate and return [`MathError::DivisionByZero`](tvm_math::MathError) when it
//! is exactly zero.

use tvm_math::Real;

use crate::error::TvmResult;
use crate::types::Timing;

/// Growth factor `(1+r)^n` and annuity factor `(1+r*w)*((1+r)^n-1)/r`.
fn growth_and_annuity_factor<T: Real>(rate: T, nper: T, timing: Timing) -> TvmResult<(T, T)> {
    let one = T::one();
    let growth = (one + rate).pow(nper)?;
    let annuity = ((one + rate * timing.factor()) * (growth - one)).checked_div(rate)?;
    Ok((growth, annuity))
}

/// Future value of an annuity.
///
/// # Arguments
///
/// * `rate` - Interest rate per period
/// * `nper` - Number of compounding periods
/// * `pmt` - Payment made each period
/// * `pv` - Present value
/// * `timing` - Whether payments are due at the end or beginning of each period
///
/// # Example
///
/// ```rust
/// use tvm_core::annuity::fv;
/// use tvm_core::types::Timing;
///
/// let value = fv(0.05 / 12.0, 120.0, -100.0, -100.0, Timing::End).unwrap();
/// assert!((value - 15692.928894335748).abs() < 1e-9);
/// ```
pub fn fv<T: Real>(rate: T, nper: T, pmt: T, pv: T, timing: Timing) -> TvmResult<T> {
    let (growth, annuity) = growth_and_annuity_factor(rate, nper, timing)?;
    Ok(-(pv * growth + pmt * annuity))
}

/// Periodic payment of an annuity.
///
/// # Example
///
/// ```rust
/// use tvm_core::annuity::pmt;
/// use tvm_core::types::Timing;
///
/// let payment = pmt(0.075 / 12.0, 180.0, 200_000.0, 0.0, Timing::End).unwrap();
/// assert!((payment + 1854.0247200054619).abs() < 1e-9);
/// ```
pub fn pmt<T: Real>(rate: T, nper: T, pv: T, fv: T, timing: Timing) -> TvmResult<T> {
    let (growth, annuity) = growth_and_annuity_factor(rate, nper, timing)?;
    Ok((-(fv + pv * growth)).checked_div(annuity)?)
}

/// Present value of an annuity.
pub fn pv<T: Real>(rate: T, nper: T, pmt: T, fv: T, timing: Timing) -> TvmResult<T> {
    let (growth, annuity) = growth_and_annuity_factor(rate, nper, timing)?;
    Ok((-(fv + pmt * annuity)).checked_div(growth)?)
}

/// Number of payment periods.
///
/// With a zero rate this is the linear `(-pv - fv) / pmt`. Otherwise
///
/// ```text
/// z = pmt*(1+r*w)/r
/// n = ln((-fv + z)/(pv + z)) / ln(1+r)
/// ```
///
/// which is a domain error when the log argument is not positive, i.e.
/// when the payment can never retire the balance. The result may be
/// fractional.
///
/// # Example
///
/// ```rust
/// use tvm_core::annuity::nper;
/// use tvm_core::types::Timing;
///
/// let periods = nper(0.07 / 12.0, -150.0, 8000.0, 0.0, Timing::End).unwrap();
/// assert!((periods - 64.07334877066185).abs() < 1e-9);
/// ```
pub fn nper<T: Real>(rate: T, pmt: T, pv: T, fv: T, timing: Timing) -> TvmResult<T> {
    if rate.is_zero() {
        return Ok((-pv - fv).checked_div(pmt)?);
    }

    let one = T::one();
    let z = (pmt * (one + rate * timing.factor())).checked_div(rate)?;
    let periods = (-fv + z).checked_div(pv + z)?.ln()?;
    Ok(periods.checked_div((one + rate).ln()?)?)
}

/// Interest portion of the payment in period `per` (1-based).
///
/// The payment is computed first, then the balance after `per - 1` periods
/// is rolled forward and multiplied by the rate. For annuities due the
/// interest is discounted by one period, and the first period carries no
/// interest at all (the payment is made before any interest accrues), so
/// `per == 1` with [`Timing::Begin`] returns exactly zero.
///
/// # Example
///
/// ```rust
/// use tvm_core::annuity::ipmt;
/// use tvm_core::types::Timing;
///
/// let interest = ipmt(0.075 / 12.0, 8.0, 24.0, 5000.0, 0.0, Timing::End).unwrap();
/// assert!((interest + 22.612926783996798).abs() < 1e-9);
/// ```
pub fn ipmt<T: Real>(rate: T, per: T, nper: T, pv: T, fv: T, timing: Timing) -> TvmResult<T> {
    let one = T::one();
    let payment = pmt(rate, nper, pv, fv, timing)?;
    let interest = self::fv(rate, per - one, payment, pv, timing)? * rate;
    let interest = if timing.is_begin() {
        interest.checked_div(one + rate)?
    } else {
        interest
    };

    if per == one && timing.is_begin() {
        return Ok(T::zero());
    }
    Ok(interest)
}

/// Effective annual rate for a nominal rate compounded `nper` times a year.
///
/// `(1 + rate/nper)^nper - 1`
///
/// # Example
///
/// ```rust
/// use tvm_core::annuity::effect;
///
/// let effective = effect(0.05, 120.0).unwrap();
/// assert!((effective - 0.05126014873337037).abs() < 1e-12);
/// ```
pub fn effect<T: Real>(rate: T, nper: T) -> TvmResult<T> {
    let one = T::one();
    Ok((one + rate.checked_div(nper)?).pow(nper)? - one)
}
