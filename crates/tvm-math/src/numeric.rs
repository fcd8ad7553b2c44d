//! Numeric abstraction over native floats and arbitrary-precision decimals.
//!
//! Every formula and solver in the library is written against [`Real`], so
//! the same code path serves both a fast `f64` evaluation and a precise
//! [`Decimal`] evaluation. Operations that can fault (division, logarithm,
//! fractional powers) are fallible and report a [`MathError`] instead of
//! producing a silent `NaN` or panicking.
//!
//! # Example
//!
//! ```rust
//! use tvm_math::numeric::Real;
//! use rust_decimal_macros::dec;
//!
//! fn growth<T: Real>(rate: T, periods: i32) -> T {
//!     (T::one() + rate).powi(periods).unwrap()
//! }
//!
//! assert!((growth(0.05_f64, 2) - 1.1025).abs() < 1e-12);
//! assert_eq!(growth(dec!(0.05), 2), dec!(1.1025));
//! ```

use std::fmt::{Debug, Display};
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, MathematicalOps};

use crate::error::{MathError, MathResult};

/// Real-number operations required by the annuity formulas and solvers.
pub trait Real:
    Copy
    + PartialOrd
    + Debug
    + Display
    + Send
    + Sync
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    /// Additive identity.
    fn zero() -> Self;

    /// Multiplicative identity.
    fn one() -> Self;

    /// Converts from `f64`. Fails for `NaN` and infinities when the target
    /// type cannot represent them.
    fn from_f64(value: f64) -> MathResult<Self>;

    /// Converts from an integer.
    fn from_i64(value: i64) -> Self;

    /// Lossy conversion to `f64`, used for tolerance checks and reporting.
    fn to_f64(self) -> f64;

    /// Converts to [`Decimal`].
    fn to_decimal(self) -> MathResult<Decimal>;

    /// Converts from [`Decimal`].
    fn from_decimal(value: Decimal) -> MathResult<Self>;

    /// Parses a textual number without going through `f64`.
    fn parse(text: &str) -> MathResult<Self>;

    /// Absolute value.
    fn abs(self) -> Self;

    /// Returns true for exactly zero.
    fn is_zero(self) -> bool {
        self == Self::zero()
    }

    /// Division that reports a zero divisor as [`MathError::DivisionByZero`].
    fn checked_div(self, rhs: Self) -> MathResult<Self>;

    /// Raises to a real exponent.
    fn pow(self, exponent: Self) -> MathResult<Self>;

    /// Raises to an integer exponent.
    fn powi(self, exponent: i32) -> MathResult<Self>;

    /// Natural logarithm. Non-positive arguments are a domain error.
    fn ln(self) -> MathResult<Self>;

    /// Rounds half away from zero to `dp` decimal places.
    fn round_dp(self, dp: u32) -> Self;
}

// ============================================================================
// f64
// ============================================================================

impl Real for f64 {
    fn zero() -> Self {
        0.0
    }

    fn one() -> Self {
        1.0
    }

    fn from_f64(value: f64) -> MathResult<Self> {
        Ok(value)
    }

    fn from_i64(value: i64) -> Self {
        value as f64
    }

    fn to_f64(self) -> f64 {
        self
    }

    fn to_decimal(self) -> MathResult<Decimal> {
        <Decimal as FromPrimitive>::from_f64(self).ok_or_else(|| {
            MathError::invalid_input(format!("{self} is not representable as a decimal"))
        })
    }

    fn from_decimal(value: Decimal) -> MathResult<Self> {
        ToPrimitive::to_f64(&value).ok_or_else(|| {
            MathError::invalid_input(format!("{value} is not representable as f64"))
        })
    }

    fn parse(text: &str) -> MathResult<Self> {
        text.trim()
            .parse::<f64>()
            .map_err(|_| MathError::invalid_input(format!("'{text}' is not a number")))
    }

    fn abs(self) -> Self {
        f64::abs(self)
    }

    fn checked_div(self, rhs: Self) -> MathResult<Self> {
        if rhs == 0.0 {
            return Err(MathError::DivisionByZero { value: rhs });
        }
        Ok(self / rhs)
    }

    fn pow(self, exponent: Self) -> MathResult<Self> {
        let result = self.powf(exponent);
        if result.is_nan() && !self.is_nan() && !exponent.is_nan() {
            return Err(MathError::domain("pow", format!("{self}^{exponent}")));
        }
        Ok(result)
    }

    fn powi(self, exponent: i32) -> MathResult<Self> {
        Ok(f64::powi(self, exponent))
    }

    fn ln(self) -> MathResult<Self> {
        if self.is_nan() || self <= 0.0 {
            return Err(MathError::domain("ln", self));
        }
        Ok(f64::ln(self))
    }

    fn round_dp(self, dp: u32) -> Self {
        // Beyond 15 places the scaling factor itself loses precision.
        if dp > 15 || !self.is_finite() {
            return self;
        }
        let factor = 10f64.powi(dp as i32);
        (self * factor).round() / factor
    }
}

// ============================================================================
// Decimal
// ============================================================================

impl Real for Decimal {
    fn zero() -> Self {
        Decimal::ZERO
    }

    fn one() -> Self {
        Decimal::ONE
    }

    fn from_f64(value: f64) -> MathResult<Self> {
        <Decimal as FromPrimitive>::from_f64(value).ok_or_else(|| {
            MathError::invalid_input(format!("{value} is not representable as a decimal"))
        })
    }

    fn from_i64(value: i64) -> Self {
        Decimal::from(value)
    }

    fn to_f64(self) -> f64 {
        ToPrimitive::to_f64(&self).unwrap_or(f64::NAN)
    }

    fn to_decimal(self) -> MathResult<Decimal> {
        Ok(self)
    }

    fn from_decimal(value: Decimal) -> MathResult<Self> {
        Ok(value)
    }

    fn parse(text: &str) -> MathResult<Self> {
        let text = text.trim();
        Decimal::from_str(text)
            .or_else(|_| Decimal::from_scientific(text))
            .map_err(|_| MathError::invalid_input(format!("'{text}' is not a number")))
    }

    fn abs(self) -> Self {
        Decimal::abs(&self)
    }

    fn is_zero(self) -> bool {
        Decimal::is_zero(&self)
    }

    fn checked_div(self, rhs: Self) -> MathResult<Self> {
        if Decimal::is_zero(&rhs) {
            return Err(MathError::DivisionByZero { value: 0.0 });
        }
        Decimal::checked_div(self, rhs).ok_or_else(|| MathError::overflow("division"))
    }

    fn pow(self, exponent: Self) -> MathResult<Self> {
        if self.is_sign_negative() && !exponent.fract().is_zero() {
            return Err(MathError::domain("pow", format!("{self}^{exponent}")));
        }
        self.checked_powd(exponent)
            .ok_or_else(|| MathError::overflow("pow"))
    }

    fn powi(self, exponent: i32) -> MathResult<Self> {
        self.checked_powi(i64::from(exponent))
            .ok_or_else(|| MathError::overflow("powi"))
    }

    fn ln(self) -> MathResult<Self> {
        if self <= Decimal::ZERO {
            return Err(MathError::domain("ln", self));
        }
        self.checked_ln().ok_or_else(|| MathError::domain("ln", self))
    }

    fn round_dp(self, dp: u32) -> Self {
        Decimal::round_dp(&self, dp)
    }
}
