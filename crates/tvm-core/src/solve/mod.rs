//! Iterative rate solvers.
//!
//! - [`rate`]: periodic interest rate of an annuity, Newton's method with the
//!   closed-form derivative of the amortization identity
//! - [`irr`]: internal rate of return of a cash-flow stream, Newton's method
//!   on [`npv`](crate::discount::npv) with a numerical derivative
//!
//! Both are local solvers. They start from a guess, stop after the iteration
//! cap in [`TvmConfig`](crate::config::TvmConfig) and report
//! `MathError::ConvergenceFailed` instead of looping forever.

mod irr;
mod rate;

pub use irr::{irr, irr_with_config, IRR_INITIAL_GUESS};
pub use rate::{rate, rate_with_config, DEFAULT_RATE_GUESS};
