//! # tvm Math
//!
//! Numeric utilities for the tvm time-value-of-money library.
//!
//! This crate provides:
//!
//! - **Numeric abstraction**: the [`Real`] trait, implemented for `f64` and
//!   `rust_decimal::Decimal`, with fallible division, powers and logarithms
//! - **Solvers**: Newton-Raphson with analytic or numerical derivatives
//!
//! ## Design Philosophy
//!
//! - **Generic**: Works with `f64` and `Decimal` behind the same signature
//! - **Bounded**: Every iteration has a configurable cap
//! - **Explicit Faults**: Division by zero and domain errors are returned,
//!   never replaced by a substitute value

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod numeric;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::numeric::Real;
    pub use crate::solvers::{
        newton_raphson, newton_raphson_numerical, SolverConfig, SolverResult,
    };
}

pub use error::{MathError, MathResult};
pub use numeric::Real;
