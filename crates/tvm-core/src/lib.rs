//! # tvm Core
//!
//! Time-value-of-money formulas and descriptive statistics.
//!
//! This crate provides:
//!
//! - **Annuities**: `fv`, `pmt`, `pv`, `nper`, `ipmt` and `effect`
//! - **Discounting**: `npv` of a periodic cash-flow stream
//! - **Solvers**: `rate` (Newton with an analytic step) and `irr` (Newton
//!   over `npv`, evaluated in decimal arithmetic)
//! - **Statistics**: `sum`, `mean`, `median` and conversion of JSON input
//! - **Configuration**: solver tolerances and iteration caps, loadable from TOML
//!
//! Every function is generic over [`Real`](tvm_math::Real): pass `f64` for
//! speed or `rust_decimal::Decimal` when the digits matter.
//!
//! ## Example
//!
//! ```rust
//! use tvm_core::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! // Monthly payment on a 200,000 loan over 30 years at 6% nominal
//! let payment = pmt(0.005, 360.0, 200_000.0, 0.0, Timing::End).unwrap();
//! assert!((payment + 1199.101050).abs() < 1e-6);
//!
//! // The same rate recovered from the payment
//! let r = rate(360.0, payment, 200_000.0, 0.0, Timing::End, DEFAULT_RATE_GUESS).unwrap();
//! assert!((r - 0.005).abs() < 1e-6);
//!
//! // Decimal inputs stay decimal
//! let value = npv(dec!(0.1), &[dec!(110)]).unwrap();
//! assert_eq!(value, dec!(100));
//! ```

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
#![allow(clippy::many_single_char_names)]
#![allow(clippy::similar_names)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::uninlined_format_args)]

pub mod annuity;
pub mod config;
pub mod discount;
pub mod error;
pub mod solve;
pub mod statistics;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::annuity::{effect, fv, ipmt, nper, pmt, pv};
    pub use crate::config::TvmConfig;
    pub use crate::discount::npv;
    pub use crate::error::{TvmError, TvmResult};
    pub use crate::solve::{irr, irr_with_config, rate, rate_with_config, DEFAULT_RATE_GUESS};
    pub use crate::statistics::{mean, median, numbers_from_json, sum};
    pub use crate::types::Timing;
    pub use tvm_math::solvers::{SolverConfig, SolverResult};
    pub use tvm_math::Real;
}

pub use config::TvmConfig;
pub use error::{TvmError, TvmResult};
pub use types::Timing;
