//! Domain types for time-value-of-money calculations.
//!
//! - [`Timing`]: Whether payments fall at the end or the beginning of a period

mod timing;

pub use timing::Timing;
