//! Payment timing within a period.

use serde::{Deserialize, Serialize};
use std::fmt;

use tvm_math::Real;

use crate::error::{TvmError, TvmResult};

/// When each period's payment is due.
///
/// `End` is an ordinary annuity, `Begin` an annuity due. The numeric flag
/// (0 or 1) enters the formulas as the `(1 + rate * timing)` adjustment.
///
/// # Example
///
/// ```rust
/// use tvm_core::types::Timing;
///
/// assert_eq!(Timing::default(), Timing::End);
/// assert_eq!(Timing::try_from(1_i64).unwrap(), Timing::Begin);
/// assert!(Timing::try_from(2_i64).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Timing {
    /// Payment at the end of each period (flag 0)
    #[default]
    End,
    /// Payment at the beginning of each period (flag 1)
    Begin,
}

impl Timing {
    /// Returns the numeric flag (0 for `End`, 1 for `Begin`) as a `T`.
    #[must_use]
    pub fn factor<T: Real>(&self) -> T {
        match self {
            Timing::End => T::zero(),
            Timing::Begin => T::one(),
        }
    }

    /// Returns true for payments at the beginning of the period.
    #[must_use]
    pub fn is_begin(&self) -> bool {
        matches!(self, Timing::Begin)
    }
}

impl TryFrom<i64> for Timing {
    type Error = TvmError;

    fn try_from(value: i64) -> TvmResult<Self> {
        match value {
            0 => Ok(Timing::End),
            1 => Ok(Timing::Begin),
            other => Err(TvmError::InvalidTiming { value: other }),
        }
    }
}

impl fmt::Display for Timing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Timing::End => "End",
            Timing::Begin => "Begin",
        };
        write!(f, "{name}")
    }
}
