//! Descriptive statistics over numeric sequences.
//!
//! The typed functions take `&[T]`. Loosely typed input (for example a JSON
//! array from a request body) goes through [`numbers_from_json`] first, which
//! reports the first non-numeric element as a type error. An empty sequence
//! is a domain error for [`mean`] and [`median`], so the two failure kinds
//! stay distinguishable:
//!
//! ```rust
//! use serde_json::json;
//! use tvm_core::statistics::{mean, numbers_from_json};
//!
//! let err = numbers_from_json::<f64>(&[json!(1), json!("two")]).unwrap_err();
//! assert!(err.is_type_error());
//!
//! let err = mean::<f64>(&[]).unwrap_err();
//! assert!(err.is_domain_error());
//! ```

use std::cmp::Ordering;

use serde_json::Value;
use tvm_math::Real;

use crate::error::{TvmError, TvmResult};

/// Sum of the sequence. An empty sequence sums to zero.
pub fn sum<T: Real>(numbers: &[T]) -> T {
    numbers.iter().fold(T::zero(), |total, &x| total + x)
}

/// Arithmetic mean.
///
/// # Errors
///
/// `TvmError::EmptySequence` for an empty sequence.
pub fn mean<T: Real>(numbers: &[T]) -> TvmResult<T> {
    if numbers.is_empty() {
        return Err(TvmError::empty_sequence("mean"));
    }
    let count = T::from_i64(numbers.len() as i64);
    Ok(sum(numbers).checked_div(count)?)
}

/// Median of the sequence.
///
/// Sorts a copy; the input is left untouched. For an even number of elements
/// the result is the mean of the two middle values.
///
/// # Errors
///
/// `TvmError::EmptySequence` for an empty sequence, `TvmError::NonNumeric`
/// if an element has no ordering (a `NaN`).
pub fn median<T: Real>(numbers: &[T]) -> TvmResult<T> {
    if numbers.is_empty() {
        return Err(TvmError::empty_sequence("median"));
    }
    if let Some(index) = numbers.iter().position(|x| x.partial_cmp(x).is_none()) {
        return Err(TvmError::non_numeric(index, numbers[index].to_string()));
    }

    let mut sorted = numbers.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Ok(sorted[mid])
    } else {
        mean(&sorted[mid - 1..=mid])
    }
}

/// Converts a sequence of JSON values into numbers.
///
/// Numbers are parsed from their textual form, so decimal targets keep every
/// digit the document carried.
///
/// # Errors
///
/// `TvmError::NonNumeric` naming the first element that is not a JSON number.
pub fn numbers_from_json<T: Real>(values: &[Value]) -> TvmResult<Vec<T>> {
    values
        .iter()
        .enumerate()
        .map(|(index, value)| match value {
            Value::Number(n) => Ok(T::parse(&n.to_string())?),
            other => Err(TvmError::non_numeric(index, other.to_string())),
        })
        .collect()
}
