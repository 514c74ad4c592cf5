//! Error types and utilities.
//!
//! This module holds the composite [`MultiError`], the [`Operand`] values the
//! combination functions accept, the depth-first [`Chain`] adapter, and the
//! formatting strategies.
//!
//! # Examples
//!
//! ```
//! use error_fold::{append, message};
//!
//! let err = append(message("disk full"), [message("quota exceeded")]).unwrap();
//!
//! assert_eq!(err.len(), 2);
//! println!("{err}");
//! // Output:
//! // 2 errors occurred:
//! //   - disk full
//! //   - quota exceeded
//! ```
use smallvec::SmallVec;
use std::error::Error;
use std::sync::Arc;

pub mod chain;
pub mod error_formatter;
pub mod multi_error;
pub mod operand;
pub mod prefixed_error;

pub use chain::*;
pub use multi_error::*;
pub use operand::*;
pub use prefixed_error::*;

/// SmallVec-backed collection used for accumulating errors.
///
/// Uses inline storage for up to 2 elements to avoid heap allocations
/// in the common case of one or two failures.
pub type ErrorVec<E> = SmallVec<[E; 2]>;

/// Shared, type-erased error handle stored inside a [`MultiError`].
pub type SharedError = Arc<dyn Error + Send + Sync + 'static>;

/// Owned, type-erased error, convertible into an [`Operand`].
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// Result alias that reports failures as a [`MultiError`].
pub type MultiResult<T> = Result<T, MultiError>;

/// Wraps any error in a [`SharedError`] handle.
#[inline]
pub fn share<E>(error: E) -> SharedError
where
    E: Error + Send + Sync + 'static,
{
    Arc::new(error)
}

/// Creates a plain leaf error carrying only `msg`.
///
/// # Examples
///
/// ```
/// let err = error_fold::message("connection refused");
/// assert_eq!(err.to_string(), "connection refused");
/// ```
#[inline]
pub fn message(msg: impl Into<String>) -> SharedError {
    Arc::from(BoxError::from(msg.into()))
}
