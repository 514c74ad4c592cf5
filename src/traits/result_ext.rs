//! Extension trait for collecting `Result` failures into a [`MultiError`].
//!
//! # Examples
//!
//! ```
//! use error_fold::traits::ResultExt;
//! use error_fold::MultiError;
//!
//! let mut errors: Option<MultiError> = None;
//! let ports: Vec<u16> = ["80", "http", "443", "-1"]
//!     .iter()
//!     .filter_map(|raw| raw.parse::<u16>().or_accumulate(&mut errors))
//!     .collect();
//!
//! assert_eq!(ports, [80, 443]);
//! assert_eq!(errors.map(|e| e.len()), Some(2));
//! ```

use std::error::Error;

use crate::combine::append;
use crate::types::{MultiError, Operand};

/// Extension trait that moves the error of a `Result` into an accumulator.
pub trait ResultExt<T> {
    /// Returns the success value, or appends the error to `acc` and returns
    /// `None`.
    ///
    /// `acc` starts out as `None` and becomes `Some` on the first failure; a
    /// composite already stored there is extended in place.
    fn or_accumulate(self, acc: &mut Option<MultiError>) -> Option<T>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Error + Send + Sync + 'static,
{
    fn or_accumulate(self, acc: &mut Option<MultiError>) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(error) => {
                *acc = append(acc.take(), [Operand::new(error)]);
                None
            }
        }
    }
}
