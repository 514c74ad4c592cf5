//! Inspection of composite errors.
//!
//! [`inspect`] exposes the stored elements of an error. [`find`], [`is`] and
//! [`walk`] search a whole error tree: they follow [`Error::source`] links and,
//! whenever they meet a [`MultiError`], visit all of its leaves depth-first
//! and left to right (each leaf with its own `source` chain).
//!
//! # Examples
//!
//! ```
//! use error_fold::{append, inspect, message};
//! use std::fmt;
//!
//! #[derive(Debug, PartialEq)]
//! struct Timeout;
//!
//! impl fmt::Display for Timeout {
//!     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
//!         f.write_str("timed out")
//!     }
//! }
//!
//! impl std::error::Error for Timeout {}
//!
//! let inner = append!(message("b1"), error_fold::share(Timeout));
//! let outer = append!(message("a1"), inner).unwrap();
//!
//! assert!(inspect::is(&outer, &Timeout));
//! assert!(inspect::find::<Timeout>(&outer).is_some());
//! ```

use std::error::Error;

use crate::types::{ErrorVec, MultiError, Operand, SharedError};

/// Returns the errors held by `err`.
///
/// A composite yields its stored elements (nested composites are not
/// expanded), a leaf yields itself, and an absent value yields nothing.
///
/// # Examples
///
/// ```
/// use error_fold::{append, inspect::inspect, message, SharedError};
///
/// assert_eq!(inspect(message("x")).len(), 1);
/// assert!(inspect(None::<SharedError>).is_empty());
///
/// let errs = append(message("a"), [message("b")]);
/// let msgs: Vec<String> = inspect(errs).iter().map(ToString::to_string).collect();
/// assert_eq!(msgs, ["a", "b"]);
/// ```
pub fn inspect(err: impl Into<Operand>) -> ErrorVec<SharedError> {
    match err.into().normalize() {
        Operand::Absent | Operand::Unset => ErrorVec::new(),
        Operand::Leaf(leaf) => smallvec::smallvec![leaf],
        Operand::Multi(multi) => multi.into_errors(),
    }
}

/// Visits `err` and everything reachable from it in search order, stopping at
/// the first node for which `visit` returns `Some`.
///
/// A [`MultiError`] node is offered to `visit` itself before its leaves.
pub fn walk<'a, T, F>(err: &'a (dyn Error + 'static), visit: &mut F) -> Option<T>
where
    F: FnMut(&'a (dyn Error + 'static)) -> Option<T>,
{
    let mut cursor = Some(err);
    while let Some(current) = cursor {
        if let Some(found) = visit(current) {
            return Some(found);
        }
        if let Some(multi) = current.downcast_ref::<MultiError>() {
            return multi.leaves().find_map(|leaf| walk(&**leaf, visit));
        }
        cursor = current.source();
    }
    None
}

/// Returns the first error of type `E` found anywhere in the tree of `err`.
pub fn find<'a, E>(err: &'a (dyn Error + 'static)) -> Option<&'a E>
where
    E: Error + 'static,
{
    walk(err, &mut |current| current.downcast_ref::<E>())
}

/// Returns `true` if an error equal to `target` is found anywhere in the tree
/// of `err`.
pub fn is<E>(err: &(dyn Error + 'static), target: &E) -> bool
where
    E: Error + PartialEq + 'static,
{
    walk(err, &mut |current| current.downcast_ref::<E>().filter(|found| *found == target))
        .is_some()
}
