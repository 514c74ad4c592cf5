//! Functions that build or extend a [`MultiError`].
//!
//! All three entry points share one algorithm:
//!
//! 1. A composite `seed` is reused (its formatter is kept), anything else
//!    starts a fresh accumulator; a leaf `seed` becomes its first element.
//! 2. Absent operands and empty composites are skipped.
//! 3. Composite operands are either nested as one element ([`append`]) or
//!    flattened into their elements ([`merge`], [`merge_prefixed`]).
//! 4. If nothing was collected the result is `None`.
//!
//! # Examples
//!
//! ```
//! use error_fold::{append, merge, message};
//!
//! let batch = append(message("row 1"), [message("row 2")]);
//!
//! let nested = append(message("header"), [batch.clone()]).unwrap();
//! assert_eq!(nested.len(), 2);
//!
//! let flat = merge(message("header"), [batch]).unwrap();
//! assert_eq!(flat.len(), 3);
//! ```

use crate::types::{MultiError, Operand};

/// Combines `seed` and `errs` into one composite, keeping nested composites
/// as single elements.
///
/// Returns `None` if there is no error at all. If `seed` is a [`MultiError`] it
/// is extended and returned, keeping its formatter.
///
/// # Examples
///
/// ```
/// use error_fold::{append, message, SharedError};
///
/// let none = append(None::<SharedError>, [None::<SharedError>]);
/// assert!(none.is_none());
///
/// let errs = append(None::<SharedError>, [Some(message("a")), None, Some(message("b"))]).unwrap();
/// assert_eq!(errs.len(), 2);
/// ```
#[inline]
pub fn append<S, I>(seed: S, errs: I) -> Option<MultiError>
where
    S: Into<Operand>,
    I: IntoIterator,
    I::Item: Into<Operand>,
{
    combine(false, seed, "", errs)
}

/// Combines `seed` and `errs` into one composite, replacing every composite
/// in `errs` by its own elements (one level deep).
///
/// Returns `None` if there is no error at all. If `seed` is a [`MultiError`] it
/// is extended and returned, keeping its formatter.
#[inline]
pub fn merge<S, I>(seed: S, errs: I) -> Option<MultiError>
where
    S: Into<Operand>,
    I: IntoIterator,
    I::Item: Into<Operand>,
{
    combine(true, seed, "", errs)
}

/// Like [`merge`], but every error taken from `errs` is wrapped in a
/// [`PrefixedError`](crate::PrefixedError) displaying `prefix` in front of it.
///
/// Errors already stored in a composite `seed` are left as they are. Prefixes
/// compose: merging an already prefixed error again puts the new prefix in
/// front of the old one.
///
/// # Examples
///
/// ```
/// use error_fold::{merge_prefixed, message, SharedError};
///
/// let row = merge_prefixed(None::<SharedError>, "row 3: ", [message("bad id")]);
/// let file = merge_prefixed(None::<SharedError>, "users.csv: ", [row]).unwrap();
///
/// assert_eq!(file.errors()[0].to_string(), "users.csv: row 3: bad id");
/// ```
#[inline]
pub fn merge_prefixed<S, I>(seed: S, prefix: &str, errs: I) -> Option<MultiError>
where
    S: Into<Operand>,
    I: IntoIterator,
    I::Item: Into<Operand>,
{
    combine(true, seed, prefix, errs)
}

/// Shared implementation of [`append`], [`merge`] and [`merge_prefixed`].
///
/// A non-empty `prefix` wraps every error taken from `errs`; the seed is never
/// wrapped.
pub fn combine<S, I>(flatten: bool, seed: S, prefix: &str, errs: I) -> Option<MultiError>
where
    S: Into<Operand>,
    I: IntoIterator,
    I::Item: Into<Operand>,
{
    let errs = errs.into_iter();
    let mut result = match seed.into().normalize() {
        Operand::Multi(multi) => multi,
        Operand::Absent | Operand::Unset => MultiError::new(),
        Operand::Leaf(leaf) => {
            let mut multi = MultiError::new();
            multi.errors.reserve(errs.size_hint().0 + 1);
            multi.errors.push(leaf);
            multi
        }
    };

    #[cfg(not(feature = "tracing"))]
    for err in errs {
        result.absorb(err.into(), flatten, prefix);
    }

    #[cfg(feature = "tracing")]
    {
        let skipped = errs
            .map(|err| result.absorb(err.into(), flatten, prefix))
            .filter(|stored| !stored)
            .count();
        tracing::trace!(flatten, prefix, skipped, total = result.len(), "combined errors");
    }

    result.error_or_none()
}
