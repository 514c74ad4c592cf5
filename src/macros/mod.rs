//! Ergonomic macros for combining and titling errors.
//!
//! - [`macro@crate::append`], [`macro@crate::merge`] and
//!   [`macro@crate::merge_prefixed`] accept a list of operands of mixed types
//!   (leaf errors, `Option`s, composites), converting each one into an
//!   [`Operand`](crate::Operand).
//! - [`macro@crate::titled`] and [`macro@crate::prefixed`] build the title or
//!   prefix with `format!` syntax.
//!
//! # Examples
//!
//! ```
//! use error_fold::{append, message, titled, SharedError};
//!
//! let missing: Option<SharedError> = None;
//! let errs = append!(message("bad port"), missing, message("bad host"));
//!
//! let errs = titled!(errs, "config {} is invalid", "app.toml").unwrap();
//! assert_eq!(
//!     errs.to_string(),
//!     "config app.toml is invalid\n  - bad port\n  - bad host"
//! );
//! ```

/// Appends any number of operands to `seed`, see [`append`](fn@crate::append).
///
/// # Examples
///
/// ```
/// use error_fold::{append, message};
///
/// let inner = append!(message("b1"), message("b2"));
/// let outer = append!(message("a1"), inner).unwrap();
/// assert_eq!(outer.len(), 2);
/// ```
#[macro_export]
macro_rules! append {
    ($seed:expr $(, $err:expr)* $(,)?) => {{
        let seed = $seed;
        let errs: ::std::vec::Vec<$crate::Operand> = ::std::vec![$($crate::Operand::from($err)),*];
        $crate::append(seed, errs)
    }};
}

/// Merges any number of operands into `seed`, see [`merge`](fn@crate::merge).
///
/// # Examples
///
/// ```
/// use error_fold::{merge, message};
///
/// let inner = merge!(message("b1"), message("b2"));
/// let outer = merge!(message("a1"), inner).unwrap();
/// assert_eq!(outer.len(), 3);
/// ```
#[macro_export]
macro_rules! merge {
    ($seed:expr $(, $err:expr)* $(,)?) => {{
        let seed = $seed;
        let errs: ::std::vec::Vec<$crate::Operand> = ::std::vec![$($crate::Operand::from($err)),*];
        $crate::merge(seed, errs)
    }};
}

/// Merges any number of operands into `seed`, prefixing each one, see
/// [`merge_prefixed`](fn@crate::merge_prefixed).
///
/// # Examples
///
/// ```
/// use error_fold::{merge_prefixed, message, SharedError};
///
/// let errs = merge_prefixed!(None::<SharedError>, "user 7: ", message("no email")).unwrap();
/// assert_eq!(errs.errors()[0].to_string(), "user 7: no email");
/// ```
#[macro_export]
macro_rules! merge_prefixed {
    ($seed:expr, $prefix:expr $(, $err:expr)* $(,)?) => {{
        let seed = $seed;
        let errs: ::std::vec::Vec<$crate::Operand> = ::std::vec![$($crate::Operand::from($err)),*];
        $crate::merge_prefixed(seed, $prefix, errs)
    }};
}

/// Titles an error with a `format!`-style title, see
/// [`MultiError::with_title`](crate::MultiError::with_title).
///
/// # Examples
///
/// ```
/// use error_fold::{message, titled};
///
/// let err = titled!(message("timeout"), "{} of {} jobs failed", 1, 3).unwrap();
/// assert_eq!(err.to_string(), "1 of 3 jobs failed\n  - timeout");
/// ```
#[macro_export]
macro_rules! titled {
    ($err:expr, $($arg:tt)*) => {
        $crate::MultiError::with_title_fmt($err, ::core::format_args!($($arg)*))
    };
}

/// Prefixes every line of an error with a `format!`-style prefix, see
/// [`MultiError::with_prefix`](crate::MultiError::with_prefix).
///
/// # Examples
///
/// ```
/// use error_fold::{message, prefixed};
///
/// let err = prefixed!(message("timeout"), "[job {}] ", 4).unwrap();
/// assert_eq!(err.to_string(), "[job 4] timeout");
/// ```
#[macro_export]
macro_rules! prefixed {
    ($err:expr, $($arg:tt)*) => {
        $crate::MultiError::with_prefix_fmt($err, ::core::format_args!($($arg)*))
    };
}
