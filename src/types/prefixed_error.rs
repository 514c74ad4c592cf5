use core::fmt::{self, Display};
use std::error::Error;

use crate::types::SharedError;

/// An error displayed as `prefix` followed by the wrapped error's message.
///
/// Produced by [`merge_prefixed`](crate::merge_prefixed). The wrapped error
/// stays reachable through [`Error::source`], so searches still find it.
///
/// # Examples
///
/// ```
/// use error_fold::{message, PrefixedError};
/// use std::error::Error;
///
/// let err = PrefixedError::new("row 3: ", message("missing id"));
/// assert_eq!(err.to_string(), "row 3: missing id");
/// assert_eq!(err.source().unwrap().to_string(), "missing id");
/// ```
#[derive(Debug, Clone)]
pub struct PrefixedError {
    prefix: String,
    inner: SharedError,
}

impl PrefixedError {
    #[inline]
    pub fn new(prefix: impl Into<String>, inner: SharedError) -> Self {
        Self { prefix: prefix.into(), inner }
    }

    #[inline]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    #[inline]
    pub fn inner(&self) -> &SharedError {
        &self.inner
    }

    #[inline]
    pub fn into_inner(self) -> SharedError {
        self.inner
    }
}

impl Display for PrefixedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.prefix, self.inner)
    }
}

impl Error for PrefixedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&*self.inner)
    }
}
