use std::error::Error;
use std::sync::Arc;

use crate::types::{BoxError, MultiError, SharedError};

/// A value handed to the combination functions.
///
/// Every input is either nothing at all, a composite, or an opaque leaf error.
/// Two kinds of "nothing" are kept apart:
///
/// * [`Operand::Absent`] - no error value, e.g. `None::<SharedError>`.
/// * [`Operand::Unset`] - an empty composite handle, `None::<MultiError>`.
///   [`MultiError::with_title`] and [`MultiError::with_prefix`] turn it into
///   an empty, formatted accumulator instead of returning `None`.
///
/// # Examples
///
/// ```
/// use error_fold::{message, MultiError, Operand};
///
/// assert!(matches!(Operand::from(None::<MultiError>), Operand::Unset));
/// assert!(matches!(Operand::from(message("x")), Operand::Leaf(_)));
/// assert!(matches!(Operand::from(MultiError::new()), Operand::Multi(_)));
/// ```
#[derive(Debug, Clone, Default)]
pub enum Operand {
    #[default]
    Absent,
    Unset,
    Leaf(SharedError),
    Multi(MultiError),
}

impl Operand {
    /// Wraps any error, recognising a [`MultiError`] as a composite.
    pub fn new<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        let boxed: BoxError = Box::new(error);
        match boxed.downcast::<MultiError>() {
            Ok(multi) => Self::Multi(*multi),
            Err(other) => Self::Leaf(Arc::from(other)),
        }
    }

    /// Returns `true` for [`Operand::Absent`] and [`Operand::Unset`].
    #[inline]
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent | Self::Unset)
    }

    /// Re-checks a [`Operand::Leaf`] built by hand, so a composite behind a
    /// leaf handle still follows the composite rules.
    #[inline]
    pub(crate) fn normalize(self) -> Self {
        match self {
            Self::Leaf(leaf) => Self::classify(leaf),
            other => other,
        }
    }

    /// Classifies a shared handle. A handle pointing at a [`MultiError`] is
    /// reported as a composite sharing the same underlying errors.
    pub(crate) fn classify(error: SharedError) -> Self {
        match error.downcast_ref::<MultiError>() {
            Some(multi) => Self::Multi(multi.clone()),
            None => Self::Leaf(error),
        }
    }
}

impl From<SharedError> for Operand {
    #[inline]
    fn from(error: SharedError) -> Self {
        Self::classify(error)
    }
}

impl From<BoxError> for Operand {
    fn from(error: BoxError) -> Self {
        match error.downcast::<MultiError>() {
            Ok(multi) => Self::Multi(*multi),
            Err(other) => Self::Leaf(Arc::from(other)),
        }
    }
}

impl From<Option<SharedError>> for Operand {
    #[inline]
    fn from(error: Option<SharedError>) -> Self {
        error.map_or(Self::Absent, Self::from)
    }
}

impl From<Option<BoxError>> for Operand {
    #[inline]
    fn from(error: Option<BoxError>) -> Self {
        error.map_or(Self::Absent, Self::from)
    }
}

impl From<MultiError> for Operand {
    #[inline]
    fn from(multi: MultiError) -> Self {
        Self::Multi(multi)
    }
}

impl From<Option<MultiError>> for Operand {
    #[inline]
    fn from(multi: Option<MultiError>) -> Self {
        multi.map_or(Self::Unset, Self::Multi)
    }
}

impl From<&str> for Operand {
    #[inline]
    fn from(msg: &str) -> Self {
        Self::Leaf(crate::types::message(msg))
    }
}

impl From<String> for Operand {
    #[inline]
    fn from(msg: String) -> Self {
        Self::Leaf(crate::types::message(msg))
    }
}
