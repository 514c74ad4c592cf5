//! Composite error that collects many independent failures.
//!
//! A [`MultiError`] keeps its errors in insertion order together with an
//! optional formatter override. It is usually built through
//! [`append`](crate::append) or [`merge`](crate::merge) rather than by hand.

use std::error::Error;
use std::fmt::{self, Debug, Display};
use std::sync::Arc;

use smallvec::smallvec;

use crate::types::error_formatter::{
    default_formatter, ErrorFormatter, PrefixedListFormatter, SharedFormatter,
    TitledListFormatter,
};
use crate::types::{ErrorVec, Operand, PrefixedError, SharedError};

/// Error type that tracks multiple errors and reports them as one.
///
/// Displaying a `MultiError` runs its own formatter if one is set, otherwise the
/// process-wide [`default_formatter`]. An empty `MultiError` displays
/// `"no errors occurred"`, but the combination functions never hand one out:
/// they return `None` instead.
///
/// [`Error::source`] only reports the left-most leaf, so a plain `source()`
/// loop sees one leaf and then that leaf's own causes. Use
/// [`MultiError::chain`] or [`MultiError::leaves`] to visit every leaf, and
/// [`inspect::find`](crate::inspect::find) or [`inspect::is`](crate::inspect::is)
/// to search the whole tree.
///
/// # Examples
///
/// ```
/// use error_fold::{message, MultiError};
///
/// let mut errs = MultiError::new();
/// errs.push(message("name is empty"));
/// errs.push(None::<error_fold::SharedError>);
///
/// assert_eq!(errs.len(), 1);
/// assert_eq!(errs.to_string(), "1 error occurred:\n  - name is empty");
/// ```
#[must_use]
#[derive(Clone, Default)]
pub struct MultiError {
    pub(crate) formatter: Option<SharedFormatter>,
    pub(crate) errors: ErrorVec<SharedError>,
}

impl MultiError {
    /// Creates an empty composite without a formatter override.
    #[inline]
    pub fn new() -> Self {
        Self { formatter: None, errors: ErrorVec::new() }
    }

    /// Creates an empty composite rendered by `formatter`.
    #[inline]
    pub fn with_formatter<F>(formatter: F) -> Self
    where
        F: ErrorFormatter + 'static,
    {
        Self { formatter: Some(Arc::new(formatter)), errors: ErrorVec::new() }
    }

    /// Returns the stored errors in insertion order.
    #[inline]
    pub fn errors(&self) -> &[SharedError] {
        &self.errors
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, SharedError> {
        self.errors.iter()
    }

    /// Consumes the composite and returns the stored errors.
    #[inline]
    pub fn into_errors(self) -> ErrorVec<SharedError> {
        self.errors
    }

    /// Returns the formatter override, if any.
    #[inline]
    pub fn formatter(&self) -> Option<&SharedFormatter> {
        self.formatter.as_ref()
    }

    /// Sets (or overrides) the formatter used by `Display`.
    #[inline]
    pub fn set_formatter<F>(&mut self, formatter: F) -> &mut Self
    where
        F: ErrorFormatter + 'static,
    {
        self.formatter = Some(Arc::new(formatter));
        self
    }

    /// Sets (or overrides) the formatter with an already shared one.
    #[inline]
    pub fn set_shared_formatter(&mut self, formatter: SharedFormatter) -> &mut Self {
        self.formatter = Some(formatter);
        self
    }

    /// Drops the formatter override so the process-wide default applies again.
    #[inline]
    pub fn clear_formatter(&mut self) -> &mut Self {
        self.formatter = None;
        self
    }

    /// Appends one operand with [`append`](crate::append) semantics.
    ///
    /// Absent values and empty composites are ignored; a non-empty composite is
    /// stored as a single nested element.
    #[inline]
    pub fn push(&mut self, err: impl Into<Operand>) -> &mut Self {
        self.absorb(err.into(), false, "");
        self
    }

    /// Returns `Some(self)` if at least one error is stored, `None` otherwise.
    ///
    /// Useful at the end of an accumulation loop, so callers only need to
    /// check for `Some`.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_fold::MultiError;
    ///
    /// assert!(MultiError::new().error_or_none().is_none());
    /// ```
    #[inline]
    pub fn error_or_none(self) -> Option<Self> {
        if self.errors.is_empty() {
            None
        } else {
            Some(self)
        }
    }

    /// Returns `Ok(())` if no error is stored, `Err(self)` otherwise.
    #[inline]
    pub fn into_result(self) -> Result<(), Self> {
        match self.error_or_none() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Wraps `err` in a composite rendered under `title`.
    ///
    /// A leaf becomes a one-element composite, a composite keeps its errors and
    /// only gets its formatter replaced. `None::<SharedError>` yields `None`,
    /// while `None::<MultiError>` yields an empty titled accumulator.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_fold::{append, message, MultiError};
    ///
    /// let acc = MultiError::with_title(None::<MultiError>, "config invalid");
    /// assert_eq!(acc.as_ref().map(MultiError::len), Some(0));
    ///
    /// let acc = append(acc, [message("port missing")]).unwrap();
    /// assert_eq!(acc.to_string(), "config invalid\n  - port missing");
    /// ```
    pub fn with_title(err: impl Into<Operand>, title: impl Into<String>) -> Option<Self> {
        Self::reformat(err.into(), Arc::new(TitledListFormatter::new(title)))
    }

    /// Like [`MultiError::with_title`], with a title built from format arguments.
    /// See also the [`titled!`](crate::titled) macro.
    #[inline]
    pub fn with_title_fmt(err: impl Into<Operand>, args: fmt::Arguments<'_>) -> Option<Self> {
        Self::with_title(err, fmt::format(args))
    }

    /// Wraps `err` in a composite rendering each error on a line starting with
    /// `prefix`. Absent inputs are handled as in [`MultiError::with_title`].
    ///
    /// # Examples
    ///
    /// ```
    /// use error_fold::{message, MultiError};
    ///
    /// let err = MultiError::with_prefix(message("bad\ninput"), "error: ").unwrap();
    /// assert_eq!(err.to_string(), "error: bad\n       input");
    /// ```
    pub fn with_prefix(err: impl Into<Operand>, prefix: impl Into<String>) -> Option<Self> {
        Self::reformat(err.into(), Arc::new(PrefixedListFormatter::new(prefix)))
    }

    /// Like [`MultiError::with_prefix`], with a prefix built from format arguments.
    /// See also the [`prefixed!`](crate::prefixed) macro.
    #[inline]
    pub fn with_prefix_fmt(err: impl Into<Operand>, args: fmt::Arguments<'_>) -> Option<Self> {
        Self::with_prefix(err, fmt::format(args))
    }

    fn reformat(err: Operand, formatter: SharedFormatter) -> Option<Self> {
        let mut multi = match err.normalize() {
            Operand::Absent => return None,
            Operand::Unset => Self::new(),
            Operand::Leaf(leaf) => Self { formatter: None, errors: smallvec![leaf] },
            Operand::Multi(multi) => multi,
        };
        multi.formatter = Some(formatter);
        Some(multi)
    }

    /// Adds one operand to the stored errors and reports whether anything was
    /// stored.
    ///
    /// A non-empty `prefix` wraps every stored error in a [`PrefixedError`].
    pub(crate) fn absorb(&mut self, err: Operand, flatten: bool, prefix: &str) -> bool {
        match err.normalize() {
            Operand::Absent | Operand::Unset => false,
            Operand::Multi(multi) if multi.is_empty() => false,
            Operand::Multi(multi) if flatten => {
                self.errors.reserve(multi.errors.len());
                for inner in multi.errors {
                    self.errors.push(wrap_prefix(inner, prefix));
                }
                true
            }
            Operand::Multi(multi) => {
                self.errors.push(wrap_prefix(Arc::new(multi), prefix));
                true
            }
            Operand::Leaf(leaf) => {
                self.errors.push(wrap_prefix(leaf, prefix));
                true
            }
        }
    }
}

fn wrap_prefix(err: SharedError, prefix: &str) -> SharedError {
    if prefix.is_empty() {
        err
    } else {
        Arc::new(PrefixedError::new(prefix, err))
    }
}

impl Display for MultiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match &self.formatter {
            Some(formatter) => formatter.format_errors(&self.errors),
            None => default_formatter().format_errors(&self.errors),
        };
        f.write_str(&text)
    }
}

impl Debug for MultiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultiError")
            .field("errors", &self.errors)
            .field("custom_formatter", &self.formatter.is_some())
            .finish()
    }
}

impl Error for MultiError {
    /// Returns the left-most leaf error, descending into nested composites.
    ///
    /// The remaining leaves are reachable through [`MultiError::chain`] or the
    /// search helpers in [`inspect`](crate::inspect).
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.leaves().next().map(|leaf| &**leaf as &(dyn Error + 'static))
    }
}

impl From<MultiError> for SharedError {
    #[inline]
    fn from(multi: MultiError) -> Self {
        Arc::new(multi)
    }
}

impl<T> Extend<T> for MultiError
where
    T: Into<Operand>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for err in iter {
            self.absorb(err.into(), false, "");
        }
    }
}

impl<T> FromIterator<T> for MultiError
where
    T: Into<Operand>,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut multi = Self::new();
        multi.extend(iter);
        multi
    }
}

impl IntoIterator for MultiError {
    type Item = SharedError;
    type IntoIter = smallvec::IntoIter<[SharedError; 2]>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a MultiError {
    type Item = &'a SharedError;
    type IntoIter = core::slice::Iter<'a, SharedError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for MultiError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let errors: Vec<String> = self.errors.iter().map(ToString::to_string).collect();
        let mut state = serializer.serialize_struct("MultiError", 2)?;
        state.serialize_field("message", &self.to_string())?;
        state.serialize_field("errors", &errors)?;
        state.end()
    }
}
