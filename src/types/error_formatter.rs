//! Formatting strategies that render an error list into display text.
//!
//! A formatter is a pure function from `&[SharedError]` to a `String`. The crate
//! ships three strategies and accepts any closure with the same shape:
//!
//! - [`ListFormatter`] - `"N errors occurred:"` followed by a bullet list
//! - [`TitledListFormatter`] - a caller-supplied title followed by a bullet list
//! - [`PrefixedListFormatter`] - one line per error, each starting with a prefix
//!
//! Every strategy renders [`NO_ERRORS_MESSAGE`] for an empty list.
//!
//! # Examples
//!
//! ```
//! use error_fold::types::error_formatter::{ErrorFormatter, TitledListFormatter};
//!
//! let errors = vec![error_fold::message("disk full")];
//! let text = TitledListFormatter::new("upload failed").format_errors(&errors);
//! assert_eq!(text, "upload failed\n  - disk full");
//! ```

use std::sync::{Arc, LazyLock, PoisonError, RwLock};

use crate::types::SharedError;

/// Text rendered for an empty error list.
pub const NO_ERRORS_MESSAGE: &str = "no errors occurred";

const BULLET: &str = "\n  - ";
const BULLET_CONTINUATION: &str = "\n    ";

/// Converts an ordered error list into a human readable string.
///
/// Implementations must not fail and must render [`NO_ERRORS_MESSAGE`] when
/// `errors` is empty.
pub trait ErrorFormatter: Send + Sync {
    fn format_errors(&self, errors: &[SharedError]) -> String;
}

impl<F> ErrorFormatter for F
where
    F: Fn(&[SharedError]) -> String + Send + Sync,
{
    #[inline]
    fn format_errors(&self, errors: &[SharedError]) -> String {
        self(errors)
    }
}

/// Shared handle to a formatter, as stored on a [`MultiError`](crate::MultiError).
pub type SharedFormatter = Arc<dyn ErrorFormatter>;

/// Puts every error on its own indented line under a generic
/// `"N error(s) occurred:"` title. This is the initial default formatter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListFormatter;

impl ErrorFormatter for ListFormatter {
    fn format_errors(&self, errors: &[SharedError]) -> String {
        if errors.is_empty() {
            return NO_ERRORS_MESSAGE.into();
        }

        let plural = if errors.len() == 1 { "error" } else { "errors" };
        let title = format!("{} {} occurred:", errors.len(), plural);
        titled_list(&title, errors)
    }
}

/// Puts every error on its own indented `"  - "` line under `title`.
///
/// Continuation lines of multi-line messages are indented by four spaces so they
/// stay under their bullet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitledListFormatter {
    title: String,
}

impl TitledListFormatter {
    #[inline]
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into() }
    }

    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }
}

impl ErrorFormatter for TitledListFormatter {
    fn format_errors(&self, errors: &[SharedError]) -> String {
        if errors.is_empty() {
            return NO_ERRORS_MESSAGE.into();
        }
        titled_list(&self.title, errors)
    }
}

fn titled_list(title: &str, errors: &[SharedError]) -> String {
    let mut result = String::with_capacity(title.len() + errors.len() * 32);
    result.push_str(title);
    for err in errors {
        result.push_str(BULLET);
        result.push_str(&err.to_string().replace('\n', BULLET_CONTINUATION));
    }
    result
}

/// Puts every error on its own line starting with `prefix`.
///
/// Continuation lines of multi-line messages are indented by the character
/// width of the prefix, so they line up with the text after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixedListFormatter {
    prefix: String,
    continuation: String,
}

impl PrefixedListFormatter {
    pub fn new(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        let mut continuation = String::from("\n");
        continuation.extend(core::iter::repeat(' ').take(prefix.chars().count()));
        Self { prefix, continuation }
    }

    #[inline]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl ErrorFormatter for PrefixedListFormatter {
    fn format_errors(&self, errors: &[SharedError]) -> String {
        if errors.is_empty() {
            return NO_ERRORS_MESSAGE.into();
        }

        let mut result = String::with_capacity(errors.len() * (self.prefix.len() + 32));
        for (i, err) in errors.iter().enumerate() {
            if i > 0 {
                result.push('\n');
            }
            result.push_str(&self.prefix);
            result.push_str(&err.to_string().replace('\n', &self.continuation));
        }
        result
    }
}

static DEFAULT_FORMATTER: RwLock<Option<SharedFormatter>> = RwLock::new(None);
static LIST_FORMATTER: LazyLock<SharedFormatter> = LazyLock::new(|| Arc::new(ListFormatter));

/// Returns the process-wide formatter used by errors without their own formatter.
///
/// Until [`set_default_formatter`] is called this is [`ListFormatter`].
pub fn default_formatter() -> SharedFormatter {
    let guard = DEFAULT_FORMATTER.read().unwrap_or_else(PoisonError::into_inner);
    match guard.as_ref() {
        Some(formatter) => Arc::clone(formatter),
        None => Arc::clone(&LIST_FORMATTER),
    }
}

/// Replaces the process-wide default formatter.
///
/// This is global configuration: it affects every later display of a
/// [`MultiError`](crate::MultiError) that has no formatter of its own. Set it
/// once during start-up.
///
/// # Examples
///
/// ```
/// use error_fold::types::error_formatter::{reset_default_formatter, set_default_formatter};
/// use error_fold::SharedError;
///
/// set_default_formatter(|errs: &[SharedError]| format!("{} problems", errs.len()));
/// reset_default_formatter();
/// ```
pub fn set_default_formatter<F>(formatter: F)
where
    F: ErrorFormatter + 'static,
{
    set_default_formatter_shared(Arc::new(formatter));
}

/// Like [`set_default_formatter`], for an already shared formatter.
pub fn set_default_formatter_shared(formatter: SharedFormatter) {
    let mut guard = DEFAULT_FORMATTER.write().unwrap_or_else(PoisonError::into_inner);
    *guard = Some(formatter);
}

/// Restores [`ListFormatter`] as the process-wide default.
pub fn reset_default_formatter() {
    let mut guard = DEFAULT_FORMATTER.write().unwrap_or_else(PoisonError::into_inner);
    *guard = None;
}
