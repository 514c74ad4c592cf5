//! Tracing integration for error-fold.
//!
//! This module reports the contents of a [`MultiError`] through the `tracing`
//! ecosystem, one event per leaf error.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! error-fold = { version = "0.1", features = ["tracing"] }
//! ```

use crate::types::MultiError;

/// Emits one `ERROR` event per leaf of `errors`, in depth-first order.
///
/// Each event carries the leaf's position (`index`), the number of leaves
/// (`total`) and the leaf message as the `error` field.
///
/// # Example
///
/// ```rust,ignore
/// use error_fold::{append, message, tracing_ext::log_errors};
///
/// if let Some(errors) = append(message("a"), [message("b")]) {
///     log_errors(&errors);
/// }
/// ```
pub fn log_errors(errors: &MultiError) {
    let total = errors.leaves().count();
    for (index, leaf) in errors.leaves().enumerate() {
        tracing::error!(index, total, error = %leaf, "accumulated error");
    }
}

/// Like [`log_errors`], inside a span named `errors` carrying `label`.
pub fn log_errors_in(label: &str, errors: &MultiError) {
    let span = tracing::error_span!("errors", label);
    let _entered = span.enter();
    log_errors(errors);
}
