//! Accumulate many independent failures into a single [`MultiError`], render it
//! for humans, and inspect every contained error as one depth-first chain.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `error_fold::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Collecting Errors
//!
//! ```
//! use error_fold::{append, message, MultiError};
//!
//! let mut errs: Option<MultiError> = None;
//! for (i, input) in ["7", "x", "9", "y"].iter().enumerate() {
//!     if input.parse::<u8>().is_err() {
//!         errs = append(errs, [message(format!("item {i}: not a number"))]);
//!     }
//! }
//!
//! let errs = errs.unwrap();
//! assert_eq!(
//!     errs.to_string(),
//!     "2 errors occurred:\n  - item 1: not a number\n  - item 3: not a number"
//! );
//! ```
//!
//! ## Titles and Prefixes
//!
//! ```
//! use error_fold::{merge_prefixed, message, MultiError, SharedError};
//!
//! let row = merge_prefixed(None::<SharedError>, "row 2: ", [message("missing id")]);
//! let file = MultiError::with_title(row, "users.csv is invalid").unwrap();
//!
//! assert_eq!(file.to_string(), "users.csv is invalid\n  - row 2: missing id");
//! ```
//!
//! ## Depth-First Inspection
//!
//! ```
//! use error_fold::{append, message};
//!
//! let inner = append!(message("b1"), message("b2"));
//! let outer = append!(message("a1"), inner, message("a2")).unwrap();
//!
//! let leaves: Vec<String> = outer.chain().into_iter().flatten().map(|e| e.to_string()).collect();
//! assert_eq!(leaves, ["a1", "b1", "b2", "a2"]);
//! ```

/// Functions that build or extend a `MultiError`
pub mod combine;
/// Search and inspection of error trees
pub mod inspect;
/// Macros for combining and titling errors
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Extension traits for accumulating errors
pub mod traits;
/// MultiError, its chain adapter and formatters
pub mod types;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use combine::*;
pub use traits::*;
pub use types::error_formatter::{
    default_formatter, reset_default_formatter, set_default_formatter,
    set_default_formatter_shared, ErrorFormatter, ListFormatter, PrefixedListFormatter,
    SharedFormatter, TitledListFormatter, NO_ERRORS_MESSAGE,
};
pub use types::{
    message, share, BoxError, Chain, ChainIter, ErrorVec, Leaves, MultiError, MultiResult,
    Operand, PrefixedError, SharedError,
};
