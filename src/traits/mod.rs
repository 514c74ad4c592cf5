//! Extension traits for accumulating errors.
//!
//! - [`ResultExt`]: moves the error of a `Result` into an `Option<MultiError>`
//!   accumulator so a loop can keep going after a failure.

pub mod result_ext;

pub use result_ext::ResultExt;
