//! Convenience re-exports for common usage patterns.
//!
//! This prelude module provides the most commonly used items for quick starts.
//! Import everything with:
//!
//! ```
//! use error_fold::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`append!`], [`merge!`], [`merge_prefixed!`], [`titled!`], [`prefixed!`]
//! - **Functions**: [`append()`], [`merge()`], [`merge_prefixed()`], [`message`]
//! - **Types**: [`MultiError`], [`Operand`], [`SharedError`], [`MultiResult`]
//! - **Traits**: [`ResultExt`]
//!
//! # Examples
//!
//! ```
//! use error_fold::prelude::*;
//!
//! fn check(name: &str, age: i32) -> MultiResult<()> {
//!     let mut errs = MultiError::new();
//!     if name.is_empty() {
//!         errs.push("name is empty");
//!     }
//!     if age < 0 {
//!         errs.push(format!("age {age} is negative"));
//!     }
//!     errs.into_result()
//! }
//!
//! assert!(check("", -1).is_err());
//! assert!(check("ann", 30).is_ok());
//! ```

// Macros
pub use crate::{append, merge, merge_prefixed, prefixed, titled};

// Functions
pub use crate::types::message;

// Core types
pub use crate::types::{MultiError, MultiResult, Operand, SharedError};

// Traits
pub use crate::traits::ResultExt;
