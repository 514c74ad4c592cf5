use std::error::Error;
use std::fmt;

use error_fold::{message, MultiError, SharedError};

/// Unit error used as a search target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sentinel;

impl fmt::Display for Sentinel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("sentinel")
    }
}

impl Error for Sentinel {}

/// Error carrying a code, used to test type based lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodedError {
    pub code: u16,
}

impl fmt::Display for CodedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "code {}", self.code)
    }
}

impl Error for CodedError {}

/// Error that wraps another one as its source.
#[derive(Debug)]
pub struct Wrapped {
    pub context: &'static str,
    pub inner: SharedError,
}

impl fmt::Display for Wrapped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.context, self.inner)
    }
}

impl Error for Wrapped {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&*self.inner)
    }
}

pub fn messages(errors: &[SharedError]) -> Vec<String> {
    errors.iter().map(ToString::to_string).collect()
}

/// Builds `[a1, a2, [b1, <b2>, [c1]], a3]`, using `b2` as the second element
/// of the middle composite. Returns the outer, middle and inner composites.
pub fn nested_tree(b2: SharedError) -> (MultiError, MultiError, MultiError) {
    let inner = error_fold::append(message("c1"), Vec::<SharedError>::new())
        .expect("inner composite");
    let middle = error_fold::append!(message("b1"), b2, inner.clone())
        .expect("middle composite");
    let outer = error_fold::append!(message("a1"), message("a2"), middle.clone(), message("a3"))
        .expect("outer composite");
    (outer, middle, inner)
}
