//! Depth-first traversal over nested [`MultiError`]s.
//!
//! A [`Chain`] stands for "the current leaf error plus everything after it".
//! Stepping with [`Chain::next_cause`] visits every leaf of a composite tree
//! left to right, descending into nested composites before moving on:
//!
//! ```text
//! [a1, a2, [b1, b2, [c1]], a3]  =>  a1, a2, b1, b2, c1, a3
//! ```
//!
//! A chain owns copies of the error handles it still has to visit, so errors
//! appended to the source composite after the chain was built are not seen.

use std::error::Error;
use std::fmt::{self, Display};

use crate::inspect;
use crate::types::{MultiError, SharedError};

/// Remaining errors of a depth-first walk, current leaf first.
///
/// Never empty, and the current element is never a [`MultiError`].
///
/// # Examples
///
/// ```
/// use error_fold::{append, message};
///
/// let inner = append!(message("b1"), message("b2"));
/// let outer = append!(message("a1"), inner, message("a2")).unwrap();
///
/// let mut chain = outer.chain();
/// let mut seen = Vec::new();
/// while let Some(current) = chain {
///     seen.push(current.to_string());
///     chain = current.next_cause();
/// }
/// assert_eq!(seen, ["a1", "b1", "b2", "a2"]);
/// ```
#[derive(Debug, Clone)]
pub struct Chain {
    // Stored back to front: the current leaf is the last element.
    stack: Vec<SharedError>,
}

impl Chain {
    fn from_slice(errors: &[SharedError]) -> Option<Self> {
        let mut chain = Self { stack: errors.iter().rev().cloned().collect() };
        chain.descend().then_some(chain)
    }

    /// Expands composites at the front until a leaf is current. Returns `false`
    /// if nothing is left.
    fn descend(&mut self) -> bool {
        while let Some(top) = self.stack.last() {
            let Some(multi) = top.downcast_ref::<MultiError>() else {
                return true;
            };
            let nested: Vec<SharedError> = multi.errors.iter().rev().cloned().collect();
            self.stack.pop();
            self.stack.extend(nested);
        }
        false
    }

    /// Returns the current leaf error.
    #[inline]
    pub fn leaf(&self) -> &SharedError {
        // `descend` keeps at least one element on the stack.
        &self.stack[self.stack.len() - 1]
    }

    /// Number of not yet visited elements, the current leaf included.
    ///
    /// Nested composites count as one element until they are reached.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.stack.len()
    }

    /// Moves past the current leaf. Returns `false` when the current leaf is
    /// the last one; the current leaf stays in place in that case.
    pub fn advance(&mut self) -> bool {
        if self.stack.len() <= 1 {
            return false;
        }
        let current = self.stack.pop();
        if self.descend() {
            return true;
        }
        // Only empty composites were left behind the current leaf.
        self.stack.extend(current);
        false
    }

    /// Returns the chain that starts at the next leaf, or `None` after the
    /// last leaf.
    pub fn next_cause(&self) -> Option<Self> {
        let mut next = self.clone();
        next.advance().then_some(next)
    }

    /// Returns `true` if the current leaf, or an error it wraps, equals `target`.
    ///
    /// Only the current leaf is tested. Walk the chain with
    /// [`next_cause`](Chain::next_cause), or use [`inspect::is`], to test
    /// every leaf.
    pub fn is<E>(&self, target: &E) -> bool
    where
        E: Error + PartialEq + 'static,
    {
        inspect::is(self.leaf_error(), target)
    }

    /// Views the current leaf, or an error it wraps, as `E`.
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: Error + 'static,
    {
        inspect::find::<E>(self.leaf_error())
    }

    #[inline]
    fn leaf_error(&self) -> &(dyn Error + 'static) {
        &**self.leaf()
    }
}

impl Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&**self.leaf(), f)
    }
}

impl Error for Chain {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.leaf().source()
    }
}

impl IntoIterator for Chain {
    type Item = SharedError;
    type IntoIter = ChainIter;

    fn into_iter(self) -> Self::IntoIter {
        ChainIter { chain: Some(self) }
    }
}

/// Owning iterator over the leaves of a [`Chain`], in depth-first order.
#[derive(Debug, Clone)]
pub struct ChainIter {
    chain: Option<Chain>,
}

impl Iterator for ChainIter {
    type Item = SharedError;

    fn next(&mut self) -> Option<Self::Item> {
        let chain = self.chain.as_mut()?;
        let leaf = chain.leaf().clone();
        if !chain.advance() {
            self.chain = None;
        }
        Some(leaf)
    }
}

/// Borrowing depth-first iterator over the leaves of a [`MultiError`].
///
/// Created by [`MultiError::leaves`].
#[derive(Debug, Clone)]
pub struct Leaves<'a> {
    stack: Vec<core::slice::Iter<'a, SharedError>>,
}

impl<'a> Iterator for Leaves<'a> {
    type Item = &'a SharedError;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let err = match self.stack.last_mut()?.next() {
                Some(err) => err,
                None => {
                    self.stack.pop();
                    continue;
                }
            };
            match err.downcast_ref::<MultiError>() {
                Some(multi) => self.stack.push(multi.errors.iter()),
                None => return Some(err),
            }
        }
    }
}

impl MultiError {
    /// Starts a depth-first walk at the left-most leaf.
    ///
    /// Returns `None` if no leaf exists. The chain holds its own copy of the
    /// error handles.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_fold::{append, message};
    ///
    /// let err = append(message("first"), [message("second")]).unwrap();
    /// let chain = err.chain().unwrap();
    /// assert_eq!(chain.to_string(), "first");
    /// assert_eq!(chain.next_cause().unwrap().to_string(), "second");
    /// ```
    pub fn chain(&self) -> Option<Chain> {
        Chain::from_slice(&self.errors)
    }

    /// Iterates over every leaf error, depth-first and left to right.
    #[inline]
    pub fn leaves(&self) -> Leaves<'_> {
        Leaves { stack: vec![self.errors.iter()] }
    }
}
