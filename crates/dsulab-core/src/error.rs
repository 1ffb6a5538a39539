//! Shared error type for the disjoint-set structures.
//!
//! Both structures validate their arguments before touching any state: an
//! `Err` return guarantees that the partition and its mutation counter are
//! exactly as they were before the call.

use std::fmt;

/// Errors produced by [`ListUnionFind`](crate::ListUnionFind) and
/// [`ForestUnionFind`](crate::ForestUnionFind).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnionFindError {
    /// An element index lies outside the universe `[0, n)`.
    OutOfRange {
        /// The offending index.
        index: usize,
        /// The universe size `n` fixed at construction.
        len: usize,
    },

    /// Construction was attempted with a universe of zero elements.
    ///
    /// The universe size is fixed for the structure's lifetime, so an empty
    /// universe could never hold a set; no instance is created.
    EmptyUniverse,
}

impl fmt::Display for UnionFindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnionFindError::OutOfRange { index, len } => {
                write!(f, "element index {index} out of range for universe of {len} elements")
            }
            UnionFindError::EmptyUniverse => {
                write!(f, "universe size must be at least 1")
            }
        }
    }
}

impl std::error::Error for UnionFindError {}
