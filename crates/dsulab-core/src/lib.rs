#![deny(clippy::print_stdout, clippy::print_stderr)]

//! Instrumented disjoint-set (union-find) structures over a fixed universe
//! of dense integer indices `[0, n)`.
//!
//! Two independent representations of the same abstract contract are
//! provided, sharing no code, so their costs can be compared empirically:
//!
//! - [`ListUnionFind`] — each set is an explicit member list; merging
//!   relabels the smaller set's elements into the larger.
//! - [`ForestUnionFind`] — each set is a tree of parent pointers; merging
//!   attaches one root under another, guided by a [`LinkBy`] heuristic, with
//!   optional path compression on lookup.
//!
//! Both carry a monotonic counter of structural pointer rewrites since
//! construction, readable via [`DisjointSet::pointer_updates`], which the
//! benchmark driver uses as a machine-independent cost metric.
//!
//! ```rust
//! use dsulab_core::{DisjointSet, ForestConfig, ForestUnionFind, LinkBy, ListUnionFind};
//!
//! # fn main() -> Result<(), dsulab_core::UnionFindError> {
//! let mut list = ListUnionFind::new(5)?;
//! let mut forest = ForestUnionFind::new(
//!     5,
//!     ForestConfig { link_by: LinkBy::Size, path_compression: true },
//! )?;
//!
//! for uf in [&mut list as &mut dyn DisjointSet, &mut forest] {
//!     uf.union(0, 1)?;
//!     uf.union(2, 3)?;
//!     uf.union(1, 2)?;
//!     assert!(uf.connected(0, 3)?);
//!     assert!(!uf.connected(0, 4)?);
//!     assert_eq!(uf.num_sets(), 2);
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod forest;
pub mod list;

pub use error::UnionFindError;
pub use forest::{ForestConfig, ForestUnionFind, LinkBy};
pub use list::ListUnionFind;

/// The operation surface shared by both disjoint-set representations.
///
/// The benchmark driver is written against this trait so either structure
/// can be swapped in as an opaque value. `find` (and therefore `union` and
/// `connected`) takes `&mut self` because the forest variant may rewrite
/// parent pointers during lookup when path compression is enabled; the list
/// variant implements the same signature without mutating.
///
/// Representation-specific observers (`max_set_size`, `max_depth`) and the
/// per-variant counter names (`head_updates`, `parent_updates`) remain
/// inherent methods on the concrete types.
pub trait DisjointSet {
    /// Returns the universe size `n` fixed at construction.
    fn len(&self) -> usize;

    /// Returns `true` if the universe holds no elements.
    ///
    /// Construction rejects `n == 0`, so this is always `false` for a live
    /// instance.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the representative of the set containing `x`.
    ///
    /// # Errors
    ///
    /// [`UnionFindError::OutOfRange`] if `x >= n`.
    fn find(&mut self, x: usize) -> Result<usize, UnionFindError>;

    /// Merges the sets containing `x` and `y` and returns the surviving
    /// representative. Merging a set with itself is a no-op that leaves the
    /// mutation counter unchanged.
    ///
    /// # Errors
    ///
    /// [`UnionFindError::OutOfRange`] if either argument is `>= n`; the
    /// structure is unchanged in that case.
    fn union(&mut self, x: usize, y: usize) -> Result<usize, UnionFindError>;

    /// Returns `true` if `x` and `y` are currently in the same set.
    ///
    /// # Errors
    ///
    /// [`UnionFindError::OutOfRange`] if either argument is `>= n`.
    fn connected(&mut self, x: usize, y: usize) -> Result<bool, UnionFindError>;

    /// Returns the number of disjoint sets currently in the partition.
    ///
    /// This is a full O(n) scan on both representations; do not call it in
    /// hot paths.
    fn num_sets(&self) -> usize;

    /// Returns the number of structural pointer/reference rewrites performed
    /// since construction.
    ///
    /// The counter is monotonic and purely observational; failed or no-op
    /// operations never change it.
    fn pointer_updates(&self) -> u64;
}

/// Returns the current version of the dsulab-core library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
