//! Parent-pointer forest disjoint-set structure.
//!
//! Every set is a tree rooted at its representative: `parent[i] == i` iff
//! `i` is a root. Merging attaches one root under another, guided by the
//! [`LinkBy`] heuristic fixed at construction, and `find` optionally
//! rewrites every traversed pointer straight to the root (path compression).
//!
//! With a balancing heuristic and compression enabled the amortized cost per
//! operation is O(α(n)) — inverse Ackermann, effectively constant. With
//! [`LinkBy::Unweighted`] and compression off, a chain-building workload
//! degenerates into an O(n)-deep path; the `parent_updates` counter makes
//! the difference between the two regimes directly measurable.

use std::cmp::Ordering;

use crate::{DisjointSet, UnionFindError};

/// Union heuristic for [`ForestUnionFind`], fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkBy {
    /// No balancing: the first argument's root is attached under the
    /// second's unconditionally (classic quick-union). Tree depth is
    /// unbounded; chain-shaped union sequences produce paths of depth
    /// `n - 1`.
    Unweighted,
    /// Union-by-size: the root of the smaller tree is attached under the
    /// root of the larger.
    Size,
    /// Union-by-rank: the root with the lower height bound is attached
    /// under the other.
    Rank,
}

/// Construction-time configuration for [`ForestUnionFind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForestConfig {
    /// Which union heuristic guides root attachment.
    pub link_by: LinkBy,
    /// Whether `find` rewrites traversed pointers directly to the root.
    pub path_compression: bool,
}

/// Per-root bookkeeping for the active heuristic.
///
/// Only the array the configured heuristic actually consults exists; the
/// entries are meaningful at root indices only.
#[derive(Debug, Clone)]
enum LinkWeights {
    Unweighted,
    /// `sizes[r]` is the subtree cardinality of root `r`.
    Size(Vec<usize>),
    /// `ranks[r]` is an upper bound on the height of root `r`'s tree.
    Rank(Vec<u8>),
}

/// A disjoint-set structure that stores each set as a tree of parent
/// pointers.
///
/// The union heuristic and path-compression behavior are fixed for the
/// instance's lifetime by the [`ForestConfig`] passed at construction.
#[derive(Debug, Clone)]
pub struct ForestUnionFind {
    /// `parent[i] == i` iff `i` is a root.
    parent: Vec<usize>,
    weights: LinkWeights,
    path_compression: bool,
    /// Number of parent-pointer rewrites since construction.
    parent_updates: u64,
}

impl ForestUnionFind {
    /// Creates `n` singleton roots `{0}, {1}, …, {n-1}` under the given
    /// configuration.
    ///
    /// # Errors
    ///
    /// [`UnionFindError::EmptyUniverse`] if `n == 0`.
    pub fn new(n: usize, config: ForestConfig) -> Result<Self, UnionFindError> {
        if n == 0 {
            return Err(UnionFindError::EmptyUniverse);
        }
        let weights = match config.link_by {
            LinkBy::Unweighted => LinkWeights::Unweighted,
            LinkBy::Size => LinkWeights::Size(vec![1; n]),
            LinkBy::Rank => LinkWeights::Rank(vec![0; n]),
        };
        Ok(Self {
            parent: (0..n).collect(),
            weights,
            path_compression: config.path_compression,
            parent_updates: 0,
        })
    }

    /// Returns the universe size `n`.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` if the universe holds no elements (never the case for
    /// a constructed instance).
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the configuration this instance was constructed with.
    pub fn config(&self) -> ForestConfig {
        let link_by = match self.weights {
            LinkWeights::Unweighted => LinkBy::Unweighted,
            LinkWeights::Size(_) => LinkBy::Size,
            LinkWeights::Rank(_) => LinkBy::Rank,
        };
        ForestConfig {
            link_by,
            path_compression: self.path_compression,
        }
    }

    fn check(&self, x: usize) -> Result<(), UnionFindError> {
        if x < self.parent.len() {
            Ok(())
        } else {
            Err(UnionFindError::OutOfRange {
                index: x,
                len: self.parent.len(),
            })
        }
    }

    /// Returns the root of the tree containing `x`.
    ///
    /// Cost is O(depth of `x`). When path compression is enabled, a second
    /// pass rewrites every node on the traversed path to point directly at
    /// the root — one `parent_updates` increment per rewritten pointer —
    /// so repeated lookups of the same deep element flatten to O(1). When
    /// disabled, `find` never mutates.
    ///
    /// # Errors
    ///
    /// [`UnionFindError::OutOfRange`] if `x >= n`.
    pub fn find(&mut self, x: usize) -> Result<usize, UnionFindError> {
        self.check(x)?;

        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        if self.path_compression {
            let mut node = x;
            while self.parent[node] != root {
                let next = self.parent[node];
                self.parent[node] = root;
                self.parent_updates += 1;
                node = next;
            }
        }

        Ok(root)
    }

    /// Merges the sets containing `x` and `y` and returns the surviving
    /// root.
    ///
    /// If the two are already in the same set this is a no-op: the shared
    /// root is returned and `parent_updates` is unchanged. Otherwise exactly
    /// one parent pointer is rewritten (one counter increment), with the
    /// loser chosen by the configured [`LinkBy`] heuristic:
    ///
    /// - `Size` — the smaller tree's root goes under the larger's; the
    ///   survivor's size absorbs the loser's.
    /// - `Rank` — the lower-rank root goes under the higher; on equal ranks
    ///   the survivor's rank increases by one.
    /// - `Unweighted` — the first argument's root goes under the second's.
    ///
    /// For `Size` and `Rank`, ties attach the **second** argument's root
    /// under the first's.
    ///
    /// # Errors
    ///
    /// [`UnionFindError::OutOfRange`] if either argument is `>= n`; no
    /// pointer is rewritten before validation. Note that when path
    /// compression is enabled, the two internal `find` calls may compress
    /// paths (and count those rewrites) even when the union itself turns out
    /// to be a no-op.
    pub fn union(&mut self, x: usize, y: usize) -> Result<usize, UnionFindError> {
        let rx = self.find(x)?;
        let ry = self.find(y)?;

        if rx == ry {
            return Ok(rx);
        }

        let winner = match &mut self.weights {
            LinkWeights::Unweighted => {
                self.parent[rx] = ry;
                ry
            }
            LinkWeights::Size(sizes) => {
                let (winner, loser) = if sizes[rx] >= sizes[ry] {
                    (rx, ry)
                } else {
                    (ry, rx)
                };
                sizes[winner] += sizes[loser];
                self.parent[loser] = winner;
                winner
            }
            LinkWeights::Rank(ranks) => match ranks[rx].cmp(&ranks[ry]) {
                Ordering::Less => {
                    self.parent[rx] = ry;
                    ry
                }
                Ordering::Greater => {
                    self.parent[ry] = rx;
                    rx
                }
                Ordering::Equal => {
                    self.parent[ry] = rx;
                    ranks[rx] += 1;
                    rx
                }
            },
        };
        self.parent_updates += 1;

        Ok(winner)
    }

    /// Returns `true` if `x` and `y` share a root.
    ///
    /// # Errors
    ///
    /// [`UnionFindError::OutOfRange`] if either argument is `>= n`.
    pub fn connected(&mut self, x: usize, y: usize) -> Result<bool, UnionFindError> {
        Ok(self.find(x)? == self.find(y)?)
    }

    /// Returns the number of trees in the forest.
    ///
    /// Counts self-parented roots in a full O(n) scan. Unlike `find`, the
    /// scan never compresses, so observing the set count cannot perturb the
    /// `parent_updates` counter.
    pub fn num_sets(&self) -> usize {
        self.parent
            .iter()
            .enumerate()
            .filter(|&(i, &p)| i == p)
            .count()
    }

    /// Depth of `x` (pointer hops to its root), without compression.
    fn depth_of(&self, mut x: usize) -> usize {
        let mut depth = 0;
        while self.parent[x] != x {
            x = self.parent[x];
            depth += 1;
        }
        depth
    }

    /// Returns the longest root-to-leaf path over all elements.
    ///
    /// Computed by independent traversal without compression, costing
    /// O(n · average depth); do not call in hot paths.
    pub fn max_depth(&self) -> usize {
        (0..self.parent.len())
            .map(|i| self.depth_of(i))
            .max()
            .unwrap_or(0)
    }

    /// Returns the number of parent-pointer rewrites performed since
    /// construction, counting both union attachments and path-compression
    /// rewrites.
    pub fn parent_updates(&self) -> u64 {
        self.parent_updates
    }
}

impl DisjointSet for ForestUnionFind {
    fn len(&self) -> usize {
        ForestUnionFind::len(self)
    }

    fn find(&mut self, x: usize) -> Result<usize, UnionFindError> {
        ForestUnionFind::find(self, x)
    }

    fn union(&mut self, x: usize, y: usize) -> Result<usize, UnionFindError> {
        ForestUnionFind::union(self, x, y)
    }

    fn connected(&mut self, x: usize, y: usize) -> Result<bool, UnionFindError> {
        ForestUnionFind::connected(self, x, y)
    }

    fn num_sets(&self) -> usize {
        ForestUnionFind::num_sets(self)
    }

    fn pointer_updates(&self) -> u64 {
        self.parent_updates
    }
}
