//! Member-list disjoint-set structure.
//!
//! Every set is stored explicitly: `head[i]` names the header (the
//! representative) of the set containing `i`, and `members[h]` holds the
//! elements of the set headed by `h`. Merging relabels the smaller set's
//! elements onto the larger header, so any element is relabeled at most
//! `log2(n)` times over the structure's lifetime — each relabeling at least
//! doubles the size of the set the element joins. That bound is the
//! structure's defining property and is what the `head_updates` counter
//! makes observable.

use crate::{DisjointSet, UnionFindError};

/// A disjoint-set structure that stores each set as an explicit member list.
///
/// Lookups are O(1) single array reads. Merges relabel every element of the
/// smaller set, which costs O(min(|Sx|, |Sy|)) per call and O(m log n)
/// across any sequence of `m` unions (weighted-union bound).
#[derive(Debug, Clone)]
pub struct ListUnionFind {
    /// `head[i]` is the header of the set containing element `i`.
    head: Vec<usize>,
    /// `members[h]` lists the set headed by `h`; empty once `h` has been
    /// absorbed into another header.
    members: Vec<Vec<usize>>,
    /// `size[h]` is the cardinality of the set headed by `h`; zero once `h`
    /// has been absorbed.
    size: Vec<usize>,
    /// Number of `head` relabels since construction.
    head_updates: u64,
}

impl ListUnionFind {
    /// Creates `n` singleton sets `{0}, {1}, …, {n-1}`.
    ///
    /// # Errors
    ///
    /// [`UnionFindError::EmptyUniverse`] if `n == 0`.
    pub fn new(n: usize) -> Result<Self, UnionFindError> {
        if n == 0 {
            return Err(UnionFindError::EmptyUniverse);
        }
        Ok(Self {
            head: (0..n).collect(),
            members: (0..n).map(|i| vec![i]).collect(),
            size: vec![1; n],
            head_updates: 0,
        })
    }

    /// Returns the universe size `n`.
    pub fn len(&self) -> usize {
        self.head.len()
    }

    /// Returns `true` if the universe holds no elements (never the case for
    /// a constructed instance).
    pub fn is_empty(&self) -> bool {
        self.head.is_empty()
    }

    fn check(&self, x: usize) -> Result<(), UnionFindError> {
        if x < self.head.len() {
            Ok(())
        } else {
            Err(UnionFindError::OutOfRange {
                index: x,
                len: self.head.len(),
            })
        }
    }

    /// Returns the header of the set containing `x`. O(1), no mutation.
    ///
    /// # Errors
    ///
    /// [`UnionFindError::OutOfRange`] if `x >= n`.
    pub fn find(&self, x: usize) -> Result<usize, UnionFindError> {
        self.check(x)?;
        Ok(self.head[x])
    }

    /// Merges the sets containing `x` and `y` and returns the surviving
    /// header.
    ///
    /// If the two are already in the same set this is a no-op: the shared
    /// header is returned and `head_updates` is unchanged. Otherwise every
    /// element of the smaller set is relabeled onto the larger header (one
    /// `head_updates` increment per element), its member list is appended to
    /// the survivor's, and the absorbed header's size drops to zero.
    ///
    /// # Tie-breaking
    ///
    /// On equal sizes the **first argument's** header survives. This is
    /// deterministic but not a contract callers should lean on; the other
    /// convention is equally valid for a weighted union.
    ///
    /// # Errors
    ///
    /// [`UnionFindError::OutOfRange`] if either argument is `>= n`; no
    /// relabeling happens before validation.
    pub fn union(&mut self, x: usize, y: usize) -> Result<usize, UnionFindError> {
        let hx = self.find(x)?;
        let hy = self.find(y)?;

        if hx == hy {
            return Ok(hx);
        }

        let (winner, loser) = if self.size[hx] >= self.size[hy] {
            (hx, hy)
        } else {
            (hy, hx)
        };

        // Ownership of the absorbed elements transfers wholesale; the old
        // sequence is left genuinely empty, not merely ignored.
        let absorbed = std::mem::take(&mut self.members[loser]);
        for &v in &absorbed {
            self.head[v] = winner;
            self.head_updates += 1;
        }
        self.members[winner].extend(absorbed);

        self.size[winner] += self.size[loser];
        self.size[loser] = 0;

        Ok(winner)
    }

    /// Returns `true` if `x` and `y` share a header.
    ///
    /// # Errors
    ///
    /// [`UnionFindError::OutOfRange`] if either argument is `>= n`.
    pub fn connected(&self, x: usize, y: usize) -> Result<bool, UnionFindError> {
        Ok(self.find(x)? == self.find(y)?)
    }

    /// Returns the number of non-empty sets.
    ///
    /// Full O(n) scan over the size table; do not call in hot paths.
    pub fn num_sets(&self) -> usize {
        self.size.iter().filter(|&&s| s > 0).count()
    }

    /// Returns the cardinality of the largest set. O(n) scan.
    pub fn max_set_size(&self) -> usize {
        self.size.iter().copied().max().unwrap_or(0)
    }

    /// Returns the number of `head` relabels performed since construction.
    ///
    /// Each element moved between sets counts once, so over `m` unions this
    /// totals O(m log n) by the weighted-union argument.
    pub fn head_updates(&self) -> u64 {
        self.head_updates
    }
}

impl DisjointSet for ListUnionFind {
    fn len(&self) -> usize {
        ListUnionFind::len(self)
    }

    fn find(&mut self, x: usize) -> Result<usize, UnionFindError> {
        ListUnionFind::find(self, x)
    }

    fn union(&mut self, x: usize, y: usize) -> Result<usize, UnionFindError> {
        ListUnionFind::union(self, x, y)
    }

    fn connected(&mut self, x: usize, y: usize) -> Result<bool, UnionFindError> {
        ListUnionFind::connected(self, x, y)
    }

    fn num_sets(&self) -> usize {
        ListUnionFind::num_sets(self)
    }

    fn pointer_updates(&self) -> u64 {
        self.head_updates
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    /// Asserts the structural invariants: every element appears exactly once
    /// in its header's member list, member lists agree with the size table,
    /// and absorbed headers are fully emptied.
    fn assert_consistent(uf: &ListUnionFind) {
        let n = uf.len();
        let mut seen = vec![false; n];

        for h in 0..n {
            if uf.size[h] > 0 {
                assert_eq!(
                    uf.members[h].len(),
                    uf.size[h],
                    "header {h}: member list length disagrees with size table"
                );
                for &v in &uf.members[h] {
                    assert_eq!(uf.head[v], h, "element {v} listed under foreign header {h}");
                    assert!(!seen[v], "element {v} appears in two member lists");
                    seen[v] = true;
                }
            } else {
                assert!(
                    uf.members[h].is_empty(),
                    "absorbed header {h} still owns members"
                );
            }
        }

        assert!(seen.iter().all(|&s| s), "some element is in no member list");
        assert_eq!(
            uf.size.iter().sum::<usize>(),
            n,
            "positive sizes must sum to the universe size"
        );
    }

    #[test]
    fn new_zero_elements_is_rejected() {
        assert_eq!(
            ListUnionFind::new(0).err(),
            Some(UnionFindError::EmptyUniverse)
        );
    }

    #[test]
    fn new_creates_singletons() {
        let uf = ListUnionFind::new(5).expect("new");
        for i in 0..5 {
            assert_eq!(
                uf.find(i).expect("find"),
                i,
                "element {i} should start as its own header"
            );
        }
        assert_eq!(uf.num_sets(), 5);
        assert_eq!(uf.max_set_size(), 1);
        assert_eq!(uf.head_updates(), 0);
        assert_consistent(&uf);
    }

    #[test]
    fn union_relabels_smaller_into_larger() {
        let mut uf = ListUnionFind::new(6).expect("new");
        uf.union(0, 1).expect("union");
        uf.union(0, 2).expect("union");
        // {0,1,2} vs {3}: the singleton is relabeled, not the trio.
        let before = uf.head_updates();
        let h = uf.union(3, 0).expect("union");
        assert_eq!(h, uf.find(0).expect("find"));
        assert_eq!(
            uf.head_updates() - before,
            1,
            "only the smaller set's single element should be relabeled"
        );
        assert_consistent(&uf);
    }

    #[test]
    fn union_same_set_is_a_no_op() {
        let mut uf = ListUnionFind::new(4).expect("new");
        let h1 = uf.union(0, 1).expect("union");
        let counter = uf.head_updates();
        let h2 = uf.union(0, 1).expect("union");
        assert_eq!(h1, h2, "repeated union must return the same header");
        assert_eq!(
            uf.head_updates(),
            counter,
            "repeated union must not touch the counter"
        );
        assert_eq!(uf.num_sets(), 3);
        assert_consistent(&uf);
    }

    #[test]
    fn equal_size_tie_keeps_first_arguments_header() {
        let mut uf = ListUnionFind::new(2).expect("new");
        let h = uf.union(1, 0).expect("union");
        assert_eq!(h, 1, "on a size tie the first argument's header survives");
        assert_eq!(uf.find(0).expect("find"), 1);
        assert_consistent(&uf);
    }

    #[test]
    fn literal_scenario_five_elements() {
        let mut uf = ListUnionFind::new(5).expect("new");
        uf.union(0, 1).expect("union");
        uf.union(2, 3).expect("union");
        uf.union(1, 2).expect("union");
        assert!(uf.connected(0, 3).expect("connected"));
        assert!(!uf.connected(0, 4).expect("connected"));
        assert_eq!(uf.num_sets(), 2);
        assert_consistent(&uf);
    }

    #[test]
    fn out_of_range_arguments_leave_state_untouched() {
        let mut uf = ListUnionFind::new(3).expect("new");
        uf.union(0, 1).expect("union");
        let counter = uf.head_updates();

        assert_eq!(
            uf.find(3).err(),
            Some(UnionFindError::OutOfRange { index: 3, len: 3 })
        );
        assert_eq!(
            uf.union(0, 7).err(),
            Some(UnionFindError::OutOfRange { index: 7, len: 3 })
        );
        assert_eq!(
            uf.connected(9, 0).err(),
            Some(UnionFindError::OutOfRange { index: 9, len: 3 })
        );

        assert_eq!(uf.head_updates(), counter, "failed calls must not count");
        assert_eq!(uf.num_sets(), 2);
        assert_consistent(&uf);
    }

    #[test]
    fn num_sets_drops_only_on_real_merges() {
        let mut uf = ListUnionFind::new(6).expect("new");
        assert_eq!(uf.num_sets(), 6);
        uf.union(0, 1).expect("union");
        uf.union(2, 3).expect("union");
        assert_eq!(uf.num_sets(), 4);
        uf.union(1, 0).expect("union"); // already joined
        assert_eq!(uf.num_sets(), 4);
        uf.union(0, 2).expect("union");
        assert_eq!(uf.num_sets(), 3);
        assert_consistent(&uf);
    }

    #[test]
    fn max_set_size_tracks_the_largest_set() {
        let mut uf = ListUnionFind::new(5).expect("new");
        assert_eq!(uf.max_set_size(), 1);
        uf.union(0, 1).expect("union");
        uf.union(1, 2).expect("union");
        assert_eq!(uf.max_set_size(), 3);
        uf.union(3, 4).expect("union");
        assert_eq!(uf.max_set_size(), 3);
        assert_consistent(&uf);
    }

    #[test]
    fn chain_unions_relabel_one_element_each() {
        // union(i, i+1) always absorbs the fresh singleton, so the counter
        // grows by exactly one per union.
        let n = 100;
        let mut uf = ListUnionFind::new(n).expect("new");
        for i in 0..n - 1 {
            uf.union(i, i + 1).expect("union");
        }
        assert_eq!(uf.head_updates(), (n - 1) as u64);
        assert_eq!(uf.num_sets(), 1);
        assert_eq!(uf.max_set_size(), n);
        assert_consistent(&uf);
    }

    #[test]
    fn tournament_merge_respects_the_log_bound() {
        // Pairwise tournament over n = 16: every level relabels n/2 elements,
        // log2(n) levels, so exactly (n/2) * log2(n) = 32 relabels in total —
        // the worst case the weighted-union bound allows.
        let n: usize = 16;
        let mut uf = ListUnionFind::new(n).expect("new");
        let mut stride = 1;
        while stride < n {
            for base in (0..n).step_by(stride * 2) {
                uf.union(base, base + stride).expect("union");
            }
            stride *= 2;
        }
        assert_eq!(uf.num_sets(), 1);
        assert_eq!(uf.head_updates(), 32);
        let bound = (n as u64) * (n as f64).log2() as u64;
        assert!(
            uf.head_updates() <= bound,
            "total relabels {} exceed n log2 n = {bound}",
            uf.head_updates()
        );
        assert_consistent(&uf);
    }

    #[test]
    fn trait_surface_matches_inherent_methods() {
        let mut uf = ListUnionFind::new(4).expect("new");
        let ds: &mut dyn DisjointSet = &mut uf;
        ds.union(0, 1).expect("union");
        assert!(ds.connected(0, 1).expect("connected"));
        assert_eq!(ds.num_sets(), 3);
        assert_eq!(ds.pointer_updates(), 1);
    }
}
