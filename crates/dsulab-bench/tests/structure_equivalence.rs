//! Property tests: every measured structure computes the same partition for
//! any generated workload, and the list's relabel counter respects the
//! weighted-union bound.
#![allow(clippy::expect_used)]

use dsulab_bench::{Structure, Workload, replay};
use dsulab_core::{DisjointSet, ListUnionFind};
use proptest::prelude::*;

/// `ceil(log2(n))` for `n >= 1`.
fn ceil_log2(n: usize) -> u32 {
    n.next_power_of_two().trailing_zeros()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn structures_agree_on_any_generated_workload(
        workload_idx in 0usize..Workload::ALL.len(),
        n in 2usize..48,
        m in 0usize..150,
        seed in 0u64..1_000,
    ) {
        let workload = Workload::ALL[workload_idx];
        let ops = workload.ops(n, m, seed);

        let mut structures: Vec<Box<dyn DisjointSet>> = Structure::ALL
            .iter()
            .map(|s| s.build(n).expect("build"))
            .collect();
        for uf in &mut structures {
            replay(uf.as_mut(), &ops).expect("replay");
        }

        let (first, rest) = structures.split_at_mut(1);
        let sets = first[0].num_sets();
        for uf in rest.iter() {
            prop_assert_eq!(uf.num_sets(), sets, "set counts diverged ({})", workload);
        }
        for x in 0..n {
            for y in x + 1..n {
                let expected = first[0].connected(x, y).expect("connected");
                for uf in rest.iter_mut() {
                    prop_assert_eq!(
                        uf.connected(x, y).expect("connected"),
                        expected,
                        "connectivity diverged on ({}, {}) under {}",
                        x,
                        y,
                        workload
                    );
                }
            }
        }
    }

    #[test]
    fn list_relabels_respect_the_weighted_union_bound(
        workload_idx in 0usize..Workload::ALL.len(),
        n in 2usize..64,
        m in 0usize..200,
        seed in 0u64..1_000,
    ) {
        let workload = Workload::ALL[workload_idx];
        let ops = workload.ops(n, m, seed);

        let mut uf = ListUnionFind::new(n).expect("new");
        replay(&mut uf, &ops).expect("replay");

        // Each element's header changes at most ceil(log2(n)) times, since
        // every relabel at least doubles the size of the element's set.
        let bound = (n as u64) * u64::from(ceil_log2(n));
        prop_assert!(
            uf.head_updates() <= bound,
            "{} relabels exceed the n·log2(n) bound {} (n = {}, workload = {})",
            uf.head_updates(),
            bound,
            n,
            workload
        );
    }
}
