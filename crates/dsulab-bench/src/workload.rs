//! Deterministic workload synthesis.
//!
//! A workload turns `(n, m, seed)` into a flat operation sequence that can
//! be replayed against any [`DisjointSet`] implementation. Generation is
//! fully deterministic for a given seed, so the same sequence can be
//! replayed against every structure under comparison and the recorded
//! counters differ only because the structures do.

use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use dsulab_core::{DisjointSet, UnionFindError};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// A single operation in a replayable sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// Merge the sets containing the two elements.
    Union(usize, usize),
    /// Look up the representative of the element.
    Find(usize),
}

/// A named operation-mix the experiment driver can synthesize.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Workload {
    /// Interleaved mix: `union_ratio * m` random unions followed by the
    /// remaining `m - union_ratio * m` random finds.
    Random {
        /// Fraction of the `m` operations that are unions, in `[0, 1]`.
        union_ratio: f64,
    },
    /// Chain-building adversary: `union(i, i + 1)` for every adjacent pair,
    /// then `m` random finds. Under an unbalanced forest this produces the
    /// deepest possible trees; balanced structures shrug it off.
    Adversarial,
    /// `m` random unions, then `m` random finds.
    BatchedFinds,
    /// Approximate G(n, p) connectivity: `m` random edges are unioned, then
    /// `m` random membership queries run. Equivalent in shape to
    /// [`Workload::BatchedFinds`] but parameterized as a sparse random
    /// graph, which is how the results are meant to be read.
    Gnp,
}

impl Workload {
    /// The canonical workload set measured by the driver, in grid order.
    pub const ALL: [Workload; 5] = [
        Workload::Random { union_ratio: 0.5 },
        Workload::Random { union_ratio: 0.2 },
        Workload::Adversarial,
        Workload::BatchedFinds,
        Workload::Gnp,
    ];

    /// Synthesizes the operation sequence for a universe of `n` elements
    /// and an operation budget `m`.
    ///
    /// Deterministic: the same `(n, m, seed)` triple always yields the same
    /// sequence. All generated indices lie in `[0, n)`.
    pub fn ops(&self, n: usize, m: usize, seed: u64) -> Vec<Op> {
        let mut rng = StdRng::seed_from_u64(seed);
        match *self {
            Workload::Random { union_ratio } => {
                let num_unions = ((union_ratio * m as f64) as usize).min(m);
                let num_finds = m - num_unions;
                let mut ops = Vec::with_capacity(m);
                for _ in 0..num_unions {
                    ops.push(Op::Union(rng.gen_range(0..n), rng.gen_range(0..n)));
                }
                for _ in 0..num_finds {
                    ops.push(Op::Find(rng.gen_range(0..n)));
                }
                ops
            }
            Workload::Adversarial => {
                let mut ops = Vec::with_capacity(n - 1 + m);
                for i in 0..n - 1 {
                    ops.push(Op::Union(i, i + 1));
                }
                for _ in 0..m {
                    ops.push(Op::Find(rng.gen_range(0..n)));
                }
                ops
            }
            Workload::BatchedFinds | Workload::Gnp => {
                let mut ops = Vec::with_capacity(2 * m);
                for _ in 0..m {
                    ops.push(Op::Union(rng.gen_range(0..n), rng.gen_range(0..n)));
                }
                for _ in 0..m {
                    ops.push(Op::Find(rng.gen_range(0..n)));
                }
                ops
            }
        }
    }
}

impl fmt::Display for Workload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Workload::Random { union_ratio } => {
                let unions = (union_ratio * 100.0).round() as u32;
                write!(f, "random_{unions}_{}", 100 - unions)
            }
            Workload::Adversarial => write!(f, "adversarial"),
            Workload::BatchedFinds => write!(f, "batched_finds"),
            Workload::Gnp => write!(f, "gnp"),
        }
    }
}

/// Error returned when a workload name does not match any canonical
/// workload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkloadParseError {
    /// The name that failed to parse.
    pub name: String,
}

impl fmt::Display for WorkloadParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown workload {:?} (expected one of: random_50_50, random_20_80, \
             adversarial, batched_finds, gnp)",
            self.name
        )
    }
}

impl std::error::Error for WorkloadParseError {}

impl FromStr for Workload {
    type Err = WorkloadParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "random_50_50" => Ok(Workload::Random { union_ratio: 0.5 }),
            "random_20_80" => Ok(Workload::Random { union_ratio: 0.2 }),
            "adversarial" => Ok(Workload::Adversarial),
            "batched_finds" => Ok(Workload::BatchedFinds),
            "gnp" => Ok(Workload::Gnp),
            other => Err(WorkloadParseError {
                name: other.to_owned(),
            }),
        }
    }
}

/// Replays an operation sequence against a structure and returns the wall
/// time the replay took.
///
/// # Errors
///
/// Propagates [`UnionFindError`] from the structure; generated sequences
/// only contain in-range indices, so an error here means the sequence was
/// built for a different universe size.
pub fn replay(uf: &mut dyn DisjointSet, ops: &[Op]) -> Result<Duration, UnionFindError> {
    let start = Instant::now();
    for op in ops {
        match *op {
            Op::Union(x, y) => {
                uf.union(x, y)?;
            }
            Op::Find(x) => {
                uf.find(x)?;
            }
        }
    }
    Ok(start.elapsed())
}
