//! The experiment grid: structures × workloads × sizes × trials.
//!
//! Each grid cell generates one operation sequence and replays it against
//! every measured structure configuration, so within a trial the structures
//! are compared on identical inputs and the recorded counters differ only
//! because the representations do.

use std::fmt;

use dsulab_core::{
    DisjointSet, ForestConfig, ForestUnionFind, LinkBy, ListUnionFind, UnionFindError,
};

use crate::results::ResultRow;
use crate::workload::{Op, Workload, replay};

/// A structure configuration measured by the driver.
///
/// The forest always runs with path compression enabled here, mirroring the
/// comparison the driver is built for: the weighted list against the two
/// production-grade forest setups. The degenerate forest modes remain
/// constructible through `dsulab-core` for targeted measurements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Structure {
    /// [`ListUnionFind`].
    List,
    /// [`ForestUnionFind`] with union-by-size and path compression.
    TreeSize,
    /// [`ForestUnionFind`] with union-by-rank and path compression.
    TreeRank,
}

impl Structure {
    /// The measured configurations, in result-row order.
    pub const ALL: [Structure; 3] = [Structure::List, Structure::TreeSize, Structure::TreeRank];

    /// Structure family name as recorded in the `structure` CSV column.
    pub fn family(&self) -> &'static str {
        match self {
            Structure::List => "list",
            Structure::TreeSize | Structure::TreeRank => "tree",
        }
    }

    /// Value of the `use_rank` CSV column.
    pub fn use_rank(&self) -> bool {
        matches!(self, Structure::TreeRank)
    }

    /// Value of the `path_compression` CSV column.
    pub fn path_compression(&self) -> bool {
        matches!(self, Structure::TreeSize | Structure::TreeRank)
    }

    /// Constructs a fresh instance for a universe of `n` elements.
    ///
    /// # Errors
    ///
    /// [`UnionFindError::EmptyUniverse`] if `n == 0`.
    pub fn build(&self, n: usize) -> Result<Box<dyn DisjointSet>, UnionFindError> {
        Ok(match self {
            Structure::List => Box::new(ListUnionFind::new(n)?),
            Structure::TreeSize => Box::new(ForestUnionFind::new(
                n,
                ForestConfig {
                    link_by: LinkBy::Size,
                    path_compression: true,
                },
            )?),
            Structure::TreeRank => Box::new(ForestUnionFind::new(
                n,
                ForestConfig {
                    link_by: LinkBy::Rank,
                    path_compression: true,
                },
            )?),
        })
    }
}

impl fmt::Display for Structure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Structure::List => write!(f, "list"),
            Structure::TreeSize => write!(f, "tree-size"),
            Structure::TreeRank => write!(f, "tree-rank"),
        }
    }
}

/// Parameters for a full experiment grid.
#[derive(Debug, Clone)]
pub struct ExperimentConfig {
    /// Universe sizes to measure.
    pub ns: Vec<usize>,
    /// Operation-budget multipliers; each run uses `m = multiplier * n`.
    pub m_multipliers: Vec<usize>,
    /// Workloads to synthesize.
    pub workloads: Vec<Workload>,
    /// Trials per grid cell.
    pub trials: usize,
    /// Base seed; each grid cell derives its own sequence seed from it.
    pub seed: u64,
}

impl Default for ExperimentConfig {
    /// The default grid: `n ∈ {10_000, 50_000, 100_000}`, `m ∈ {1, 5, 10} × n`,
    /// four workloads, three trials.
    fn default() -> Self {
        Self {
            ns: vec![10_000, 50_000, 100_000],
            m_multipliers: vec![1, 5, 10],
            workloads: vec![
                Workload::Random { union_ratio: 0.5 },
                Workload::Adversarial,
                Workload::BatchedFinds,
                Workload::Gnp,
            ],
            trials: 3,
            seed: 0,
        }
    }
}

/// Runs one structure over one pre-generated operation sequence and records
/// the timing and counter readout.
///
/// # Errors
///
/// [`UnionFindError`] if the structure cannot be built or the sequence
/// contains indices outside `[0, n)`.
pub fn run_single(
    structure: Structure,
    n: usize,
    m: usize,
    workload: Workload,
    trial: usize,
    ops: &[Op],
) -> Result<ResultRow, UnionFindError> {
    let mut uf = structure.build(n)?;
    let runtime = replay(uf.as_mut(), ops)?;
    Ok(ResultRow {
        structure: structure.family().to_owned(),
        use_rank: structure.use_rank(),
        path_compression: structure.path_compression(),
        n,
        m,
        workload: workload.to_string(),
        trial,
        runtime: runtime.as_secs_f64(),
        pointer_updates: uf.pointer_updates(),
    })
}

/// Runs the full grid and returns every row, invoking `on_row` after each
/// run so a caller can narrate progress.
///
/// Sequence seeds are derived as `seed + cell index`, where cells are
/// numbered in grid order (n, then multiplier, then workload, then trial).
/// All structures within a cell replay the identical sequence.
///
/// # Errors
///
/// [`UnionFindError`] from the first failing run; rows produced before the
/// failure are discarded with it.
pub fn run_grid(
    config: &ExperimentConfig,
    mut on_row: impl FnMut(&ResultRow),
) -> Result<Vec<ResultRow>, UnionFindError> {
    let mut rows = Vec::new();
    let mut cell = 0u64;

    for &n in &config.ns {
        // Reject before workload synthesis; generators index into [0, n).
        if n == 0 {
            return Err(UnionFindError::EmptyUniverse);
        }
        for &multiplier in &config.m_multipliers {
            let m = multiplier * n;
            for &workload in &config.workloads {
                for trial in 1..=config.trials {
                    let ops = workload.ops(n, m, config.seed.wrapping_add(cell));
                    cell += 1;
                    for structure in Structure::ALL {
                        let row = run_single(structure, n, m, workload, trial, &ops)?;
                        on_row(&row);
                        rows.push(row);
                    }
                }
            }
        }
    }

    Ok(rows)
}
