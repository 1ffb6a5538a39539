//! Workload generation and experiment driver for the dsulab structures.
//!
//! This crate owns everything the comparison needs around `dsulab-core`:
//! deterministic operation-sequence generation, the n × m × workload ×
//! structure × trial experiment grid, and the tabular result rows the
//! reporting tool consumes. The structures themselves are driven purely
//! through the [`DisjointSet`](dsulab_core::DisjointSet) contract.

pub mod experiment;
pub mod results;
pub mod workload;

pub use experiment::{ExperimentConfig, Structure, run_grid, run_single};
pub use results::{CSV_HEADER, CsvParseError, ResultRow, parse_csv, rows_to_csv};
pub use workload::{Op, Workload, WorkloadParseError, replay};
