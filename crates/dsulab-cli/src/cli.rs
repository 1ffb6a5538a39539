//! Clap CLI definition: root struct, subcommands, and shared argument types.
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use dsulab_bench::Workload;

/// Root of the `dsulab` command line.
#[derive(Parser)]
#[command(name = "dsulab", about = "Disjoint-set structure comparison driver")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// All top-level subcommands exposed by the `dsulab` binary.
#[derive(Subcommand)]
pub enum Command {
    /// Run an experiment grid and write tabular results.
    Run(RunArgs),

    /// Aggregate a results file and render text bar charts.
    Report(ReportArgs),

    /// Print the dsulab-core library version.
    Version,
}

/// Serialization format for the results file written by `run`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Comma-separated records with a fixed header (default). This is the
    /// interchange format `report` reads.
    Csv,
    /// A single JSON array of row objects.
    Json,
}

/// Which metric charts `report` renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Metric {
    /// Mean wall-clock replay time.
    Runtime,
    /// Mean structural pointer rewrites.
    PointerUpdates,
    /// Both charts (default).
    All,
}

/// Arguments for `dsulab run`.
#[derive(Args)]
pub struct RunArgs {
    /// Universe sizes to measure.
    #[arg(long = "ns", value_name = "N", num_args = 1..,
          default_values_t = [10_000usize, 50_000, 100_000])]
    pub ns: Vec<usize>,

    /// Operation-budget multipliers; each run uses m = MULT * n.
    #[arg(long = "ms", value_name = "MULT", num_args = 1..,
          default_values_t = [1usize, 5, 10])]
    pub m_multipliers: Vec<usize>,

    /// Workloads to run.
    #[arg(long, value_name = "NAME", num_args = 1..,
          default_values_t = [
              Workload::Random { union_ratio: 0.5 },
              Workload::Adversarial,
              Workload::BatchedFinds,
              Workload::Gnp,
          ])]
    pub workloads: Vec<Workload>,

    /// Trials per grid cell.
    #[arg(long, default_value_t = 3)]
    pub trials: usize,

    /// Base random seed.
    #[arg(long, default_value_t = 0, env = "DSULAB_SEED")]
    pub seed: u64,

    /// Output file.
    #[arg(long, value_name = "FILE", default_value = "results.csv")]
    pub output: PathBuf,

    /// Output format.
    #[arg(long, value_enum, default_value = "csv")]
    pub format: OutputFormat,
}

/// Arguments for `dsulab report`.
#[derive(Args)]
pub struct ReportArgs {
    /// Input results file written by `run`.
    #[arg(long, value_name = "FILE", default_value = "results.csv")]
    pub input: PathBuf,

    /// Workload to report on.
    #[arg(long, value_name = "NAME",
          default_value_t = Workload::Random { union_ratio: 0.5 })]
    pub workload: Workload,

    /// Which metric charts to render.
    #[arg(long, value_enum, default_value = "all")]
    pub metric: Metric,

    /// Disable ANSI colors in chart output.
    #[arg(long)]
    pub no_color: bool,
}
