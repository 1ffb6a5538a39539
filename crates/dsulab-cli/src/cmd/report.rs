//! Implementation of `dsulab report`.
//!
//! Loads a results file, keeps the rows for the requested workload, and
//! renders one text bar chart per selected metric to stdout. Values are
//! aggregated as the mean over trials and operation budgets per
//! `(structure, use_rank, n)` group, so each chart compares the three
//! measured setups across universe sizes.
//!
//! Exit codes: 0 = success, 2 = unreadable/unparseable input,
//! 1 = no rows for the requested workload.
use std::collections::BTreeMap;

use dsulab_bench::ResultRow;

use crate::cli::{Metric, ReportArgs};
use crate::error::CliError;
use crate::format::{self, Series};
use crate::io;

/// Chart label for a `(structure, use_rank)` group.
fn series_label(structure: &str, use_rank: bool) -> String {
    match (structure, use_rank) {
        ("list", _) => "ListUnionFind".to_owned(),
        ("tree", false) => "ForestUnionFind (union-by-size)".to_owned(),
        ("tree", true) => "ForestUnionFind (union-by-rank)".to_owned(),
        (other, _) => format!("{other} (use_rank={use_rank})"),
    }
}

/// Groups rows by `(structure, use_rank)` and `n`, averaging `value` over
/// everything else (trials and operation budgets).
fn aggregate(rows: &[ResultRow], value: impl Fn(&ResultRow) -> f64) -> Vec<Series> {
    let mut groups: BTreeMap<String, BTreeMap<usize, (f64, usize)>> = BTreeMap::new();
    for row in rows {
        let cell = groups
            .entry(series_label(&row.structure, row.use_rank))
            .or_default()
            .entry(row.n)
            .or_insert((0.0, 0));
        cell.0 += value(row);
        cell.1 += 1;
    }

    groups
        .into_iter()
        .map(|(label, points)| Series {
            label,
            points: points
                .into_iter()
                .map(|(n, (sum, count))| (n, sum / count as f64))
                .collect(),
        })
        .collect()
}

/// Renders the report described by `args` to stdout.
pub fn run(args: &ReportArgs) -> Result<(), CliError> {
    let rows = io::read_results(&args.input)?;

    let workload = args.workload.to_string();
    let rows: Vec<ResultRow> = rows
        .into_iter()
        .filter(|row| row.workload == workload)
        .collect();
    if rows.is_empty() {
        return Err(CliError::NoMatchingRows { workload });
    }

    let colors = format::colors_enabled(args.no_color);

    if matches!(args.metric, Metric::Runtime | Metric::All) {
        let series = aggregate(&rows, |row| row.runtime);
        print!(
            "{}",
            format::render_chart(
                &format!("Runtime vs n - workload={workload}"),
                "Runtime (seconds)",
                &series,
                colors,
            )
        );
    }

    if matches!(args.metric, Metric::PointerUpdates | Metric::All) {
        let series = aggregate(&rows, |row| row.pointer_updates as f64);
        print!(
            "{}",
            format::render_chart(
                &format!("Pointer updates vs n - workload={workload}"),
                "Pointer updates (mean)",
                &series,
                colors,
            )
        );
    }

    Ok(())
}
