//! Text bar-chart rendering for aggregated results.
//!
//! Charts go to stdout as plain text: one block per structure series, one
//! scaled `#` bar per universe size. Colors are applied to the bars only
//! and are disabled when `--no-color` is set, the `NO_COLOR` environment
//! variable is present (per <https://no-color.org>), or stdout is not a
//! TTY.
use std::io::IsTerminal as _;

/// Returns `true` if ANSI color codes should be emitted to stdout.
pub fn colors_enabled(no_color_flag: bool) -> bool {
    if no_color_flag {
        return false;
    }
    // NO_COLOR env var: presence of the variable (any value) disables color.
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    std::io::stdout().is_terminal()
}

const ANSI_CYAN: &str = "\x1b[36m";
const ANSI_RESET: &str = "\x1b[0m";

/// Width of a full-scale bar, in characters.
const BAR_WIDTH: usize = 50;

/// One chart series: a labeled set of `(n, mean value)` points.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    /// Structure label, e.g. `"ListUnionFind"`.
    pub label: String,
    /// `(universe size, aggregated value)` points, sorted by `n`.
    pub points: Vec<(usize, f64)>,
}

/// Renders one chart: title line, y-axis caption, then a block per series
/// with bars scaled against the chart-wide maximum.
///
/// A non-empty series whose values are all zero still gets minimum-width
/// bars so every measured point stays visible.
pub fn render_chart(title: &str, y_label: &str, series: &[Series], colors: bool) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str(title);
    out.push('\n');
    out.push_str(y_label);
    out.push_str(" (scaled bars)\n\n");

    let max_value = series
        .iter()
        .flat_map(|s| s.points.iter().map(|&(_, y)| y))
        .fold(0.0_f64, f64::max);
    if max_value <= 0.0 {
        out.push_str("No data to plot.\n");
        return out;
    }

    for s in series {
        out.push_str(&s.label);
        out.push('\n');
        for &(n, y) in &s.points {
            let filled = (((y / max_value) * BAR_WIDTH as f64) as usize).max(1);
            let bar = "#".repeat(filled);
            if colors {
                out.push_str(&format!(" n={n:<8} {ANSI_CYAN}{bar}{ANSI_RESET} {y:.4}\n"));
            } else {
                out.push_str(&format!(" n={n:<8} {bar} {y:.4}\n"));
            }
        }
        out.push('\n');
    }

    out
}
