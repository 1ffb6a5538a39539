//! Integration tests for `dsulab report`.
#![allow(clippy::expect_used)]

use std::path::{Path, PathBuf};
use std::process::Command;

use dsulab_bench::{ResultRow, rows_to_csv};

/// Path to the compiled `dsulab` binary.
fn dsulab_bin() -> PathBuf {
    let mut path = std::env::current_exe().expect("current exe");
    path.pop();
    if path.ends_with("deps") {
        path.pop();
    }
    path.push("dsulab");
    path
}

fn row(structure: &str, use_rank: bool, n: usize, runtime: f64) -> ResultRow {
    ResultRow {
        structure: structure.to_owned(),
        use_rank,
        path_compression: structure == "tree",
        n,
        m: n,
        workload: "gnp".to_owned(),
        trial: 1,
        runtime,
        pointer_updates: (n / 2) as u64,
    }
}

/// Writes a small gnp-only results fixture and returns its path.
fn write_fixture(dir: &Path) -> PathBuf {
    let rows = vec![
        row("list", false, 1_000, 0.004),
        row("tree", false, 1_000, 0.002),
        row("tree", true, 1_000, 0.001),
        row("list", false, 5_000, 0.030),
        row("tree", false, 5_000, 0.011),
        row("tree", true, 5_000, 0.009),
    ];
    let path = dir.join("results.csv");
    std::fs::write(&path, rows_to_csv(&rows)).expect("write fixture");
    path
}

#[test]
fn report_renders_both_charts_by_default() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = write_fixture(dir.path());

    let out = Command::new(dsulab_bin())
        .args([
            "report",
            "--input",
            input.to_str().expect("path"),
            "--workload",
            "gnp",
        ])
        .output()
        .expect("run dsulab report");
    assert!(out.status.success(), "exit code: {:?}", out.status.code());

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Runtime vs n - workload=gnp"), "stdout: {stdout}");
    assert!(
        stdout.contains("Pointer updates vs n - workload=gnp"),
        "stdout: {stdout}"
    );
    assert!(stdout.contains("ListUnionFind"), "stdout: {stdout}");
    assert!(
        stdout.contains("ForestUnionFind (union-by-size)"),
        "stdout: {stdout}"
    );
    assert!(
        stdout.contains("ForestUnionFind (union-by-rank)"),
        "stdout: {stdout}"
    );
    assert!(stdout.contains("n=1000"), "stdout: {stdout}");
    assert!(stdout.contains("n=5000"), "stdout: {stdout}");
    assert!(
        !stdout.contains('\x1b'),
        "piped output must not contain ANSI escapes"
    );
}

#[test]
fn report_metric_flag_selects_a_single_chart() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = write_fixture(dir.path());

    let out = Command::new(dsulab_bin())
        .args([
            "report",
            "--input",
            input.to_str().expect("path"),
            "--workload",
            "gnp",
            "--metric",
            "runtime",
        ])
        .output()
        .expect("run dsulab report");
    assert!(out.status.success(), "exit code: {:?}", out.status.code());

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Runtime vs n"), "stdout: {stdout}");
    assert!(!stdout.contains("Pointer updates vs n"), "stdout: {stdout}");
}

#[test]
fn report_missing_file_exits_2() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("absent.csv");

    let out = Command::new(dsulab_bin())
        .args(["report", "--input", missing.to_str().expect("path")])
        .output()
        .expect("run dsulab report");
    assert_eq!(out.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("not found"), "stderr: {stderr}");
}

#[test]
fn report_unmatched_workload_exits_1() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = write_fixture(dir.path());

    let out = Command::new(dsulab_bin())
        .args([
            "report",
            "--input",
            input.to_str().expect("path"),
            "--workload",
            "adversarial",
        ])
        .output()
        .expect("run dsulab report");
    assert_eq!(out.status.code(), Some(1), "nothing to report is a logical failure");
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("adversarial"), "stderr: {stderr}");
}

#[test]
fn run_then_report_end_to_end() {
    let dir = tempfile::tempdir().expect("tempdir");
    let results = dir.path().join("results.csv");

    let out = Command::new(dsulab_bin())
        .args([
            "run",
            "--ns",
            "60",
            "--ms",
            "2",
            "--workloads",
            "random_50_50",
            "--trials",
            "2",
            "--output",
            results.to_str().expect("path"),
        ])
        .output()
        .expect("run dsulab run");
    assert!(out.status.success(), "exit code: {:?}", out.status.code());

    let out = Command::new(dsulab_bin())
        .args([
            "report",
            "--input",
            results.to_str().expect("path"),
            "--workload",
            "random_50_50",
        ])
        .output()
        .expect("run dsulab report");
    assert!(out.status.success(), "exit code: {:?}", out.status.code());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(
        stdout.contains("Runtime vs n - workload=random_50_50"),
        "stdout: {stdout}"
    );
    assert!(stdout.contains("n=60"), "stdout: {stdout}");
}
