//! Results-file reading and writing for the `dsulab` binary.
//!
//! All filesystem access happens here; `dsulab-bench` only formats and
//! parses in-memory text. Reading sniffs the payload: a results file whose
//! first non-whitespace byte is `[` is treated as the JSON array `run
//! --format json` writes, anything else as header-checked CSV.
use std::path::Path;

use dsulab_bench::{ResultRow, parse_csv};

use crate::error::CliError;

/// Reads and parses a results file in either supported format.
///
/// # Errors
///
/// [`CliError::FileNotFound`] / [`CliError::ReadError`] (exit code 2) for
/// I/O failures, [`CliError::InvalidResults`] (exit code 2) when the
/// contents parse as neither CSV nor JSON rows.
pub fn read_results(path: &Path) -> Result<Vec<ResultRow>, CliError> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Err(CliError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        Err(err) => {
            return Err(CliError::ReadError {
                path: path.to_path_buf(),
                detail: err.to_string(),
            });
        }
    };

    let trimmed = text.trim_start();
    if trimmed.starts_with('[') {
        serde_json::from_str(trimmed).map_err(|err| CliError::InvalidResults {
            path: path.to_path_buf(),
            detail: err.to_string(),
        })
    } else {
        parse_csv(&text).map_err(|err| CliError::InvalidResults {
            path: path.to_path_buf(),
            detail: err.to_string(),
        })
    }
}

/// Writes the rendered results payload to `path`.
///
/// # Errors
///
/// [`CliError::WriteError`] (exit code 2) on any I/O failure.
pub fn write_output(path: &Path, contents: &str) -> Result<(), CliError> {
    std::fs::write(path, contents).map_err(|err| CliError::WriteError {
        path: path.to_path_buf(),
        detail: err.to_string(),
    })
}
