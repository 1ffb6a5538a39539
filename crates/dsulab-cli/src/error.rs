//! CLI error types with associated exit codes.
//!
//! [`CliError`] is the top-level error type for the `dsulab` binary. Every
//! variant maps to a stable exit code via [`CliError::exit_code`]:
//!
//! - Exit code **2** — input failure: the tool could not read, parse, or
//!   act on its inputs at all (missing results file, malformed records, an
//!   unusable grid). Clap usage errors also exit with 2.
//! - Exit code **1** — logical failure: the tool ran to completion but the
//!   result is a well-defined failure (nothing to report).
use std::fmt;
use std::path::PathBuf;

/// All error conditions the `dsulab` CLI can produce.
#[derive(Debug)]
pub enum CliError {
    // --- Exit code 2: input failures ---
    /// A results file argument could not be found on the filesystem.
    FileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// A file could not be read for a reason other than absence.
    ReadError {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error message.
        detail: String,
    },

    /// The output file could not be written.
    WriteError {
        /// The path that could not be written.
        path: PathBuf,
        /// The underlying I/O error message.
        detail: String,
    },

    /// A results file was read but its contents did not parse.
    InvalidResults {
        /// The offending file.
        path: PathBuf,
        /// Parser message naming the line and column.
        detail: String,
    },

    /// The experiment grid itself was unusable (e.g. a zero universe size).
    InvalidGrid {
        /// The underlying error message.
        detail: String,
    },

    // --- Exit code 1: logical failures ---
    /// The results file parsed but holds no rows for the requested
    /// workload.
    NoMatchingRows {
        /// The workload name that matched nothing.
        workload: String,
    },
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::FileNotFound { .. }
            | Self::ReadError { .. }
            | Self::WriteError { .. }
            | Self::InvalidResults { .. }
            | Self::InvalidGrid { .. } => 2,

            Self::NoMatchingRows { .. } => 1,
        }
    }

    /// Returns a human-readable error message suitable for printing to
    /// stderr.
    pub fn message(&self) -> String {
        match self {
            Self::FileNotFound { path } => {
                format!("error: file not found: {}", path.display())
            }
            Self::ReadError { path, detail } => {
                format!("error: failed to read {}: {detail}", path.display())
            }
            Self::WriteError { path, detail } => {
                format!("error: failed to write {}: {detail}", path.display())
            }
            Self::InvalidResults { path, detail } => {
                format!("error: invalid results file {}: {detail}", path.display())
            }
            Self::InvalidGrid { detail } => {
                format!("error: invalid experiment grid: {detail}")
            }
            Self::NoMatchingRows { workload } => {
                format!("error: no rows for workload {workload:?} in the results file")
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for CliError {}
