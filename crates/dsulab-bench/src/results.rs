//! Tabular experiment results.
//!
//! One [`ResultRow`] per timed run. Rows serialize two ways: CSV with a
//! fixed column order (the interchange format the reporting tool reads) and
//! JSON via serde for structured consumers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The CSV header line, fixing the column order of [`ResultRow`].
pub const CSV_HEADER: &str =
    "structure,use_rank,path_compression,n,m,workload,trial,runtime,pointer_updates";

/// A single timed experiment run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    /// Structure family: `"list"` or `"tree"`.
    pub structure: String,
    /// Whether the tree ran union-by-rank (`false` for the list and for
    /// union-by-size).
    pub use_rank: bool,
    /// Whether the tree compressed paths (`false` for the list).
    pub path_compression: bool,
    /// Universe size.
    pub n: usize,
    /// Operation budget the workload was generated with.
    pub m: usize,
    /// Canonical workload name, e.g. `"random_50_50"`.
    pub workload: String,
    /// 1-based trial number.
    pub trial: usize,
    /// Wall-clock replay time in seconds.
    pub runtime: f64,
    /// Structural pointer rewrites recorded by the structure.
    pub pointer_updates: u64,
}

impl ResultRow {
    /// Formats the row as one CSV record in [`CSV_HEADER`] column order.
    ///
    /// No field ever needs quoting: structure and workload names are fixed
    /// identifiers and everything else is numeric.
    pub fn to_csv_record(&self) -> String {
        format!(
            "{},{},{},{},{},{},{},{},{}",
            self.structure,
            self.use_rank,
            self.path_compression,
            self.n,
            self.m,
            self.workload,
            self.trial,
            self.runtime,
            self.pointer_updates
        )
    }
}

/// Renders a header line plus one record per row.
pub fn rows_to_csv(rows: &[ResultRow]) -> String {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');
    for row in rows {
        out.push_str(&row.to_csv_record());
        out.push('\n');
    }
    out
}

// ---------------------------------------------------------------------------
// CSV parsing
// ---------------------------------------------------------------------------

/// Errors produced while parsing a results CSV file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CsvParseError {
    /// The first line is not the expected [`CSV_HEADER`].
    BadHeader {
        /// The header line actually found (empty for an empty file).
        found: String,
    },
    /// A record has the wrong number of comma-separated fields.
    FieldCount {
        /// 1-based line number in the file.
        line: usize,
        /// Number of fields found (9 expected).
        found: usize,
    },
    /// A field failed to parse as its column's type.
    BadField {
        /// 1-based line number in the file.
        line: usize,
        /// Column name from [`CSV_HEADER`].
        column: &'static str,
        /// The raw field text.
        value: String,
    },
}

impl fmt::Display for CsvParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CsvParseError::BadHeader { found } => {
                write!(f, "expected results header {CSV_HEADER:?}, found {found:?}")
            }
            CsvParseError::FieldCount { line, found } => {
                write!(f, "line {line}: expected 9 fields, found {found}")
            }
            CsvParseError::BadField {
                line,
                column,
                value,
            } => {
                write!(f, "line {line}: invalid {column} value {value:?}")
            }
        }
    }
}

impl std::error::Error for CsvParseError {}

/// Parses a `bool` field, accepting capitalized spellings (`True`/`False`)
/// some producers write alongside Rust's lowercase.
fn parse_bool(value: &str, line: usize, column: &'static str) -> Result<bool, CsvParseError> {
    if value.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if value.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(CsvParseError::BadField {
            line,
            column,
            value: value.to_owned(),
        })
    }
}

fn parse_field<T: std::str::FromStr>(
    value: &str,
    line: usize,
    column: &'static str,
) -> Result<T, CsvParseError> {
    value.parse().map_err(|_| CsvParseError::BadField {
        line,
        column,
        value: value.to_owned(),
    })
}

/// Parses a full results file (header line plus records).
///
/// Empty trailing lines are ignored.
///
/// # Errors
///
/// [`CsvParseError`] naming the offending line and column.
pub fn parse_csv(text: &str) -> Result<Vec<ResultRow>, CsvParseError> {
    let mut lines = text.lines();
    let header = lines.next().unwrap_or_default();
    if header != CSV_HEADER {
        return Err(CsvParseError::BadHeader {
            found: header.to_owned(),
        });
    }

    let mut rows = Vec::new();
    for (idx, record) in lines.enumerate() {
        let line = idx + 2;
        if record.is_empty() {
            continue;
        }
        let fields: Vec<&str> = record.split(',').collect();
        if fields.len() != 9 {
            return Err(CsvParseError::FieldCount {
                line,
                found: fields.len(),
            });
        }
        rows.push(ResultRow {
            structure: fields[0].to_owned(),
            use_rank: parse_bool(fields[1], line, "use_rank")?,
            path_compression: parse_bool(fields[2], line, "path_compression")?,
            n: parse_field(fields[3], line, "n")?,
            m: parse_field(fields[4], line, "m")?,
            workload: fields[5].to_owned(),
            trial: parse_field(fields[6], line, "trial")?,
            runtime: parse_field(fields[7], line, "runtime")?,
            pointer_updates: parse_field(fields[8], line, "pointer_updates")?,
        });
    }
    Ok(rows)
}
