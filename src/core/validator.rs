// validator.rs - Structural validation of submitter pivot tables

use crate::data::Table;
use crate::error::{PivotError, Result};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;
use tracing::debug;

static PERIOD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^20[0-9]{2}-[0-9]{2}$").expect("period pattern is valid"));

// Stricter GitHub rules would be ^[a-zA-Z0-9]+(?:-[a-zA-Z0-9]+)*$ but the dataset
// contains user names ending with "-" or holding "--".
static IDENTIFIER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9-]+$").expect("identifier pattern is valid"));

static INTEGER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?[0-9]+$").expect("integer pattern is valid"));

/// Identifiers must be shorter than 40 characters
pub const MAX_IDENTIFIER_LEN: usize = 39;

/// Base-10 integer in text form, optional sign, no range limit
pub fn is_integer(value: &str) -> bool {
    INTEGER_REGEX.is_match(value)
}

pub fn is_valid_period(label: &str) -> bool {
    PERIOD_REGEX.is_match(label)
}

pub fn is_valid_identifier(value: &str) -> bool {
    let len = value.chars().count();
    (1..=MAX_IDENTIFIER_LEN).contains(&len) && IDENTIFIER_REGEX.is_match(value)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CheckOptions {
    /// Record which structural checks passed
    pub verbose: bool,
}

impl CheckOptions {
    pub fn verbose(verbose: bool) -> Self {
        Self { verbose }
    }
}

/// Outcome of a successful check
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    pub header_columns: usize,
    pub data_records: usize,
    /// Only filled in verbose mode
    pub passed_checks: Vec<String>,
}

impl CheckReport {
    fn note(&mut self, enabled: bool, message: String) {
        debug!("{}", message);
        if enabled {
            self.passed_checks.push(message);
        }
    }
}

/// Validate a loaded table. The first failing rule aborts validation.
pub fn validate_table(table: &Table, options: &CheckOptions) -> Result<CheckReport> {
    let header = table.header().ok_or_else(|| PivotError::MalformedHeader {
        reason: "the file holds no header row".to_string(),
    })?;

    let mut report = CheckReport {
        header_columns: header.len(),
        data_records: table.records().len(),
        passed_checks: Vec::new(),
    };
    report.note(
        options.verbose,
        format!("Number of columns defined in header: {}", header.len()),
    );

    let first = header.first().ok_or_else(|| PivotError::MalformedHeader {
        reason: "header row has no cells".to_string(),
    })?;
    if !first.is_empty() {
        return Err(PivotError::MalformedHeader {
            reason: format!("first column name should be empty, found \"{}\"", first),
        });
    }
    report.note(
        options.verbose,
        "File's header starts with an empty column name".to_string(),
    );

    if let Some(label) = header.iter().skip(1).find(|h| !is_valid_period(h)) {
        return Err(PivotError::MalformedHeader {
            reason: format!(
                "column header \"{}\" is not of the expected format (YYYY-MM)",
                label
            ),
        });
    }
    report.note(
        options.verbose,
        "File's header data columns follow the \"20YY-MM\" format".to_string(),
    );

    for (idx, row) in table.records().iter().enumerate() {
        let line = idx + 2;
        validate_record(row, line, header.len())?;
    }

    report.note(
        options.verbose,
        "Number of data columns match header columns".to_string(),
    );
    report.note(
        options.verbose,
        format!(
            "Records have a valid GitHub username and number of submitted PRs ({} data records)",
            report.data_records
        ),
    );

    Ok(report)
}

fn validate_record(row: &[String], line: usize, expected: usize) -> Result<()> {
    if row.len() != expected {
        return Err(PivotError::ColumnCountMismatch {
            line,
            found: row.len(),
            expected,
        });
    }

    if !is_valid_identifier(&row[0]) {
        return Err(PivotError::InvalidIdentifier {
            line,
            value: row[0].clone(),
        });
    }

    for (column, value) in row.iter().enumerate().skip(1) {
        if !is_integer(value) {
            return Err(PivotError::InvalidCount {
                line,
                column,
                value: value.clone(),
            });
        }
    }
    Ok(())
}

/// Boolean verdict for callers that don't need diagnostics
pub fn is_valid_table(table: &Table) -> bool {
    validate_table(table, &CheckOptions::default()).is_ok()
}

/// Load a CSV file and validate it
pub fn check_file(file_path: &Path, options: &CheckOptions) -> Result<CheckReport> {
    let table = Table::from_file(file_path)?;
    validate_table(&table, options)
}
