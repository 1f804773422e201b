// csv.rs - CSV file loader for pivot tables

use crate::data::table::Table;
use crate::error::{PivotError, Result};
use ::csv::ReaderBuilder;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

impl Table {
    /// Parse comma-separated records from any reader.
    /// Record widths are not enforced here; the validator reports mismatches.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut rows = Vec::new();
        for record in csv_reader.records() {
            let record = record?;
            rows.push(record.iter().map(|s| s.to_string()).collect());
        }

        Ok(Table { rows })
    }

    /// Load a CSV file from disk
    pub fn from_file(file_path: &Path) -> Result<Self> {
        let file = File::open(file_path).map_err(|e| PivotError::io(file_path, e))?;
        let table = Self::from_reader(file)?;

        debug!(
            path = %file_path.display(),
            rows = table.len(),
            columns = table.column_count(),
            "CSV table loaded"
        );
        Ok(table)
    }
}
