// csv.rs - Plain comma-separated output

use crate::data::Table;
use crate::error::{PivotError, Result};
use ::csv::{QuoteStyle, WriterBuilder};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::debug;

// I/O failures surface as Io with the target path, parse-level ones stay Csv
fn write_error(sink: &Path, e: ::csv::Error) -> PivotError {
    if e.is_io_error() {
        PivotError::io(sink, e.into())
    } else {
        PivotError::Csv(e)
    }
}

/// Write rows as CSV, quoting only the fields that need it
pub fn render_csv<W: Write>(writer: W, table: &Table) -> Result<()> {
    table.ensure_rectangular()?;
    let sink = Path::new("<csv>");

    let mut csv_writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .from_writer(writer);

    for row in &table.rows {
        csv_writer
            .write_record(row)
            .map_err(|e| write_error(sink, e))?;
    }
    csv_writer.flush().map_err(|e| PivotError::io(sink, e))?;
    Ok(())
}

/// Write the table as a CSV file
pub fn write_csv(file_path: &Path, table: &Table) -> Result<()> {
    table.ensure_rectangular()?;

    let file = File::create(file_path).map_err(|e| PivotError::io(file_path, e))?;
    render_csv(file, table).map_err(|e| match e {
        PivotError::Io { source, .. } => PivotError::io(file_path, source),
        other => other,
    })?;

    debug!(path = %file_path.display(), rows = table.len(), "CSV table written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_csv_quoting() {
        let table = Table::from_strs(&[
            ["", "2023-01", "note"],
            ["basil", "3", "a,b"],
            ["jglick", "4", "say \"hi\""],
            ["timja", "5", "two\nlines"],
        ]);
        let mut buffer = Vec::new();
        render_csv(&mut buffer, &table).unwrap();

        let expected = ",2023-01,note\nbasil,3,\"a,b\"\njglick,4,\"say \"\"hi\"\"\"\ntimja,5,\"two\nlines\"\n";
        assert_eq!(String::from_utf8(buffer).unwrap(), expected);
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn test_write_failure_is_io_error() {
        // Enough rows to overflow the csv writer's internal buffer
        let mut rows = vec![vec!["".to_string(), "2023-01".to_string()]];
        for i in 0..2000 {
            rows.push(vec![format!("submitter-{}", i), i.to_string()]);
        }
        let table = Table::new(rows);

        match render_csv(BrokenPipe, &table) {
            Err(PivotError::Io { path, .. }) => assert_eq!(path, Path::new("<csv>")),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_render_csv_rejects_ragged_table() {
        let table = Table::from_strs(&[vec!["", "2023-01"], vec!["basil"]]);
        let mut buffer = Vec::new();
        assert!(matches!(
            render_csv(&mut buffer, &table),
            Err(PivotError::ColumnCountMismatch { .. })
        ));
        assert!(buffer.is_empty());
    }
}
