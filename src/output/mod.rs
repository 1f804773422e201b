// mod.rs - Output formatters module

pub mod csv;
pub mod markdown;

use crate::data::Table;
use crate::error::{PivotError, Result};
use std::path::Path;

pub use self::csv::{render_csv, write_csv};
pub use markdown::{column_widths, render_markdown, write_markdown, MarkdownOptions};

/// True when the file extension is "md" in any case; everything else is written as CSV
pub fn is_markdown_path(file_path: &Path) -> bool {
    file_path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("md"))
}

/// Input files must exist and not be directories
pub fn is_file_valid(file_path: &Path) -> bool {
    file_path.is_file()
}

/// Verify the directory of an intended output file exists
pub fn check_dir(file_path: &Path) -> Result<()> {
    let parent = match file_path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        // Bare file name: the working directory
        _ => return Ok(()),
    };

    if !parent.is_dir() {
        return Err(PivotError::MissingDirectory {
            path: parent.to_path_buf(),
        });
    }
    Ok(())
}

/// Write the table in the format selected by the file extension.
/// Nothing is created when the directory is missing or the table is ragged.
pub fn write_table(file_path: &Path, table: &Table, options: &MarkdownOptions) -> Result<()> {
    check_dir(file_path)?;
    table.ensure_rectangular()?;

    if is_markdown_path(file_path) {
        write_markdown(file_path, table, options)?;
        println!("✅ Markdown table written to: {}", file_path.display());
    } else {
        write_csv(file_path, table)?;
        println!("✅ CSV table written to: {}", file_path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::is_valid_table;

    #[test]
    fn test_is_markdown_path() {
        let cases = [
            ("myfile.md", true),
            ("myfile.mD", true),
            ("myfile.csv", false),
            ("myfile", false),
            ("myfile.", false),
        ];
        for (name, expected) in cases {
            assert_eq!(is_markdown_path(Path::new(name)), expected, "{}", name);
        }
    }

    #[test]
    fn test_is_file_valid() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("data.csv");
        std::fs::write(&file, "x").unwrap();

        assert!(is_file_valid(&file));
        assert!(!is_file_valid(&dir.path().join("unexistantFile.txt")));
        assert!(!is_file_valid(dir.path()));
    }

    #[test]
    fn test_check_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert!(check_dir(&dir.path().join("fle-1.txt")).is_ok());
        assert!(check_dir(Path::new("fle-1.txt")).is_ok());

        let missing = check_dir(&dir.path().join("junkDir").join("fle-1.txt"));
        assert!(matches!(missing, Err(PivotError::MissingDirectory { .. })));
    }

    #[test]
    fn test_write_table_missing_directory_creates_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("junkDir").join("out.md");
        let table = Table::from_strs(&[["", "2023-01"], ["basil", "1"]]);

        let result = write_table(&target, &table, &MarkdownOptions::default());
        assert!(matches!(result, Err(PivotError::MissingDirectory { .. })));
        assert!(!target.exists());
    }

    #[test]
    fn test_write_table_ragged_creates_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("out.csv");
        let table = Table::from_strs(&[vec!["", "2023-01"], vec!["basil"]]);

        assert!(write_table(&target, &table, &MarkdownOptions::default()).is_err());
        assert!(!target.exists());
    }

    #[test]
    fn test_csv_round_trip_keeps_verdict() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("out.CSV");
        let table = Table::from_strs(&[
            ["", "2023-01", "2023-02"],
            ["basil", "1245", "0"],
            ["trail-", "-1", "+3"],
        ]);

        write_table(&target, &table, &MarkdownOptions::default()).unwrap();
        let reloaded = Table::from_file(&target).unwrap();
        assert_eq!(reloaded, table);
        assert_eq!(is_valid_table(&reloaded), is_valid_table(&table));
    }
}
