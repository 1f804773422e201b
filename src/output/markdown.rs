// markdown.rs - Width-aligned Markdown table report

use crate::core::is_integer;
use crate::data::Table;
use crate::error::{PivotError, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct MarkdownOptions {
    /// Written verbatim (plus a newline) before the table
    pub introduction: Option<String>,
    /// Number of leading rows that form the table header; the separator follows them
    pub header_rows: usize,
}

impl Default for MarkdownOptions {
    fn default() -> Self {
        Self {
            introduction: None,
            header_rows: 1,
        }
    }
}

/// Maximum character length per column across every row, header included
pub fn column_widths(table: &Table) -> Result<Vec<usize>> {
    table.ensure_rectangular()?;

    let mut widths = vec![0; table.column_count()];
    for row in &table.rows {
        for (column, cell) in row.iter().enumerate() {
            widths[column] = widths[column].max(cell.chars().count());
        }
    }
    Ok(widths)
}

fn format_cell(cell: &str, width: usize) -> String {
    if is_integer(cell) {
        format!("{:>width$}", cell, width = width)
    } else {
        format!("{:<width$}", cell, width = width)
    }
}

/// Separator cell; numeric columns end with ':' to right-align in Markdown renderers
fn separator_cell(cell: &str, width: usize) -> String {
    if is_integer(cell) && width > 0 {
        format!("{}:", "-".repeat(width - 1))
    } else {
        "-".repeat(width)
    }
}

fn join_cells<I: IntoIterator<Item = String>>(cells: I) -> String {
    let mut line = String::from("|");
    for cell in cells {
        line.push(' ');
        line.push_str(&cell);
        line.push_str(" |");
    }
    line
}

fn separator_line(row: &[String], widths: &[usize]) -> String {
    join_cells(
        row.iter()
            .zip(widths)
            .map(|(cell, &width)| separator_cell(cell, width)),
    )
}

/// Render the table as Markdown into any writer.
/// Alignment markers of the separator follow the row right after the header rows;
/// a table made of header rows only takes them from its last row.
pub fn render_markdown<W: Write>(writer: &mut W, table: &Table, options: &MarkdownOptions) -> Result<()> {
    // Computed before anything is written so a ragged table produces no output
    let widths = column_widths(table)?;
    let sink = Path::new("<markdown>");
    // The separator never precedes the header
    let header_rows = options.header_rows.max(1);

    if let Some(intro) = options.introduction.as_deref().filter(|s| !s.is_empty()) {
        writeln!(writer, "{}", intro).map_err(|e| PivotError::io(sink, e))?;
    }

    for (idx, row) in table.rows.iter().enumerate() {
        if idx == header_rows {
            writeln!(writer, "{}", separator_line(row, &widths))
                .map_err(|e| PivotError::io(sink, e))?;
        }

        let line = join_cells(
            row.iter()
                .zip(&widths)
                .map(|(cell, &width)| format_cell(cell, width)),
        );
        writeln!(writer, "{}", line).map_err(|e| PivotError::io(sink, e))?;
    }

    if table.len() <= header_rows {
        if let Some(last) = table.rows.last() {
            writeln!(writer, "{}", separator_line(last, &widths))
                .map_err(|e| PivotError::io(sink, e))?;
        }
    }

    Ok(())
}

/// Write the table as a Markdown file
pub fn write_markdown(file_path: &Path, table: &Table, options: &MarkdownOptions) -> Result<()> {
    column_widths(table)?;

    let file = File::create(file_path).map_err(|e| PivotError::io(file_path, e))?;
    let mut writer = BufWriter::new(file);

    render_markdown(&mut writer, table, options).map_err(|e| match e {
        PivotError::Io { source, .. } => PivotError::io(file_path, source),
        other => other,
    })?;
    writer.flush().map_err(|e| PivotError::io(file_path, e))?;

    debug!(path = %file_path.display(), rows = table.len(), "Markdown table written");
    Ok(())
}
