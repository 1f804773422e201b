// lib.rs - pivotab library root

//! # pivotab - Validator and report renderer for submitter pivot tables
//!
//! Pivot tables produced by a GNU datamash pivot over pull-request data have
//! one row per submitter, one column per month (`20YY-MM`) and integer counts
//! in the cells. This library checks that a file has that exact shape and
//! writes it back either as CSV or as a width-aligned Markdown table.
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use pivotab::prelude::*;
//! use std::path::Path;
//!
//! let table = Table::from_file(Path::new("submitters.csv"))?;
//! validate_table(&table, &CheckOptions::default())?;
//!
//! let options = MarkdownOptions {
//!     introduction: Some("# Submitters".to_string()),
//!     header_rows: 1,
//! };
//! write_table(Path::new("submitters.md"), &table, &options)?;
//! # Ok::<(), pivotab::PivotError>(())
//! ```

pub mod cli;
pub mod core;
pub mod data;
pub mod error;
pub mod output;

// Convenience prelude for common imports
pub mod prelude {
    pub use crate::core::{check_file, is_valid_month, is_valid_table, validate_table};
    pub use crate::core::{CheckOptions, CheckReport, PeriodSelector};
    pub use crate::data::Table;
    pub use crate::error::{PivotError, Result};
    pub use crate::output::{column_widths, write_table, MarkdownOptions};
}

pub use data::Table;
pub use error::{PivotError, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library information
pub fn get_info() -> String {
    format!("pivotab v{} - Submitter pivot table checker and renderer", VERSION)
}
