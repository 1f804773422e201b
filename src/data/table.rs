// table.rs - In-memory pivot table

use crate::core::period::PeriodSelector;
use crate::error::{PivotError, Result};

/// Ordered rows of string cells. Row 0 is the header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// Build a table from string literals (handy for tests and small reports)
    pub fn from_strs<R: AsRef<[&'static str]>>(rows: &[R]) -> Self {
        Self {
            rows: rows
                .iter()
                .map(|r| r.as_ref().iter().map(|s| s.to_string()).collect())
                .collect(),
        }
    }

    pub fn header(&self) -> Option<&[String]> {
        self.rows.first().map(|r| r.as_slice())
    }

    /// Data rows (everything after the header)
    pub fn records(&self) -> &[Vec<String>] {
        if self.rows.is_empty() {
            &[]
        } else {
            &self.rows[1..]
        }
    }

    /// Number of columns announced by the header
    pub fn column_count(&self) -> usize {
        self.header().map_or(0, |h| h.len())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Fail on the first row whose width differs from the header's
    pub fn ensure_rectangular(&self) -> Result<()> {
        let expected = self.column_count();
        for (idx, row) in self.rows.iter().enumerate() {
            if row.len() != expected {
                return Err(PivotError::ColumnCountMismatch {
                    line: idx + 1,
                    found: row.len(),
                    expected,
                });
            }
        }
        Ok(())
    }

    /// Keep the identifier column and a single period column.
    /// The header keeps its empty first cell so the projection is still a valid pivot table.
    pub fn select_period(&self, selector: &PeriodSelector) -> Result<Table> {
        let header = self.header().ok_or_else(|| PivotError::MalformedHeader {
            reason: "empty table".to_string(),
        })?;

        let column = match selector {
            PeriodSelector::Latest => {
                if header.len() < 2 {
                    return Err(PivotError::UnknownPeriod {
                        value: "latest".to_string(),
                    });
                }
                header.len() - 1
            }
            PeriodSelector::Month(month) => header
                .iter()
                .skip(1)
                .position(|h| h == month)
                .map(|p| p + 1)
                .ok_or_else(|| PivotError::UnknownPeriod {
                    value: month.clone(),
                })?,
        };

        self.ensure_rectangular()?;

        let rows = self
            .rows
            .iter()
            .map(|row| vec![row[0].clone(), row[column].clone()])
            .collect();
        Ok(Table { rows })
    }
}
