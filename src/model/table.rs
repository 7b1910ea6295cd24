//! Table types.

use serde::{Deserialize, Serialize};

/// A table accumulated from a contiguous run of `|`-prefixed lines.
///
/// Row 0 is always the header. The classifier normalizes every data row
/// to the header's column count, so the rows are rectangular by the time
/// a `Table` reaches a renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Rows in source order; the first row is the header
    pub rows: Vec<TableRow>,
}

impl Table {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Add a row to the table.
    pub fn add_row(&mut self, row: TableRow) {
        self.rows.push(row);
    }

    /// Get the number of rows (header included).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get the number of columns, taken from the header row.
    pub fn column_count(&self) -> usize {
        self.rows.first().map(|r| r.cells.len()).unwrap_or(0)
    }

    /// Check if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get the header row, if any.
    pub fn header(&self) -> Option<&TableRow> {
        self.rows.first()
    }

    /// Get the data rows (everything after the header).
    pub fn body(&self) -> &[TableRow] {
        if self.rows.is_empty() {
            &[]
        } else {
            &self.rows[1..]
        }
    }

    /// Get a tab-separated plain text representation.
    pub fn plain_text(&self) -> String {
        self.rows
            .iter()
            .map(|row| row.plain_text())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A table row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    /// Cell text in column order
    pub cells: Vec<String>,
}

impl TableRow {
    /// Create a new row with cells.
    pub fn new(cells: Vec<String>) -> Self {
        Self { cells }
    }

    /// Create a row from text values.
    pub fn from_strings<S: Into<String>>(values: impl IntoIterator<Item = S>) -> Self {
        Self::new(values.into_iter().map(Into::into).collect())
    }

    /// Get a tab-separated plain text representation.
    pub fn plain_text(&self) -> String {
        self.cells.join("\t")
    }
}
