//! CSV data model types
//!
//! The grid is stored as an owned header plus an owned `Vec<Vec<String>>`.
//! Every row is kept at exactly `header.len()` cells: structural edits
//! validate first and then touch the header and all rows together, so a
//! failed call never leaves a half-applied change behind.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::parser::{serialize_csv, CodecError};

/// Supported CSV delimiters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Delimiter {
    #[default]
    Comma,
    Tab,
    Pipe,
    Semicolon,
}

impl Delimiter {
    /// Get the character for this delimiter
    pub fn char(self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Tab => '\t',
            Delimiter::Pipe => '|',
            Delimiter::Semicolon => ';',
        }
    }

    /// The delimiter as the single byte the csv crate expects
    pub fn byte(self) -> u8 {
        self.char() as u8
    }

    /// Detect delimiter from file extension
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "tsv" => Delimiter::Tab,
            "psv" => Delimiter::Pipe,
            _ => Delimiter::Comma,
        }
    }
}

/// Record separator used when writing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// Output dialect for serialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CsvFormat {
    pub delimiter: Delimiter,
    pub line_ending: LineEnding,
}

impl CsvFormat {
    pub fn new(delimiter: Delimiter, line_ending: LineEnding) -> Self {
        Self {
            delimiter,
            line_ending,
        }
    }
}

/// What `Grid::from_table` does with a source that has a header but no data rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeaderOnlySource {
    /// Load it as a valid zero-row grid
    #[default]
    Accept,
    /// Treat it like a source with no header at all
    Reject,
}

/// Raw codec output: a header record and the records after it, unnormalized
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(header: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { header, rows }
    }

    /// True when parsing found no records at all
    pub fn is_empty(&self) -> bool {
        self.header.is_empty() && self.rows.is_empty()
    }
}

/// Position of a cell in the grid (row 0 is the first data row, not the header)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellPosition {
    pub row: usize,
    pub col: usize,
}

impl CellPosition {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Represents a completed cell edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellEdit {
    pub position: CellPosition,
    pub old_value: String,
    pub new_value: String,
}

impl CellEdit {
    /// Whether the edit actually changed the cell
    pub fn is_modified(&self) -> bool {
        self.old_value != self.new_value
    }
}

/// Which index of a cell address was out of bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Column,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Row => write!(f, "row"),
            Axis::Column => write!(f, "column"),
        }
    }
}

/// Errors raised by grid operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The source produced no usable header
    #[error("Source contains no header row")]
    EmptySource,

    /// A mutation was attempted before any grid was loaded
    #[error("No grid is loaded")]
    NotLoaded,

    #[error("{axis} index {index} is out of range (len {len})")]
    IndexOutOfRange { axis: Axis, index: usize, len: usize },
}

/// Name given to the column at `index` when none is supplied ("Column 1", ...)
pub fn column_name(index: usize) -> String {
    format!("Column {}", index + 1)
}

/// Shape counters from normalizing a `Table` into a `Grid`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Normalization {
    /// Rows that were short and got empty cells appended
    pub padded: usize,
    /// Rows that were long and lost trailing cells
    pub truncated: usize,
}

/// Header plus rows, every row exactly as wide as the header
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Grid {
    /// A grid with the given header and a single row of empty cells
    pub fn blank(column_names: Vec<String>) -> Self {
        let row = vec![String::new(); column_names.len()];
        Self {
            header: column_names,
            rows: vec![row],
        }
    }

    /// A blank grid named "Column 1" through "Column {count}"
    pub fn with_default_columns(count: usize) -> Self {
        Self::blank((0..count).map(column_name).collect())
    }

    /// Accept parser output, padding short rows and truncating long ones
    pub fn from_table(table: Table, policy: HeaderOnlySource) -> Result<Self, GridError> {
        Self::from_table_with_report(table, policy).map(|(grid, _)| grid)
    }

    /// Like `from_table`, also reporting how many rows had to be reshaped
    pub fn from_table_with_report(
        table: Table,
        policy: HeaderOnlySource,
    ) -> Result<(Self, Normalization), GridError> {
        if table.header.is_empty() {
            return Err(GridError::EmptySource);
        }
        if table.rows.is_empty() && policy == HeaderOnlySource::Reject {
            return Err(GridError::EmptySource);
        }

        let width = table.header.len();
        let mut report = Normalization::default();
        let rows = table
            .rows
            .into_iter()
            .map(|mut row| {
                if row.len() < width {
                    report.padded += 1;
                    row.resize(width, String::new());
                } else if row.len() > width {
                    report.truncated += 1;
                    row.truncate(width);
                }
                row
            })
            .collect();

        Ok((
            Self {
                header: table.header,
                rows,
            },
            report,
        ))
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&[String]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// Get cell value at position
    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.get(col).map(String::as_str)
    }

    /// Get number of data rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get number of columns
    pub fn column_count(&self) -> usize {
        self.header.len()
    }

    /// Check if the grid has no data rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Every row is exactly as wide as the header
    pub fn is_shape_valid(&self) -> bool {
        let width = self.header.len();
        self.rows.iter().all(|row| row.len() == width)
    }

    /// Append a row of empty cells
    pub fn add_row(&mut self) {
        self.rows.push(vec![String::new(); self.header.len()]);
    }

    /// Remove the row at `index`, shifting later rows up. Returns the removed row.
    pub fn remove_row(&mut self, index: usize) -> Result<Vec<String>, GridError> {
        self.check_row(index)?;
        Ok(self.rows.remove(index))
    }

    /// Replace one cell's value
    pub fn set_cell(
        &mut self,
        row: usize,
        col: usize,
        value: impl Into<String>,
    ) -> Result<CellEdit, GridError> {
        self.check_row(row)?;
        self.check_col(col)?;

        let new_value = value.into();
        let old_value = std::mem::replace(&mut self.rows[row][col], new_value.clone());

        Ok(CellEdit {
            position: CellPosition::new(row, col),
            old_value,
            new_value,
        })
    }

    /// Append a column named after the current width, with an empty cell in every row.
    /// Returns the new column's name.
    pub fn add_column(&mut self) -> &str {
        let name = column_name(self.header.len());
        for row in &mut self.rows {
            row.push(String::new());
        }
        self.header.push(name);
        &self.header[self.header.len() - 1]
    }

    /// Drop the last column from the header and every row.
    /// Returns `None` without touching anything when there are no columns.
    pub fn remove_column(&mut self) -> Option<String> {
        let name = self.header.pop()?;
        for row in &mut self.rows {
            row.pop();
        }
        Some(name)
    }

    /// Owned copy of the current contents
    pub fn snapshot(&self) -> Table {
        Table::new(self.header.clone(), self.rows.clone())
    }

    /// Serialize header and rows as delimited text
    pub fn to_csv(&self, format: CsvFormat) -> Result<String, CodecError> {
        serialize_csv(&self.header, &self.rows, format)
    }

    fn check_row(&self, index: usize) -> Result<(), GridError> {
        if index < self.rows.len() {
            Ok(())
        } else {
            Err(GridError::IndexOutOfRange {
                axis: Axis::Row,
                index,
                len: self.rows.len(),
            })
        }
    }

    fn check_col(&self, index: usize) -> Result<(), GridError> {
        if index < self.header.len() {
            Ok(())
        } else {
            Err(GridError::IndexOutOfRange {
                axis: Axis::Column,
                index,
                len: self.header.len(),
            })
        }
    }
}
