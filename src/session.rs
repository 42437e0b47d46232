//! Editing session: the loaded grid plus the mode it is in
//!
//! ```text
//! Session
//! ├── EditorConfig
//! └── Mode
//!     ├── Empty (nothing loaded yet)
//!     └── Loaded(Grid)
//! ```
//!
//! A session only moves from `Empty` to `Loaded`. A new import or blank grid
//! replaces the loaded grid; a failed import leaves it in place.

use std::path::Path;

use anyhow::Context;

use crate::config::EditorConfig;
use crate::csv::{
    detect_delimiter, parse_csv, CellEdit, Delimiter, Grid, GridError, Table,
};
use crate::error::Result;

/// Whether a grid is available for editing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Empty,
    Loaded(Grid),
}

impl Mode {
    pub fn is_loaded(&self) -> bool {
        matches!(self, Mode::Loaded(_))
    }
}

/// Summary of a successful load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadReport {
    /// Data rows, not counting the header
    pub rows: usize,
    pub columns: usize,
    /// Rows padded with empty cells to the header width
    pub padded: usize,
    /// Rows cut down to the header width
    pub truncated: usize,
}

/// One user's editing session
#[derive(Debug, Clone, Default)]
pub struct Session {
    mode: Mode,
    config: EditorConfig,
}

impl Session {
    pub fn new(config: EditorConfig) -> Self {
        Self {
            mode: Mode::Empty,
            config,
        }
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn is_loaded(&self) -> bool {
        self.mode.is_loaded()
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// The loaded grid, if any
    pub fn grid(&self) -> Option<&Grid> {
        match &self.mode {
            Mode::Loaded(grid) => Some(grid),
            Mode::Empty => None,
        }
    }

    fn grid_mut(&mut self) -> std::result::Result<&mut Grid, GridError> {
        match &mut self.mode {
            Mode::Loaded(grid) => Ok(grid),
            Mode::Empty => Err(GridError::NotLoaded),
        }
    }

    /// Start a fresh grid with the given column names, or the configured
    /// number of default columns when `None`
    pub fn create_blank(&mut self, column_names: Option<Vec<String>>) -> LoadReport {
        let grid = match column_names {
            Some(names) => Grid::blank(names),
            None => Grid::with_default_columns(self.config.blank_columns),
        };
        let report = LoadReport {
            rows: grid.row_count(),
            columns: grid.column_count(),
            padded: 0,
            truncated: 0,
        };
        tracing::info!(columns = report.columns, "Created blank grid");
        self.mode = Mode::Loaded(grid);
        report
    }

    /// Load parser output as the new grid
    pub fn load(&mut self, table: Table) -> std::result::Result<LoadReport, GridError> {
        let (grid, normalization) =
            Grid::from_table_with_report(table, self.config.header_only_source)?;

        let report = LoadReport {
            rows: grid.row_count(),
            columns: grid.column_count(),
            padded: normalization.padded,
            truncated: normalization.truncated,
        };
        if report.padded > 0 || report.truncated > 0 {
            tracing::warn!(
                padded = report.padded,
                truncated = report.truncated,
                "Normalized ragged rows to header width"
            );
        }
        tracing::info!(
            rows = report.rows,
            columns = report.columns,
            "Loaded grid"
        );

        self.mode = Mode::Loaded(grid);
        Ok(report)
    }

    /// Parse delimited text and load it
    pub fn import_csv(&mut self, content: &str) -> Result<LoadReport> {
        let delimiter = if self.config.detect_delimiter {
            detect_delimiter(content)
        } else {
            self.config.delimiter
        };
        self.import_with_delimiter(content, delimiter)
    }

    fn import_with_delimiter(&mut self, content: &str, delimiter: Delimiter) -> Result<LoadReport> {
        let table = parse_csv(content, delimiter)?;
        Ok(self.load(table)?)
    }

    pub fn add_row(&mut self) -> std::result::Result<(), GridError> {
        let grid = self.grid_mut()?;
        grid.add_row();
        tracing::debug!(rows = grid.row_count(), "Added row");
        Ok(())
    }

    pub fn remove_row(&mut self, index: usize) -> std::result::Result<Vec<String>, GridError> {
        let grid = self.grid_mut()?;
        let removed = grid.remove_row(index)?;
        tracing::debug!(index, rows = grid.row_count(), "Removed row");
        Ok(removed)
    }

    pub fn set_cell(
        &mut self,
        row: usize,
        col: usize,
        value: impl Into<String>,
    ) -> std::result::Result<CellEdit, GridError> {
        let edit = self.grid_mut()?.set_cell(row, col, value)?;
        tracing::debug!(row, col, modified = edit.is_modified(), "Set cell");
        Ok(edit)
    }

    /// Returns the name of the added column
    pub fn add_column(&mut self) -> std::result::Result<String, GridError> {
        let name = self.grid_mut()?.add_column().to_string();
        tracing::debug!(name = %name, "Added column");
        Ok(name)
    }

    /// Returns the removed column's name, or `None` when there were no columns
    pub fn remove_column(&mut self) -> std::result::Result<Option<String>, GridError> {
        let removed = self.grid_mut()?.remove_column();
        match &removed {
            Some(name) => tracing::debug!(name = %name, "Removed last column"),
            None => tracing::debug!("No column to remove"),
        }
        Ok(removed)
    }

    /// Serialize the loaded grid with the configured delimiter and line ending
    ///
    /// Once every column is removed the export is empty text, which cannot
    /// be imported again (`EmptySource`).
    pub fn export(&self) -> Result<String> {
        let grid = self.grid().ok_or(GridError::NotLoaded)?;
        let text = grid.to_csv(self.config.csv_format())?;
        tracing::info!(
            rows = grid.row_count(),
            bytes = text.len(),
            "Exported grid"
        );
        Ok(text)
    }

    /// Suggested file name for the exported text
    pub fn export_file_name(&self) -> &str {
        &self.config.export_file_name
    }

    /// Read a file and load it. The delimiter comes from the extension,
    /// falling back to detection for files without one.
    pub fn open_file(&mut self, path: &Path) -> anyhow::Result<LoadReport> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let delimiter = path
            .extension()
            .and_then(|e| e.to_str())
            .map(Delimiter::from_extension)
            .unwrap_or_else(|| detect_delimiter(&content));

        self.import_with_delimiter(&content, delimiter)
            .with_context(|| format!("Failed to load {}", path.display()))
    }

    /// Write the exported grid to a file
    pub fn save_file(&self, path: &Path) -> anyhow::Result<()> {
        let text = self.export()?;
        std::fs::write(path, text)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::info!("Saved grid to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::csv::HeaderOnlySource;

    #[test]
    fn test_new_session_is_empty() {
        let session = Session::default();
        assert!(!session.is_loaded());
        assert!(session.grid().is_none());
    }

    #[test]
    fn test_mutations_before_load_fail() {
        let mut session = Session::default();

        assert_eq!(session.add_row(), Err(GridError::NotLoaded));
        assert_eq!(session.remove_row(0), Err(GridError::NotLoaded));
        assert_eq!(session.set_cell(0, 0, "x"), Err(GridError::NotLoaded));
        assert_eq!(session.add_column(), Err(GridError::NotLoaded));
        assert_eq!(session.remove_column(), Err(GridError::NotLoaded));
        assert!(matches!(
            session.export(),
            Err(crate::Error::Grid(GridError::NotLoaded))
        ));
    }

    #[test]
    fn test_create_blank_uses_configured_width() {
        let config = EditorConfig {
            blank_columns: 2,
            ..EditorConfig::default()
        };
        let mut session = Session::new(config);

        let report = session.create_blank(None);

        assert_eq!(report.columns, 2);
        assert_eq!(report.rows, 1);
        let grid = session.grid().unwrap();
        assert_eq!(grid.header(), &["Column 1", "Column 2"]);
        assert_eq!(grid.row(0).unwrap(), &["", ""]);
    }

    #[test]
    fn test_import_reports_rows() {
        let mut session = Session::default();

        let report = session.import_csv("a,b\n1,2\n3\n").unwrap();

        assert_eq!(
            report,
            LoadReport {
                rows: 2,
                columns: 2,
                padded: 1,
                truncated: 0
            }
        );
        assert_eq!(session.grid().unwrap().get(1, 1), Some(""));
    }

    #[test]
    fn test_failed_import_keeps_current_grid() {
        let mut session = Session::default();
        session.import_csv("a\n1\n").unwrap();

        let err = session.import_csv("").unwrap_err();

        assert_eq!(err.as_grid(), Some(&GridError::EmptySource));
        assert_eq!(session.grid().unwrap().get(0, 0), Some("1"));
    }

    #[test]
    fn test_header_only_reject() {
        let config = EditorConfig {
            header_only_source: HeaderOnlySource::Reject,
            ..EditorConfig::default()
        };
        let mut session = Session::new(config);

        let err = session.import_csv("a,b\n").unwrap_err();

        assert_eq!(err.as_grid(), Some(&GridError::EmptySource));
        assert!(!session.is_loaded());
    }

    #[test]
    fn test_detect_delimiter_on_import() {
        let config = EditorConfig {
            detect_delimiter: true,
            ..EditorConfig::default()
        };
        let mut session = Session::new(config);

        session.import_csv("a;b\n1;2\n").unwrap();

        assert_eq!(session.grid().unwrap().header(), &["a", "b"]);
    }
}
