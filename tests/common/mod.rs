//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use gridedit::{EditorConfig, Grid, Session, Table};
use gridedit::csv::HeaderOnlySource;

/// Owned strings from literals
pub fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

/// Build a table from literal header and rows
pub fn table(header: &[&str], rows: &[&[&str]]) -> Table {
    Table::new(strings(header), rows.iter().map(|r| strings(r)).collect())
}

/// Build a normalized grid from literal header and rows
pub fn test_grid(header: &[&str], rows: &[&[&str]]) -> Grid {
    Grid::from_table(table(header, rows), HeaderOnlySource::Accept).unwrap()
}

/// A session with `csv` already imported using default config
pub fn loaded_session(csv: &str) -> Session {
    let mut session = Session::new(EditorConfig::default());
    session.import_csv(csv).unwrap();
    session
}

/// First cell of every row, for checking order
pub fn first_column(grid: &Grid) -> Vec<String> {
    grid.rows().iter().map(|row| row[0].clone()).collect()
}

/// Assert every row is exactly as wide as the header
pub fn assert_shape(grid: &Grid) {
    for (i, row) in grid.rows().iter().enumerate() {
        assert_eq!(
            row.len(),
            grid.column_count(),
            "row {} has {} cells but header has {}",
            i,
            row.len(),
            grid.column_count()
        );
    }
}
