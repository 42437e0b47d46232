//! Delimited text and the grid it is edited as
//!
//! - `parser`: CSV text to a raw `Table` (header record plus rows) and back
//! - `model`: the `Grid`, which keeps every row as wide as the header
//!
//! # Data flow
//!
//! ```text
//! text ── parse_csv ──▶ Table ── Grid::from_table ──▶ Grid
//!                                                      │ add_row / remove_row
//!                                                      │ set_cell
//!                                                      │ add_column / remove_column
//! text ◀── serialize_csv ◀──────── Grid::to_csv ◀──────┘
//! ```
//!
//! The parser never reshapes records. Padding and truncation to the header
//! width happen once, when a `Table` becomes a `Grid`.

mod model;
mod parser;

pub use model::{
    column_name, Axis, CellEdit, CellPosition, CsvFormat, Delimiter, Grid, GridError,
    HeaderOnlySource, LineEnding, Normalization, Table,
};
pub use parser::{detect_delimiter, parse_csv, serialize_csv, CodecError};
