//! Message types for the Elm-style architecture
//!
//! The presentation layer turns user actions into a `GridMsg` and hands it
//! to [`crate::update::update`].

/// Grid editing messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridMsg {
    /// Start a blank grid ("Create New CSV"). `None` uses the configured default columns.
    CreateBlank(Option<Vec<String>>),
    /// Parse uploaded file contents and load them
    Import(String),
    /// Append an empty row
    AddRow,
    /// Remove the row at this index
    RemoveRow(usize),
    /// Replace a cell's text (from an input change)
    SetCell {
        row: usize,
        col: usize,
        value: String,
    },
    /// Append a column named after its position
    AddColumn,
    /// Remove the last column
    RemoveColumn,
    /// Serialize the grid for download
    Download,
}
