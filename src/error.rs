use thiserror::Error;

use crate::csv::{CodecError, GridError};

/// Crate-wide error type.
/// Aggregates the codec and grid errors so session calls can use `?` on both.
#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Codec(#[from] CodecError),

    #[error("{0}")]
    Grid(#[from] GridError),
}

impl Error {
    /// The grid error kind, if this is one
    pub fn as_grid(&self) -> Option<&GridError> {
        match self {
            Error::Grid(e) => Some(e),
            Error::Codec(_) => None,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
