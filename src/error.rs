//! Error management.

use crate::types::{VId, MAX_VID};
use derive_more::Display;

#[derive(Debug, Display)]
pub enum Error {
    #[display(fmt = "vertex {} is not in the graph", _0)]
    MissingVertex(VId),
    #[display(fmt = "vertex id {} is larger than {}", _0, MAX_VID)]
    IdOutOfRange(VId),
    #[display(fmt = "cannot allocate storage for vertex {}", _0)]
    OutOfMemory(VId),
    #[display(fmt = "line {}: {}", line, reason)]
    Malformed { line: usize, reason: String },
    #[display(fmt = "{}", _0)]
    Io(std::io::Error),
    #[display(fmt = "{}", _0)]
    Sqlite(rusqlite::Error),
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Sqlite(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<rusqlite::Error> for Error {
    fn from(e: rusqlite::Error) -> Self {
        Error::Sqlite(e)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
