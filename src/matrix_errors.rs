use crate::matrix::CellId;
use std::fmt;

/// Error types for building grids and loading configuration
#[derive(Debug, Clone, PartialEq)]
pub enum MatrixError {
    /// Invalid or unreadable configuration
    ConfigError(String),
    /// Filesystem errors while loading or saving configuration
    IoError(String),
    /// A row whose width differs from the first row
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// The same cell id appears more than once in a grid
    DuplicateCellId(CellId),
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            MatrixError::IoError(msg) => write!(f, "I/O error: {}", msg),
            MatrixError::RaggedRow {
                row,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Row {} has {} cells, expected {} - grid must be rectangular",
                    row, found, expected
                )
            }
            MatrixError::DuplicateCellId(id) => write!(f, "Cell id {} appears more than once", id),
        }
    }
}

impl std::error::Error for MatrixError {}

impl From<std::io::Error> for MatrixError {
    fn from(err: std::io::Error) -> Self {
        MatrixError::IoError(err.to_string())
    }
}

impl From<serde_json::Error> for MatrixError {
    fn from(err: serde_json::Error) -> Self {
        MatrixError::ConfigError(err.to_string())
    }
}

/// Result type alias for matrix operations that can fail
pub type MatrixResult<T> = Result<T, MatrixError>;
