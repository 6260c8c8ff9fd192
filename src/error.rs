//! Error types for boards, parsing and search sessions

use thiserror::Error;

/// Errors raised while building or validating a board
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    /// The board has no blank, or its cells are not a permutation of `0..N²`
    #[error("Malformed state: {0}")]
    MalformedState(String),
    /// The cell vector does not hold N² values
    #[error("Expected {expected} cells, found {found}")]
    WrongCellCount { expected: usize, found: usize },
    /// The board was built for a different grid size than the session
    #[error("Board is {found}x{found} but the session is configured for {expected}x{expected}")]
    SizeMismatch { expected: usize, found: usize },
    /// Grid size outside the supported range
    #[error("Unsupported grid size {0}")]
    UnsupportedSize(usize),
}

/// Errors raised while reading a board from text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Input contains no rows")]
    Empty,
    #[error("Expected {expected} rows, found {found}")]
    RowCount { expected: usize, found: usize },
    #[error("Row {row}: expected {expected} values, found {found}")]
    ColumnCount {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("Row {row}: invalid cell {token:?}")]
    InvalidCell { row: usize, token: String },
    /// Dimensions were fine but the board itself is not a valid state
    #[error(transparent)]
    Invalid(#[from] PuzzleError),
}
