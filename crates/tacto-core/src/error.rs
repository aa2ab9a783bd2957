//! Error types for board notation parsing.

/// Errors that occur when parsing board notation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseBoardError {
    /// The notation does not have exactly `BOARD_SIZE` rows.
    #[error("expected {expected} rows, found {found}")]
    WrongRowCount {
        /// Number of rows expected.
        expected: usize,
        /// Number of rows found.
        found: usize,
    },
    /// A row describes more or fewer cells than the board is wide.
    #[error("row {row} has {found} cells, expected {expected}")]
    WrongRowLength {
        /// Zero-based row index.
        row: usize,
        /// Number of cells found.
        found: usize,
        /// Number of cells expected.
        expected: usize,
    },
    /// An unrecognized character appeared in the notation.
    #[error("invalid cell character: '{character}'")]
    InvalidCellChar {
        /// The invalid character.
        character: char,
    },
}
