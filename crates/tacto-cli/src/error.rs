//! Session errors.

/// Errors that can occur while running a session.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// `move` was given without a cell.
    #[error("move requires a cell, e.g. `move b2`")]
    MissingCell,

    /// The cell could not be parsed or lies off the board.
    #[error("invalid cell: {value}")]
    InvalidCell {
        /// The cell string that failed to parse.
        value: String,
    },

    /// An I/O error occurred while reading input.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
