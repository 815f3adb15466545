//! Error types for the Bifid library.

use thiserror::Error;

/// Errors produced by the Bifid library.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BifidError {
    /// Character is not one of the 25 letters of the square.
    ///
    /// Raised for `j` (merged into `i`), uppercase letters passed straight to
    /// a lookup, digits, punctuation, spaces and non-ASCII characters.
    #[error("Letter '{0}' is not in the Polybius square")]
    InvalidLetter(char),
    /// Row or column is outside the 1-indexed range `1..=5`.
    #[error("Coordinate ({row}, {col}) is outside the 5x5 square")]
    InvalidCoordinate { row: usize, col: usize },
}
