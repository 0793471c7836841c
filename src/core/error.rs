//! Error types for the memory-match crate.
//!
//! Dealing and flipping never fail. Errors come from configuration and from
//! addressing a board position that does not exist.

use thiserror::Error;

use crate::cards::Symbol;

/// Crate-wide error type.
#[derive(Error, Debug)]
pub enum MatchError {
    /// The configured symbol set has no symbols.
    #[error("Symbol set is empty")]
    EmptySymbolSet,

    /// A symbol appears more than once in the configured set.
    #[error("Duplicate symbol in set: {0}")]
    DuplicateSymbol(Symbol),

    /// A card position outside the board was activated.
    #[error("Card index {index} out of range (board has {len} cards)")]
    CardOutOfRange {
        /// Requested position.
        index: usize,
        /// Number of cards on the board.
        len: usize,
    },

    /// Difficulty name not recognized.
    #[error("Unknown difficulty: {0}")]
    UnknownDifficulty(String),

    /// Front-end input that is not a recognized command.
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// Configuration could not be parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result alias.
pub type Result<T> = std::result::Result<T, MatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = MatchError::CardOutOfRange { index: 16, len: 16 };
        assert_eq!(err.to_string(), "Card index 16 out of range (board has 16 cards)");

        let err = MatchError::DuplicateSymbol(Symbol::new("A"));
        assert_eq!(err.to_string(), "Duplicate symbol in set: A");

        let err = MatchError::UnknownCommand("x".to_string());
        assert_eq!(err.to_string(), "Unknown command: x");
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: MatchError = io.into();
        assert!(matches!(err, MatchError::Io(_)));
    }
}
