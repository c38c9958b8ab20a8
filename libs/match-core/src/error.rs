//! Error types for match-core.

use crate::types::CardId;
use thiserror::Error;

/// Result type alias using GameError.
pub type Result<T> = std::result::Result<T, GameError>;

/// Errors raised by game operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("cannot start a game without flashcards")]
    EmptyDeck,

    #[error("card {0} is not on the board")]
    UnknownCard(CardId),
}
