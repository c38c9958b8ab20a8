//! Core model for the flashcard matching game shared by the browser app.
//!
//! Provides:
//! - The flashcard deck and the exact-pair match evaluator
//! - Card placement on the display surface (rejection sampling with a fallback)
//! - The drag-and-drop state machine
//! - The game state manager, which reports DOM work as [`Effect`]s

pub mod board;
pub mod config;
pub mod deck;
pub mod drag;
pub mod error;
pub mod game;
pub mod layout;
pub mod matching;
pub mod results;
pub mod types;

pub use board::{Board, CardFace};
pub use config::{ConfigError, GameConfig};
pub use deck::Deck;
pub use drag::{DragController, DragState, DropOutcome};
pub use error::{GameError, Result};
pub use game::{score_label, Effect, Game};
pub use layout::{place, Placement, PlacementPolicy};
pub use matching::is_matching_pair;
pub use results::ResultsTable;
pub use types::{
    CardId, Flashcard, FlashcardId, MatchedPair, Notice, Point, Rect, Side, Size,
};
