//! The ordered collection of unmatched flashcards.

use crate::types::{Flashcard, FlashcardId};

/// Flashcards in insertion order. Insertion order is the display order when a
/// game starts.
#[derive(Debug, Clone, Default)]
pub struct Deck {
    cards: Vec<Flashcard>,
    next_id: u64,
}

impl Deck {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a flashcard and return its id. Callers are expected to have
    /// trimmed and presence-checked both fields.
    pub fn push(&mut self, question: impl Into<String>, answer: impl Into<String>) -> FlashcardId {
        let id = FlashcardId(self.next_id);
        self.next_id += 1;
        self.cards.push(Flashcard {
            id,
            question: question.into(),
            answer: answer.into(),
        });
        id
    }

    pub fn get(&self, id: FlashcardId) -> Option<&Flashcard> {
        self.cards.iter().find(|card| card.id == id)
    }

    /// Whether some flashcard has exactly this question and answer.
    pub fn contains_pair(&self, question: &str, answer: &str) -> bool {
        self.cards
            .iter()
            .any(|card| card.question == question && card.answer == answer)
    }

    /// Remove every flashcard with exactly this question and answer.
    /// Returns how many were removed.
    pub fn remove_pair(&mut self, question: &str, answer: &str) -> usize {
        let before = self.cards.len();
        self.cards
            .retain(|card| card.question != question || card.answer != answer);
        before - self.cards.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Flashcard> {
        self.cards.iter()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Drop all flashcards. Ids keep increasing so stale card references
    /// never resolve to a new flashcard.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}
