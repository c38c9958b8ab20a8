//! Question/answer pair matching for dropped cards.

use crate::deck::Deck;

/// Check whether the deck holds a flashcard with exactly this question and
/// answer. Comparison is case-sensitive and whitespace is significant.
pub fn is_matching_pair(deck: &Deck, question: &str, answer: &str) -> bool {
    deck.contains_pair(question, answer)
}
