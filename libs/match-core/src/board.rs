//! Cards currently shown on the display surface.

use crate::layout::{place, Placement, PlacementPolicy};
use crate::types::{CardId, Flashcard, FlashcardId, Rect, Side, Size};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// One side of a flashcard as rendered on the surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardFace {
    pub id: CardId,
    /// The flashcard this face was built from.
    pub flashcard: FlashcardId,
    pub side: Side,
    /// Role prefix, e.g. `Q:`.
    pub label: String,
    /// The flashcard field without the prefix.
    pub content: String,
    pub rect: Rect,
}

/// Ordered set of rendered cards. Order matches the surface's child order.
#[derive(Debug, Clone, Default)]
pub struct Board {
    faces: Vec<CardFace>,
    next_id: u64,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the face for one side of `flashcard`, place it clear of the
    /// cards already on the board and append it.
    pub fn spawn<R: Rng + ?Sized>(
        &mut self,
        flashcard: &Flashcard,
        side: Side,
        label: &str,
        card: Size,
        surface: Size,
        rng: &mut R,
        policy: &PlacementPolicy,
    ) -> &CardFace {
        let Placement {
            origin,
            attempts,
            fallback,
        } = place(&self.rects(), card, surface, rng, policy);

        let id = CardId(self.next_id);
        self.next_id += 1;

        let content = match side {
            Side::Question => flashcard.question.clone(),
            Side::Answer => flashcard.answer.clone(),
        };
        tracing::debug!(card = %id, side = side.as_str(), attempts, fallback, "card placed");

        let idx = self.faces.len();
        self.faces.push(CardFace {
            id,
            flashcard: flashcard.id,
            side,
            label: label.to_string(),
            content,
            rect: Rect::new(origin, card),
        });
        &self.faces[idx]
    }

    pub fn get(&self, id: CardId) -> Option<&CardFace> {
        self.faces.iter().find(|face| face.id == id)
    }

    pub fn contains(&self, id: CardId) -> bool {
        self.get(id).is_some()
    }

    /// Remove a card, returning it if it was on the board.
    pub fn remove(&mut self, id: CardId) -> Option<CardFace> {
        let idx = self.faces.iter().position(|face| face.id == id)?;
        Some(self.faces.remove(idx))
    }

    pub fn clear(&mut self) {
        self.faces.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &CardFace> {
        self.faces.iter()
    }

    pub fn len(&self) -> usize {
        self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    pub fn rects(&self) -> Vec<Rect> {
        self.faces.iter().map(|face| face.rect).collect()
    }
}
