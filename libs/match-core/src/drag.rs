//! Drag-and-drop state for a single gesture.

use crate::board::Board;
use crate::types::{CardId, Side};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(CardId),
}

/// What a drop on the surface amounts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// Nothing was being dragged (or the dragged card is gone).
    NotDragging,
    /// The drop target is not a card on the board.
    NotACard,
    /// The card was dropped onto itself.
    SameCard,
    /// Both cards show the same side.
    SameSide(Side),
    /// A question/answer pairing to evaluate.
    Pair { question: CardId, answer: CardId },
}

/// Tracks the card being dragged.
#[derive(Debug, Clone, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn current(&self) -> Option<CardId> {
        match self.state {
            DragState::Idle => None,
            DragState::Dragging(card) => Some(card),
        }
    }

    /// Start dragging `card`. A gesture still in flight is replaced.
    pub fn begin(&mut self, card: CardId) {
        self.state = DragState::Dragging(card);
    }

    /// Finish the gesture whatever happened to it, returning the card that
    /// was being dragged.
    pub fn end(&mut self) -> Option<CardId> {
        let card = self.current();
        self.state = DragState::Idle;
        card
    }

    /// Classify a drop onto `target` (`None` when the drop landed on the bare
    /// surface or on something that is not a card).
    pub fn resolve_drop(&self, board: &Board, target: Option<CardId>) -> DropOutcome {
        let Some(dragged) = self.current().and_then(|id| board.get(id)) else {
            return DropOutcome::NotDragging;
        };
        let Some(dropped) = target.and_then(|id| board.get(id)) else {
            return DropOutcome::NotACard;
        };
        if dragged.id == dropped.id {
            return DropOutcome::SameCard;
        }
        match (dragged.side, dropped.side) {
            (Side::Question, Side::Answer) => DropOutcome::Pair {
                question: dragged.id,
                answer: dropped.id,
            },
            (Side::Answer, Side::Question) => DropOutcome::Pair {
                question: dropped.id,
                answer: dragged.id,
            },
            (side, _) => DropOutcome::SameSide(side),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::Deck;
    use crate::layout::PlacementPolicy;
    use crate::types::Size;
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Board with Q1, A1, Q2 in that order.
    fn board() -> (Board, [CardId; 3]) {
        let mut deck = Deck::new();
        deck.push("Q1", "A1");
        deck.push("Q2", "A2");
        let cards: Vec<_> = deck.iter().cloned().collect();
        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(11);
        let policy = PlacementPolicy::default();
        let card = Size::new(100.0, 50.0);
        let surface = Size::new(1000.0, 800.0);
        let q1 = board
            .spawn(&cards[0], Side::Question, "Q:", card, surface, &mut rng, &policy)
            .id;
        let a1 = board
            .spawn(&cards[0], Side::Answer, "A:", card, surface, &mut rng, &policy)
            .id;
        let q2 = board
            .spawn(&cards[1], Side::Question, "Q:", card, surface, &mut rng, &policy)
            .id;
        (board, [q1, a1, q2])
    }

    #[test]
    fn test_end_always_clears() {
        let mut drag = DragController::new();
        assert_eq!(drag.end(), None);
        drag.begin(CardId(4));
        assert_eq!(drag.state(), DragState::Dragging(CardId(4)));
        assert_eq!(drag.end(), Some(CardId(4)));
        assert_eq!(drag.state(), DragState::Idle);
    }

    #[test]
    fn test_drop_without_drag_is_ignored() {
        let (board, [q1, ..]) = board();
        let drag = DragController::new();
        assert_eq!(drag.resolve_drop(&board, Some(q1)), DropOutcome::NotDragging);
    }

    #[test]
    fn test_drop_on_surface_or_self() {
        let (board, [q1, ..]) = board();
        let mut drag = DragController::new();
        drag.begin(q1);
        assert_eq!(drag.resolve_drop(&board, None), DropOutcome::NotACard);
        assert_eq!(drag.resolve_drop(&board, Some(CardId(99))), DropOutcome::NotACard);
        assert_eq!(drag.resolve_drop(&board, Some(q1)), DropOutcome::SameCard);
    }

    #[test]
    fn test_pair_is_symmetric() {
        let (board, [q1, a1, _]) = board();
        let mut drag = DragController::new();
        drag.begin(q1);
        let forward = drag.resolve_drop(&board, Some(a1));
        drag.begin(a1);
        let backward = drag.resolve_drop(&board, Some(q1));
        assert_eq!(forward, DropOutcome::Pair { question: q1, answer: a1 });
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_same_side_is_rejected() {
        let (board, [q1, _, q2]) = board();
        let mut drag = DragController::new();
        drag.begin(q1);
        assert_eq!(
            drag.resolve_drop(&board, Some(q2)),
            DropOutcome::SameSide(Side::Question)
        );
    }

    #[test]
    fn test_stale_drag_reference() {
        let (mut board, [q1, a1, _]) = board();
        let mut drag = DragController::new();
        drag.begin(q1);
        board.remove(q1);
        assert_eq!(drag.resolve_drop(&board, Some(a1)), DropOutcome::NotDragging);
    }
}
