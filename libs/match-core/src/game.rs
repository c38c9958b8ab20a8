//! Game state manager.
//!
//! [`Game`] owns every piece of mutable state: the deck, the cards on the
//! surface, the score, the results table and the drag in flight. Operations
//! mutate that state and return the [`Effect`]s the view must apply to the
//! page, in order.

use crate::board::{Board, CardFace};
use crate::config::GameConfig;
use crate::deck::Deck;
use crate::drag::{DragController, DropOutcome};
use crate::error::{GameError, Result};
use crate::matching::is_matching_pair;
use crate::results::ResultsTable;
use crate::types::{CardId, Flashcard, MatchedPair, Notice, Side, Size};
use rand::Rng;

/// A change the view has to make to the page.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Create the element for a new card at its placed position.
    SpawnCard(CardFace),
    RemoveCard(CardId),
    /// Remove every card element from the surface.
    ClearSurface,
    SetSurfaceVisible(bool),
    SetScore(u32),
    AppendResult(MatchedPair),
    ClearResults,
    /// Empty the question and answer inputs.
    ClearInputs,
    Notify(Notice),
}

/// Text for the score display.
pub fn score_label(score: u32) -> String {
    format!("Score: {}", score)
}

pub struct Game<R> {
    config: GameConfig,
    deck: Deck,
    board: Board,
    results: ResultsTable,
    drag: DragController,
    score: u32,
    surface_visible: bool,
    surface: Size,
    rng: R,
}

impl<R: Rng> Game<R> {
    pub fn new(config: GameConfig, rng: R) -> Self {
        Self {
            config,
            deck: Deck::new(),
            board: Board::new(),
            results: ResultsTable::new(),
            drag: DragController::new(),
            score: 0,
            surface_visible: false,
            surface: Size::default(),
            rng,
        }
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn results(&self) -> &ResultsTable {
        &self.results
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_surface_visible(&self) -> bool {
        self.surface_visible
    }

    pub fn dragging(&self) -> Option<CardId> {
        self.drag.current()
    }

    /// Record the measured size of the display surface. A zero size (hidden
    /// surface) makes placement use the configured fallback size.
    pub fn set_surface_size(&mut self, size: Size) {
        self.surface = size;
    }

    fn surface(&self) -> Size {
        if self.surface.is_empty() {
            self.config.fallback_surface()
        } else {
            self.surface
        }
    }

    /// Add a flashcard from raw input. Both fields are trimmed; if either is
    /// then empty nothing is added. The inputs are cleared either way.
    pub fn add_card(&mut self, question: &str, answer: &str) -> Vec<Effect> {
        let question = question.trim();
        let answer = answer.trim();
        let mut effects = Vec::new();

        if question.is_empty() || answer.is_empty() {
            tracing::debug!("incomplete flashcard ignored");
        } else {
            let id = self.deck.push(question, answer);
            if let Some(flashcard) = self.deck.get(id).cloned() {
                self.spawn_faces(&flashcard, &mut effects);
            }
            tracing::debug!(cards = self.deck.len(), "flashcard added");
        }

        effects.push(Effect::ClearInputs);
        effects
    }

    fn spawn_faces(&mut self, flashcard: &Flashcard, effects: &mut Vec<Effect>) {
        let card = self.config.card_size();
        let surface = self.surface();
        let policy = self.config.placement_policy();
        for side in [Side::Question, Side::Answer] {
            let face = self.board.spawn(
                flashcard,
                side,
                self.config.label(side),
                card,
                surface,
                &mut self.rng,
                &policy,
            );
            effects.push(Effect::SpawnCard(face.clone()));
        }
    }

    /// Rebuild the surface from the whole deck, zero the score and show the
    /// surface. Fails without touching any state when the deck is empty.
    pub fn start(&mut self) -> Result<Vec<Effect>> {
        if self.deck.is_empty() {
            tracing::info!("start requested with an empty deck");
            return Err(GameError::EmptyDeck);
        }

        self.surface_visible = true;
        self.board.clear();
        let mut effects = vec![Effect::SetSurfaceVisible(true), Effect::ClearSurface];

        let flashcards: Vec<Flashcard> = self.deck.iter().cloned().collect();
        for flashcard in &flashcards {
            self.spawn_faces(flashcard, &mut effects);
        }

        self.score = 0;
        effects.push(Effect::SetScore(self.score));
        tracing::info!(pairs = flashcards.len(), "game started");
        Ok(effects)
    }

    /// Start dragging a card on the surface.
    pub fn begin_drag(&mut self, card: CardId) -> Result<()> {
        if !self.board.contains(card) {
            return Err(GameError::UnknownCard(card));
        }
        self.drag.begin(card);
        tracing::debug!(card = %card, "drag started");
        Ok(())
    }

    /// Finish the current drag, whatever the drop did.
    pub fn end_drag(&mut self) -> Option<CardId> {
        let card = self.drag.end();
        if let Some(card) = card {
            tracing::debug!(card = %card, "drag ended");
        }
        card
    }

    /// Handle a drop on the surface. `target` is the card under the pointer,
    /// if any.
    pub fn drop_on(&mut self, target: Option<CardId>) -> Vec<Effect> {
        match self.drag.resolve_drop(&self.board, target) {
            DropOutcome::Pair { question, answer } => self.try_match(question, answer),
            outcome => {
                tracing::debug!(?outcome, "drop ignored");
                Vec::new()
            }
        }
    }

    fn try_match(&mut self, question: CardId, answer: CardId) -> Vec<Effect> {
        let (Some(q), Some(a)) = (self.board.get(question), self.board.get(answer)) else {
            return Vec::new();
        };
        if !is_matching_pair(&self.deck, &q.content, &a.content) {
            tracing::debug!(question = %question, answer = %answer, "cards do not match");
            return Vec::new();
        }
        let pair = MatchedPair {
            question: q.content.clone(),
            answer: a.content.clone(),
        };

        let removed = self.deck.remove_pair(&pair.question, &pair.answer);
        self.score += 1;
        self.results.record(pair.clone());
        self.board.remove(question);
        self.board.remove(answer);
        // The dragged card no longer exists, so the gesture is over.
        self.drag.end();
        tracing::debug!(removed, score = self.score, "pair matched");

        let mut effects = vec![
            Effect::SetScore(self.score),
            Effect::AppendResult(pair),
            Effect::RemoveCard(question),
            Effect::RemoveCard(answer),
        ];
        self.check_win(&mut effects);
        effects
    }

    fn check_win(&mut self, effects: &mut Vec<Effect>) {
        if !self.deck.is_empty() {
            return;
        }
        tracing::info!(score = self.score, "all pairs matched");
        self.surface_visible = false;
        effects.push(Effect::Notify(Notice::Won));
        effects.push(Effect::SetSurfaceVisible(false));
        // Faces of duplicate pairs outlive their flashcards.
        if !self.board.is_empty() {
            tracing::debug!(orphans = self.board.len(), "clearing leftover cards");
            self.board.clear();
            effects.push(Effect::ClearSurface);
        }
        if !self.config.keep_results_on_win {
            self.results.clear();
            effects.push(Effect::ClearResults);
        }
    }

    /// Return to the initial empty state.
    pub fn reset(&mut self) -> Vec<Effect> {
        self.deck.clear();
        self.board.clear();
        self.results.clear();
        self.drag.end();
        self.score = 0;
        self.surface_visible = false;
        tracing::info!("game reset");
        vec![
            Effect::SetScore(0),
            Effect::ClearResults,
            Effect::SetSurfaceVisible(false),
            Effect::ClearSurface,
            Effect::ClearInputs,
        ]
    }
}
