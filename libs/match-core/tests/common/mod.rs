//! Shared helpers for game integration tests.

#![allow(dead_code)]

use match_core::{CardId, Effect, Game, GameConfig, Rect, Side, Size};
use rand::rngs::StdRng;
use rand::SeedableRng;

pub type TestGame = Game<StdRng>;

/// Game with a seeded RNG and a measured 1024x768 surface.
pub fn new_game(seed: u64) -> TestGame {
    let mut game = Game::new(GameConfig::default(), StdRng::seed_from_u64(seed));
    game.set_surface_size(Size::new(1024.0, 768.0));
    game
}

/// Game with the given pairs added and started.
pub fn started_game(seed: u64, pairs: &[(&str, &str)]) -> TestGame {
    let mut game = new_game(seed);
    for (question, answer) in pairs {
        game.add_card(question, answer);
    }
    game.start().expect("deck is not empty");
    game
}

/// Find the card showing `content` on the given side.
pub fn card(game: &TestGame, side: Side, content: &str) -> CardId {
    game.board()
        .iter()
        .find(|face| face.side == side && face.content == content)
        .map(|face| face.id)
        .unwrap_or_else(|| panic!("no {} card {content:?}", side.as_str()))
}

/// Drag `from` onto `to` the way the page does: drag start, drop, drag end.
pub fn drag_onto(game: &mut TestGame, from: CardId, to: CardId) -> Vec<Effect> {
    game.begin_drag(from).expect("dragged card is on the board");
    let effects = game.drop_on(Some(to));
    game.end_drag();
    effects
}

pub fn rects(game: &TestGame) -> Vec<Rect> {
    game.board().iter().map(|face| face.rect).collect()
}
