//! Page elements the game drives, looked up by id.

use crate::error::{Result, WebError};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlInputElement, HtmlTableSectionElement, Window};

pub const QUESTION_INPUT_ID: &str = "question";
pub const ANSWER_INPUT_ID: &str = "answer";
pub const ADD_CARD_ID: &str = "add-card";
pub const START_GAME_ID: &str = "start-game";
pub const RESET_GAME_ID: &str = "reset-game";
pub const SURFACE_ID: &str = "flashcards-container";
pub const RESULTS_BODY_ID: &str = "matched-table-body";
pub const SCORE_ID: &str = "score";

pub fn window() -> Result<Window> {
    web_sys::window().ok_or(WebError::NoWindow)
}

pub fn document() -> Result<Document> {
    window()?.document().ok_or(WebError::NoDocument)
}

/// The eight elements supplied by the page markup.
#[derive(Debug, Clone)]
pub struct Elements {
    pub question: HtmlInputElement,
    pub answer: HtmlInputElement,
    pub add_card: HtmlElement,
    pub start_game: HtmlElement,
    pub reset_game: HtmlElement,
    pub surface: HtmlElement,
    pub results: HtmlTableSectionElement,
    pub score: HtmlElement,
}

impl Elements {
    pub fn lookup(document: &Document) -> Result<Self> {
        Ok(Self {
            question: by_id(document, QUESTION_INPUT_ID, "HtmlInputElement")?,
            answer: by_id(document, ANSWER_INPUT_ID, "HtmlInputElement")?,
            add_card: by_id(document, ADD_CARD_ID, "HtmlElement")?,
            start_game: by_id(document, START_GAME_ID, "HtmlElement")?,
            reset_game: by_id(document, RESET_GAME_ID, "HtmlElement")?,
            surface: by_id(document, SURFACE_ID, "HtmlElement")?,
            results: by_id(document, RESULTS_BODY_ID, "HtmlTableSectionElement")?,
            score: by_id(document, SCORE_ID, "HtmlElement")?,
        })
    }
}

fn by_id<T: JsCast>(document: &Document, id: &'static str, expected: &'static str) -> Result<T> {
    document
        .get_element_by_id(id)
        .ok_or(WebError::MissingElement(id))?
        .dyn_into::<T>()
        .map_err(|_| WebError::WrongElementType { id, expected })
}
