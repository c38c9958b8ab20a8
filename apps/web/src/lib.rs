//! Browser front end for the flashcard matching game.
//!
//! Binds the page's inputs, buttons, card surface, results table and score
//! display to a [`match_core::Game`] and applies the effects it returns.

pub mod app;
pub mod config;
pub mod dom;
pub mod error;
pub mod logging;
pub mod view;

pub use app::App;
pub use error::WebError;

use anyhow::Context;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

/// wasm entry point, run once the module is instantiated. Pages without a
/// card surface (such as a test runner) are left untouched.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    boot().map_err(|err| JsValue::from_str(&format!("{:#}", err)))
}

fn boot() -> anyhow::Result<()> {
    let document = dom::document()?;
    if document.get_element_by_id(dom::SURFACE_ID).is_none() {
        return Ok(());
    }

    let loaded = config::load(&document);
    let level = loaded
        .as_ref()
        .map(|config| config.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    logging::init(&level);
    let config = loaded.unwrap_or_else(|err| {
        tracing::warn!(%err, "using default config");
        Default::default()
    });

    let app = App::mount(document, config).context("failed to mount flashcard game")?;
    APP.with(|slot| *slot.borrow_mut() = Some(app));
    Ok(())
}
