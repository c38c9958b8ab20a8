//! Loading [`GameConfig`] from the page.
//!
//! The page may embed
//! `<script type="application/json" id="game-config">{...}</script>`.
//! Any field left out keeps its default.

use crate::error::Result;
use match_core::GameConfig;
use web_sys::Document;

pub const CONFIG_ELEMENT_ID: &str = "game-config";

/// Read the embedded config. No config element means defaults.
pub fn load(document: &Document) -> Result<GameConfig> {
    match document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content())
    {
        Some(text) => parse(&text),
        None => Ok(GameConfig::default()),
    }
}

/// Parse and validate config JSON. Blank text means defaults.
pub fn parse(text: &str) -> Result<GameConfig> {
    if text.trim().is_empty() {
        return Ok(GameConfig::default());
    }
    let config: GameConfig = serde_json::from_str(text)?;
    config.validate()?;
    Ok(config)
}
