//! Game configuration.

use crate::layout::PlacementPolicy;
use crate::types::{Side, Size};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Invalid configuration values.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("card size must be positive, got {width}x{height}")]
    InvalidCardSize { width: f64, height: f64 },

    #[error("max_placement_attempts must be at least 1")]
    NoPlacementAttempts,

    #[error("fallback_stagger must be a finite non-negative number, got {0}")]
    InvalidStagger(f64),

    #[error("fallback surface size must be positive, got {width}x{height}")]
    InvalidFallbackSurface { width: f64, height: f64 },
}

/// Tunables for layout, labels and logging. Every field has a default, so a
/// partial JSON object is accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub card_width: f64,
    pub card_height: f64,
    /// Surface size assumed while the surface is hidden and measures zero.
    pub fallback_surface_width: f64,
    pub fallback_surface_height: f64,
    pub max_placement_attempts: u32,
    pub fallback_stagger: f64,
    pub question_label: String,
    pub answer_label: String,
    /// Keep the results table when the last pair is matched.
    pub keep_results_on_win: bool,
    pub log_level: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            card_width: 160.0,
            card_height: 90.0,
            fallback_surface_width: 800.0,
            fallback_surface_height: 500.0,
            max_placement_attempts: 200,
            fallback_stagger: 24.0,
            question_label: "Q:".to_string(),
            answer_label: "A:".to_string(),
            keep_results_on_win: false,
            log_level: "info".to_string(),
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.card_width > 0.0 && self.card_height > 0.0) {
            return Err(ConfigError::InvalidCardSize {
                width: self.card_width,
                height: self.card_height,
            });
        }
        if self.max_placement_attempts == 0 {
            return Err(ConfigError::NoPlacementAttempts);
        }
        if !(self.fallback_stagger.is_finite() && self.fallback_stagger >= 0.0) {
            return Err(ConfigError::InvalidStagger(self.fallback_stagger));
        }
        if !(self.fallback_surface_width > 0.0 && self.fallback_surface_height > 0.0) {
            return Err(ConfigError::InvalidFallbackSurface {
                width: self.fallback_surface_width,
                height: self.fallback_surface_height,
            });
        }
        Ok(())
    }

    pub fn card_size(&self) -> Size {
        Size::new(self.card_width, self.card_height)
    }

    pub fn fallback_surface(&self) -> Size {
        Size::new(self.fallback_surface_width, self.fallback_surface_height)
    }

    pub fn placement_policy(&self) -> PlacementPolicy {
        PlacementPolicy {
            max_attempts: self.max_placement_attempts,
            stagger: self.fallback_stagger,
        }
    }

    /// Role prefix shown on cards of the given side.
    pub fn label(&self, side: Side) -> &str {
        match side {
            Side::Question => &self.question_label,
            Side::Answer => &self.answer_label,
        }
    }
}
