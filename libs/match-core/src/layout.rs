//! Random card placement on the display surface.
//!
//! Candidates are sampled uniformly at whole-pixel offsets in
//! `[0, W - w) x [0, H - h)` and rejected while they overlap a card that is
//! already placed. Sampling is capped; once the cap is hit the card goes to a
//! deterministic cascade position instead, so a crowded or undersized surface
//! can never stall the event loop.

use crate::types::{Point, Rect, Size};
use rand::Rng;

/// How hard to look for a free spot before giving up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementPolicy {
    pub max_attempts: u32,
    /// Offset step between successive fallback positions.
    pub stagger: f64,
}

impl Default for PlacementPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 200,
            stagger: 24.0,
        }
    }
}

/// Result of placing one card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub origin: Point,
    /// Number of candidates sampled.
    pub attempts: u32,
    /// True when no free spot was found and the cascade position was used.
    pub fallback: bool,
}

/// Pick a top-left position for a card of size `card` on `surface`, avoiding
/// every rect in `existing`.
pub fn place<R: Rng + ?Sized>(
    existing: &[Rect],
    card: Size,
    surface: Size,
    rng: &mut R,
    policy: &PlacementPolicy,
) -> Placement {
    let span_x = span(surface.width, card.width);
    let span_y = span(surface.height, card.height);

    for attempt in 1..=policy.max_attempts {
        let origin = Point::new(sample(rng, span_x), sample(rng, span_y));
        let candidate = Rect::new(origin, card);
        if !existing.iter().any(|rect| rect.overlaps(&candidate)) {
            return Placement {
                origin,
                attempts: attempt,
                fallback: false,
            };
        }
    }

    let origin = cascade(existing.len(), policy.stagger, span_x, span_y);
    tracing::warn!(
        attempts = policy.max_attempts,
        placed = existing.len(),
        x = origin.x,
        y = origin.y,
        "no free spot for card, using cascade position"
    );
    Placement {
        origin,
        attempts: policy.max_attempts,
        fallback: true,
    }
}

/// Number of whole-pixel offsets available along one axis.
fn span(outer: f64, inner: f64) -> u64 {
    let free = (outer - inner).floor();
    if free >= 1.0 {
        free as u64
    } else {
        0
    }
}

fn sample<R: Rng + ?Sized>(rng: &mut R, span: u64) -> f64 {
    if span == 0 {
        0.0
    } else {
        rng.random_range(0..span) as f64
    }
}

fn cascade(index: usize, stagger: f64, span_x: u64, span_y: u64) -> Point {
    let step = index as f64 * stagger;
    let wrap = |span: u64| {
        if span == 0 {
            0.0
        } else {
            step % span as f64
        }
    };
    Point::new(wrap(span_x), wrap(span_y))
}
