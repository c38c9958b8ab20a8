//! Event wiring between the page and the game.
//!
//! All handlers run on the browser event loop. The game sits behind a
//! `RefCell` and every borrow ends before effects are applied, so a handler
//! that triggers another event (an alert, a removed element) never re-enters
//! a live borrow.

use crate::dom::Elements;
use crate::error::{log_failure, Result};
use crate::view::{View, CARD_CLASS, CARD_ID_ATTR, HIDDEN_CLASS};
use gloo::events::{EventListener, EventListenerOptions};
use gloo::timers::callback::Timeout;
use match_core::{CardFace, CardId, Effect, Game, GameConfig, GameError, Notice};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};
use wasm_bindgen::JsCast;
use web_sys::{Document, DragEvent, Element, Event, HtmlElement};

/// A card element and the drag listeners attached to it. Dropping the
/// binding detaches the listeners.
struct CardBinding {
    element: HtmlElement,
    _listeners: [EventListener; 2],
}

struct Inner {
    game: RefCell<Game<SmallRng>>,
    view: View,
    cards: RefCell<HashMap<CardId, CardBinding>>,
    /// Pending hide of the dragged card. Dropping it cancels the hide.
    hide_timer: RefCell<Option<Timeout>>,
}

/// The mounted game. Page-level listeners live as long as this value.
pub struct App {
    inner: Rc<Inner>,
    _listeners: Vec<EventListener>,
}

impl App {
    /// Look up the page elements, reset them to the initial state and attach
    /// the page-level listeners.
    pub fn mount(document: Document, config: GameConfig) -> Result<Self> {
        let elements = Elements::lookup(&document)?;
        let inner = Rc::new(Inner {
            game: RefCell::new(Game::new(config, seeded_rng())),
            view: View::new(document, elements),
            cards: RefCell::new(HashMap::new()),
            hide_timer: RefCell::new(None),
        });

        inner.view.set_score(0);
        inner.view.set_surface_visible(false)?;

        let elements = inner.view.elements();
        let listeners = vec![
            on_click(&elements.add_card, &inner, Inner::on_add_card),
            on_click(&elements.start_game, &inner, Inner::on_start),
            on_click(&elements.reset_game, &inner, Inner::on_reset),
            EventListener::new_with_options(
                &elements.surface,
                "dragover",
                EventListenerOptions::enable_prevent_default(),
                |event| event.prevent_default(),
            ),
            {
                let inner = inner.clone();
                EventListener::new_with_options(
                    &elements.surface,
                    "drop",
                    EventListenerOptions::enable_prevent_default(),
                    move |event| inner.on_drop(event),
                )
            },
        ];

        tracing::info!("flashcard matcher mounted");
        Ok(Self {
            inner,
            _listeners: listeners,
        })
    }

    pub fn score(&self) -> u32 {
        self.inner.game.borrow().score()
    }

    pub fn pairs_remaining(&self) -> usize {
        self.inner.game.borrow().deck().len()
    }
}

fn on_click(target: &HtmlElement, inner: &Rc<Inner>, handler: fn(&Rc<Inner>)) -> EventListener {
    let inner = inner.clone();
    EventListener::new(target, "click", move |_| handler(&inner))
}

fn seeded_rng() -> SmallRng {
    let noise = (js_sys::Math::random() * u64::MAX as f64) as u64;
    SmallRng::seed_from_u64(noise ^ js_sys::Date::now() as u64)
}

impl Inner {
    fn on_add_card(self: &Rc<Self>) {
        let (question, answer) = self.view.input_values();
        let surface = self.view.measure_surface();
        let effects = {
            let mut game = self.game.borrow_mut();
            game.set_surface_size(surface);
            game.add_card(&question, &answer)
        };
        self.apply(effects);
    }

    fn on_start(self: &Rc<Self>) {
        let surface = self.view.measure_surface();
        let started = {
            let mut game = self.game.borrow_mut();
            game.set_surface_size(surface);
            game.start()
        };
        match started {
            Ok(effects) => self.apply(effects),
            Err(GameError::EmptyDeck) => self.apply(vec![Effect::Notify(Notice::NeedCards)]),
            Err(err) => tracing::error!(%err, "failed to start game"),
        }
    }

    fn on_reset(self: &Rc<Self>) {
        let effects = self.game.borrow_mut().reset();
        self.apply(effects);
    }

    fn on_drop(self: &Rc<Self>, event: &Event) {
        event.prevent_default();
        let target = event
            .target()
            .and_then(|target| target.dyn_into::<Element>().ok())
            .and_then(|element| element.closest(&format!(".{}", CARD_CLASS)).ok().flatten())
            .and_then(|card| card.get_attribute(CARD_ID_ATTR))
            .and_then(|value| CardId::parse(&value));
        let effects = self.game.borrow_mut().drop_on(target);
        if self.game.borrow().dragging().is_none() {
            self.hide_timer.take();
        }
        self.apply(effects);
    }

    fn on_drag_start(&self, card: CardId, element: &HtmlElement, event: &Event) {
        if let Err(err) = self.game.borrow_mut().begin_drag(card) {
            tracing::warn!(%err, "drag start ignored");
            return;
        }
        if let Some(transfer) = event.dyn_ref::<DragEvent>().and_then(|e| e.data_transfer()) {
            let content = element.get_attribute("data-content").unwrap_or_default();
            log_failure(transfer.set_data("text/plain", &content), "set drag data");
        }
        // Hide on the next tick, after the browser has captured the drag image.
        let element = element.clone();
        let timer = Timeout::new(0, move || {
            log_failure(element.class_list().add_1(HIDDEN_CLASS), "hide dragged card");
        });
        self.hide_timer.replace(Some(timer));
    }

    fn on_drag_end(&self, element: &HtmlElement) {
        self.hide_timer.take();
        log_failure(element.class_list().remove_1(HIDDEN_CLASS), "show dragged card");
        self.game.borrow_mut().end_drag();
    }

    fn apply(self: &Rc<Self>, effects: Vec<Effect>) {
        for effect in effects {
            if let Err(err) = self.apply_one(effect) {
                tracing::error!(%err, "failed to update page");
            }
        }
    }

    fn apply_one(self: &Rc<Self>, effect: Effect) -> Result<()> {
        match effect {
            Effect::SpawnCard(face) => self.bind_card(&face)?,
            Effect::RemoveCard(card) => {
                if let Some(binding) = self.cards.borrow_mut().remove(&card) {
                    binding.element.remove();
                }
            }
            Effect::ClearSurface => {
                self.hide_timer.take();
                self.cards.borrow_mut().clear();
                self.view.clear_surface();
            }
            Effect::SetSurfaceVisible(visible) => self.view.set_surface_visible(visible)?,
            Effect::SetScore(score) => self.view.set_score(score),
            Effect::AppendResult(pair) => self.view.append_result(&pair)?,
            Effect::ClearResults => self.view.clear_results(),
            Effect::ClearInputs => self.view.clear_inputs(),
            Effect::Notify(notice) => self.view.notify(notice),
        }
        Ok(())
    }

    fn bind_card(self: &Rc<Self>, face: &CardFace) -> Result<()> {
        let element = self.view.spawn_card(face)?;
        let card = face.id;

        let drag_start = {
            let inner: Weak<Inner> = Rc::downgrade(self);
            let target = element.clone();
            EventListener::new(&element, "dragstart", move |event| {
                if let Some(inner) = inner.upgrade() {
                    inner.on_drag_start(card, &target, event);
                }
            })
        };
        let drag_end = {
            let inner: Weak<Inner> = Rc::downgrade(self);
            let target = element.clone();
            EventListener::new(&element, "dragend", move |_| {
                if let Some(inner) = inner.upgrade() {
                    inner.on_drag_end(&target);
                }
            })
        };

        self.cards.borrow_mut().insert(
            card,
            CardBinding {
                element,
                _listeners: [drag_start, drag_end],
            },
        );
        Ok(())
    }
}
