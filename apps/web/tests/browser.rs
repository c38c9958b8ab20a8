#![cfg(target_arch = "wasm32")]

use flashmatch_web::error::log_failure;
use flashmatch_web::App;
use gloo::timers::future::TimeoutFuture;
use match_core::GameConfig;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{Document, Element, Event, EventInit, HtmlElement, HtmlInputElement};

wasm_bindgen_test_configure!(run_in_browser);

const FIXTURE: &str = r#"
<input id="question">
<input id="answer">
<button id="add-card">Add</button>
<button id="start-game">Start</button>
<button id="reset-game">Reset</button>
<div id="score"></div>
<div id="flashcards-container" style="position: relative; width: 900px; height: 600px;"></div>
<table><tbody id="matched-table-body"></tbody></table>
"#;

fn mount() -> (Document, App) {
    let document = web_sys::window().unwrap().document().unwrap();
    document.body().unwrap().set_inner_html(FIXTURE);
    let app = App::mount(document.clone(), GameConfig::default()).unwrap();
    (document, app)
}

fn element<T: JsCast>(document: &Document, id: &str) -> T {
    document.get_element_by_id(id).unwrap().dyn_into::<T>().unwrap()
}

fn click(document: &Document, id: &str) {
    element::<HtmlElement>(document, id).click();
}

fn add_pair(document: &Document, question: &str, answer: &str) {
    element::<HtmlInputElement>(document, "question").set_value(question);
    element::<HtmlInputElement>(document, "answer").set_value(answer);
    click(document, "add-card");
}

fn card(document: &Document, side: &str, content: &str) -> Element {
    let selector = format!(".card[data-type=\"{side}\"][data-content=\"{content}\"]");
    document.query_selector(&selector).unwrap().unwrap()
}

fn card_count(document: &Document) -> u32 {
    element::<Element>(document, "flashcards-container").child_element_count()
}

fn text(document: &Document, id: &str) -> String {
    element::<Element>(document, id).text_content().unwrap_or_default()
}

fn dispatch(target: &Element, kind: &str) -> Event {
    let init = EventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = Event::new_with_event_init_dict(kind, &init).unwrap();
    target.dispatch_event(&event).unwrap();
    event
}

fn is_hidden(card: &Element) -> bool {
    card.class_list().contains("hidden")
}

/// Let queued zero-delay timers run.
async fn next_tick() {
    TimeoutFuture::new(0).await;
}

fn drag_onto(from: &Element, to: &Element) {
    from.dispatch_event(&Event::new("dragstart").unwrap()).unwrap();
    let init = EventInit::new();
    init.set_bubbles(true);
    let drop = Event::new_with_event_init_dict("drop", &init).unwrap();
    to.dispatch_event(&drop).unwrap();
    from.dispatch_event(&Event::new("dragend").unwrap()).unwrap();
}

#[wasm_bindgen_test]
fn adding_a_pair_renders_two_cards() {
    let (document, app) = mount();
    assert_eq!(text(&document, "score"), "Score: 0");

    add_pair(&document, " 2+2? ", "4");

    assert_eq!(card_count(&document), 2);
    assert_eq!(app.pairs_remaining(), 1);
    assert_eq!(card(&document, "question", "2+2?").text_content().unwrap(), "Q: 2+2?");
    assert_eq!(card(&document, "answer", "4").text_content().unwrap(), "A: 4");
    assert_eq!(element::<HtmlInputElement>(&document, "question").value(), "");
    assert_eq!(element::<HtmlInputElement>(&document, "answer").value(), "");
}

#[wasm_bindgen_test]
fn blank_field_adds_nothing() {
    let (document, app) = mount();
    add_pair(&document, "   ", "4");
    assert_eq!(card_count(&document), 0);
    assert_eq!(app.pairs_remaining(), 0);
    assert_eq!(element::<HtmlInputElement>(&document, "answer").value(), "");
}

#[wasm_bindgen_test]
fn matching_pair_scores_and_records_row() {
    let (document, app) = mount();
    add_pair(&document, "Q1", "A1");
    add_pair(&document, "Q2", "A2");
    click(&document, "start-game");
    assert_eq!(card_count(&document), 4);

    drag_onto(&card(&document, "question", "Q1"), &card(&document, "answer", "A1"));

    assert_eq!(app.score(), 1);
    assert_eq!(text(&document, "score"), "Score: 1");
    assert_eq!(card_count(&document), 2);
    let results = element::<Element>(&document, "matched-table-body");
    assert_eq!(results.child_element_count(), 1);
    assert_eq!(results.text_content().unwrap(), "Q1A1");
}

#[wasm_bindgen_test]
fn mismatched_pair_changes_nothing() {
    let (document, app) = mount();
    add_pair(&document, "Q1", "A1");
    add_pair(&document, "Q2", "A2");
    click(&document, "start-game");

    drag_onto(&card(&document, "question", "Q1"), &card(&document, "answer", "A2"));
    drag_onto(&card(&document, "question", "Q1"), &card(&document, "question", "Q2"));

    assert_eq!(app.score(), 0);
    assert_eq!(card_count(&document), 4);
    assert_eq!(element::<Element>(&document, "matched-table-body").child_element_count(), 0);
}

#[wasm_bindgen_test]
fn reset_clears_the_page() {
    let (document, app) = mount();
    add_pair(&document, "Q1", "A1");
    add_pair(&document, "Q2", "A2");
    click(&document, "start-game");
    drag_onto(&card(&document, "answer", "A2"), &card(&document, "question", "Q2"));

    click(&document, "reset-game");

    assert_eq!(app.score(), 0);
    assert_eq!(app.pairs_remaining(), 0);
    assert_eq!(card_count(&document), 0);
    assert_eq!(text(&document, "score"), "Score: 0");
    assert_eq!(element::<Element>(&document, "matched-table-body").child_element_count(), 0);
    let surface = element::<HtmlElement>(&document, "flashcards-container");
    assert_eq!(surface.style().get_property_value("display").unwrap(), "none");
}

#[wasm_bindgen_test]
async fn dragged_card_hides_after_a_tick_and_shows_on_drag_end() {
    let (document, _app) = mount();
    add_pair(&document, "Q1", "A1");
    click(&document, "start-game");
    let q1 = card(&document, "question", "Q1");

    dispatch(&q1, "dragstart");
    assert!(!is_hidden(&q1));
    next_tick().await;
    assert!(is_hidden(&q1));

    dispatch(&q1, "dragend");
    assert!(!is_hidden(&q1));
}

#[wasm_bindgen_test]
async fn drag_end_before_the_tick_leaves_card_visible() {
    let (document, _app) = mount();
    add_pair(&document, "Q1", "A1");
    add_pair(&document, "Q2", "A2");
    click(&document, "start-game");

    let q1 = card(&document, "question", "Q1");
    dispatch(&q1, "dragstart");
    dispatch(&q1, "dragend");
    next_tick().await;
    assert!(!is_hidden(&q1));

    drag_onto(&q1, &card(&document, "answer", "A2"));
    next_tick().await;
    assert!(!is_hidden(&q1));
}

#[wasm_bindgen_test]
fn dragover_on_surface_is_default_prevented() {
    let (document, _app) = mount();
    add_pair(&document, "Q1", "A1");
    click(&document, "start-game");

    let surface = element::<Element>(&document, "flashcards-container");
    assert!(dispatch(&surface, "dragover").default_prevented());
    let over_card = dispatch(&card(&document, "answer", "A1"), "dragover");
    assert!(over_card.default_prevented());
}

#[wasm_bindgen_test]
fn failed_dom_call_is_logged_not_raised() {
    log_failure(Err::<(), _>(JsValue::from_str("detached")), "hide dragged card");
    log_failure(Ok::<_, JsValue>(()), "hide dragged card");
}
