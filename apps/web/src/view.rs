//! DOM construction and updates for the game page.

use crate::dom::Elements;
use crate::error::{log_failure, Result};
use match_core::{score_label, CardFace, MatchedPair, Notice, Size};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

pub const CARD_CLASS: &str = "card";
/// Added to the dragged card once the browser has captured its drag image.
pub const HIDDEN_CLASS: &str = "hidden";
pub const CARD_ID_ATTR: &str = "data-card-id";

pub struct View {
    document: Document,
    elements: Elements,
}

impl View {
    pub fn new(document: Document, elements: Elements) -> Self {
        Self { document, elements }
    }

    pub fn elements(&self) -> &Elements {
        &self.elements
    }

    /// Current question and answer input values, untrimmed.
    pub fn input_values(&self) -> (String, String) {
        (self.elements.question.value(), self.elements.answer.value())
    }

    pub fn clear_inputs(&self) {
        self.elements.question.set_value("");
        self.elements.answer.set_value("");
    }

    /// Client size of the display surface. A hidden surface is shown for the
    /// duration of the read so the size reflects the real layout.
    pub fn measure_surface(&self) -> Size {
        let surface = &self.elements.surface;
        let size = client_size(surface);
        if !size.is_empty() {
            return size;
        }
        let style = surface.style();
        let previous = style.get_property_value("display").unwrap_or_default();
        log_failure(style.set_property("display", "flex"), "show surface for measuring");
        let size = client_size(surface);
        if previous.is_empty() {
            log_failure(style.remove_property("display"), "restore surface display");
        } else {
            log_failure(style.set_property("display", &previous), "restore surface display");
        }
        size
    }

    pub fn set_surface_visible(&self, visible: bool) -> Result<()> {
        let display = if visible { "flex" } else { "none" };
        self.elements.surface.style().set_property("display", display)?;
        Ok(())
    }

    pub fn clear_surface(&self) {
        self.elements.surface.set_inner_html("");
    }

    /// Build the element for one card and append it to the surface at its
    /// placed position.
    pub fn spawn_card(&self, face: &CardFace) -> Result<HtmlElement> {
        let card = self.document.create_element("div")?.unchecked_into::<HtmlElement>();
        card.set_class_name(CARD_CLASS);
        card.set_draggable(true);
        card.set_attribute("data-type", face.side.as_str())?;
        card.set_attribute("data-content", &face.content)?;
        card.set_attribute(CARD_ID_ATTR, &face.id.0.to_string())?;

        let label = self.document.create_element("strong")?;
        label.set_text_content(Some(face.label.as_str()));
        card.append_child(&label)?;
        card.append_with_str_1(&format!(" {}", face.content))?;

        let style = card.style();
        style.set_property("position", "absolute")?;
        style.set_property("left", &format!("{}px", face.rect.origin.x))?;
        style.set_property("top", &format!("{}px", face.rect.origin.y))?;
        style.set_property("width", &format!("{}px", face.rect.size.width))?;
        style.set_property("height", &format!("{}px", face.rect.size.height))?;

        self.elements.surface.append_child(&card)?;
        Ok(card)
    }

    pub fn set_score(&self, score: u32) {
        self.elements.score.set_text_content(Some(score_label(score).as_str()));
    }

    pub fn append_result(&self, pair: &MatchedPair) -> Result<()> {
        let row = self.document.create_element("tr")?;
        for text in [pair.question.as_str(), pair.answer.as_str()] {
            let cell = self.document.create_element("td")?;
            cell.set_text_content(Some(text));
            row.append_child(&cell)?;
        }
        self.elements.results.append_child(&row)?;
        Ok(())
    }

    pub fn clear_results(&self) {
        self.elements.results.set_inner_html("");
    }

    pub fn notify(&self, notice: Notice) {
        gloo::dialogs::alert(notice.message());
    }
}

fn client_size(element: &HtmlElement) -> Size {
    Size::new(element.client_width() as f64, element.client_height() as f64)
}
