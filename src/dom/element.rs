use hover::Point;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::bridge::{get_body, get_document, js_err};
use crate::Res;

pub struct Element {
    element: HtmlElement,
}

impl Element {
    pub fn try_new(name: &str) -> Res<Element> {
        let element = get_document()?
            .create_element(name)
            .map(|e| e.unchecked_into::<HtmlElement>())
            .map_err(|e| format!("Element creation failed: {e:?}."))?;

        Ok(Element { element })
    }

    pub fn div() -> Res<Element> {
        Self::try_new("div")
    }

    pub fn node(&self) -> &web_sys::Node {
        self.element.unchecked_ref::<web_sys::Node>()
    }

    pub fn add_to_page(&self) -> Res<()> {
        get_body()?
            .append_child(self.node())
            .map(|_| ())
            .map_err(js_err)
    }

    pub fn remove(&self) {
        self.element.remove();
    }

    pub fn add_class(&self, class: &str) {
        self.element.class_list().add_1(class).ok();
    }

    pub fn set_css(&self, property: &str, value: &str) {
        self.try_set_css(property, value).ok();
    }

    pub fn get_css(&self, property: &str) -> String {
        self.element
            .style()
            .get_property_value(property)
            .unwrap_or_default()
    }

    pub fn set_attr(&self, name: &str, value: &str) {
        self.element.set_attribute(name, value).ok();
    }

    pub fn set_text(&self, text: &str) {
        self.node().set_text_content(Some(text));
    }

    pub fn text(&self) -> String {
        self.node().text_content().unwrap_or_default()
    }

    pub fn set_pos(&self, pos: Point) {
        self.set_css("left", &format!("{}px", pos.x));
        self.set_css("top", &format!("{}px", pos.y));
    }

    /// Rendered width and height. Zero while not displayed.
    pub fn dimensions(&self) -> (f64, f64) {
        (
            self.element.offset_width() as f64,
            self.element.offset_height() as f64,
        )
    }

    fn try_set_css(&self, property: &str, value: &str) -> Res<()> {
        self.element
            .style()
            .set_property(property, value)
            .map_err(|e| format!("Failed to set element CSS: {e:?}."))
    }
}
