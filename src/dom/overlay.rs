use hover::{Config, Overlay, Point, Size};

use super::element::Element;
use crate::Res;

/// The floating tooltip element, appended to the document body.
pub struct DomOverlay {
    element: Element,
}

impl DomOverlay {
    pub fn new(config: &Config) -> Res<Self> {
        let element = Element::div()?;
        element.add_class(&config.class);
        element.set_attr("role", "tooltip");
        element.set_css("position", "absolute");
        element.set_css("left", "0");
        element.set_css("top", "0");
        element.add_to_page()?;

        Ok(Self { element })
    }

    pub fn element(&self) -> &Element {
        &self.element
    }
}

impl Overlay for DomOverlay {
    fn set_text(&mut self, text: &str) {
        self.element.set_text(text);
    }

    fn size(&self) -> Size {
        let (w, h) = self.element.dimensions();
        Size::new(w, h)
    }

    fn place(&mut self, at: Point) {
        self.element.set_pos(at);
    }

    fn set_visible(&mut self, visible: bool) {
        if visible {
            self.element.set_css("display", "block");
            self.element.set_css("opacity", "1");
        } else {
            self.element.set_css("opacity", "0");
            self.element.set_css("display", "none");
        }
    }

    fn visible(&self) -> bool {
        let displayed = self.element.get_css("display") != "none";
        let opacity = self.element.get_css("opacity");
        let opaque = opacity.is_empty() || opacity.parse::<f64>().map_or(true, |o| o > 0.0);
        displayed && opaque
    }

    fn remove(&mut self) {
        self.element.remove();
    }
}
