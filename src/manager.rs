use std::cell::RefCell;
use std::rc::{Rc, Weak};

use hover::delegate::{self, Scope};
use hover::{Config, Point, Tooltip};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, MouseEvent, Node};

use crate::bridge::{log, logged_error, parse_json};
use crate::dom::listeners::Listeners;
use crate::dom::overlay::DomOverlay;
use crate::dom::timer::WindowTimer;
use crate::Res;

type Shared = Rc<RefCell<Tooltip<web_sys::Element, DomOverlay, WindowTimer>>>;
type WeakShared = Weak<RefCell<Tooltip<web_sys::Element, DomOverlay, WindowTimer>>>;

/// The document below the root element, with targets matched by selector.
struct DomScope {
    root: web_sys::Element,
    selector: String,
}

impl Scope for DomScope {
    type Node = web_sys::Element;

    fn marked(&self, node: &web_sys::Element) -> Option<web_sys::Element> {
        node.closest(&self.selector).ok().flatten()
    }

    fn contains(&self, ancestor: &web_sys::Element, node: &web_sys::Element) -> bool {
        ancestor.contains(Some(node.unchecked_ref::<Node>()))
    }

    fn root(&self) -> &web_sys::Element {
        &self.root
    }
}

fn element(target: Option<web_sys::EventTarget>) -> Option<web_sys::Element> {
    target?.dyn_into::<web_sys::Element>().ok()
}

/// Routes events bubbling up to the root to the tooltip target they concern.
struct Delegate {
    tooltip: WeakShared,
    scope: DomScope,
    attribute: String,
    show_on_click: String,
}

impl Delegate {
    fn target(&self, event: &Event) -> Option<web_sys::Element> {
        delegate::target(&self.scope, &element(event.target())?)
    }

    /// Target entered or left by a mouseover or mouseout.
    fn crossed(&self, event: &MouseEvent) -> Option<web_sys::Element> {
        let related = element(event.related_target());
        delegate::crossed(&self.scope, &element(event.target())?, related.as_ref())
    }

    fn with_tooltip<F>(&self, action: F)
    where
        F: FnOnce(&mut Tooltip<web_sys::Element, DomOverlay, WindowTimer>),
    {
        let Some(tooltip) = self.tooltip.upgrade() else {
            return;
        };

        match tooltip.try_borrow_mut() {
            Ok(mut tooltip) => action(&mut tooltip),
            Err(_) => log!("Tooltip busy, dropping event."),
        };
    }

    fn mouse(event: &Event) -> Option<&MouseEvent> {
        event.dyn_ref::<MouseEvent>()
    }

    fn page_point(event: &MouseEvent) -> Point {
        Point::new(event.page_x() as f64, event.page_y() as f64)
    }

    fn over(&self, event: Event) {
        let Some(mouse) = Self::mouse(&event) else {
            return;
        };
        let Some(target) = self.crossed(mouse) else {
            return;
        };

        let text = target.get_attribute(&self.attribute);
        let at = Self::page_point(mouse);
        self.with_tooltip(|tooltip| tooltip.enter(target, text.as_deref(), at));
    }

    fn out(&self, event: Event) {
        let Some(target) = Self::mouse(&event).and_then(|mouse| self.crossed(mouse)) else {
            return;
        };

        self.with_tooltip(|tooltip| tooltip.leave(&target));
    }

    fn moved(&self, event: Event) {
        let (Some(target), Some(mouse)) = (self.target(&event), Self::mouse(&event)) else {
            return;
        };

        let at = Self::page_point(mouse);
        self.with_tooltip(|tooltip| tooltip.track(&target, at));
    }

    fn click(&self, event: Event) {
        let Some(target) = self.target(&event) else {
            return;
        };

        let show = target.has_attribute(&self.show_on_click);
        self.with_tooltip(|tooltip| tooltip.click(&target, show));
    }
}

/// Shows a tooltip near the pointer while it hovers over any element inside
/// `root` carrying a `data-tooltip` attribute.
#[wasm_bindgen]
pub struct TooltipManager {
    tooltip: Shared,
    listeners: Listeners,
}

#[wasm_bindgen]
impl TooltipManager {
    #[wasm_bindgen(constructor)]
    pub fn new(root: web_sys::Element) -> Result<TooltipManager, JsValue> {
        Self::create(root, Config::default())
    }

    /// Create with options given as a JSON object, for example
    /// `{"show_delay": 250, "auto_hide": null}`. Options which are missing or
    /// fail to parse take their defaults.
    #[wasm_bindgen(js_name = withOptions)]
    pub fn with_options(root: web_sys::Element, options: &str) -> Result<TooltipManager, JsValue> {
        let config = parse_json::<Config>(options).unwrap_or_default();
        Self::create(root, config)
    }

    fn create(root: web_sys::Element, config: Config) -> Result<TooltipManager, JsValue> {
        match Self::try_create(root, config.validated()) {
            Ok(manager) => Ok(manager),
            Err(e) => logged_error(&format!("Failed to create tooltip: {e}")),
        }
    }

    fn try_create(root: web_sys::Element, config: Config) -> Res<TooltipManager> {
        let overlay = DomOverlay::new(&config)?;
        let scope = DomScope {
            root: root.clone(),
            selector: config.selector(),
        };
        let attribute = config.attribute.clone();
        let show_on_click = config.show_on_click.clone();

        let tooltip: Shared = Rc::new_cyclic(|weak: &WeakShared| {
            let weak = weak.clone();
            let timer = WindowTimer::new(Box::new(move |token| {
                let Some(tooltip) = weak.upgrade() else {
                    return;
                };
                match tooltip.try_borrow_mut() {
                    Ok(mut tooltip) => tooltip.fire(token),
                    Err(_) => log!("Tooltip busy, dropping timer."),
                };
            }));
            RefCell::new(Tooltip::new(config, overlay, timer))
        });

        let delegate = Rc::new(Delegate {
            tooltip: Rc::downgrade(&tooltip),
            scope,
            attribute,
            show_on_click,
        });

        let mut listeners = Listeners::new(&root);
        let handlers: [(&'static str, fn(&Delegate, Event)); 4] = [
            ("mouseover", Delegate::over),
            ("mousemove", Delegate::moved),
            ("mouseout", Delegate::out),
            ("click", Delegate::click),
        ];
        for (on, handler) in handlers {
            let delegate = delegate.clone();
            let added = listeners.add(on, Box::new(move |event| handler(&delegate, event)));
            if let Err(e) = added {
                // Don't leave an overlay nobody can reach.
                tooltip.borrow_mut().destroy();
                return Err(e);
            }
        }

        Ok(TooltipManager { tooltip, listeners })
    }

    /// Remove all listeners and the tooltip element. Calling again does
    /// nothing.
    pub fn destroy(&mut self) {
        self.listeners.clear();
        self.tooltip.borrow_mut().destroy();
    }

    #[wasm_bindgen(getter)]
    pub fn visible(&self) -> bool {
        self.tooltip.borrow().is_visible()
    }

    /// Text of the tooltip, or `undefined` once destroyed.
    #[wasm_bindgen(getter)]
    pub fn text(&self) -> Option<String> {
        self.tooltip
            .borrow()
            .overlay()
            .map(|overlay| overlay.element().text())
    }

    #[wasm_bindgen(getter)]
    pub fn destroyed(&self) -> bool {
        self.tooltip.borrow().is_destroyed()
    }
}
