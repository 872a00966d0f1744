use wasm_bindgen::{prelude::Closure, JsCast};
use web_sys::{Event, EventTarget};

use crate::bridge::js_err;
use crate::Res;

type Handler = Closure<dyn FnMut(Event)>;

/// Event listeners attached to a single target, held so that they can be
/// removed again. Closures are owned here rather than forgotten, so clearing
/// the registry frees them.
pub struct Listeners {
    target: EventTarget,
    handlers: Vec<(&'static str, Handler)>,
}

impl Listeners {
    pub fn new(target: &EventTarget) -> Self {
        Self {
            target: target.clone(),
            handlers: Vec::new(),
        }
    }

    pub fn add(&mut self, on: &'static str, handler: Box<dyn FnMut(Event)>) -> Res<()> {
        let closure = Closure::wrap(handler);
        self.target
            .add_event_listener_with_callback(on, closure.as_ref().unchecked_ref())
            .map_err(|e| format!("Failed to add {on} listener: {}", js_err(e)))?;
        self.handlers.push((on, closure));
        Ok(())
    }

    /// Detach and drop every listener. Does nothing if already clear.
    pub fn clear(&mut self) {
        for (on, closure) in self.handlers.drain(..) {
            self.target
                .remove_event_listener_with_callback(on, closure.as_ref().unchecked_ref())
                .ok();
        }
    }
}

impl Drop for Listeners {
    fn drop(&mut self) {
        self.clear();
    }
}
