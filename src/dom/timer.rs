use hover::{Timer, Token};
use wasm_bindgen::{prelude::*, JsCast};

use crate::bridge::{clear_timeout, log, set_timeout};

/// `Timer` backed by `window.setTimeout`. A single closure is shared by every
/// timeout, receiving the token as its argument, so cancelling never has to
/// drop a closure JS may still hold.
pub struct WindowTimer {
    callback: Closure<dyn FnMut(JsValue)>,
}

impl WindowTimer {
    pub fn new(mut on_fire: Box<dyn FnMut(Token)>) -> Self {
        let callback = Closure::wrap(Box::new(move |token: JsValue| {
            match token.as_f64() {
                Some(token) => on_fire(token as Token),
                None => log!("Timer fired without a token."),
            }
        }) as Box<dyn FnMut(JsValue)>);

        Self { callback }
    }
}

impl Timer for WindowTimer {
    type Handle = i32;

    fn start(&mut self, delay: u32, token: Token) -> Option<i32> {
        match set_timeout(
            self.callback.as_ref().unchecked_ref(),
            delay,
            &JsValue::from(token),
        ) {
            Ok(handle) => Some(handle),
            Err(e) => {
                log!("Failed to start tooltip timer: {e}");
                None
            }
        }
    }

    fn stop(&mut self, handle: i32) {
        clear_timeout(handle);
    }
}
