use js_sys::Function;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement, Window};

use crate::{err, Res};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console, js_name = log)]
    pub fn console_log(s: &str);
}

macro_rules! log {
    ($($tts:tt)*) => {
        crate::bridge::console_log(&format!($($tts)*))
    }
}

pub(crate) use log;

pub fn window() -> Res<Window> {
    match web_sys::window() {
        Some(w) => Ok(w),
        None => err("No Window."),
    }
}

pub fn get_document() -> Res<Document> {
    match window()?.document() {
        Some(d) => Ok(d),
        None => err("No Document."),
    }
}

pub fn get_body() -> Res<HtmlElement> {
    match get_document()?.body() {
        Some(b) => Ok(b),
        None => err("No Body."),
    }
}

/// Calls `callback` with `argument` after `delay` ms, returning the handle to
/// pass to `clear_timeout`.
pub fn set_timeout(callback: &Function, delay: u32, argument: &JsValue) -> Res<i32> {
    window()?
        .set_timeout_with_callback_and_timeout_and_arguments_1(
            callback,
            delay.min(i32::MAX as u32) as i32,
            argument,
        )
        .map_err(js_err)
}

pub fn clear_timeout(handle: i32) {
    if let Ok(window) = window() {
        window.clear_timeout_with_handle(handle);
    }
}

pub fn js_err(v: JsValue) -> String {
    if let Some(s) = v.as_string() {
        s
    } else {
        format!("{v:?}")
    }
}

pub fn logged_error<T>(error_message: &str) -> Result<T, JsValue> {
    console_log(error_message);
    Err(JsValue::from_str(error_message))
}

pub fn parse_json<'a, T: serde::Deserialize<'a>>(json: &'a str) -> Option<T> {
    match serde_json::from_str::<T>(json) {
        Ok(val) => Some(val),
        Err(e) => {
            log!("Failed to parse JSON: {e}");
            None
        }
    }
}
