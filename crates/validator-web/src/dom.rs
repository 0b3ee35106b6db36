//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, Storage, Window};

use crate::error::DomError;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get the current document.
#[inline]
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Get the document body.
#[inline]
pub fn body() -> Option<HtmlElement> {
    document()?.body()
}

/// Get localStorage.
#[inline]
pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Look up an element by id.
pub fn element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// Look up an `<input>` by id.
pub fn input_by_id(id: &str) -> Option<HtmlInputElement> {
    element_by_id(id)?.dyn_into::<HtmlInputElement>().ok()
}

/// All elements matching a CSS selector, in document order.
pub fn query_all(selector: &str) -> Vec<Element> {
    let Some(list) = document().and_then(|d| d.query_selector_all(selector).ok()) else {
        return Vec::new();
    };

    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Create an element and cast it to the requested type.
pub fn create<T: JsCast>(tag: &str) -> Result<T, DomError> {
    let document = document().ok_or(DomError::NoDocument)?;
    document
        .create_element(tag)?
        .dyn_into::<T>()
        .map_err(|_| DomError::UnexpectedElement(tag.to_string()))
}

/// Run `f` once the DOM has been parsed.
///
/// Runs immediately if parsing already finished.
pub fn on_ready(f: impl FnOnce() + 'static) {
    let Some(document) = document() else {
        return;
    };

    if document.ready_state() != "loading" {
        f();
        return;
    }

    let closure = Closure::once(f);
    let _ = document
        .add_event_listener_with_callback("DOMContentLoaded", closure.as_ref().unchecked_ref());
    // Listener lives for the page
    closure.forget();
}
