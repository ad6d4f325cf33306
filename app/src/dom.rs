//! DOM access helpers and the frontend error type.
//!
//! Handlers never let an error escape into JavaScript: they call the helpers
//! here with `?` and log whatever comes back at the boundary.

use thiserror::Error;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, HtmlElement, Window};

#[derive(Debug, Error)]
pub enum UiError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("missing element: {0}")]
    MissingElement(String),
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for UiError {
    fn from(value: JsValue) -> Self {
        UiError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

pub fn window() -> Result<Window, UiError> {
    web_sys::window().ok_or(UiError::NoWindow)
}

pub fn document() -> Result<Document, UiError> {
    window()?.document().ok_or(UiError::NoDocument)
}

pub fn body() -> Result<HtmlElement, UiError> {
    document()?.body().ok_or(UiError::NoBody)
}

/// Look up an element by id, `None` when the page doesn't have it.
pub fn by_id(id: &str) -> Result<Option<Element>, UiError> {
    Ok(document()?.get_element_by_id(id))
}

/// Set an element's text when it exists on the page.
pub fn set_text_by_id(id: &str, text: &str) -> Result<(), UiError> {
    if let Some(el) = by_id(id)? {
        el.set_text_content(Some(text));
    }
    Ok(())
}

/// The element an event was dispatched on, if it is an element.
pub fn event_element(event: &Event) -> Option<Element> {
    event.target().and_then(|t| t.dyn_into::<Element>().ok())
}

/// Set an inline style property on an element that supports styling.
pub fn set_style(el: &Element, property: &str, value: &str) -> Result<(), UiError> {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        html.style().set_property(property, value)?;
    }
    Ok(())
}

/// Attach a page-lifetime listener to the document.
pub fn listen_document<F>(event: &str, handler: F) -> Result<(), UiError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    document()?.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
