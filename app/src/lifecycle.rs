//! Busy state and error reporting around hypermedia requests.

use std::rc::Rc;

use encounters_types::{NotificationKind, UiConfig};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CustomEvent, Element, Event};

use crate::dom::{self, UiError};
use crate::notification::NotificationCenter;

pub const BEFORE_REQUEST: &str = "htmx:beforeRequest";
pub const AFTER_REQUEST: &str = "htmx:afterRequest";
pub const RESPONSE_ERROR: &str = "htmx:responseError";

const ORIGINAL_LABEL_ATTR: &str = "data-original-label";

/// Subscribe to the request lifecycle events on the document.
pub fn observe_requests(config: Rc<UiConfig>, notifications: NotificationCenter) -> Result<(), UiError> {
    let cfg = config.clone();
    dom::listen_document(BEFORE_REQUEST, move |event| {
        if let Some(control) = busy_candidate(&event, &cfg)
            && let Err(e) = set_busy(&control, &cfg.messages.loading)
        {
            tracing::warn!(error = %e, "failed to mark control busy");
        }
    })?;

    let cfg = config.clone();
    dom::listen_document(AFTER_REQUEST, move |event| {
        if let Some(control) = busy_candidate(&event, &cfg)
            && let Err(e) = restore(&control)
        {
            tracing::warn!(error = %e, "failed to restore control");
        }
    })?;

    dom::listen_document(RESPONSE_ERROR, move |event| {
        let detail = event
            .dyn_ref::<CustomEvent>()
            .map(CustomEvent::detail)
            .unwrap_or(JsValue::UNDEFINED);
        tracing::error!(detail = ?detail, "hypermedia request failed");
        notifications.show(&config.messages.request_error, NotificationKind::Error);
    })?;

    Ok(())
}

/// The request's triggering element, when it is a button-styled control.
fn busy_candidate(event: &Event, config: &UiConfig) -> Option<Element> {
    dom::event_element(event).filter(|el| el.class_list().contains(&config.selectors.button_class))
}

fn set_busy(control: &Element, loading_label: &str) -> Result<(), UiError> {
    dom::set_style(control, "opacity", "0.7")?;
    dom::set_style(control, "pointer-events", "none")?;
    if !control.has_attribute(ORIGINAL_LABEL_ATTR) {
        let label = control.text_content().unwrap_or_default();
        control.set_attribute(ORIGINAL_LABEL_ATTR, &label)?;
    }
    control.set_text_content(Some(loading_label));
    Ok(())
}

fn restore(control: &Element) -> Result<(), UiError> {
    dom::set_style(control, "opacity", "1")?;
    dom::set_style(control, "pointer-events", "auto")?;
    if let Some(label) = control.get_attribute(ORIGINAL_LABEL_ATTR) {
        control.set_text_content(Some(&label));
        control.remove_attribute(ORIGINAL_LABEL_ATTR)?;
    }
    Ok(())
}
