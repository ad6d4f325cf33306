//! One-time dismissal of the promotional banner.

use std::cell::RefCell;

use encounters_types::{BannerDismissal, KeyValueStore, MemoryStore, UiConfig};
use wasm_bindgen::prelude::*;
use web_sys::{Element, Event};

use crate::dom::{self, UiError};
use crate::storage::LocalStorageStore;

/// Hide the banner if it was dismissed before, otherwise wire its close button.
pub fn init_banner(config: &UiConfig) -> Result<(), UiError> {
    let Some(banner) = dom::by_id(&config.selectors.banner_id)? else {
        return Ok(());
    };

    match LocalStorageStore::open() {
        Some(store) => bind(banner, BannerDismissal::new(store, &config.banner_storage_key), config),
        None => {
            tracing::warn!("localStorage unavailable, banner dismissal will not persist");
            bind(banner, BannerDismissal::new(MemoryStore::new(), &config.banner_storage_key), config)
        }
    }
}

fn bind<S>(banner: Element, dismissal: BannerDismissal<S>, config: &UiConfig) -> Result<(), UiError>
where
    S: KeyValueStore + 'static,
{
    if dismissal.is_dismissed() {
        return hide(&banner);
    }

    let Some(button) = banner.query_selector(&config.selectors.banner_dismiss())? else {
        tracing::debug!("banner has no dismiss control");
        return Ok(());
    };

    let dismissal = RefCell::new(dismissal);
    let closure = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        if let Err(e) = hide(&banner) {
            tracing::warn!(error = %e, "failed to hide banner");
        }
        if let Err(e) = dismissal.borrow_mut().dismiss() {
            tracing::warn!(error = %e, "failed to persist banner dismissal");
        }
    });
    button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn hide(banner: &Element) -> Result<(), UiError> {
    dom::set_style(banner, "display", "none")
}
