//! Browser frontend for the encounter calculator page.
//!
//! The page is server-rendered and driven by hypermedia swaps; this module
//! only adds the behaviour around it: busy buttons and error toasts during
//! requests, the promo banner, the monster selection budget and the
//! expandable detail rows.

pub mod accordion;
pub mod banner;
pub mod config;
pub mod dom;
pub mod exports;
pub mod lifecycle;
pub mod notification;
pub mod selection;
pub mod storage;

use std::rc::Rc;

use dioxus_logger::tracing::Level;
use wasm_bindgen::prelude::*;

use crate::dom::UiError;
use crate::notification::NotificationCenter;
use crate::selection::SelectionPanel;

#[wasm_bindgen(start)]
pub fn start() {
    // Already installed when the module is re-initialised.
    let _ = dioxus_logger::init(Level::INFO);

    let ready = dom::document().map(|d| d.ready_state() != "loading");
    match ready {
        Ok(true) => run(),
        Ok(false) => {
            if let Err(e) = dom::listen_document("DOMContentLoaded", |_| run()) {
                tracing::error!(error = %e, "cannot wait for DOMContentLoaded");
            }
        }
        Err(e) => tracing::error!(error = %e, "no document, frontend disabled"),
    }
}

fn run() {
    if let Err(e) = init() {
        tracing::error!(error = %e, "frontend initialisation failed");
    }
}

fn init() -> Result<(), UiError> {
    let config = Rc::new(config::load());

    if let Err(e) = config::configure_hypermedia(&config) {
        tracing::warn!(error = %e, "failed to configure hypermedia engine");
    }

    let notifications = NotificationCenter::new(config.notification_duration_ms);
    lifecycle::observe_requests(config.clone(), notifications)?;

    if let Err(e) = banner::init_banner(&config) {
        tracing::warn!(error = %e, "banner setup failed");
    }

    let panel = Rc::new(SelectionPanel::new(config.clone()));
    selection::bind(panel.clone())?;
    accordion::bind(config.clone())?;
    exports::install(panel, notifications, config)?;

    tracing::info!("encounters frontend ready");
    Ok(())
}
