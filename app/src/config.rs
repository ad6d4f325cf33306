//! Page configuration loading and hypermedia engine setup.

use encounters_types::UiConfig;
use wasm_bindgen::JsValue;

use crate::dom::{self, UiError};

/// Global the page may define before loading the module to override defaults.
const CONFIG_GLOBAL: &str = "encountersConfig";
const ENGINE_GLOBAL: &str = "htmx";

/// Read `window.encountersConfig`, falling back to defaults.
pub fn load() -> UiConfig {
    let raw = match read_global(CONFIG_GLOBAL) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::warn!(error = %e, "cannot read page config, using defaults");
            return UiConfig::default();
        }
    };
    if raw.is_undefined() || raw.is_null() {
        return UiConfig::default();
    }
    serde_wasm_bindgen::from_value(raw).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "invalid page config, using defaults");
        UiConfig::default()
    })
}

fn read_global(name: &str) -> Result<JsValue, UiError> {
    let window = dom::window()?;
    Ok(js_sys::Reflect::get(&window, &name.into())?)
}

/// Push request class and history settings into `htmx.config`.
///
/// Does nothing when the engine isn't loaded on this page.
pub fn configure_hypermedia(config: &UiConfig) -> Result<(), UiError> {
    let engine = read_global(ENGINE_GLOBAL)?;
    if engine.is_undefined() || engine.is_null() {
        tracing::debug!("hypermedia engine not present, skipping config");
        return Ok(());
    }
    let engine_config = js_sys::Reflect::get(&engine, &"config".into())?;
    if !engine_config.is_object() {
        return Ok(());
    }

    let settings = &config.hypermedia;
    js_sys::Reflect::set(
        &engine_config,
        &"requestClass".into(),
        &JsValue::from_str(&settings.request_class),
    )?;
    js_sys::Reflect::set(
        &engine_config,
        &"historyEnabled".into(),
        &JsValue::from_bool(settings.history_enabled),
    )?;
    Ok(())
}
