//! Functions installed on `window` for inline handlers in server markup.
//!
//! - `addMonster(control)`, `removeMonster(index)`, `showNotification(message, kind)`
//! - `encountersUtils.{showNotification, validatePartyLevels, formatXP, getDifficultyClass}`

use std::rc::Rc;

use encounters_types::{
    Difficulty, NotificationKind, UiConfig, coerce_level, format_xp, index_from_f64,
    number_from_str, validate_party_levels,
};
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{self, UiError};
use crate::notification::NotificationCenter;
use crate::selection::SelectionPanel;

/// Install the page-lifetime globals.
pub fn install(
    panel: Rc<SelectionPanel>,
    notifications: NotificationCenter,
    config: Rc<UiConfig>,
) -> Result<(), UiError> {
    let window = dom::window()?;

    let add_panel = panel.clone();
    let add_monster = Closure::<dyn Fn(Element)>::new(move |control: Element| {
        if let Err(e) = add_panel.add_from(&control) {
            tracing::warn!(error = %e, "failed to add monster");
        }
    });

    let remove_monster = Closure::<dyn Fn(JsValue)>::new(move |index: JsValue| {
        let Some(index) = index_from_f64(js_number(&index)) else {
            tracing::debug!(?index, "remove ignored, not an index");
            return;
        };
        if let Err(e) = panel.remove(index) {
            tracing::warn!(error = %e, index, "failed to remove monster");
        }
    });

    let show_notification = Closure::<dyn Fn(String, Option<String>)>::new(
        move |message: String, kind: Option<String>| {
            notifications.show(&message, NotificationKind::from_label(kind.as_deref()));
        },
    );

    let validate_levels = Closure::<dyn Fn(JsValue) -> JsValue>::new(|levels: JsValue| {
        match validate_party_levels(levels_from_js(&levels).as_deref()) {
            Ok(()) => JsValue::NULL,
            Err(e) => JsValue::from_str(&e.to_string()),
        }
    });

    let european = config.european_number_format;
    let xp_formatter = Closure::<dyn Fn(f64) -> String>::new(move |xp: f64| {
        format_xp(xp, european)
    });

    let difficulty_class = Closure::<dyn Fn(String) -> String>::new(|label: String| {
        Difficulty::class_for_label(&label).to_string()
    });

    let utils = js_sys::Object::new();
    js_sys::Reflect::set(&utils, &"showNotification".into(), show_notification.as_ref())?;
    js_sys::Reflect::set(&utils, &"validatePartyLevels".into(), validate_levels.as_ref())?;
    js_sys::Reflect::set(&utils, &"formatXP".into(), xp_formatter.as_ref())?;
    js_sys::Reflect::set(&utils, &"getDifficultyClass".into(), difficulty_class.as_ref())?;

    js_sys::Reflect::set(&window, &"encountersUtils".into(), &utils)?;
    js_sys::Reflect::set(&window, &"showNotification".into(), show_notification.as_ref())?;
    js_sys::Reflect::set(&window, &"addMonster".into(), add_monster.as_ref())?;
    js_sys::Reflect::set(&window, &"removeMonster".into(), remove_monster.as_ref())?;

    add_monster.forget();
    remove_monster.forget();
    show_notification.forget();
    validate_levels.forget();
    xp_formatter.forget();
    difficulty_class.forget();
    Ok(())
}

/// Coerce a script value to a number, like `Number(x)` for the types
/// inline handlers actually pass.
fn js_number(value: &JsValue) -> f64 {
    if let Some(n) = value.as_f64() {
        n
    } else if let Some(s) = value.as_string() {
        number_from_str(&s)
    } else if let Some(b) = value.as_bool() {
        f64::from(u8::from(b))
    } else if value.is_null() {
        0.0
    } else {
        f64::NAN
    }
}

/// Convert a JS array of levels; `null`/`undefined` give `None`.
fn levels_from_js(value: &JsValue) -> Option<Vec<i32>> {
    if value.is_null() || value.is_undefined() {
        return None;
    }
    let levels = js_sys::Array::from(value)
        .iter()
        .map(|v| coerce_level(js_number(&v)))
        .collect();
    Some(levels)
}
