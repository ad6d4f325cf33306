//! Click-to-expand detail rows in the monster table.

use std::rc::Rc;

use encounters_types::{AccordionSurface, Selectors, UiConfig, toggle_exclusive};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event};

use crate::dom::{self, UiError};

/// The monster table as seen by the accordion: a row is a `.monster-row`
/// whose next sibling is its detail row.
struct DomAccordion<'a> {
    document: Document,
    selectors: &'a Selectors,
}

impl DomAccordion<'_> {
    fn detail_of(&self, row: &Element) -> Option<Element> {
        row.next_element_sibling()
            .filter(|next| next.class_list().contains(&self.selectors.detail_row_class))
    }
}

impl AccordionSurface for DomAccordion<'_> {
    type Row = Element;

    fn is_expanded(&self, row: &Element) -> bool {
        self.detail_of(row)
            .is_some_and(|detail| detail.class_list().contains(&self.selectors.expanded_class))
    }

    fn collapse_all(&mut self) {
        let Ok(expanded) = self.document.query_selector_all(&self.selectors.expanded_rows()) else {
            return;
        };
        for i in 0..expanded.length() {
            if let Some(el) = expanded.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                let _ = el.class_list().remove_1(&self.selectors.expanded_class);
            }
        }
    }

    fn expand(&mut self, row: &Element) {
        let _ = row.class_list().add_1(&self.selectors.expanded_class);
        if let Some(detail) = self.detail_of(row) {
            let _ = detail.class_list().add_1(&self.selectors.expanded_class);
        }
    }
}

/// Install the delegated click handler for the whole document.
pub fn bind(config: Rc<UiConfig>) -> Result<(), UiError> {
    dom::listen_document("click", move |event| {
        if let Err(e) = on_click(&event, &config.selectors) {
            tracing::warn!(error = %e, "accordion click failed");
        }
    })
}

fn on_click(event: &Event, selectors: &Selectors) -> Result<(), UiError> {
    let Some(target) = dom::event_element(event) else {
        return Ok(());
    };
    // Adding a monster must not toggle its row.
    if target.closest(&selectors.add_button())?.is_some() {
        return Ok(());
    }
    let Some(row) = target.closest(&selectors.monster_row())? else {
        return Ok(());
    };

    let mut accordion = DomAccordion {
        document: dom::document()?,
        selectors,
    };
    if accordion.detail_of(&row).is_none() {
        return Ok(());
    }
    let expanded = toggle_exclusive(&mut accordion, &row);
    tracing::debug!(id = %row.get_attribute("data-id").unwrap_or_default(), expanded, "row toggled");
    Ok(())
}
