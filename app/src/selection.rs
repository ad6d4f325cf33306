//! The "selected monsters" panel: running XP budget against the party limit.
//!
//! The panel owns the selection. Every mutation re-renders synchronously, so
//! the index carried by a remove button always matches the current list.

use std::cell::RefCell;
use std::rc::Rc;

use encounters_types::formatting::format_thousands;
use encounters_types::{
    MonsterSelection, SelectedMonster, UiConfig, is_result_swap, parse_budget,
};
use wasm_bindgen::JsCast;
use web_sys::{CustomEvent, Document, Element, Event, HtmlInputElement};

use crate::dom::{self, UiError};

pub const AFTER_SWAP: &str = "htmx:afterSwap";

const INDEX_ATTR: &str = "data-index";
const ITEM_CLASS: &str = "selected-monster-item";
const REMOVE_CLASS: &str = "selected-monster-remove";

pub struct SelectionPanel {
    selection: RefCell<MonsterSelection>,
    config: Rc<UiConfig>,
}

impl SelectionPanel {
    pub fn new(config: Rc<UiConfig>) -> Self {
        Self {
            selection: RefCell::new(MonsterSelection::new()),
            config,
        }
    }

    /// Add the monster whose row contains `control`.
    pub fn add_from(&self, control: &Element) -> Result<(), UiError> {
        let row_selector = self.config.selectors.monster_row();
        let row = control
            .closest(&row_selector)?
            .ok_or(UiError::MissingElement(row_selector))?;

        let monster = monster_from_row(&row);
        tracing::debug!(id = %monster.id, xp = monster.xp, "monster added");
        self.selection.borrow_mut().add(monster);
        self.recompute()
    }

    /// Remove the entry at `index`; out-of-range indices leave the list as is.
    pub fn remove(&self, index: usize) -> Result<(), UiError> {
        if self.selection.borrow_mut().remove(index).is_none() {
            tracing::debug!(index, "remove ignored, index out of range");
        }
        self.recompute()
    }

    /// Drop the whole selection, e.g. after a new calculation.
    pub fn reset(&self) -> Result<(), UiError> {
        self.selection.borrow_mut().clear();
        self.recompute()
    }

    pub fn len(&self) -> usize {
        self.selection.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.selection.borrow().is_empty()
    }

    /// Re-read the budget and redraw counters and list.
    pub fn recompute(&self) -> Result<(), UiError> {
        let document = dom::document()?;
        let selectors = &self.config.selectors;
        let european = self.config.european_number_format;

        let budget = read_budget(&document, &selectors.budget_input())?;
        let selection = self.selection.borrow();
        let summary = selection.summary(budget);

        dom::set_text_by_id(&selectors.selected_count_id, &summary.count.to_string())?;
        dom::set_text_by_id(&selectors.xp_used_id, &format_thousands(summary.xp_used, european))?;
        if let Some(remaining) = document.get_element_by_id(&selectors.xp_remaining_id) {
            remaining.set_text_content(Some(&format_thousands(summary.remaining, european)));
            remaining
                .class_list()
                .toggle_with_force(&selectors.over_budget_class, summary.is_over_budget())?;
        }

        if let Some(list) = document.get_element_by_id(&selectors.selected_list_id) {
            self.render_list(&document, &list, &selection)?;
        }
        Ok(())
    }

    fn render_list(
        &self,
        document: &Document,
        list: &Element,
        selection: &MonsterSelection,
    ) -> Result<(), UiError> {
        list.set_inner_html("");
        let european = self.config.european_number_format;

        if selection.is_empty() {
            let empty = document.create_element("p")?;
            empty.set_class_name("selected-empty");
            empty.set_text_content(Some(&self.config.messages.empty_selection));
            list.append_child(&empty)?;
            return Ok(());
        }

        for (index, monster) in selection.iter().enumerate() {
            let item = document.create_element("div")?;
            item.set_class_name(ITEM_CLASS);

            let name = document.create_element("span")?;
            name.set_class_name("selected-monster-name");
            name.set_text_content(Some(&monster.name));

            let xp = document.create_element("span")?;
            xp.set_class_name("selected-monster-xp");
            xp.set_text_content(Some(&format!("{} XP", format_thousands(monster.xp.into(), european))));

            let remove = document.create_element("button")?;
            remove.set_class_name(REMOVE_CLASS);
            remove.set_attribute("type", "button")?;
            remove.set_attribute(INDEX_ATTR, &index.to_string())?;
            remove.set_attribute("aria-label", &self.config.messages.remove_label)?;
            remove.set_text_content(Some("×"));

            item.append_child(&name)?;
            item.append_child(&xp)?;
            item.append_child(&remove)?;
            list.append_child(&item)?;
        }
        Ok(())
    }
}

/// Wire the panel to the page: remove buttons and result swaps.
pub fn bind(panel: Rc<SelectionPanel>) -> Result<(), UiError> {
    let on_remove = panel.clone();
    dom::listen_document("click", move |event| {
        let Some(index) = remove_index(&event) else {
            return;
        };
        if let Err(e) = on_remove.remove(index) {
            tracing::warn!(error = %e, index, "failed to remove monster");
        }
    })?;

    let on_swap = panel.clone();
    let container_id = panel.config.selectors.result_container_id.clone();
    dom::listen_document(AFTER_SWAP, move |event| {
        if !swapped_into(&event, &container_id) {
            return;
        }
        tracing::debug!(dropped = on_swap.len(), "results replaced, clearing selection");
        if let Err(e) = on_swap.reset() {
            tracing::warn!(error = %e, "failed to reset selection");
        }
    })?;

    panel.recompute()
}

/// Index of the remove button a click landed on.
fn remove_index(event: &Event) -> Option<usize> {
    let target = dom::event_element(event)?;
    let button = target.closest(&format!(".{}", REMOVE_CLASS)).ok()??;
    button.get_attribute(INDEX_ATTR)?.parse().ok()
}

/// Whether a swap event replaced the element with id `container_id`.
fn swapped_into(event: &Event, container_id: &str) -> bool {
    let detail_target = event
        .dyn_ref::<CustomEvent>()
        .map(CustomEvent::detail)
        .and_then(|detail| js_sys::Reflect::get(&detail, &"target".into()).ok())
        .and_then(|target| target.dyn_into::<Element>().ok())
        .map(|el| el.id());
    let event_target = dom::event_element(event).map(|el| el.id());

    is_result_swap(detail_target.as_deref(), event_target.as_deref(), container_id)
}

fn monster_from_row(row: &Element) -> SelectedMonster {
    let id = row.get_attribute("data-id").unwrap_or_default();
    let name = row.get_attribute("data-name").unwrap_or_default();
    let xp = row
        .get_attribute("data-xp")
        .and_then(|raw| raw.trim().parse::<u32>().ok())
        .unwrap_or_else(|| {
            tracing::warn!(%id, "monster row has no usable data-xp, counting 0");
            0
        });
    SelectedMonster::new(id, name, xp)
}

fn read_budget(document: &Document, selector: &str) -> Result<i64, UiError> {
    let budget = document
        .query_selector(selector)?
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        .map_or(0, |input| parse_budget(&input.value()));
    Ok(budget)
}
