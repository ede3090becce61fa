// Project filter: each .filter-btn carries a data-filter category; clicking one
// makes it active and shows only the .project-card elements in that category.

use crate::config::TimingConfig;
use crate::dom;
use crate::error::Result;
use std::rc::Rc;
use tracing::{debug, error, warn};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

pub const BUTTON_SELECTOR: &str = ".filter-btn";
pub const ACTIVE_BUTTON_SELECTOR: &str = ".filter-btn.active";
pub const CARD_SELECTOR: &str = ".project-card";
pub const ACTIVE_CLASS: &str = "active";
/// Filter value that matches every card.
pub const ALL: &str = "all";
/// Bumped on a card by every `apply`; a delayed step only runs while its generation is current.
pub const GENERATION_ATTR: &str = "data-filter-gen";

pub fn shows(filter: &str, category: Option<&str>) -> bool {
    filter == ALL || category == Some(filter)
}

pub fn next_generation(current: Option<&str>) -> u32 {
    current
        .and_then(|g| g.parse::<u32>().ok())
        .map_or(0, |g| g.wrapping_add(1))
}

fn bump_generation(card: &HtmlElement) -> String {
    let generation = next_generation(card.get_attribute(GENERATION_ATTR).as_deref()).to_string();
    if let Err(e) = card.set_attribute(GENERATION_ATTR, &generation) {
        warn!(error = ?e, "failed to tag card transition");
    }
    generation
}

fn is_current(card: &HtmlElement, generation: &str) -> bool {
    card.get_attribute(GENERATION_ATTR).as_deref() == Some(generation)
}

fn schedule(window: &Window, ms: i32, card: &HtmlElement, f: impl FnOnce(&HtmlElement) + 'static) {
    if let Err(e) = dom::set_timeout_on(window, ms, card.clone(), f) {
        error!(error = %e, "could not schedule card transition");
    }
}

// The delayed half of each transition is dropped once a later `apply` has touched the card.
pub fn apply(window: &Window, cards: &[HtmlElement], filter: &str, timing: &TimingConfig) {
    let mut shown = 0;
    for card in cards {
        let category = card.get_attribute("data-category");
        let generation = bump_generation(card);
        if shows(filter, category.as_deref()) {
            shown += 1;
            dom::set_style(card, "display", "block");
            schedule(window, timing.filter_show_ms, card, move |card| {
                if is_current(card, &generation) {
                    dom::set_style(card, "opacity", "1");
                }
            });
        } else {
            dom::set_style(card, "opacity", "0");
            schedule(window, timing.filter_hide_ms, card, move |card| {
                if is_current(card, &generation) {
                    dom::set_style(card, "display", "none");
                }
            });
        }
    }
    debug!(filter, shown, total = cards.len(), "filter applied");
}

fn activate(document: &Document, button: &Element) -> Result<()> {
    for active in dom::query_all(document, ACTIVE_BUTTON_SELECTOR)? {
        dom::remove_class(&active, ACTIVE_CLASS);
    }
    dom::add_class(button, ACTIVE_CLASS);
    Ok(())
}

pub fn install(window: &Window, document: &Document, timing: &TimingConfig) -> Result<()> {
    let cards: Rc<Vec<HtmlElement>> = Rc::new(
        dom::query_all(document, CARD_SELECTOR)?
            .into_iter()
            .filter_map(|card| card.dyn_into::<HtmlElement>().ok())
            .collect(),
    );
    let buttons = dom::query_all(document, BUTTON_SELECTOR)?;

    for button in &buttons {
        let window = window.clone();
        let document = document.clone();
        let timing = timing.clone();
        let cards = cards.clone();
        let target = button.clone();
        dom::listen(button, "click", move |_| {
            if let Err(e) = activate(&document, &target) {
                error!(error = %e, "could not update active filter");
            }
            match target.get_attribute("data-filter") {
                Some(filter) => apply(&window, &cards, &filter, &timing),
                None => warn!("filter button without data-filter"),
            }
        })?;
    }
    debug!(buttons = buttons.len(), cards = cards.len(), "project filter installed");
    Ok(())
}
