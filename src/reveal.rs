// Scroll reveal: sections fade in once a fraction of them is on screen, and the
// skills section fills its progress bars from their data-percent attributes.

use crate::dom;
use crate::error::Result;
use tracing::{debug, error};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

pub const REVEAL_SELECTOR: &str = ".hidden-element, #skills";
pub const VISIBLE_CLASS: &str = "visible";

pub fn reveal(target: &Element) -> Result<()> {
    dom::add_class(target, VISIBLE_CLASS);
    if dom::query_in(target, ".progress")?.is_none() {
        return Ok(());
    }
    for bar in dom::query_all_in(target, ".skill-bar-container")? {
        let percent = match bar.get_attribute("data-percent") {
            Some(percent) => percent,
            None => continue,
        };
        if let Some(progress) = dom::query_in(&bar, ".progress")? {
            dom::set_style(&progress, "width", &percent);
        }
    }
    Ok(())
}

fn on_entries(entries: js_sys::Array) {
    for entry in entries.iter() {
        let entry = match entry.dyn_into::<IntersectionObserverEntry>() {
            Ok(entry) => entry,
            Err(_) => continue,
        };
        if entry.is_intersecting() {
            if let Err(e) = reveal(&entry.target()) {
                error!(error = %e, "reveal failed");
            }
        }
    }
}

pub fn install(document: &Document, threshold: f64) -> Result<IntersectionObserver> {
    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, _: IntersectionObserver| {
        on_entries(entries)
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    let targets = dom::query_all(document, REVEAL_SELECTOR)?;
    for target in &targets {
        observer.observe(target);
    }
    debug!(targets = targets.len(), threshold, "scroll reveal installed");
    Ok(observer)
}
