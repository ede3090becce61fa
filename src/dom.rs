// Thin helpers over web-sys for the page behaviors: lookups that fail with the
// selector in the error, style writes, timers and page-lifetime listeners.

use crate::error::{Error, Result};
use tracing::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, Node, NodeList, Window};

pub fn window() -> Result<Window> {
    web_sys::window().ok_or(Error::MissingGlobal("window"))
}

pub fn document(window: &Window) -> Result<Document> {
    window.document().ok_or(Error::MissingGlobal("document"))
}

fn cast<T: JsCast>(element: Element, what: &str) -> Result<T> {
    element
        .dyn_into::<T>()
        .map_err(|_| Error::MissingElement(format!("{} has the wrong element type", what)))
}

/// Element with the given id, cast to `T`.
pub fn by_id<T: JsCast>(document: &Document, id: &str) -> Result<T> {
    let element = document
        .get_element_by_id(id)
        .ok_or_else(|| Error::MissingElement(format!("#{}", id)))?;
    cast(element, &format!("#{}", id))
}

/// First match of `selector` in the document, cast to `T`.
pub fn query<T: JsCast>(document: &Document, selector: &str) -> Result<T> {
    let element = document
        .query_selector(selector)?
        .ok_or_else(|| Error::MissingElement(selector.to_owned()))?;
    cast(element, selector)
}

/// First match of `selector` below `root`, if any.
pub fn query_in(root: &Element, selector: &str) -> Result<Option<HtmlElement>> {
    match root.query_selector(selector)? {
        Some(element) => Ok(Some(cast(element, selector)?)),
        None => Ok(None),
    }
}

fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Every match of `selector` in the document. An empty result is not an error.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>> {
    Ok(elements(document.query_selector_all(selector)?))
}

pub fn query_all_in(root: &Element, selector: &str) -> Result<Vec<Element>> {
    Ok(elements(root.query_selector_all(selector)?))
}

pub fn set_style(element: &HtmlElement, property: &str, value: &str) {
    if let Err(e) = element.style().set_property(property, value) {
        warn!(property, value, error = ?e, "failed to set style");
    }
}

pub fn style(element: &HtmlElement, property: &str) -> String {
    element
        .style()
        .get_property_value(property)
        .unwrap_or_default()
}

/// Runs `f` once after `ms` milliseconds. There is no cancellation.
pub fn set_timeout<F>(window: &Window, ms: i32, f: F) -> Result<i32>
where
    F: FnOnce() + 'static,
{
    let callback = Closure::once_into_js(f);
    let handle = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), ms)?;
    Ok(handle)
}

/// Like `set_timeout`, but `f` is skipped when `node` has left the document by then.
pub fn set_timeout_on<N, F>(window: &Window, ms: i32, node: N, f: F) -> Result<i32>
where
    N: AsRef<Node> + 'static,
    F: FnOnce(&N) + 'static,
{
    set_timeout(window, ms, move || {
        if node.as_ref().is_connected() {
            f(&node);
        }
    })
}

/// Adds a listener that lives as long as the page.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<()>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

pub fn add_class(element: &Element, class: &str) {
    if let Err(e) = element.class_list().add_1(class) {
        warn!(class, error = ?e, "failed to add class");
    }
}

pub fn remove_class(element: &Element, class: &str) {
    if let Err(e) = element.class_list().remove_1(class) {
        warn!(class, error = ?e, "failed to remove class");
    }
}

pub fn toggle_class(element: &Element, class: &str) {
    if let Err(e) = element.class_list().toggle(class) {
        warn!(class, error = ?e, "failed to toggle class");
    }
}
