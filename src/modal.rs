// Modal dialogs, opened and closed by element id. Clicking the backdrop (the
// .modal element itself, outside its content) closes it.

use crate::dom;
use crate::error::Result;
use tracing::{debug, error};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Window};

pub const MODAL_CLASS: &str = "modal";

pub fn open(document: &Document, id: &str) -> Result<()> {
    let modal: HtmlElement = dom::by_id(document, id)?;
    dom::set_style(&modal, "display", "flex");
    debug!(id, "modal opened");
    Ok(())
}

pub fn close(document: &Document, id: &str) -> Result<()> {
    let modal: HtmlElement = dom::by_id(document, id)?;
    dom::set_style(&modal, "display", "none");
    Ok(())
}

fn expose(window: &Window, name: &str, document: Document, action: fn(&Document, &str) -> Result<()>) -> Result<()> {
    let owned_name = name.to_owned();
    let callback = Closure::wrap(Box::new(move |id: String| {
        if let Err(e) = action(&document, &id) {
            error!(function = %owned_name, error = %e, "modal call failed");
        }
    }) as Box<dyn FnMut(String)>);
    js_sys::Reflect::set(window, &JsValue::from_str(name), callback.as_ref())?;
    callback.forget();
    Ok(())
}

/// Backdrop clicks, plus `openModal` / `closeModal` on window for inline onclick handlers.
pub fn install(window: &Window, document: &Document) -> Result<()> {
    dom::listen(window, "click", |event| {
        let target = match event.target().and_then(|t| t.dyn_into::<HtmlElement>().ok()) {
            Some(target) => target,
            None => return,
        };
        if target.class_list().contains(MODAL_CLASS) {
            dom::set_style(&target, "display", "none");
        }
    })?;
    expose(window, "openModal", document.clone(), open)?;
    expose(window, "closeModal", document.clone(), close)?;
    Ok(())
}
