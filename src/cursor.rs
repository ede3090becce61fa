// Custom cursor: a dot pinned to the pointer and a follower ring that trails it
// by a fixed delay and grows over interactive elements.

use crate::dom;
use crate::error::Result;
use tracing::{debug, error};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, MouseEvent, Window};

pub const CURSOR_SELECTOR: &str = ".cursor";
pub const FOLLOWER_SELECTOR: &str = ".cursor-follower";
pub const HOVER_TARGETS: &str = "a, button, .close-modal, input, textarea";
pub const HOVER_CLASS: &str = "cursor-hover";

pub fn px(coord: i32) -> String {
    format!("{}px", coord)
}

fn place(element: &HtmlElement, x: i32, y: i32) {
    dom::set_style(element, "left", &px(x));
    dom::set_style(element, "top", &px(y));
}

pub fn install(window: &Window, document: &Document, trail_ms: i32) -> Result<()> {
    let cursor: HtmlElement = dom::query(document, CURSOR_SELECTOR)?;
    let follower: HtmlElement = dom::query(document, FOLLOWER_SELECTOR)?;

    {
        let window = window.clone();
        let follower = follower.clone();
        dom::listen(document, "mousemove", move |event| {
            let event = match event.dyn_into::<MouseEvent>() {
                Ok(event) => event,
                Err(_) => return,
            };
            let (x, y) = (event.client_x(), event.client_y());
            place(&cursor, x, y);
            let trailed = dom::set_timeout_on(&window, trail_ms, follower.clone(), move |f| {
                place(f, x, y)
            });
            if let Err(e) = trailed {
                error!(error = %e, "could not schedule cursor trail");
            }
        })?;
    }

    let targets = dom::query_all(document, HOVER_TARGETS)?;
    for target in &targets {
        let enter = follower.clone();
        dom::listen(target, "mouseenter", move |_| {
            dom::add_class(&enter, HOVER_CLASS);
        })?;
        let leave = follower.clone();
        dom::listen(target, "mouseleave", move |_| {
            dom::remove_class(&leave, HOVER_CLASS);
        })?;
    }
    debug!(hover_targets = targets.len(), "cursor installed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinates_are_pixels() {
        assert_eq!(px(0), "0px");
        assert_eq!(px(-12), "-12px");
        assert_eq!(px(1080), "1080px");
    }
}
