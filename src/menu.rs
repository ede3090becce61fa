use crate::dom;
use crate::error::Result;
use web_sys::{Document, Element};

pub const HAMBURGER_SELECTOR: &str = ".hamburger";
pub const NAV_LINKS_SELECTOR: &str = ".nav-links";
pub const OPEN_CLASS: &str = "nav-active";

// Mobile menu: the hamburger toggles the nav links open and closed
pub fn install(document: &Document) -> Result<()> {
    let hamburger: Element = dom::query(document, HAMBURGER_SELECTOR)?;
    let nav_links: Element = dom::query(document, NAV_LINKS_SELECTOR)?;
    dom::listen(&hamburger, "click", move |_| {
        dom::toggle_class(&nav_links, OPEN_CLASS);
    })
}
