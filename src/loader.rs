// Loading screen: once the page has loaded, fade #loader out, hide it, then
// bring up the hero animation.

use crate::config::HeroConfig;
use crate::dom;
use crate::error::Result;
use crate::hero::{self, Hero};
use tracing::{debug, error, warn};
use web_sys::{Document, Element, HtmlElement, Window};

pub const LOADER_ID: &str = "loader";

fn page_loaded(document: &Document) -> bool {
    document.ready_state() == "complete"
}

fn start_hero(window: &Window, container: &Element, config: &HeroConfig) {
    match Hero::mount(window, container, config).and_then(hero::start) {
        Ok(()) => debug!("hero running"),
        Err(e) => error!(error = %e, "hero failed to start"),
    }
}

fn dismiss(window: Window, loader: Option<HtmlElement>, container: Element, config: HeroConfig, fade_ms: i32) {
    let loader = match loader {
        Some(loader) => loader,
        None => {
            start_hero(&window, &container, &config);
            return;
        }
    };
    dom::set_style(&loader, "opacity", "0");
    let timer_window = window.clone();
    let scheduled = dom::set_timeout(&timer_window, fade_ms, move || {
        if loader.is_connected() {
            dom::set_style(&loader, "display", "none");
        }
        start_hero(&window, &container, &config);
    });
    if let Err(e) = scheduled {
        error!(error = %e, "could not schedule loader fade");
    }
}

/// The hero container is looked up now so a missing one fails at startup.
pub fn install(window: &Window, document: &Document, config: HeroConfig, fade_ms: i32) -> Result<()> {
    let container: Element = dom::by_id(document, hero::CONTAINER_ID)?;
    let loader = match dom::by_id::<HtmlElement>(document, LOADER_ID) {
        Ok(loader) => Some(loader),
        Err(e) => {
            warn!(error = %e, "no loading screen, starting hero directly");
            None
        }
    };

    if page_loaded(document) {
        dismiss(window.clone(), loader, container, config, fade_ms);
        return Ok(());
    }

    let mut pending = Some((window.clone(), loader, container, config));
    dom::listen(window, "load", move |_| {
        if let Some((window, loader, container, config)) = pending.take() {
            dismiss(window, loader, container, config, fade_ms);
        }
    })
}
