//! Portfolio page behaviors compiled to WebAssembly.
//!
//! The host page loads the module and calls `start()` (or `startWithConfig(json)`).
//! That wires the loading screen, custom cursor, scroll reveal, project filter,
//! modals, map, contact form and mobile menu, and brings up the hero section's
//! particle field once the page has loaded.

extern crate nalgebra_glm as glm;

mod utils;

pub mod camera;
pub mod color;
pub mod config;
pub mod contact;
pub mod cursor;
pub mod dom;
pub mod edge;
pub mod error;
pub mod field;
pub mod filter;
pub mod hero;
pub mod loader;
pub mod map;
pub mod menu;
pub mod modal;
pub mod particle;
pub mod renderer;
pub mod reveal;
pub mod webgl_helpers;

use config::SiteConfig;
use error::{Error, Result};
use std::sync::Once;
use tracing::{info, warn};
use wasm_bindgen::prelude::*;
use web_sys::console;

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

static LOGGING: Once = Once::new();

// Console timer, ends its label when dropped
pub struct Timer<'a> {
    name: &'a str,
}

impl<'a> Timer<'a> {
    pub fn new(name: &'a str) -> Timer<'a> {
        console::time_with_label(name);
        Timer { name }
    }
}

impl<'a> Drop for Timer<'a> {
    fn drop(&mut self) {
        console::time_end_with_label(self.name);
    }
}

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
    LOGGING.call_once(tracing_wasm::set_as_global_default);
}

#[wasm_bindgen]
pub fn start() -> std::result::Result<(), JsValue> {
    initialize();
    boot(SiteConfig::default()).map_err(JsValue::from)
}

#[wasm_bindgen(js_name = startWithConfig)]
pub fn start_with_config(json: &str) -> std::result::Result<(), JsValue> {
    initialize();
    let config = SiteConfig::from_json(json)?;
    boot(config).map_err(JsValue::from)
}

#[wasm_bindgen(js_name = openModal)]
pub fn open_modal(id: &str) -> std::result::Result<(), JsValue> {
    let document = dom::document(&dom::window()?)?;
    Ok(modal::open(&document, id)?)
}

#[wasm_bindgen(js_name = closeModal)]
pub fn close_modal(id: &str) -> std::result::Result<(), JsValue> {
    let document = dom::document(&dom::window()?)?;
    Ok(modal::close(&document, id)?)
}

// Decorations whose elements are missing are skipped; anything else is fatal
fn optional(feature: &str, result: Result<()>) -> Result<()> {
    match result {
        Err(Error::MissingElement(what)) => {
            warn!(feature, missing = %what, "feature disabled");
            Ok(())
        }
        other => other,
    }
}

/// Wires every page behavior. Fails before anything animates if the hero
/// container, map or contact form is missing.
pub fn boot(config: SiteConfig) -> Result<()> {
    config.validate()?;
    let window = dom::window()?;
    let document = dom::document(&window)?;
    let timing = &config.timing;

    map::install(&window, &document, &config.map)?;
    contact::install(&window, &document, timing)?;
    modal::install(&window, &document)?;
    filter::install(&window, &document, timing)?;
    reveal::install(&document, config.reveal_threshold)?;
    optional(
        "cursor",
        cursor::install(&window, &document, timing.cursor_trail_ms),
    )?;
    optional("menu", menu::install(&document))?;
    loader::install(&window, &document, config.hero.clone(), timing.loader_fade_ms)?;

    info!("portfolio page started");
    Ok(())
}
