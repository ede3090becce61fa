// Contact section map. Leaflet is loaded by the page as the global `L`; these
// bindings cover the handful of calls needed for one view, one tile layer and
// one marker with a popup. Tile loading and its failures stay with Leaflet.

use crate::config::MapConfig;
use crate::dom;
use crate::error::{Error, Result};
use tracing::info;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Window};

#[wasm_bindgen]
extern "C" {
    pub type LeafletMap;
    pub type TileLayer;
    pub type Marker;

    #[wasm_bindgen(catch, js_namespace = L, js_name = map)]
    fn leaflet_map(container: &Element) -> std::result::Result<LeafletMap, JsValue>;

    #[wasm_bindgen(catch, method, js_name = setView)]
    fn set_view(this: &LeafletMap, center: &JsValue, zoom: u8) -> std::result::Result<LeafletMap, JsValue>;

    #[wasm_bindgen(catch, js_namespace = L, js_name = tileLayer)]
    fn tile_layer(url_template: &str, options: &JsValue) -> std::result::Result<TileLayer, JsValue>;

    #[wasm_bindgen(catch, method, js_name = addTo)]
    fn add_layer_to(this: &TileLayer, map: &LeafletMap) -> std::result::Result<TileLayer, JsValue>;

    #[wasm_bindgen(catch, js_namespace = L, js_name = marker)]
    fn marker(lat_lng: &JsValue) -> std::result::Result<Marker, JsValue>;

    #[wasm_bindgen(catch, method, js_name = addTo)]
    fn add_marker_to(this: &Marker, map: &LeafletMap) -> std::result::Result<Marker, JsValue>;

    #[wasm_bindgen(catch, method, js_name = bindPopup)]
    fn bind_popup(this: &Marker, content: &str) -> std::result::Result<Marker, JsValue>;

    #[wasm_bindgen(catch, method, js_name = openPopup)]
    fn open_popup(this: &Marker) -> std::result::Result<Marker, JsValue>;
}

fn lat_lng(center: [f64; 2]) -> JsValue {
    js_sys::Array::of2(&JsValue::from_f64(center[0]), &JsValue::from_f64(center[1])).into()
}

fn leaflet_loaded(window: &Window) -> bool {
    js_sys::Reflect::has(window, &JsValue::from_str("L")).unwrap_or(false)
}

pub fn install(window: &Window, document: &Document, config: &MapConfig) -> Result<LeafletMap> {
    let container: Element = dom::by_id(document, &config.container_id)?;
    if !leaflet_loaded(window) {
        return Err(Error::MissingGlobal("L"));
    }

    let map = leaflet_map(&container)?;
    map.set_view(&lat_lng(config.center), config.zoom)?;

    let options = js_sys::Object::new();
    js_sys::Reflect::set(
        &options,
        &JsValue::from_str("attribution"),
        &JsValue::from_str(&config.attribution),
    )?;
    tile_layer(&config.tile_url, &options)?.add_layer_to(&map)?;

    marker(&lat_lng(config.center))?
        .add_marker_to(&map)?
        .bind_popup(&config.popup)?
        .open_popup()?;

    info!(
        lat = config.center[0],
        lng = config.center[1],
        zoom = config.zoom,
        "map ready"
    );
    Ok(map)
}
