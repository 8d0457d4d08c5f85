//! Minimal `wasm-bindgen` bindings for the Leaflet `L` global.
//!
//! Only the surface this client touches: map construction, view setup, tile
//! layers, bounds access, and event registration. Leaflet itself is loaded
//! from a CDN by the page shell.

use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
extern "C" {
    /// A Leaflet map instance (`L.Map`).
    pub type Map;

    /// `L.map(id)` — create a map bound to the element with the given id.
    #[wasm_bindgen(js_namespace = L, js_name = map)]
    pub fn map(id: &str) -> Map;

    /// `map.setView(center, zoom)`. `center` is a `[lat, lng]` array.
    #[wasm_bindgen(method, js_name = setView)]
    pub fn set_view(this: &Map, center: &JsValue, zoom: f64);

    /// `map.on(event, handler)`.
    #[wasm_bindgen(method)]
    pub fn on(this: &Map, event: &str, handler: &js_sys::Function);

    /// `map.getBounds()`.
    #[wasm_bindgen(method, js_name = getBounds)]
    pub fn get_bounds(this: &Map) -> LatLngBounds;

    /// A rectangle in geographical coordinates (`L.LatLngBounds`).
    pub type LatLngBounds;

    #[wasm_bindgen(method, js_name = getNorthEast)]
    pub fn get_north_east(this: &LatLngBounds) -> LatLng;

    #[wasm_bindgen(method, js_name = getSouthWest)]
    pub fn get_south_west(this: &LatLngBounds) -> LatLng;

    /// A geographical point (`L.LatLng`); `lat`/`lng` are plain properties.
    pub type LatLng;

    #[wasm_bindgen(method, getter)]
    pub fn lat(this: &LatLng) -> f64;

    #[wasm_bindgen(method, getter)]
    pub fn lng(this: &LatLng) -> f64;

    /// A tile layer (`L.TileLayer`).
    pub type TileLayer;

    /// `L.tileLayer(urlTemplate, options)`.
    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    pub fn tile_layer(url_template: &str, options: &JsValue) -> TileLayer;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &TileLayer, map: &Map);
}
