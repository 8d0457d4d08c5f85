//! Map controller: owns the Leaflet map and is the only writer of the
//! viewport's source of truth.
//!
//! EVENT WIRING
//! ============
//! `load` and `moveend` both funnel into [`sync_viewport`], which projects
//! the map bounds into the viewport fields and ends with a feed refresh —
//! callers never trigger a fetch separately after a sync. Handlers are
//! leaked (`Closure::forget`) because the map lives as long as the page.

use leptos::prelude::{RwSignal, Set};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;

use crate::map::leaflet;
use crate::state::feed::FeedState;
use crate::state::viewport::ViewportState;

const INITIAL_CENTER: (f64, f64) = (51.505, -0.09);
const INITIAL_ZOOM: f64 = 13.0;
const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
const TILE_ATTRIBUTION: &str = "Map data &copy; OpenStreetMap.org";
const TILE_MAX_ZOOM: f64 = 18.0;

/// Create the map in the given container, wire its events, set the initial
/// view, and attach the OpenStreetMap tile layer.
///
/// `load` fires once after the initial `setView`: it syncs the viewport
/// (which fetches) and issues one extra initial fetch. `moveend` fires once
/// per settled pan/zoom, with no debouncing.
pub fn init_map(
    container_id: &str,
    viewport: RwSignal<ViewportState>,
    feed: RwSignal<FeedState>,
) {
    let map = leaflet::map(container_id);

    let on_load = {
        let map = map.clone();
        Closure::<dyn Fn()>::new(move || {
            sync_viewport(&map, viewport, feed);
            leptos::task::spawn_local(crate::net::refresh::refresh_messages(viewport, feed));
        })
    };
    map.on("load", on_load.as_ref().unchecked_ref());
    on_load.forget();

    let on_move_end = {
        let map = map.clone();
        Closure::<dyn Fn()>::new(move || sync_viewport(&map, viewport, feed))
    };
    map.on("moveend", on_move_end.as_ref().unchecked_ref());
    on_move_end.forget();

    let center = js_sys::Array::of2(
        &JsValue::from_f64(INITIAL_CENTER.0),
        &JsValue::from_f64(INITIAL_CENTER.1),
    );
    map.set_view(&center, INITIAL_ZOOM);

    let options = js_sys::Object::new();
    let _ = js_sys::Reflect::set(&options, &"attribution".into(), &TILE_ATTRIBUTION.into());
    let _ = js_sys::Reflect::set(&options, &"maxZoom".into(), &JsValue::from_f64(TILE_MAX_ZOOM));
    leaflet::tile_layer(TILE_URL, &options).add_to(&map);
}

/// Project the map's current bounds into the four viewport fields, then
/// refresh the feed.
///
/// Overwrites any manual edits to the fields. The field naming mixes the
/// corners (see `ViewportState::from_bounds`).
pub fn sync_viewport(
    map: &leaflet::Map,
    viewport: RwSignal<ViewportState>,
    feed: RwSignal<FeedState>,
) {
    let bounds = map.get_bounds();
    let ne = bounds.get_north_east();
    let sw = bounds.get_south_west();

    viewport.set(ViewportState::from_bounds(
        ne.lat(),
        ne.lng(),
        sw.lat(),
        sw.lng(),
    ));

    leptos::task::spawn_local(crate::net::refresh::refresh_messages(viewport, feed));
}
