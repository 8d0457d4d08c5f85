//! Bridge component between the Leptos UI and the imperative Leaflet map.
//!
//! Mounts the `#map` container and hands it to the map controller once the
//! element exists in the document.

use leptos::prelude::*;

use crate::state::feed::FeedState;
use crate::state::viewport::ViewportState;

/// Map host — the controller takes over the `#map` element after render.
#[component]
pub fn MapPanel() -> impl IntoView {
    let viewport = expect_context::<RwSignal<ViewportState>>();
    let feed = expect_context::<RwSignal<FeedState>>();

    // No reactive reads: runs once, after the container is in the DOM.
    Effect::new(move || {
        #[cfg(feature = "csr")]
        {
            crate::map::controller::init_map("map", viewport, feed);
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (viewport, feed);
        }
    });

    view! { <div id="map" class="map-panel"></div> }
}
