//! The four viewport inputs mirroring the map's bounding box.

use leptos::prelude::*;

use crate::state::viewport::ViewportState;

/// Editable bounding-box fields. The map overwrites them on every move;
/// manual edits scope the next fetches until then. They sit inside the
/// compose form so posted messages carry the box they were written from.
#[component]
pub fn ViewportFields() -> impl IntoView {
    let viewport = expect_context::<RwSignal<ViewportState>>();

    view! {
        <fieldset class="viewport-fields">
            <legend>"Visible area"</legend>
            <label for="nw_lat">"NW lat"</label>
            <input
                id="nw_lat"
                name="nw_lat"
                type="text"
                prop:value=move || viewport.get().nw_lat
                on:input=move |ev| viewport.update(|v| v.nw_lat = event_target_value(&ev))
            />
            <label for="nw_lon">"NW lon"</label>
            <input
                id="nw_lon"
                name="nw_lon"
                type="text"
                prop:value=move || viewport.get().nw_lon
                on:input=move |ev| viewport.update(|v| v.nw_lon = event_target_value(&ev))
            />
            <label for="se_lat">"SE lat"</label>
            <input
                id="se_lat"
                name="se_lat"
                type="text"
                prop:value=move || viewport.get().se_lat
                on:input=move |ev| viewport.update(|v| v.se_lat = event_target_value(&ev))
            />
            <label for="se_lon">"SE lon"</label>
            <input
                id="se_lon"
                name="se_lon"
                type="text"
                prop:value=move || viewport.get().se_lon
                on:input=move |ev| viewport.update(|v| v.se_lon = event_target_value(&ev))
            />
        </fieldset>
    }
}
