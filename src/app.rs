//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::compose_form::ComposeForm;
use crate::components::map_panel::MapPanel;
use crate::components::message_feed::MessageFeed;
use crate::state::compose::ComposeState;
use crate::state::feed::FeedState;
use crate::state::viewport::ViewportState;

/// Root application component.
///
/// Provides the shared state contexts, starts the feed poller, and lays out
/// the map next to the feed and compose form.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let viewport = RwSignal::new(ViewportState::default());
    let feed = RwSignal::new(FeedState::default());
    let compose = RwSignal::new(ComposeState::default());

    provide_context(viewport);
    provide_context(feed);
    provide_context(compose);

    // One fetch per second for the lifetime of the page, on top of the
    // event-driven fetches from map moves and submissions.
    #[cfg(feature = "csr")]
    crate::net::poll::spawn_poller(viewport, feed);

    view! {
        <Title text="Geoboard"/>

        <div class="app">
            <MapPanel/>
            <aside class="app__sidebar">
                <MessageFeed/>
                <ComposeForm/>
            </aside>
        </div>
    }
}
