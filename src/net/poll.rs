//! Fixed-interval polling that keeps the feed approximately live.

#[cfg(feature = "csr")]
use leptos::prelude::RwSignal;

#[cfg(feature = "csr")]
use crate::state::feed::FeedState;
#[cfg(feature = "csr")]
use crate::state::viewport::ViewportState;

#[cfg(feature = "csr")]
const POLL_INTERVAL_MS: u32 = 1000;

/// Start the feed poller for the lifetime of the page.
///
/// Every tick spawns an independent refresh with whatever values currently
/// sit in the viewport fields. Ticks do not wait for the previous fetch, so
/// responses may overlap and resolve last-write-wins. The interval is leaked
/// and never cancelled; the browser tears it down with the page.
#[cfg(feature = "csr")]
pub fn spawn_poller(viewport: RwSignal<ViewportState>, feed: RwSignal<FeedState>) {
    gloo_timers::callback::Interval::new(POLL_INTERVAL_MS, move || {
        leptos::task::spawn_local(crate::net::refresh::refresh_messages(viewport, feed));
    })
    .forget();
}
