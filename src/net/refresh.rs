//! Feed refresh: the one read-then-render path every trigger funnels into.
//!
//! Map syncs, submissions, and the polling timer all call
//! [`refresh_messages`]; none of them coordinate with each other. Overlapping
//! refreshes are allowed and the last response to arrive wins the feed.

use leptos::prelude::{GetUntracked, RwSignal, Update};

use crate::state::feed::FeedState;
use crate::state::viewport::ViewportState;

/// Fetch the fragment for the current viewport fields and replace the feed.
///
/// Reads the four fields as they are right now (manual edits included, the
/// map is not consulted). A failed fetch leaves the feed untouched.
pub async fn refresh_messages(viewport: RwSignal<ViewportState>, feed: RwSignal<FeedState>) {
    let query = viewport.get_untracked().messages_query();
    if let Some(body) = crate::net::api::fetch_messages(&query).await {
        feed.update(|f| f.replace(body));
    }
}
