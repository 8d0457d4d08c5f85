#[cfg(test)]
#[path = "feed_test.rs"]
mod feed_test;

/// The rendered message list, exactly as the server sent it.
///
/// The server emits a ready-to-insert HTML fragment (zero or more elements
/// classed `message`, oldest first). The client never parses it: each fetch
/// replaces the whole fragment, so there is no client-side identity,
/// ordering, or deduplication.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FeedState {
    pub html: String,
}

impl FeedState {
    /// Replace the fragment wholesale with a fresh server response.
    pub fn replace(&mut self, html: String) {
        self.html = html;
    }
}
