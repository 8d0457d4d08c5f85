use crate::state::viewport::ViewportState;

#[cfg(test)]
#[path = "compose_test.rs"]
mod compose_test;

/// Mirror of the compose form's two text inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ComposeState {
    pub user: String,
    pub message: String,
}

impl ComposeState {
    /// Whether the form may be submitted: both fields non-empty.
    ///
    /// No trimming — a whitespace-only value counts as present. The server
    /// applies the same check on its side.
    pub fn can_submit(&self) -> bool {
        !self.user.is_empty() && !self.message.is_empty()
    }

    /// URL-encoded POST body: the author and text plus the viewport fields,
    /// which tag the message with the bounding box it was posted from.
    pub fn form_body(&self, viewport: &ViewportState) -> String {
        let mut body = url::form_urlencoded::Serializer::new(String::new());
        body.append_pair("user", &self.user);
        body.append_pair("message", &self.message);
        body.append_pair("nw_lat", &viewport.nw_lat);
        body.append_pair("nw_lon", &viewport.nw_lon);
        body.append_pair("se_lat", &viewport.se_lat);
        body.append_pair("se_lon", &viewport.se_lon);
        body.finish()
    }
}
