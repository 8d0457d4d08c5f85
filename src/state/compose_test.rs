use super::*;

fn compose(user: &str, message: &str) -> ComposeState {
    ComposeState {
        user: user.to_owned(),
        message: message.to_owned(),
    }
}

// =============================================================
// ComposeState::can_submit
// =============================================================

#[test]
fn can_submit_requires_both_fields() {
    assert!(compose("ada", "hello").can_submit());
    assert!(!compose("", "hello").can_submit());
    assert!(!compose("ada", "").can_submit());
    assert!(!compose("", "").can_submit());
}

#[test]
fn can_submit_does_not_trim() {
    // Whitespace counts as a value; the server is the arbiter of content.
    assert!(compose(" ", " ").can_submit());
}

// =============================================================
// ComposeState::form_body
// =============================================================

#[test]
fn form_body_includes_viewport_fields() {
    let viewport = ViewportState::from_bounds(51.52, -0.05, 51.49, -0.13);
    let body = compose("ada", "hello").form_body(&viewport);

    assert_eq!(
        body,
        "user=ada&message=hello&nw_lat=51.52&nw_lon=-0.13&se_lat=51.49&se_lon=-0.05"
    );
}

#[test]
fn form_body_url_encodes_values() {
    let body = compose("ada lovelace", "caf\u{e9} & co?").form_body(&ViewportState::default());

    assert_eq!(
        body,
        "user=ada+lovelace&message=caf%C3%A9+%26+co%3F&nw_lat=&nw_lon=&se_lat=&se_lon="
    );
}
