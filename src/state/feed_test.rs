use super::*;

#[test]
fn feed_state_default_is_empty() {
    let state = FeedState::default();
    assert!(state.html.is_empty());
}

#[test]
fn replace_swaps_the_whole_fragment() {
    let mut state = FeedState::default();
    state.replace("<div class=\"message\">a</div>".to_owned());
    state.replace("<div class=\"message\">b</div>".to_owned());

    assert_eq!(state.html, "<div class=\"message\">b</div>");
}
