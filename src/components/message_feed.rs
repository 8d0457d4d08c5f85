//! Message feed: renders the server's fragment and anchors to the newest
//! message.

use leptos::prelude::*;

use crate::state::feed::FeedState;

/// Feed container. The fragment is inserted verbatim via `inner_html`; the
/// server is trusted to emit safe, ready-to-render content.
#[component]
pub fn MessageFeed() -> impl IntoView {
    let feed = expect_context::<RwSignal<FeedState>>();
    let container_ref = NodeRef::<leptos::html::Div>::new();

    // After each fragment swap, scroll the last `.message` into view. The
    // server sends messages oldest first, so the last one is the newest.
    // Zero messages means no scroll call at all.
    Effect::new(move || {
        let _ = feed.get().html;

        #[cfg(feature = "csr")]
        {
            use wasm_bindgen::JsCast;

            if let Some(el) = container_ref.get() {
                if let Ok(nodes) = el.query_selector_all(".message") {
                    let len = nodes.length();
                    if len == 0 {
                        return;
                    }
                    if let Some(last) = nodes.get(len - 1) {
                        if let Some(last) = last.dyn_ref::<web_sys::Element>() {
                            last.scroll_into_view();
                        }
                    }
                }
            }
        }
    });

    view! {
        <div
            id="messages"
            class="message-feed"
            node_ref=container_ref
            inner_html=move || feed.get().html
        ></div>
    }
}
