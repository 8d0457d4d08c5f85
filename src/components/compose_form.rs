//! Compose form: posts a new message without a page navigation.

use leptos::prelude::*;

use crate::components::viewport_fields::ViewportFields;
use crate::state::compose::ComposeState;
use crate::state::feed::FeedState;
use crate::state::viewport::ViewportState;

/// Message form. Submission is intercepted; an empty `user` or `message`
/// swallows the submit silently and leaves every field as it was.
#[component]
pub fn ComposeForm() -> impl IntoView {
    let viewport = expect_context::<RwSignal<ViewportState>>();
    let feed = expect_context::<RwSignal<FeedState>>();
    let compose = expect_context::<RwSignal<ComposeState>>();
    let message_ref = NodeRef::<leptos::html::Input>::new();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let state = compose.get_untracked();
        if !state.can_submit() {
            return;
        }

        #[cfg(feature = "csr")]
        {
            use wasm_bindgen::JsCast;

            // POST to the form's declared action.
            let action = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlFormElement>().ok())
                .map_or_else(
                    || crate::net::api::MESSAGE_POST_PATH.to_owned(),
                    |form| form.action(),
                );

            leptos::task::spawn_local(async move {
                let body = state.form_body(&viewport.get_untracked());
                match crate::net::api::post_message(&action, body).await {
                    Ok(()) => {
                        // Runs on any resolved response, before the HTTP
                        // status is known; only a rejected transport skips
                        // the clear.
                        compose.update(|c| c.message.clear());
                        if let Some(input) = message_ref.get_untracked() {
                            let _ = input.focus();
                        }
                        crate::net::refresh::refresh_messages(viewport, feed).await;
                    }
                    Err(e) => leptos::logging::warn!("message post failed: {e}"),
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (state, viewport, feed, message_ref);
        }
    };

    view! {
        <form class="compose-form" action="/message" method="post" on:submit=on_submit>
            <label for="user">"Name"</label>
            <input
                id="user"
                name="user"
                type="text"
                prop:value=move || compose.get().user
                on:input=move |ev| compose.update(|c| c.user = event_target_value(&ev))
            />
            <label for="message">"Message"</label>
            <input
                id="message"
                name="message"
                type="text"
                node_ref=message_ref
                prop:value=move || compose.get().message
                on:input=move |ev| compose.update(|c| c.message = event_target_value(&ev))
            />
            <ViewportFields/>
            <button type="submit" class="compose-form__send">
                "Send"
            </button>
        </form>
    }
}
