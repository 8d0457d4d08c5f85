//! HTTP helpers for communicating with the message board server.
//!
//! Browser (csr): real HTTP calls via `gloo-net`.
//! Native: stubs returning `None`/error since these endpoints are only
//! reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! The fetch path degrades to `None` on any failure — no retry, no log, no
//! user-visible error. The POST path distinguishes only transport failure
//! (rejected request) from a resolved response; a resolved response with a
//! failure status still counts as `Ok`, matching browser `fetch` semantics.

#![allow(clippy::unused_async)]

/// Path of the viewport-scoped message listing.
pub const MESSAGES_PATH: &str = "/messages";

/// Default message submission endpoint, used when the form carries no
/// resolvable `action`.
pub const MESSAGE_POST_PATH: &str = "/message";

/// Fetch the rendered message fragment for the given viewport query string.
///
/// Returns `Some(body)` only for an ok response; transport failures and
/// non-ok statuses are silently dropped.
pub async fn fetch_messages(query: &str) -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let url = format!("{MESSAGES_PATH}?{query}");
        let resp = gloo_net::http::Request::get(&url).send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.text().await.ok()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = query;
        None
    }
}

/// POST an URL-encoded message body to the given endpoint.
///
/// # Errors
///
/// Returns an error string only when the request itself fails (network,
/// malformed request). The response status is deliberately not inspected.
pub async fn post_message(action: &str, body: String) -> Result<(), String> {
    #[cfg(feature = "csr")]
    {
        gloo_net::http::Request::post(action)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (action, body);
        Err("not available outside the browser".to_owned())
    }
}
