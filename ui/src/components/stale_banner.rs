// File: src/components/stale_banner.rs
use dioxus::prelude::*;

/// Shown by a widget once its refreshes have failed often enough that the
/// displayed data can no longer be trusted as current.
#[component]
pub fn StaleBanner(since: Option<String>, error: String) -> Element {
    let message = match &since {
        Some(time) => format!("Connection lost. Showing data from {time}."),
        None => "Connection lost. No data received yet.".to_string(),
    };

    rsx! {
        p {
            class: "stale-banner",
            title: "{error}",
            mark { "{message}" }
        }
    }
}
