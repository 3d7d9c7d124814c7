// The client-side Dioxus application logic.

use std::time::Duration;

use dioxus::prelude::*;

pub mod compat;
mod components;
pub mod hooks;
pub mod poll;
mod widgets;

use api::ApiClient;
use components::pico::Container;
use widgets::account_summary::AccountSummaryWidget;
use widgets::signal_table::SignalTableWidget;

/// Refresh cadence shared by both widgets.
pub(crate) const POLL_INTERVAL: Duration = Duration::from_secs(5);

const APP_CSS: &str = r#"
    .account-row {
        display: grid;
        grid-template-columns: 1fr 1fr;
        padding: 0.25rem 0;
        border-bottom: 1px solid var(--pico-muted-border-color);
    }

    .account-label {
        font-weight: bold;
    }

    .signal-table td, .signal-table th {
        white-space: nowrap;
    }

    .stale-banner {
        margin-bottom: 0.5rem;
    }
"#;

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.min.css",
        }
        style {
            "{APP_CSS}"
        }
        Home {}
    }
}

/// The dashboard page. Purely structural: one shared API client in
/// context, then the two widgets in order. No data flows between them.
#[component]
fn Home() -> Element {
    use_context_provider(ApiClient::from_env);

    rsx! {
        Container {
            h1 { "Forex Dashboard" }
            AccountSummaryWidget {}
            SignalTableWidget {}
        }
    }
}
