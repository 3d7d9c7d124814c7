//=============================================================================
// File: src/widgets/account_summary.rs
//=============================================================================
use api::AccountSnapshot;
use api::ApiClient;
use dioxus::prelude::*;

use crate::components::pico::Card;
use crate::components::stale_banner::StaleBanner;
use crate::hooks::use_poller::use_poller;
use crate::POLL_INTERVAL;

/// The seven account fields, in display order. Values are rendered raw,
/// exactly as the backend reported them.
fn account_rows(account: &AccountSnapshot) -> Vec<(&'static str, String)> {
    vec![
        ("Account Num.", account.id.clone()),
        ("Balance", account.balance.to_string()),
        ("NAV", account.equity.to_string()),
        ("Open Trades", account.open_trades.to_string()),
        ("Unrealized PL", account.profit.to_string()),
        ("Closeout %", account.margin_call_level.to_string()),
        ("Last Trans. ID", account.last_transaction_id.to_string()),
    ]
}

#[component]
pub fn AccountSummaryWidget() -> Element {
    let client = use_context::<ApiClient>();
    let tracker = use_poller("account summary", POLL_INTERVAL, move || {
        let client = client.clone();
        async move { client.account().await }
    });

    let guard = tracker.read();
    let rows = guard.data().map(account_rows);
    let stale = guard.is_stale().then(|| {
        (
            guard.last_success().map(|t| t.format("%H:%M:%S").to_string()),
            guard.last_error().unwrap_or_default().to_string(),
        )
    });
    drop(guard);

    rsx! {
        Card {
            h3 { "Account Summary" }
            if let Some((since, error)) = stale {
                StaleBanner { since, error }
            }
            // Until the first fetch succeeds there is nothing but the title.
            if let Some(rows) = rows {
                div {
                    class: "segment",
                    for (label, value) in rows {
                        div {
                            class: "account-row",
                            div { class: "account-label", "{label}" }
                            div { "{value}" }
                        }
                    }
                }
            }
        }
    }
}
