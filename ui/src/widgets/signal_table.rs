//=============================================================================
// File: src/widgets/signal_table.rs
//=============================================================================
use api::ApiClient;
use api::SignalTime;
use api::TradeSignal;
use chrono::Local;
use dioxus::prelude::*;

use crate::components::pico::Card;
use crate::components::stale_banner::StaleBanner;
use crate::hooks::use_poller::use_poller;
use crate::poll::PollState;
use crate::POLL_INTERVAL;

/// Column headers, in table order.
const COLUMNS: [&str; 10] = [
    "PAIR", "Time", "Mid Close", "Mid Open", "SL", "TP", "Spread", "Gain", "Loss", "Signal",
];

/// Renders a wire timestamp as a local date-time string. An unparseable
/// value falls back to its raw wire form rather than disappearing.
fn format_signal_time(time: &SignalTime) -> String {
    match time.datetime() {
        Some(dt) => dt
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
        None => match time {
            SignalTime::Millis(ms) => ms.to_string(),
            SignalTime::Iso(s) => s.clone(),
        },
    }
}

/// One signal mapped onto its ten display cells, in column order.
fn signal_cells(signal: &TradeSignal) -> [String; 10] {
    [
        signal.pair.clone(),
        format_signal_time(&signal.time),
        signal.mid_c.to_string(),
        signal.mid_o.to_string(),
        signal.sl.to_string(),
        signal.tp.to_string(),
        signal.spread.to_string(),
        signal.gain.to_string(),
        signal.loss.to_string(),
        signal.signal.to_string(),
    ]
}

#[component]
pub fn SignalTableWidget() -> Element {
    let client = use_context::<ApiClient>();
    let tracker = use_poller("signal table", POLL_INTERVAL, move || {
        let client = client.clone();
        async move { client.signals().await }
    });

    let guard = tracker.read();
    let loading = matches!(guard.state(), PollState::Loading);
    let rows: Option<Vec<[String; 10]>> = guard
        .data()
        .map(|signals| signals.iter().map(signal_cells).collect());
    let stale = guard.is_stale().then(|| {
        (
            guard.last_success().map(|t| t.format("%H:%M:%S").to_string()),
            guard.last_error().unwrap_or_default().to_string(),
        )
    });
    drop(guard);

    rsx! {
        Card {
            h3 { "Last 10 Signals" }
            if let Some((since, error)) = stale {
                StaleBanner { since, error }
            }
            if loading {
                progress {}
            }
            table {
                class: "signal-table",
                thead {
                    tr {
                        for column in COLUMNS {
                            th { "{column}" }
                        }
                    }
                }
                tbody {
                    match rows {
                        Some(rows) if !rows.is_empty() => rsx! {
                            for cells in rows {
                                tr {
                                    for cell in cells {
                                        td { "{cell}" }
                                    }
                                }
                            }
                        },
                        _ => rsx! {
                            tr {
                                td {
                                    colspan: "10",
                                    "No signals available"
                                }
                            }
                        },
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use chrono::Utc;

    use super::*;

    fn sample() -> TradeSignal {
        serde_json::from_str(
            r#"{
                "PAIR": "EUR_USD",
                "time": 1700000000000,
                "mid_c": 1.0712,
                "mid_o": 1.0698,
                "SL": 1.065,
                "TP": 1.08,
                "SPREAD": 0.0002,
                "GAIN": 0.0088,
                "LOSS": 0.0062,
                "SIGNAL": 1
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn one_signal_maps_to_ten_cells_in_column_order() {
        let cells = signal_cells(&sample());
        assert_eq!(cells.len(), COLUMNS.len());
        assert_eq!(cells[0], "EUR_USD");
        assert_eq!(cells[2], "1.0712");
        assert_eq!(cells[3], "1.0698");
        assert_eq!(cells[4], "1.065");
        assert_eq!(cells[5], "1.08");
        assert_eq!(cells[6], "0.0002");
        assert_eq!(cells[7], "0.0088");
        assert_eq!(cells[8], "0.0062");
        assert_eq!(cells[9], "BUY");
    }

    #[test]
    fn time_cell_is_formatted_not_raw() {
        let cells = signal_cells(&sample());
        assert_ne!(cells[1], "1700000000000");

        let expected = Utc
            .timestamp_millis_opt(1700000000000)
            .unwrap()
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string();
        assert_eq!(cells[1], expected);
    }

    #[test]
    fn unparseable_time_falls_back_to_wire_value() {
        let time = SignalTime::Iso("yesterday-ish".to_string());
        assert_eq!(format_signal_time(&time), "yesterday-ish");
    }

    #[test]
    fn sell_and_none_codes_render_as_words() {
        let mut signal = sample();
        signal.signal = serde_json::from_str("-1").unwrap();
        assert_eq!(signal_cells(&signal)[9], "SELL");
        signal.signal = serde_json::from_str("0").unwrap();
        assert_eq!(signal_cells(&signal)[9], "NONE");
    }
}
