//! Wire types for the two backend endpoints.
//!
//! Everything here is externally owned: each successful fetch replaces the
//! previous value wholesale, nothing is merged or mutated locally.

use std::fmt;

use chrono::DateTime;
use chrono::NaiveDateTime;
use chrono::TimeZone;
use chrono::Utc;
use serde::Deserialize;

/// The latest known account state, as returned by `GET {base}/account`.
///
/// Unknown fields in the response are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AccountSnapshot {
    #[serde(rename = "Id")]
    pub id: String,
    #[serde(rename = "Balance")]
    pub balance: f64,
    #[serde(rename = "Equity")]
    pub equity: f64,
    #[serde(rename = "OpenTrades")]
    pub open_trades: i64,
    #[serde(rename = "Profit")]
    pub profit: f64,
    #[serde(rename = "MarginCallLevel")]
    pub margin_call_level: f64,
    #[serde(rename = "LastTransactionID")]
    pub last_transaction_id: TransactionId,
}

/// The backend emits transaction markers either as strings ("T99") or as
/// bare integers, depending on the broker API behind it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TransactionId {
    Text(String),
    Number(i64),
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{s}"),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

/// One trading signal row, as returned by `GET {base}/signals`.
///
/// Named `TradeSignal` rather than `Signal` to keep it distinct from
/// `dioxus::prelude::Signal` in the UI crate.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TradeSignal {
    #[serde(rename = "PAIR")]
    pub pair: String,
    pub time: SignalTime,
    pub mid_c: f64,
    pub mid_o: f64,
    #[serde(rename = "SL")]
    pub sl: f64,
    #[serde(rename = "TP")]
    pub tp: f64,
    #[serde(rename = "SPREAD")]
    pub spread: f64,
    #[serde(rename = "GAIN")]
    pub gain: f64,
    #[serde(rename = "LOSS")]
    pub loss: f64,
    #[serde(rename = "SIGNAL")]
    pub signal: SignalKind,
}

/// Signal timestamps arrive either as epoch milliseconds or as an
/// ISO-8601 string, depending on how the backend serialized its frame.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SignalTime {
    Millis(i64),
    Iso(String),
}

impl SignalTime {
    /// The timestamp as a UTC datetime, or `None` if the wire value is
    /// unparseable. Display formatting (local timezone) lives in the UI.
    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Millis(ms) => Utc.timestamp_millis_opt(*ms).single(),
            Self::Iso(s) => {
                if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
                    return Some(dt.with_timezone(&Utc));
                }
                // Fallback for naive "YYYY-MM-DD HH:MM:SS[.ffff]" strings.
                let naive = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f").ok()?;
                Some(Utc.from_utc_datetime(&naive))
            }
        }
    }
}

/// Signal direction. The backend emits the numeric codes 1 (buy),
/// -1 (sell) and 0 (none); some deployments emit strings instead.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SignalKind {
    Code(i64),
    // Frames serialized through a float column arrive as 1.0 / -1.0 / 0.0.
    Float(f64),
    Text(String),
}

impl SignalKind {
    fn code(&self) -> Option<i64> {
        match self {
            Self::Code(n) => Some(*n),
            Self::Float(x) if x.fract() == 0.0 => Some(*x as i64),
            _ => None,
        }
    }
}

impl fmt::Display for SignalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.code(), self) {
            (Some(1), _) => write!(f, "BUY"),
            (Some(-1), _) => write!(f, "SELL"),
            (Some(0), _) => write!(f, "NONE"),
            (_, Self::Code(n)) => write!(f, "{n}"),
            (_, Self::Float(x)) => write!(f, "{x}"),
            (_, Self::Text(s)) => write!(f, "{s}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_snapshot_full_payload() {
        let json = r#"{
            "Id": "123",
            "Balance": 1000.5,
            "Equity": 998.2,
            "OpenTrades": 2,
            "Profit": -2.3,
            "MarginCallLevel": 45,
            "LastTransactionID": "T99"
        }"#;
        let snapshot: AccountSnapshot = serde_json::from_str(json).unwrap();

        assert_eq!(snapshot.id, "123");
        assert_eq!(snapshot.balance, 1000.5);
        assert_eq!(snapshot.equity, 998.2);
        assert_eq!(snapshot.open_trades, 2);
        assert_eq!(snapshot.profit, -2.3);
        assert_eq!(snapshot.margin_call_level, 45.0);
        assert_eq!(snapshot.last_transaction_id.to_string(), "T99");
    }

    #[test]
    fn account_snapshot_ignores_extra_fields() {
        let json = r#"{
            "Id": "9",
            "Balance": 1.0,
            "Equity": 1.0,
            "OpenTrades": 0,
            "Profit": 0.0,
            "MarginCallLevel": 50,
            "LastTransactionID": 42,
            "Currency": "EUR",
            "MarginUsed": 12.5
        }"#;
        let snapshot: AccountSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.last_transaction_id, TransactionId::Number(42));
        assert_eq!(snapshot.last_transaction_id.to_string(), "42");
    }

    #[test]
    fn signal_array_round_shapes() {
        let empty: Vec<TradeSignal> = serde_json::from_str("[]").unwrap();
        assert!(empty.is_empty());

        let json = r#"[{
            "PAIR": "EUR_USD",
            "time": 1700000000000,
            "mid_c": 1.0712,
            "mid_o": 1.0698,
            "SL": 1.0650,
            "TP": 1.0800,
            "SPREAD": 0.0002,
            "GAIN": 0.0088,
            "LOSS": 0.0062,
            "SIGNAL": 1
        }]"#;
        let signals: Vec<TradeSignal> = serde_json::from_str(json).unwrap();
        assert_eq!(signals.len(), 1);
        assert_eq!(signals[0].pair, "EUR_USD");
        assert_eq!(signals[0].time, SignalTime::Millis(1700000000000));
        assert_eq!(signals[0].signal, SignalKind::Code(1));
    }

    #[test]
    fn signal_time_from_millis() {
        let time = SignalTime::Millis(1700000000000);
        let dt = time.datetime().unwrap();
        assert_eq!(dt, Utc.timestamp_millis_opt(1700000000000).unwrap());
    }

    #[test]
    fn signal_time_from_iso_strings() {
        let rfc = SignalTime::Iso("2023-11-14T22:13:20Z".to_string());
        assert_eq!(
            rfc.datetime().unwrap(),
            Utc.timestamp_millis_opt(1700000000000).unwrap()
        );

        let naive = SignalTime::Iso("2023-11-14 22:13:20".to_string());
        assert_eq!(
            naive.datetime().unwrap(),
            Utc.timestamp_millis_opt(1700000000000).unwrap()
        );

        let junk = SignalTime::Iso("not a timestamp".to_string());
        assert!(junk.datetime().is_none());
    }

    #[test]
    fn signal_kind_display() {
        assert_eq!(SignalKind::Code(1).to_string(), "BUY");
        assert_eq!(SignalKind::Code(-1).to_string(), "SELL");
        assert_eq!(SignalKind::Code(0).to_string(), "NONE");
        assert_eq!(SignalKind::Float(-1.0).to_string(), "SELL");
        assert_eq!(SignalKind::Text("BUY".to_string()).to_string(), "BUY");
    }
}
