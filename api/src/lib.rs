//! Backend access layer for the forex dashboard.
//!
//! One configurable HTTP client serves both widgets, so the whole page
//! points at a single backend instead of each component choosing its own
//! endpoint.

mod error;
mod types;

pub use error::ApiError;
pub use types::AccountSnapshot;
pub use types::SignalKind;
pub use types::SignalTime;
pub use types::TradeSignal;
pub use types::TransactionId;

use serde::de::DeserializeOwned;

/// Base URL of the trading backend's REST surface.
///
/// Resolution order: `FOREX_DASH_API_URL` at runtime (native builds),
/// then the same variable baked in at compile time (wasm builds have no
/// process environment), then the local development default.
pub fn backend_base_url() -> String {
    const DEFAULT: &str = "http://localhost:5000/api";

    #[cfg(not(target_arch = "wasm32"))]
    if let Ok(url) = std::env::var("FOREX_DASH_API_URL") {
        if !url.is_empty() {
            return url.trim_end_matches('/').to_string();
        }
    }

    option_env!("FOREX_DASH_API_URL")
        .filter(|url| !url.is_empty())
        .unwrap_or(DEFAULT)
        .trim_end_matches('/')
        .to_string()
}

/// HTTP client for the two read-only backend endpoints.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    /// Client pointed at the configured backend.
    pub fn from_env() -> Self {
        Self::new(backend_base_url())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET {base}/account` — the current account snapshot.
    pub async fn account(&self) -> Result<AccountSnapshot, ApiError> {
        self.get_json("account").await
    }

    /// `GET {base}/signals` — the most recent signals, server-ordered and
    /// server-capped (at most 10 in the observed backend).
    pub async fn signals(&self) -> Result<Vec<TradeSignal>, ApiError> {
        self.get_json("signals").await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}/{}", self.base_url, path);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status { url, status });
        }

        response
            .json::<T>()
            .await
            .map_err(|source| ApiError::Decode { url, source })
    }
}
