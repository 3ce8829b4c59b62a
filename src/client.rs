//! High-level client — `ExplorerClient` with nested sub-client accessors.
//!
//! Each domain that talks to the network has its own sub-client in
//! `domain/<name>/client.rs`. This module keeps the builder and accessors.

use crate::domain::market_history::client::MarketHistoryClient;
use crate::error::WidgetError;
use crate::http::ExplorerHttp;

use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::market_history::client::MarketHistoryClient as MarketHistorySubClient;

/// The primary entry point for networked widget operations.
#[derive(Clone)]
pub struct ExplorerClient {
    pub(crate) http: ExplorerHttp,
    pub(crate) market_history_path: String,
    pub(crate) loader_delay: Duration,
}

impl ExplorerClient {
    pub fn builder() -> ExplorerClientBuilder {
        ExplorerClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn market_history(&self) -> MarketHistoryClient<'_> {
        MarketHistoryClient { client: self }
    }

    pub fn http(&self) -> &ExplorerHttp {
        &self.http
    }

    pub fn loader_delay(&self) -> Duration {
        self.loader_delay
    }

    pub fn market_history_path(&self) -> &str {
        &self.market_history_path
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct ExplorerClientBuilder {
    base_url: String,
    market_history_path: String,
    loader_delay: Duration,
}

impl Default for ExplorerClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_EXPLORER_URL.to_string(),
            market_history_path: crate::network::DEFAULT_MARKET_HISTORY_PATH.to_string(),
            loader_delay: crate::network::DEFAULT_LOADER_DELAY,
        }
    }
}

impl ExplorerClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Path serving the market history data (the chart element's data path).
    pub fn market_history_path(mut self, path: &str) -> Self {
        self.market_history_path = path.to_string();
        self
    }

    /// How long a fetch may run before the loading indicator is forced visible.
    pub fn loader_delay(mut self, delay: Duration) -> Self {
        self.loader_delay = delay;
        self
    }

    pub fn build(self) -> Result<ExplorerClient, WidgetError> {
        Ok(ExplorerClient {
            http: ExplorerHttp::new(&self.base_url)?,
            market_history_path: self.market_history_path,
            loader_delay: self.loader_delay,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let client = ExplorerClient::builder().build().unwrap();
        assert_eq!(client.http().base_url(), crate::network::DEFAULT_EXPLORER_URL);
        assert_eq!(client.market_history_path(), "/market-history-chart");
        assert_eq!(client.loader_delay(), Duration::from_millis(1000));
    }

    #[test]
    fn test_builder_overrides() {
        let client = ExplorerClient::builder()
            .base_url("https://explorer.example/")
            .market_history_path("/poa/core/market-history-chart")
            .loader_delay(Duration::from_millis(250))
            .build()
            .unwrap();
        assert_eq!(client.http().base_url(), "https://explorer.example");
        assert_eq!(client.market_history_path(), "/poa/core/market-history-chart");
        assert_eq!(client.loader_delay(), Duration::from_millis(250));
    }
}
