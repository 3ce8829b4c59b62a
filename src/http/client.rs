//! Low-level HTTP client — `ExplorerHttp`.
//!
//! One method per endpoint. Returns wire types (conversion to domain types
//! happens at the sub-client boundary). Requests are issued once; the widgets
//! surface failures and let the user retry.

use crate::domain::market_history::wire::{MarketHistoryResponse, RESPONSE_TYPE_PARAM};
use crate::error::HttpError;

use reqwest::Client;
use serde::de::DeserializeOwned;

/// Low-level HTTP client for the explorer's page-data endpoints.
#[derive(Clone)]
pub struct ExplorerHttp {
    base_url: String,
    client: Client,
}

impl ExplorerHttp {
    pub fn new(base_url: &str) -> Result<Self, HttpError> {
        #[allow(unused_mut)]
        let mut builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        {
            builder = builder
                .timeout(crate::network::DEFAULT_REQUEST_TIMEOUT)
                .pool_max_idle_per_host(10);
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build()?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── Market history ───────────────────────────────────────────────────

    /// `GET {data_path}?type=JSON`.
    ///
    /// `data_path` is the page-supplied path (`data-market_history_chart_path`);
    /// absolute URLs are used as-is.
    pub async fn get_market_history(
        &self,
        data_path: &str,
    ) -> Result<MarketHistoryResponse, HttpError> {
        let url = with_query(&self.resolve(data_path), &[RESPONSE_TYPE_PARAM]);
        self.get(&url).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    pub(crate) fn resolve(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else {
            format!("{}/{}", self.base_url, path.trim_start_matches('/'))
        }
    }

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        tracing::debug!("GET {}", url);
        let resp = self.client.get(url).send().await?;
        let status = resp.status();

        if status.is_success() {
            let parsed = resp.json::<T>().await?;
            return Ok(parsed);
        }

        let status_code = status.as_u16();
        let body_text = resp.text().await.unwrap_or_default();

        Err(map_status(status_code, body_text))
    }
}

fn map_status(status_code: u16, body_text: String) -> HttpError {
    match status_code {
        401 => HttpError::Unauthorized,
        404 => HttpError::NotFound(body_text),
        408 => HttpError::Timeout,
        429 => HttpError::RateLimited,
        400..=499 => HttpError::BadRequest(body_text),
        _ => HttpError::ServerError {
            status: status_code,
            body: body_text,
        },
    }
}

/// Append url-encoded query parameters, respecting an existing query string.
pub(crate) fn with_query(url: &str, params: &[(&str, &str)]) -> String {
    if params.is_empty() {
        return url.to_string();
    }
    let query = params
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{}{}{}", url, separator, query)
}
