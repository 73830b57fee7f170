//! REST client for the VWM repair-orders search endpoint.
//!
//! Wraps the single search call this tool needs using [`reqwest`]. Every
//! request carries the captured session cookie and a browser user-agent;
//! the portal rejects clients that identify themselves as anything else.

use std::time::Duration;

use vwm_sync_core::order::SearchResponse;

/// Production VWM portal host.
pub const DEFAULT_BASE_URL: &str = "https://quanlyvattu.vincons.net";

/// Path of the repair-order search endpoint.
const SEARCH_PATH: &str = "/api/vwm/v0/repair-orders/search";

/// Page requested from the search endpoint. Only the first page is read.
const SEARCH_PAGE: u32 = 0;

/// Fixed size of the single page.
const SEARCH_PAGE_SIZE: u32 = 50;

/// Sort order: newest orders first.
const SEARCH_SORT: &str = "createdDate,desc";

/// HTTP request timeout for the search call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// `accept` header sent with the search request.
const ACCEPT: &str = "application/json, text/plain, */*";

/// Browser user-agent string presented to the portal.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// HTTP client for one authenticated VWM portal session.
pub struct VwmClient {
    client: reqwest::Client,
    base_url: String,
    cookie: String,
}

/// Errors from the VWM API layer.
#[derive(Debug, thiserror::Error)]
pub enum VwmApiError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The portal returned a non-2xx status code.
    #[error("VWM API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

impl VwmClient {
    /// Create a client for the given portal host and session cookie.
    ///
    /// * `base_url` - portal base URL, e.g. `https://quanlyvattu.vincons.net`.
    /// * `cookie`   - raw `cookie` header value for an authenticated session.
    pub fn new(base_url: String, cookie: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self {
            client,
            base_url,
            cookie,
        }
    }

    /// Portal base URL this client targets.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the newest repair orders.
    ///
    /// Sends a single `POST /api/vwm/v0/repair-orders/search` with the
    /// fixed page-0 payload. One page of 50 is the whole read; there is
    /// no pagination and no retry.
    pub async fn search_repair_orders(&self) -> Result<SearchResponse, VwmApiError> {
        let url = format!("{}{SEARCH_PATH}", self.base_url);
        tracing::debug!(url = %url, "Requesting repair orders");

        let response = self
            .client
            .post(url)
            .header(reqwest::header::ACCEPT, ACCEPT)
            .header(reqwest::header::COOKIE, self.cookie.as_str())
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .json(&search_payload())
            .send()
            .await?;

        Self::parse_response(response).await
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or a [`VwmApiError::Api`] carrying
    /// the status and body text on failure.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, VwmApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(VwmApiError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, VwmApiError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}

/// Static JSON body for the search request.
///
/// Mirrors what the web UI sends. Whether the portal applies an implicit
/// date window to an unfiltered search is unverified, so no filters are
/// added here.
fn search_payload() -> serde_json::Value {
    serde_json::json!({
        "page": SEARCH_PAGE,
        "size": SEARCH_PAGE_SIZE,
        "sort": [SEARCH_SORT],
        "filters": [],
    })
}
