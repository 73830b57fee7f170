//! Authenticated request plumbing for the Supabase PostgREST interface.
//!
//! [`SupabaseClient`] is constructed once at process start and passed by
//! reference to the repositories; there is no global instance. Storage
//! calls carry no timeout.

/// Path prefix of the PostgREST interface on a Supabase project.
const REST_PREFIX: &str = "/rest/v1";

/// Errors from the storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The HTTP request itself failed (network, DNS, TLS).
    #[error("Storage request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// PostgREST returned a non-2xx status code.
    #[error("Storage error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

/// Client for one Supabase project.
pub struct SupabaseClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl SupabaseClient {
    /// Create a client for the given project URL and service key.
    ///
    /// * `base_url` - project URL, e.g. `https://xyz.supabase.co`.
    /// * `api_key`  - service key, sent as both `apikey` and bearer token.
    pub fn new(base_url: &str, api_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    /// REST URL for a table.
    fn table_url(&self, table: &str) -> String {
        format!("{}{REST_PREFIX}/{table}", self.base_url)
    }

    /// Start an authenticated GET against a table.
    pub(crate) fn get(&self, table: &str) -> reqwest::RequestBuilder {
        self.authorize(self.http.get(self.table_url(table)))
    }

    /// Start an authenticated POST against a table.
    pub(crate) fn post(&self, table: &str) -> reqwest::RequestBuilder {
        self.authorize(self.http.post(self.table_url(table)))
    }

    /// Attach the PostgREST auth headers.
    fn authorize(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder.header("apikey", &self.api_key).header(
            reqwest::header::AUTHORIZATION,
            format!("Bearer {}", self.api_key),
        )
    }

    // ---- response helpers ----

    /// Parse a successful PostgREST response body into a row set.
    pub(crate) async fn parse_rows<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<Vec<T>, StoreError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<Vec<T>>().await?)
    }

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or a [`StoreError::Api`] carrying
    /// the status and body text on failure.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, StoreError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(StoreError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}
