//! HTTP client for Shopify's public storefront JSON endpoints.

mod lookup;
mod origin;

use std::time::Duration;

use reqwest::Client;
use shoplink_core::HttpConfig;

use crate::endpoint::Endpoint;
use crate::error::ScraperError;

pub use lookup::Lookup;
pub use origin::{collection_base, site_origin};

#[cfg(test)]
use origin::extract_domain;

/// HTTP client for storefront `.json` endpoints.
///
/// Issues exactly one GET per call. Non-2xx responses and unparseable bodies
/// come back as typed errors; nothing is retried or cached.
pub struct StorefrontClient {
    client: Client,
}

impl StorefrontClient {
    /// Creates a `StorefrontClient` with the given request timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Creates a client from the process HTTP settings.
    ///
    /// # Errors
    ///
    /// Same as [`StorefrontClient::new`].
    pub fn from_config(config: &HttpConfig) -> Result<Self, ScraperError> {
        Self::new(config.request_timeout_secs, &config.user_agent)
    }

    /// Fetches `endpoint` and parses the body as JSON.
    ///
    /// The value is returned unvalidated; shape checks belong to
    /// [`crate::normalize`].
    ///
    /// # Errors
    ///
    /// - [`ScraperError::Status`]: any non-2xx status.
    /// - [`ScraperError::Http`]: network or TLS failure, or the body could not be read.
    /// - [`ScraperError::Parse`]: the body is not valid JSON.
    pub async fn fetch_json(&self, endpoint: &Endpoint) -> Result<serde_json::Value, ScraperError> {
        let url = endpoint.as_str();
        tracing::debug!(url, "fetching storefront endpoint");

        let response = self
            .client
            .get(url)
            .header(
                reqwest::header::ACCEPT,
                "application/json,text/html;q=0.9,*/*;q=0.8",
            )
            .header(reqwest::header::ACCEPT_LANGUAGE, "en-US,en;q=0.9")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScraperError::Status {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str::<serde_json::Value>(&body).map_err(|e| ScraperError::Parse {
            context: format!("response from {url}"),
            source: e,
        })
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
