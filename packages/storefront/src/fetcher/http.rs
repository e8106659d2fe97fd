//! HTTP page fetcher backed by reqwest.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::error::{StorefrontError, StorefrontResult};
use crate::fetcher::PageFetcher;

/// Default request timeout; bounds worst-case reply latency.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP fetcher with a browser-like identity.
///
/// The storefront serves a stripped-down page to obvious bots, so the client
/// sends ordinary browser headers. One fetch per search, no retries.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> StorefrontResult<Self> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> StorefrontResult<Self> {
        let user_agent = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::ACCEPT,
            "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8"
                .parse()
                .expect("static header value"),
        );
        headers.insert(
            reqwest::header::ACCEPT_LANGUAGE,
            "en-US,en;q=0.5".parse().expect("static header value"),
        );

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .default_headers(headers)
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .map_err(|e| StorefrontError::Http(Box::new(e)))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> StorefrontResult<String> {
        debug!(url = %url, "fetching storefront page");

        let response = self.client.get(url).send().await.map_err(|e| {
            warn!(url = %url, error = %e, "storefront request failed");
            if e.is_timeout() {
                StorefrontError::Timeout {
                    url: url.to_string(),
                }
            } else {
                StorefrontError::Http(Box::new(e))
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %url, status = %status, "storefront returned error status");
            return Err(StorefrontError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        response.text().await.map_err(|e| {
            if e.is_timeout() {
                StorefrontError::Timeout {
                    url: url.to_string(),
                }
            } else {
                StorefrontError::Http(Box::new(e))
            }
        })
    }
}
