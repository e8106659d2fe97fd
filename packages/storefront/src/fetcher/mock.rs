//! Mock page fetcher for testing.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::error::{StorefrontError, StorefrontResult};
use crate::fetcher::PageFetcher;

/// Mock fetcher with canned HTML bodies.
///
/// Allows configuring a body per URL, or a forced failure, and records the
/// URLs that were requested.
///
/// # Example
///
/// ```rust
/// use storefront::MockFetcher;
///
/// let mock = MockFetcher::new().with_page("http://x/tag/en/rpg", "<html></html>");
/// ```
#[derive(Default)]
pub struct MockFetcher {
    pages: Arc<RwLock<HashMap<String, String>>>,
    fail_all: Arc<RwLock<bool>>,
    calls: Arc<RwLock<Vec<String>>>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a canned page (builder pattern).
    pub fn with_page(self, url: impl Into<String>, html: impl Into<String>) -> Self {
        self.add_page(url, html);
        self
    }

    /// Make every fetch fail with an HTTP error (builder pattern).
    pub fn with_failure(self) -> Self {
        *self.fail_all.write().unwrap() = true;
        self
    }

    /// Add a canned page.
    pub fn add_page(&self, url: impl Into<String>, html: impl Into<String>) {
        self.pages.write().unwrap().insert(url.into(), html.into());
    }

    /// URLs requested so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }

    /// Number of fetches performed.
    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }
}

impl Clone for MockFetcher {
    fn clone(&self) -> Self {
        Self {
            pages: Arc::clone(&self.pages),
            fail_all: Arc::clone(&self.fail_all),
            calls: Arc::clone(&self.calls),
        }
    }
}

#[async_trait]
impl PageFetcher for MockFetcher {
    async fn fetch(&self, url: &str) -> StorefrontResult<String> {
        self.calls.write().unwrap().push(url.to_string());

        if *self.fail_all.read().unwrap() {
            return Err(StorefrontError::Http(Box::new(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "simulated network error",
            ))));
        }

        match self.pages.read().unwrap().get(url) {
            Some(html) => Ok(html.clone()),
            None => Err(StorefrontError::Status {
                status: 404,
                url: url.to_string(),
            }),
        }
    }
}
