//! Page fetching trait and implementations.

mod http;
mod mock;

pub use http::HttpFetcher;
pub use mock::MockFetcher;

use async_trait::async_trait;

use crate::error::StorefrontResult;

/// Fetches the raw HTML body of a storefront page.
///
/// One implementation talks HTTP (`HttpFetcher`); tests use `MockFetcher`
/// with canned bodies.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch a URL and return the response body as HTML text.
    async fn fetch(&self, url: &str) -> StorefrontResult<String>;
}
