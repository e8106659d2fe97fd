//! Genre search pipeline: URL construction, fetch, extract.

use std::sync::Arc;

use tracing::info;

use crate::error::StorefrontResult;
use crate::extract::extract_listings;
use crate::fetcher::PageFetcher;
use crate::types::Listing;

/// Searches the storefront's tag pages for games of a genre.
pub struct GenreSearch {
    base_url: String,
    fetcher: Arc<dyn PageFetcher>,
}

impl GenreSearch {
    pub fn new(base_url: impl Into<String>, fetcher: Arc<dyn PageFetcher>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            fetcher,
        }
    }

    /// Search URL for a genre, with the genre percent-encoded.
    ///
    /// The genre comes straight from the intent recognizer; encoding keeps a
    /// term like "co op" or "точка" from producing a malformed request.
    pub fn search_url(&self, genre: &str) -> String {
        format!(
            "{}/tag/en/{}#p=0&tab=TopSellers",
            self.base_url,
            urlencoding::encode(genre)
        )
    }

    /// Fetch the search page for `genre` and extract its listings.
    ///
    /// The three outcomes are distinct: `Ok` with listings, `Ok` with an
    /// empty vec (page had no matching blocks), or `Err` with the fetch
    /// failure. Callers must branch on all of them.
    pub async fn find_games(&self, genre: &str) -> StorefrontResult<Vec<Listing>> {
        let url = self.search_url(genre);
        info!(genre = %genre, url = %url, "searching storefront");

        let html = self.fetcher.fetch(&url).await?;
        let listings = extract_listings(&html);

        info!(genre = %genre, count = listings.len(), "storefront search completed");
        Ok(listings)
    }
}
