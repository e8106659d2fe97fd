//! Storefront search library.
//!
//! Fetches a storefront tag-search page and extracts the game listings it
//! renders. The pipeline is a pure value flow: fetch HTML, parse it, return
//! an owned `Vec<Listing>` per call. No state is shared across invocations.

pub mod error;
pub mod extract;
pub mod fetcher;
pub mod search;
pub mod types;

pub use error::{StorefrontError, StorefrontResult};
pub use extract::extract_listings;
pub use fetcher::{HttpFetcher, MockFetcher, PageFetcher};
pub use search::GenreSearch;
pub use types::Listing;
