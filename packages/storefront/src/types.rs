//! Core data types.

use serde::Serialize;

/// One scraped game listing from a storefront search page.
///
/// Every field is populated in a single extraction pass; a listing whose
/// markup lacks a field carries an empty string there rather than failing
/// the batch. The value lives only for the duration of one reply cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Listing {
    /// Display title
    pub name: String,
    /// Display price exactly as the page renders it (may be empty)
    pub price: String,
    /// Thumbnail image URL
    pub image_src: String,
    /// Detail page URL
    pub link: String,
    /// Tag labels joined with ", " (empty when the block has no tags)
    pub tags: String,
}
