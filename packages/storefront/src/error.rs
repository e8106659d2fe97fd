//! Typed errors for the storefront library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) so callers can branch
//! on the failure class.

use thiserror::Error;

/// Errors that can occur while fetching or searching the storefront.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// HTTP request failed (connect error, TLS, body read)
    #[error("HTTP error: {0}")]
    Http(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Server answered with a non-success status
    #[error("HTTP status {status} for {url}")]
    Status { status: u16, url: String },

    /// Request did not complete within the configured timeout
    #[error("timeout fetching: {url}")]
    Timeout { url: String },

    /// Invalid URL format
    #[error("invalid URL: {url}")]
    InvalidUrl { url: String },
}

/// Result type alias for storefront operations.
pub type StorefrontResult<T> = std::result::Result<T, StorefrontError>;
