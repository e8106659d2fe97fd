// Genre-search chat bot - server core
//
// Receives messaging-platform webhook events, classifies intent, scrapes the
// storefront for matching game listings, and replies with a card carousel.

pub mod config;
pub mod dialog;
pub mod kernel;
pub mod server;

pub use config::*;
