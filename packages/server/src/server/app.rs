//! Application setup and server configuration.

use std::sync::Arc;

use anyhow::Result;
use axum::{
    extract::Extension,
    routing::get,
    Router,
};
use tower_http::trace::TraceLayer;

use messenger::{MessengerClient, MessengerOptions};
use storefront::{GenreSearch, HttpFetcher};

use crate::config::Config;
use crate::dialog::intent::LuisRecognizer;
use crate::dialog::spell::SpellChecker;
use crate::dialog::DialogBot;
use crate::kernel::MessengerAdapter;
use crate::server::routes::{health_handler, receive_webhook, verify_webhook};

/// Shared application state
#[derive(Clone)]
pub struct AxumAppState {
    pub bot: Arc<DialogBot>,
    pub verify_token: String,
}

/// Wire the real collaborators from configuration.
pub fn build_state(config: &Config) -> Result<AxumAppState> {
    let fetcher = Arc::new(HttpFetcher::new()?);
    let search = Arc::new(GenreSearch::new(config.store_base_url.clone(), fetcher));

    let messenger_client = Arc::new(MessengerClient::new(MessengerOptions::new(
        config.page_access_token.clone(),
    )));
    let sender = Arc::new(MessengerAdapter::new(messenger_client));

    let recognizer = Arc::new(LuisRecognizer::new(config.luis_model_url.clone())?);

    // Spell correction is an optional pre-processing step
    let spell = match (config.spell_correction_enabled, &config.bing_spell_check_api_key) {
        (true, Some(key)) => Some(Arc::new(SpellChecker::new(key.clone())?)),
        (true, None) => {
            tracing::warn!(
                "IS_SPELL_CORRECTION_ENABLED is set but BING_SPELL_CHECK_API_KEY is missing; \
                 spell correction disabled"
            );
            None
        }
        _ => None,
    };

    let bot = Arc::new(DialogBot::new(recognizer, sender, search, spell));

    Ok(AxumAppState {
        bot,
        verify_token: config.verify_token.clone(),
    })
}

/// Build the Axum application router
pub fn build_app(state: AxumAppState) -> Router {
    Router::new()
        .route("/webhook", get(verify_webhook).post(receive_webhook))
        .route("/health", get(health_handler))
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
}
