use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Shared secret for the webhook GET challenge
    pub verify_token: String,
    /// Send API page access token
    pub page_access_token: String,
    /// Full intent-model endpoint URL (key and params included)
    pub luis_model_url: String,
    /// Storefront base, e.g. https://store.steampowered.com
    pub store_base_url: String,
    pub spell_correction_enabled: bool,
    pub bing_spell_check_api_key: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            verify_token: env::var("VERIFY_TOKEN").context("VERIFY_TOKEN must be set")?,
            page_access_token: env::var("PAGE_ACCESS_TOKEN")
                .context("PAGE_ACCESS_TOKEN must be set")?,
            luis_model_url: env::var("LUIS_MODEL_URL").context("LUIS_MODEL_URL must be set")?,
            store_base_url: env::var("STORE_BASE_URL")
                .unwrap_or_else(|_| "https://store.steampowered.com".to_string()),
            spell_correction_enabled: env::var("IS_SPELL_CORRECTION_ENABLED")
                .map(|v| v == "true")
                .unwrap_or(false),
            bing_spell_check_api_key: env::var("BING_SPELL_CHECK_API_KEY").ok(),
        })
    }
}
