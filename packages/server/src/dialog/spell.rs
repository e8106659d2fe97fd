//! Spell correction via the Bing Spell Check API.
//!
//! Optional pre-processing step, enabled by configuration. Corrections are
//! best effort: any transport or parse failure falls back to the original
//! text so a flaky spell service never blocks message handling.

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, warn};

const SPELL_CHECK_URL: &str = "https://api.cognitive.microsoft.com/bing/v7.0/spellcheck";

#[derive(Debug, Deserialize)]
struct SpellCheckResponse {
    #[serde(rename = "flaggedTokens", default)]
    flagged_tokens: Vec<FlaggedToken>,
}

#[derive(Debug, Deserialize)]
struct FlaggedToken {
    offset: usize,
    token: String,
    #[serde(default)]
    suggestions: Vec<Suggestion>,
}

#[derive(Debug, Deserialize)]
struct Suggestion {
    suggestion: String,
}

pub struct SpellChecker {
    api_key: String,
    endpoint: String,
    client: reqwest::Client,
}

impl SpellChecker {
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            api_key: api_key.into(),
            endpoint: SPELL_CHECK_URL.to_string(),
            client,
        })
    }

    /// Override the endpoint (tests point this at a local server).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Return the corrected text, or the original on any failure.
    pub async fn corrected_text(&self, text: &str) -> String {
        match self.check(text).await {
            Ok(corrected) => {
                if corrected != text {
                    debug!(original = %text, corrected = %corrected, "spell correction applied");
                }
                corrected
            }
            Err(e) => {
                warn!(error = %e, "spell check failed, using original text");
                text.to_string()
            }
        }
    }

    async fn check(&self, text: &str) -> Result<String> {
        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("mode", "proof"), ("mkt", "en-US")])
            .header("Ocp-Apim-Subscription-Key", &self.api_key)
            .form(&[("text", text)])
            .send()
            .await
            .context("spell check request failed")?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("spell check returned HTTP {}", status);
        }

        let parsed: SpellCheckResponse = response
            .json()
            .await
            .context("Failed to parse spell check response")?;

        Ok(Self::apply_corrections(text, &parsed))
    }

    /// Replace each flagged token with its top suggestion.
    ///
    /// Tokens are applied back to front so earlier offsets stay valid after
    /// a replacement changes the string length.
    fn apply_corrections(text: &str, response: &SpellCheckResponse) -> String {
        let mut tokens: Vec<&FlaggedToken> = response
            .flagged_tokens
            .iter()
            .filter(|t| !t.suggestions.is_empty())
            .collect();
        tokens.sort_by(|a, b| b.offset.cmp(&a.offset));

        let mut result = text.to_string();
        for token in tokens {
            let end = token.offset + token.token.len();
            if end > result.len()
                || !result.is_char_boundary(token.offset)
                || !result.is_char_boundary(end)
            {
                continue;
            }
            if &result[token.offset..end] != token.token {
                continue;
            }
            result.replace_range(token.offset..end, &token.suggestions[0].suggestion);
        }
        result
    }
}
