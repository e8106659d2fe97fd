//! LUIS-style intent recognition client.
//!
//! The model endpoint is a single URL (key and verbose params baked in); the
//! utterance goes in the `q` query parameter and the response carries a top
//! scoring intent plus typed entities.

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::kernel::traits::BaseIntentRecognizer;

/// Dialog intent resolved from a user utterance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// User asked for games of a concrete genre
    FindGamesOfGenre { genre: String },
    /// User wants to search but gave no genre yet
    SearchPrompt,
    Help,
    Unknown,
}

/// Intent names the trained model emits.
const INTENT_FIND_GAMES: &str = "FindGamesOfGenre";
const INTENT_SEARCH: &str = "SearchComputerGame";
const INTENT_HELP: &str = "Help";

/// Entity type carrying the genre term.
const ENTITY_GENRE: &str = "Genre";

#[derive(Debug, Deserialize)]
struct LuisResponse {
    #[serde(rename = "topScoringIntent")]
    top_scoring_intent: Option<LuisIntent>,
    #[serde(default)]
    entities: Vec<LuisEntity>,
}

#[derive(Debug, Deserialize)]
struct LuisIntent {
    intent: String,
}

#[derive(Debug, Deserialize)]
struct LuisEntity {
    entity: String,
    #[serde(rename = "type")]
    kind: String,
}

/// HTTP client for the intent model endpoint.
pub struct LuisRecognizer {
    model_url: String,
    client: reqwest::Client,
}

impl LuisRecognizer {
    pub fn new(model_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            model_url: model_url.into(),
            client,
        })
    }

    fn map_response(response: LuisResponse) -> Intent {
        let top = match response.top_scoring_intent {
            Some(intent) => intent.intent,
            None => return Intent::Unknown,
        };

        match top.as_str() {
            INTENT_FIND_GAMES => {
                let genre = response
                    .entities
                    .iter()
                    .find(|e| e.kind == ENTITY_GENRE)
                    .map(|e| e.entity.clone());
                match genre {
                    Some(genre) if !genre.is_empty() => Intent::FindGamesOfGenre { genre },
                    // Model matched the intent but extracted no genre entity;
                    // re-prompt instead of searching for nothing.
                    _ => Intent::SearchPrompt,
                }
            }
            INTENT_SEARCH => Intent::SearchPrompt,
            INTENT_HELP => Intent::Help,
            _ => Intent::Unknown,
        }
    }
}

#[async_trait]
impl BaseIntentRecognizer for LuisRecognizer {
    async fn recognize(&self, text: &str) -> Result<Intent> {
        let url = format!("{}&q={}", self.model_url, urlencoding::encode(text));

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("intent model request failed")?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("intent model returned HTTP {}", status);
        }

        let parsed: LuisResponse = response
            .json()
            .await
            .context("Failed to parse intent model response")?;

        let intent = Self::map_response(parsed);
        debug!(text = %text, intent = ?intent, "intent recognized");
        Ok(intent)
    }
}
