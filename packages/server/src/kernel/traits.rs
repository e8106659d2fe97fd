// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
//
// Naming convention: Base* for trait names (e.g., BaseReplySender)

use anyhow::Result;
use async_trait::async_trait;

use crate::dialog::intent::Intent;
use messenger::models::Card;

/// Delivers replies to a chat recipient over the messaging platform.
#[async_trait]
pub trait BaseReplySender: Send + Sync {
    /// Send a single text line
    async fn send_text(&self, recipient_id: &str, text: &str) -> Result<()>;

    /// Send a horizontally scrollable carousel of cards
    async fn send_cards(&self, recipient_id: &str, cards: &[Card]) -> Result<()>;
}

/// Classifies a user utterance into a dialog intent.
#[async_trait]
pub trait BaseIntentRecognizer: Send + Sync {
    async fn recognize(&self, text: &str) -> Result<Intent>;
}
