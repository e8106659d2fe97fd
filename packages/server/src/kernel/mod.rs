// Infrastructure layer: dependency-injection traits, adapters over external
// service clients, and mock implementations for tests.

pub mod test_dependencies;
pub mod traits;

pub use test_dependencies::{CannedRecognizer, MockReplySender, SentReply};
pub use traits::{BaseIntentRecognizer, BaseReplySender};

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use messenger::models::Card;
use messenger::MessengerClient;

/// Adapter exposing `MessengerClient` through the reply-sender seam.
pub struct MessengerAdapter {
    client: Arc<MessengerClient>,
}

impl MessengerAdapter {
    pub fn new(client: Arc<MessengerClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl BaseReplySender for MessengerAdapter {
    async fn send_text(&self, recipient_id: &str, text: &str) -> Result<()> {
        self.client.send_text(recipient_id, text).await?;
        Ok(())
    }

    async fn send_cards(&self, recipient_id: &str, cards: &[Card]) -> Result<()> {
        self.client.send_cards(recipient_id, cards).await?;
        Ok(())
    }
}
