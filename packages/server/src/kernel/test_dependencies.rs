//! Mock implementations of the infrastructure traits for tests.
//!
//! Kept in the library (not `#[cfg(test)]`) so integration tests under
//! `tests/` can use them.

use std::sync::{Arc, RwLock};

use anyhow::Result;
use async_trait::async_trait;
use messenger::models::Card;

use crate::dialog::intent::Intent;
use crate::kernel::traits::{BaseIntentRecognizer, BaseReplySender};

/// One reply captured by [`MockReplySender`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SentReply {
    Text { recipient: String, text: String },
    Cards { recipient: String, cards: Vec<Card> },
}

/// Reply sender that records everything instead of calling the platform.
#[derive(Default)]
pub struct MockReplySender {
    sent: Arc<RwLock<Vec<SentReply>>>,
}

impl MockReplySender {
    pub fn new() -> Self {
        Self::default()
    }

    /// All replies sent so far, in order.
    pub fn sent(&self) -> Vec<SentReply> {
        self.sent.read().unwrap().clone()
    }

    pub fn sent_count(&self) -> usize {
        self.sent.read().unwrap().len()
    }
}

impl Clone for MockReplySender {
    fn clone(&self) -> Self {
        Self {
            sent: Arc::clone(&self.sent),
        }
    }
}

#[async_trait]
impl BaseReplySender for MockReplySender {
    async fn send_text(&self, recipient_id: &str, text: &str) -> Result<()> {
        self.sent.write().unwrap().push(SentReply::Text {
            recipient: recipient_id.to_string(),
            text: text.to_string(),
        });
        Ok(())
    }

    async fn send_cards(&self, recipient_id: &str, cards: &[Card]) -> Result<()> {
        self.sent.write().unwrap().push(SentReply::Cards {
            recipient: recipient_id.to_string(),
            cards: cards.to_vec(),
        });
        Ok(())
    }
}

/// Recognizer that returns a fixed intent for every utterance.
pub struct CannedRecognizer {
    intent: Intent,
}

impl CannedRecognizer {
    pub fn new(intent: Intent) -> Self {
        Self { intent }
    }
}

#[async_trait]
impl BaseIntentRecognizer for CannedRecognizer {
    async fn recognize(&self, _text: &str) -> Result<Intent> {
        Ok(self.intent.clone())
    }
}
