//! Dialog orchestration: one incoming message in, one reply out.
//!
//! Each message runs a fresh pipeline: optional spell correction, intent
//! recognition, then either the genre-search scrape or a canned reply. All
//! pipeline state is per-call; concurrent messages from different users
//! share nothing mutable.

pub mod intent;
pub mod spell;

use std::sync::Arc;

use anyhow::{Context, Result};
use messenger::models::Card;
use tracing::{info, warn};

use crate::dialog::intent::Intent;
use crate::dialog::spell::SpellChecker;
use crate::kernel::traits::{BaseIntentRecognizer, BaseReplySender};
use storefront::{GenreSearch, Listing};

const WELCOME_REPLY: &str =
    "Welcome to the Games finder! What kind of game would you like to find?";
const HELP_REPLY: &str = "Hi! Welcome to the Games finder. Try asking me things like \
    'search rpg', 'search adventure' or 'search platformer'";
const SEARCH_FAILED_REPLY: &str =
    "The game search failed, please try again in a moment.";
const CARD_ACTION_TITLE: &str = "Check it out";

/// The dialog orchestrator.
pub struct DialogBot {
    recognizer: Arc<dyn BaseIntentRecognizer>,
    sender: Arc<dyn BaseReplySender>,
    search: Arc<GenreSearch>,
    spell: Option<Arc<SpellChecker>>,
}

impl DialogBot {
    pub fn new(
        recognizer: Arc<dyn BaseIntentRecognizer>,
        sender: Arc<dyn BaseReplySender>,
        search: Arc<GenreSearch>,
        spell: Option<Arc<SpellChecker>>,
    ) -> Self {
        Self {
            recognizer,
            sender,
            search,
            spell,
        }
    }

    /// Handle one incoming message end to end.
    pub async fn handle_message(&self, sender_id: &str, text: &str) -> Result<()> {
        let text = match &self.spell {
            Some(spell) => spell.corrected_text(text).await,
            None => text.to_string(),
        };

        let intent = match self.recognizer.recognize(&text).await {
            Ok(intent) => intent,
            Err(e) => {
                warn!(error = %e, "intent recognition failed, treating as unknown");
                Intent::Unknown
            }
        };

        info!(sender = %sender_id, intent = ?intent, "handling message");

        match intent {
            Intent::FindGamesOfGenre { genre } => self.find_games(sender_id, &genre).await,
            Intent::SearchPrompt => self
                .sender
                .send_text(sender_id, WELCOME_REPLY)
                .await
                .context("Failed to send welcome reply"),
            Intent::Help => self
                .sender
                .send_text(sender_id, HELP_REPLY)
                .await
                .context("Failed to send help reply"),
            Intent::Unknown => {
                let reply = format!(
                    "Sorry, I did not understand '{}'. Type 'help' if you need assistance.",
                    text
                );
                self.sender
                    .send_text(sender_id, &reply)
                    .await
                    .context("Failed to send fallback reply")
            }
        }
    }

    /// Run the scrape pipeline and reply. Every outcome sends something:
    /// listings, an explicit no-results line, or an explicit failure line.
    async fn find_games(&self, sender_id: &str, genre: &str) -> Result<()> {
        self.sender
            .send_text(
                sender_id,
                &format!("We are analyzing your message: '{}'", genre),
            )
            .await
            .context("Failed to send acknowledgement")?;

        match self.search.find_games(genre).await {
            Ok(listings) if !listings.is_empty() => {
                let cards: Vec<Card> = listings.iter().map(listing_as_card).collect();
                self.sender
                    .send_text(sender_id, &format!("Look at this {} games:", genre))
                    .await
                    .context("Failed to send intro line")?;
                self.sender
                    .send_cards(sender_id, &cards)
                    .await
                    .context("Failed to send carousel")
            }
            Ok(_) => self
                .sender
                .send_text(
                    sender_id,
                    &format!("No results found for '{}'. Try another genre.", genre),
                )
                .await
                .context("Failed to send no-results reply"),
            Err(e) => {
                warn!(genre = %genre, error = %e, "storefront search failed");
                self.sender
                    .send_text(sender_id, SEARCH_FAILED_REPLY)
                    .await
                    .context("Failed to send failure reply")
            }
        }
    }
}

/// Render one listing as a reply card.
fn listing_as_card(listing: &Listing) -> Card {
    Card {
        title: listing.name.clone(),
        subtitle: listing.tags.clone(),
        text: listing.price.clone(),
        image_url: listing.image_src.clone(),
        action_title: CARD_ACTION_TITLE.to_string(),
        action_url: listing.link.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_as_card_maps_all_fields() {
        let listing = Listing {
            name: "Foo".to_string(),
            price: "$9.99".to_string(),
            image_src: "http://x/img.png".to_string(),
            link: "http://x/app/1".to_string(),
            tags: "Indie, RPG".to_string(),
        };

        let card = listing_as_card(&listing);

        assert_eq!(card.title, "Foo");
        assert_eq!(card.subtitle, "Indie, RPG");
        assert_eq!(card.text, "$9.99");
        assert_eq!(card.image_url, "http://x/img.png");
        assert_eq!(card.action_title, "Check it out");
        assert_eq!(card.action_url, "http://x/app/1");
    }

    #[test]
    fn test_listing_with_empty_fields_maps_to_empty_card_fields() {
        let listing = Listing {
            name: "Freebie".to_string(),
            price: String::new(),
            image_src: String::new(),
            link: "http://x/app/2".to_string(),
            tags: String::new(),
        };

        let card = listing_as_card(&listing);
        assert_eq!(card.text, "");
        assert_eq!(card.subtitle, "");
        assert_eq!(card.action_url, "http://x/app/2");
    }
}
