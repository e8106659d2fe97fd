//! Wire types for the Messenger platform: inbound webhook events and
//! outbound Send API payloads.

use serde::{Deserialize, Serialize};

// =============================================================================
// Inbound webhook payloads
// =============================================================================

/// Top-level webhook event envelope delivered by the platform.
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookEvent {
    /// "page" for page-scoped events
    pub object: String,
    #[serde(default)]
    pub entry: Vec<WebhookEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WebhookEntry {
    #[serde(default)]
    pub messaging: Vec<MessagingEvent>,
}

/// One messaging event: who sent it, and the message if it carried one.
///
/// Both fields are optional on the wire: delivery receipts, standby and
/// other platform shapes omit them. A malformed event must not fail the
/// whole envelope, so the handler skips what it cannot use.
#[derive(Debug, Clone, Deserialize)]
pub struct MessagingEvent {
    #[serde(default)]
    pub sender: Option<Participant>,
    #[serde(default)]
    pub message: Option<IncomingMessage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Participant {
    pub id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IncomingMessage {
    #[serde(default)]
    pub text: Option<String>,
}

// =============================================================================
// Outbound reply types
// =============================================================================

/// One carousel card: a listing rendered for the chat surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub title: String,
    pub subtitle: String,
    /// Short body line (the listing price); folded into the subtitle on the
    /// wire since the generic template has no separate text field.
    pub text: String,
    pub image_url: String,
    pub action_title: String,
    pub action_url: String,
}

/// `{recipient: {id}, message: {...}}` Send API payload.
#[derive(Debug, Serialize)]
pub(crate) struct SendRequest {
    pub recipient: Recipient,
    pub message: OutgoingMessage,
}

#[derive(Debug, Serialize)]
pub(crate) struct Recipient {
    pub id: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct OutgoingMessage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment: Option<Attachment>,
}

#[derive(Debug, Serialize)]
pub(crate) struct Attachment {
    #[serde(rename = "type")]
    pub kind: String,
    pub payload: TemplatePayload,
}

#[derive(Debug, Serialize)]
pub(crate) struct TemplatePayload {
    pub template_type: String,
    pub elements: Vec<TemplateElement>,
}

/// Generic-template element, one per card.
#[derive(Debug, Serialize)]
pub(crate) struct TemplateElement {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub buttons: Vec<TemplateButton>,
}

#[derive(Debug, Serialize)]
pub(crate) struct TemplateButton {
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
    pub title: String,
}

impl TemplateElement {
    /// Build an element from a card, folding the body line into the subtitle.
    pub(crate) fn from_card(card: &Card) -> Self {
        let subtitle = match (card.subtitle.is_empty(), card.text.is_empty()) {
            (true, true) => None,
            (false, true) => Some(card.subtitle.clone()),
            (true, false) => Some(card.text.clone()),
            (false, false) => Some(format!("{}\n{}", card.subtitle, card.text)),
        };

        Self {
            title: card.title.clone(),
            subtitle,
            image_url: if card.image_url.is_empty() {
                None
            } else {
                Some(card.image_url.clone())
            },
            buttons: vec![TemplateButton {
                kind: "web_url".to_string(),
                url: card.action_url.clone(),
                title: card.action_title.clone(),
            }],
        }
    }
}

/// Error body the Graph API returns on failed sends.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub error: ApiError,
}

#[derive(Debug, Deserialize)]
pub struct ApiError {
    pub message: String,
    #[serde(default)]
    pub code: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_webhook_event_deserializes() {
        let json = r#"{
            "object": "page",
            "entry": [{
                "messaging": [{
                    "sender": {"id": "u-1"},
                    "message": {"text": "search rpg"}
                }]
            }]
        }"#;

        let event: WebhookEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.object, "page");
        let msg = &event.entry[0].messaging[0];
        assert_eq!(msg.sender.as_ref().unwrap().id, "u-1");
        assert_eq!(msg.message.as_ref().unwrap().text.as_deref(), Some("search rpg"));
    }

    #[test]
    fn test_webhook_event_without_message_field() {
        // Delivery receipts and read events carry no message
        let json = r#"{"object": "page", "entry": [{"messaging": [{"sender": {"id": "u-1"}}]}]}"#;
        let event: WebhookEvent = serde_json::from_str(json).unwrap();
        assert!(event.entry[0].messaging[0].message.is_none());
    }

    #[test]
    fn test_event_without_sender_does_not_fail_the_envelope() {
        // A batch mixing a well-formed event with a sender-less platform
        // shape must deserialize as a whole; the bad event just carries None.
        let json = r#"{
            "object": "page",
            "entry": [{
                "messaging": [
                    {"delivery": {"watermark": 1458668856253}},
                    {"sender": {"id": "u-1"}, "message": {"text": "search rpg"}}
                ]
            }]
        }"#;

        let event: WebhookEvent = serde_json::from_str(json).unwrap();
        let messaging = &event.entry[0].messaging;
        assert_eq!(messaging.len(), 2);
        assert!(messaging[0].sender.is_none());
        assert_eq!(messaging[1].sender.as_ref().unwrap().id, "u-1");
    }

    #[test]
    fn test_element_folds_text_into_subtitle() {
        let card = Card {
            title: "Foo".to_string(),
            subtitle: "Indie, RPG".to_string(),
            text: "$9.99".to_string(),
            image_url: "http://x/img.png".to_string(),
            action_title: "Check it out".to_string(),
            action_url: "http://x/app/1".to_string(),
        };

        let element = TemplateElement::from_card(&card);
        assert_eq!(element.subtitle.as_deref(), Some("Indie, RPG\n$9.99"));
        assert_eq!(element.buttons[0].url, "http://x/app/1");
    }

    #[test]
    fn test_element_with_empty_fields() {
        let card = Card {
            title: "Foo".to_string(),
            subtitle: String::new(),
            text: String::new(),
            image_url: String::new(),
            action_title: "Check it out".to_string(),
            action_url: "http://x/app/1".to_string(),
        };

        let element = TemplateElement::from_card(&card);
        assert!(element.subtitle.is_none());
        assert!(element.image_url.is_none());
    }
}
