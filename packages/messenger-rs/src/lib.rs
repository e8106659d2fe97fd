//! Thin client for the Messenger Send API.
//!
//! Supports plain text replies and generic-template card carousels. The
//! access token is injected via [`MessengerOptions`]; nothing here reads the
//! environment or embeds credentials.

pub mod models;

use reqwest::Client;
use thiserror::Error;
use tracing::warn;

use crate::models::{
    ApiErrorBody, Attachment, Card, OutgoingMessage, Recipient, SendRequest, TemplateElement,
    TemplatePayload,
};

const DEFAULT_API_BASE: &str = "https://graph.facebook.com/v2.6";

#[derive(Debug, Error)]
pub enum MessengerError {
    #[error("send request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("platform rejected send ({status}): {message}")]
    Api { status: u16, message: String },
}

#[derive(Debug, Clone)]
pub struct MessengerOptions {
    pub access_token: String,
    /// Graph API base; overridable so tests can point at a local server.
    pub api_base: String,
}

impl MessengerOptions {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }
}

#[derive(Debug, Clone)]
pub struct MessengerClient {
    options: MessengerOptions,
    client: Client,
}

impl MessengerClient {
    pub fn new(options: MessengerOptions) -> Self {
        Self {
            options,
            client: Client::new(),
        }
    }

    /// Send a single text message to a recipient.
    pub async fn send_text(
        &self,
        recipient_id: &str,
        text: &str,
    ) -> Result<(), MessengerError> {
        let request = SendRequest {
            recipient: Recipient {
                id: recipient_id.to_string(),
            },
            message: OutgoingMessage {
                text: Some(text.to_string()),
                attachment: None,
            },
        };
        self.post_message(&request).await
    }

    /// Send a horizontally scrollable carousel of cards.
    pub async fn send_cards(
        &self,
        recipient_id: &str,
        cards: &[Card],
    ) -> Result<(), MessengerError> {
        let request = SendRequest {
            recipient: Recipient {
                id: recipient_id.to_string(),
            },
            message: OutgoingMessage {
                text: None,
                attachment: Some(Attachment {
                    kind: "template".to_string(),
                    payload: TemplatePayload {
                        template_type: "generic".to_string(),
                        elements: cards.iter().map(TemplateElement::from_card).collect(),
                    },
                }),
            },
        };
        self.post_message(&request).await
    }

    async fn post_message(&self, request: &SendRequest) -> Result<(), MessengerError> {
        let url = format!("{}/me/messages", self.options.api_base);

        let response = self
            .client
            .post(&url)
            .query(&[("access_token", self.options.access_token.as_str())])
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .map(|b| b.error.message)
                .unwrap_or(body);
            warn!(status = %status, message = %message, "Send API error");
            return Err(MessengerError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(())
    }
}
