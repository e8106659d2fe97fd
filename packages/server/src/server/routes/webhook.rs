//! Inbound webhook endpoints: the GET verification challenge and the POST
//! event stream.

use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::{debug, error, info};

use messenger::models::WebhookEvent;

use crate::server::app::AxumAppState;

/// Query parameters of the platform's subscription handshake.
#[derive(Debug, Deserialize)]
pub struct VerifyParams {
    #[serde(rename = "hub.verify_token")]
    verify_token: Option<String>,
    #[serde(rename = "hub.challenge")]
    challenge: Option<String>,
}

/// GET /webhook - echo the challenge when the verify token matches.
pub async fn verify_webhook(
    Extension(state): Extension<AxumAppState>,
    Query(params): Query<VerifyParams>,
) -> (StatusCode, String) {
    match (params.verify_token, params.challenge) {
        (Some(token), Some(challenge)) if token == state.verify_token => {
            info!("webhook verification succeeded");
            (StatusCode::OK, challenge)
        }
        _ => {
            info!("webhook verification rejected");
            (
                StatusCode::FORBIDDEN,
                "Error, wrong validation token".to_string(),
            )
        }
    }
}

/// POST /webhook - acknowledge immediately and process each messaging event
/// on its own task. Concurrent events are independent pipeline runs.
pub async fn receive_webhook(
    Extension(state): Extension<AxumAppState>,
    Json(event): Json<WebhookEvent>,
) -> StatusCode {
    if event.object != "page" {
        debug!(object = %event.object, "ignoring non-page webhook event");
        return StatusCode::OK;
    }

    for entry in event.entry {
        for messaging in entry.messaging {
            let sender_id = match messaging.sender {
                Some(sender) => sender.id,
                // Delivery/standby shapes carry no sender
                None => {
                    debug!("ignoring event without sender");
                    continue;
                }
            };

            let text = match messaging.message.and_then(|m| m.text) {
                Some(text) => text,
                // Read receipts, delivery confirmations, attachments-only
                None => {
                    debug!(sender = %sender_id, "ignoring event without text");
                    continue;
                }
            };

            let bot = state.bot.clone();
            tokio::spawn(async move {
                if let Err(e) = bot.handle_message(&sender_id, &text).await {
                    error!(sender = %sender_id, error = %e, "message handling failed");
                }
            });
        }
    }

    StatusCode::OK
}
