//! Telegram Bot API client module
//!
//! Encapsulates the send-message and webhook-registration calls. Message
//! delivery never raises: a failed send is logged and reported as `false`.

use reqwest::Client;
use serde::Deserialize;
use serde_json::{Value, json};
use std::time::Duration;
use tracing::warn;

use crate::errors::BotError;

const TELEGRAM_API_BASE: &str = "https://api.telegram.org";

/// Bounded wait on every Telegram call; a send that exceeds it counts as a
/// failed delivery.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

static HTTP_CLIENT: std::sync::LazyLock<Client> = std::sync::LazyLock::new(|| {
    Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .unwrap_or_else(|_| Client::new())
});

/// Envelope every Bot API method responds with.
#[derive(Debug, Deserialize)]
struct ApiResponse {
    ok: bool,
    description: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Payload builders (extracted for testability)
// ─────────────────────────────────────────────────────────────────────────────

/// Build the JSON payload for `sendMessage`.
///
/// Replies use Markdown formatting with link previews disabled so result
/// lists stay compact.
#[must_use]
pub fn build_send_message_payload(chat_id: i64, text: &str) -> Value {
    json!({
        "chat_id": chat_id,
        "text": text,
        "parse_mode": "Markdown",
        "disable_web_page_preview": true,
    })
}

/// Build the JSON payload for `setWebhook`.
#[must_use]
pub fn build_set_webhook_payload(url: &str) -> Value {
    json!({ "url": url })
}

/// Telegram Bot API client.
pub struct TelegramClient {
    token: String,
}

impl TelegramClient {
    #[must_use]
    pub fn new(token: String) -> Self {
        Self { token }
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", TELEGRAM_API_BASE, self.token, method)
    }

    /// Send a text message to a chat.
    ///
    /// Returns whether delivery succeeded. Transport failures, non-success
    /// HTTP statuses, and `ok: false` bodies are logged and absorbed; the
    /// caller never has to handle a send error.
    pub async fn send_message(&self, chat_id: i64, text: &str) -> bool {
        match self.call("sendMessage", &build_send_message_payload(chat_id, text)).await {
            Ok(()) => true,
            Err(e) => {
                warn!("Telegram API error: {}", e);
                false
            }
        }
    }

    /// Register the public webhook URL for this bot.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or Telegram rejects the
    /// registration.
    pub async fn set_webhook(&self, webhook_url: &str) -> Result<(), BotError> {
        self.call("setWebhook", &build_set_webhook_payload(webhook_url)).await
    }

    async fn call(&self, method: &str, payload: &Value) -> Result<(), BotError> {
        let resp = HTTP_CLIENT
            .post(self.method_url(method))
            .json(payload)
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(BotError::TelegramError(format!(
                "{} HTTP {}",
                method,
                resp.status()
            )));
        }

        let body: ApiResponse = resp
            .json()
            .await
            .map_err(|e| BotError::TelegramError(format!("{} JSON parse error: {}", method, e)))?;

        if !body.ok {
            return Err(BotError::TelegramError(format!(
                "{} error: {}",
                method,
                body.description.as_deref().unwrap_or("unknown")
            )));
        }

        Ok(())
    }
}
