//! Main webhook endpoint for Telegram updates.
//!
//! Linear flow per invocation: parse the payload, normalize the keyword,
//! search exact then fuzzy, deliver replies. Every failure path is absorbed
//! here; nothing propagates past the endpoint.

use axum::{Json, extract::State, http::StatusCode};
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, info};

use crate::core::models::WebhookResponse;
use crate::errors::BotError;
use crate::search;
use crate::telegram::message_formatter::{
    EMPTY_KEYWORD_PROMPT, MatchKind, NO_MATCHES_MESSAGE, build_result_replies,
    format_error_message,
};

use super::AppState;

/// Outcome of parsing an inbound update body.
#[derive(Debug, PartialEq)]
pub enum ParsedUpdate {
    Message { chat_id: i64, text: String },
    /// No chat context anywhere in the payload; there is no destination to
    /// reply to.
    MissingChat,
}

/// Extract the chat id and message text from an update.
///
/// Accepts either the full Telegram update shape (fields nested under
/// `message`) or the message fields directly at the top level. A missing
/// `text` field parses as an empty string.
///
/// # Errors
///
/// Returns an error if a chat object is present but its `id` is missing or
/// not an integer.
pub fn parse_update(update: &Value) -> Result<ParsedUpdate, BotError> {
    let message = update.get("message").unwrap_or(update);

    let Some(chat) = message.get("chat") else {
        return Ok(ParsedUpdate::MissingChat);
    };

    let chat_id = chat
        .get("id")
        .and_then(Value::as_i64)
        .ok_or_else(|| BotError::ParseError("chat id is missing or not an integer".to_string()))?;

    let text = message
        .get("text")
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string();

    Ok(ParsedUpdate::Message { chat_id, text })
}

/// POST /webhook
///
/// Outermost boundary for one invocation: any error escaping the inner flow
/// is logged, reported to the chat when a destination is already known, and
/// turned into a 500 response. Responses are always the
/// `{status, message?}` JSON shape.
pub async fn webhook_handler(
    State(state): State<Arc<AppState>>,
    Json(update): Json<Value>,
) -> (StatusCode, Json<WebhookResponse>) {
    let mut resolved_chat: Option<i64> = None;

    match process_update(&state, &update, &mut resolved_chat).await {
        Ok((status, response)) => (status, Json(response)),
        Err(e) => {
            error!("Unhandled failure handling update: {}", e);
            if let Some(chat_id) = resolved_chat {
                state
                    .telegram
                    .send_message(chat_id, &format_error_message(&e))
                    .await;
            }
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(WebhookResponse::error(e.to_string())),
            )
        }
    }
}

async fn process_update(
    state: &AppState,
    update: &Value,
    resolved_chat: &mut Option<i64>,
) -> Result<(StatusCode, WebhookResponse), BotError> {
    let (chat_id, text) = match parse_update(update)? {
        ParsedUpdate::Message { chat_id, text } => (chat_id, text),
        ParsedUpdate::MissingChat => {
            return Ok((
                StatusCode::BAD_REQUEST,
                WebhookResponse::error("Invalid message format"),
            ));
        }
    };
    *resolved_chat = Some(chat_id);

    let keyword = text.trim().to_lowercase();
    if keyword.is_empty() {
        state.telegram.send_message(chat_id, EMPTY_KEYWORD_PROMPT).await;
        return Ok((StatusCode::OK, WebhookResponse::success()));
    }

    // Try exact match first, then fall back to fuzzy search
    let mut posts = search::search_posts(&state.blogger, &keyword, true).await;
    let kind = if posts.is_empty() {
        posts = search::search_posts(&state.blogger, &keyword, false).await;
        MatchKind::Related
    } else {
        MatchKind::Exact
    };

    if posts.is_empty() {
        state.telegram.send_message(chat_id, NO_MATCHES_MESSAGE).await;
        return Ok((StatusCode::OK, WebhookResponse::success()));
    }

    info!(
        "Delivering {} match(es) for \"{}\" to chat {}",
        posts.len(),
        keyword,
        chat_id
    );
    for reply in build_result_replies(&posts, kind) {
        state.telegram.send_message(chat_id, &reply).await;
    }

    Ok((StatusCode::OK, WebhookResponse::success()))
}
