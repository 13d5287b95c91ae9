/// blogbot - a Telegram chatbot that searches a Blogger blog by post label.
///
/// The bot is a single request/response bridge between two third-party HTTP
/// APIs: it receives Telegram updates on a webhook, searches the blog's posts
/// by label (exact server-side filter first, then a client-side fuzzy
/// fallback), and sends the matching posts back to the chat.
///
/// # Architecture
///
/// The system uses:
/// - axum for the inbound webhook endpoint
/// - reqwest for the Blogger and Telegram API calls
/// - Tokio for the async runtime
///
/// Control flow per inbound update: webhook handler -> two-phase label
/// search -> one Telegram message per result (capped), header first. No
/// state survives a single invocation.
// Module declarations
pub mod blogger;
pub mod core;
pub mod errors;
pub mod search;
pub mod telegram;
pub mod webhook;

/// Configure structured logging for the bot process.
///
/// Sets up a tracing-subscriber fmt layer writing to stdout. Call once at
/// process start, before any other work.
///
/// # Example
///
/// ```
/// blogbot::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
