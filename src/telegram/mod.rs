//! All Telegram-specific functionality

pub mod client;
pub mod message_formatter;

// Re-export main types for convenience
pub use client::{TelegramClient, build_send_message_payload, build_set_webhook_payload};
