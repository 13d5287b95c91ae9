use axum::{Router, routing::post};
use std::sync::Arc;

use crate::blogger::BloggerClient;
use crate::telegram::TelegramClient;

pub mod handler;

/// Shared, immutable per-process state. Each webhook invocation runs
/// independently against it; nothing here is mutated after startup.
pub struct AppState {
    pub telegram: TelegramClient,
    pub blogger: BloggerClient,
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/webhook", post(handler::webhook_handler))
        .with_state(state)
}
