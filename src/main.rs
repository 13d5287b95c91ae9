use std::sync::Arc;

use tracing::{info, warn};

use blogbot::blogger::BloggerClient;
use blogbot::core::config::AppConfig;
use blogbot::telegram::TelegramClient;
use blogbot::webhook::{AppState, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    blogbot::setup_logging();

    let config = AppConfig::from_env().map_err(|e| anyhow::anyhow!("Config error: {}", e))?;

    let telegram = TelegramClient::new(config.telegram_token.clone());

    // Register the webhook with Telegram. Failure is not fatal: the server
    // still comes up and registration can be repaired out of band.
    let webhook_url = config.webhook_url();
    match telegram.set_webhook(&webhook_url).await {
        Ok(()) => info!("Webhook set to: {}", webhook_url),
        Err(e) => warn!("Failed to set webhook: {}", e),
    }

    let blogger = BloggerClient::new(config.blog_id.clone(), config.blogger_api_key.clone());
    let state = Arc::new(AppState { telegram, blogger });

    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    info!("Listening on 0.0.0.0:{}", config.port);
    axum::serve(listener, app).await?;

    Ok(())
}
