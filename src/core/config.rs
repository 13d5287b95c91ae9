use std::env;

/// Listen port used when `PORT` is absent or unparsable.
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub blog_id: String,
    pub blogger_api_key: String,
    pub telegram_token: String,
    pub public_host: String,
    pub port: u16,
}

impl AppConfig {
    /// Read the full configuration from the environment. The result is
    /// immutable for the lifetime of the process.
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            blog_id: env::var("BLOG_ID").map_err(|e| format!("BLOG_ID: {}", e))?,
            blogger_api_key: env::var("BLOGGER_API_KEY")
                .map_err(|e| format!("BLOGGER_API_KEY: {}", e))?,
            telegram_token: env::var("TELEGRAM_TOKEN")
                .map_err(|e| format!("TELEGRAM_TOKEN: {}", e))?,
            public_host: env::var("PUBLIC_HOST").map_err(|e| format!("PUBLIC_HOST: {}", e))?,
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
        })
    }

    /// Public URL Telegram should deliver updates to.
    #[must_use]
    pub fn webhook_url(&self) -> String {
        format!("https://{}/webhook", self.public_host)
    }
}
