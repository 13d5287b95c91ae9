//! Blogger API client module
//!
//! Encapsulates the posts-listing call against the Blogger v3 API,
//! authenticated by API key.

use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::core::models::Post;
use crate::errors::BotError;

const BLOGGER_API_BASE: &str = "https://www.googleapis.com/blogger/v3";

/// Fixed timeout applied to every Blogger call. A call that exceeds it is
/// final for the invocation; there are no retries.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

static HTTP_CLIENT: std::sync::LazyLock<Client> = std::sync::LazyLock::new(|| {
    Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .unwrap_or_else(|_| Client::new())
});

/// Response from the Blogger posts listing.
///
/// Blogger reports functional failures as an `error` object inside an
/// HTTP-success body, so both fields are optional and checked explicitly.
#[derive(Debug, Deserialize)]
struct PostListResponse {
    items: Option<Vec<Post>>,
    error: Option<ApiErrorPayload>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorPayload {
    message: Option<String>,
}

impl PostListResponse {
    /// Convert the raw response into the item list, surfacing an embedded
    /// error payload instead of silently reading zero items.
    fn into_items(self) -> Result<Vec<Post>, BotError> {
        if let Some(error) = self.error {
            return Err(BotError::BloggerError(
                error.message.unwrap_or_else(|| "Blogger API Error".to_string()),
            ));
        }
        Ok(self.items.unwrap_or_default())
    }
}

/// Blogger API client for a single blog.
pub struct BloggerClient {
    blog_id: String,
    api_key: String,
}

impl BloggerClient {
    #[must_use]
    pub fn new(blog_id: String, api_key: String) -> Self {
        Self { blog_id, api_key }
    }

    /// Fetch the blog's posts, optionally filtered server-side by label
    /// equality.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails, Blogger responds with a
    /// non-success status, or the body carries an `error` payload.
    pub async fn list_posts(&self, label: Option<&str>) -> Result<Vec<Post>, BotError> {
        let url = format!("{}/blogs/{}/posts", BLOGGER_API_BASE, self.blog_id);

        let mut query: Vec<(&str, &str)> = vec![("key", self.api_key.as_str())];
        if let Some(label) = label {
            query.push(("labels", label));
        }

        let resp = HTTP_CLIENT.get(&url).query(&query).send().await?;

        if !resp.status().is_success() {
            return Err(BotError::BloggerError(format!(
                "posts listing HTTP {}",
                resp.status()
            )));
        }

        let body: PostListResponse = resp
            .json()
            .await
            .map_err(|e| BotError::BloggerError(format!("posts listing JSON parse error: {}", e)))?;

        body.into_items()
    }
}
