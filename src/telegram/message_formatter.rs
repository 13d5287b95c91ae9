//! Reply texts sent back to the chat.
//!
//! Kept separate from the transport so the exact wording and the delivery
//! plan (header first, capped item list) stay testable without network.

use crate::core::models::Post;

/// Reply when the inbound message carries no keyword.
pub const EMPTY_KEYWORD_PROMPT: &str = "ℹ️ Please send a search keyword";

/// Reply when neither exact nor fuzzy search finds anything.
pub const NO_MATCHES_MESSAGE: &str = "❌ No matches found. Try different keywords.";

/// Maximum number of post messages delivered per invocation, to prevent
/// flooding the chat.
pub const RESULT_LIMIT: usize = 5;

/// Which search phase produced the results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Exact,
    Related,
}

/// Header announcing the match count. `count` is the full match count, not
/// the capped delivery count.
#[must_use]
pub fn format_match_header(count: usize, kind: MatchKind) -> String {
    match kind {
        MatchKind::Exact => format!("🔍 Found {} exact matches:", count),
        MatchKind::Related => format!("🎯 Found {} related matches:", count),
    }
}

/// One message per delivered post: bold title, then the bare URL.
#[must_use]
pub fn format_post_message(post: &Post) -> String {
    format!("📖 *{}*\n{}", post.title, post.url)
}

/// Error notification for the catch-all handler path.
#[must_use]
pub fn format_error_message(error: &impl std::fmt::Display) -> String {
    format!("⚠️ Error: {}", error)
}

/// Full ordered reply sequence for a non-empty result set: the count header
/// followed by at most [`RESULT_LIMIT`] post messages in search order.
#[must_use]
pub fn build_result_replies(posts: &[Post], kind: MatchKind) -> Vec<String> {
    let mut replies = Vec::with_capacity(1 + posts.len().min(RESULT_LIMIT));
    replies.push(format_match_header(posts.len(), kind));
    replies.extend(posts.iter().take(RESULT_LIMIT).map(format_post_message));
    replies
}
