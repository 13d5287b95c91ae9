//! Two-phase label search over the blog's posts.
//!
//! Exact mode asks Blogger to filter by label equality server-side and
//! returns the item list verbatim. Fuzzy mode fetches the whole collection
//! once and matches labels client-side: the keyword must appear as a
//! substring of the space-joined label set, or be within the similarity
//! cutoff of at least one individual label.

use std::collections::HashMap;

use tracing::warn;

use crate::blogger::BloggerClient;
use crate::core::models::Post;

/// Minimum normalized edit-similarity for a label to count as a fuzzy match.
pub const SIMILARITY_CUTOFF: f64 = 0.6;

/// Search the blog for posts matching `keyword`.
///
/// The keyword must already be lower-cased and trimmed, and non-empty; the
/// webhook handler rejects empty keywords before calling.
///
/// Any failure contacting Blogger degrades to an empty result: search never
/// raises to the caller.
pub async fn search_posts(client: &BloggerClient, keyword: &str, exact_match: bool) -> Vec<Post> {
    let result = if exact_match {
        client.list_posts(Some(keyword)).await
    } else {
        client.list_posts(None).await.map(|posts| fuzzy_match_posts(keyword, posts))
    };

    match result {
        Ok(posts) => posts,
        Err(e) => {
            warn!("Blogger API request failed: {}", e);
            Vec::new()
        }
    }
}

/// Client-side fuzzy fallback over the full post collection.
///
/// Matched posts are deduplicated by url. Ordering is deterministic per
/// input set (first-insertion order of each url) but carries no relevance
/// ranking.
#[must_use]
pub fn fuzzy_match_posts(keyword: &str, posts: Vec<Post>) -> Vec<Post> {
    let matched = posts.into_iter().filter(|post| {
        let labels: Vec<String> = post
            .labels
            .iter()
            .map(|label| label.trim().to_lowercase())
            .collect();

        labels.join(" ").contains(keyword)
            || labels
                .iter()
                .any(|label| strsim::normalized_levenshtein(keyword, label) >= SIMILARITY_CUTOFF)
    });

    dedup_by_url(matched)
}

/// Collapse posts sharing a url into one entry: last-seen value, position of
/// the first occurrence.
fn dedup_by_url(posts: impl IntoIterator<Item = Post>) -> Vec<Post> {
    let mut index_by_url: HashMap<String, usize> = HashMap::new();
    let mut deduped: Vec<Post> = Vec::new();

    for post in posts {
        match index_by_url.get(&post.url) {
            Some(&i) => deduped[i] = post,
            None => {
                index_by_url.insert(post.url.clone(), deduped.len());
                deduped.push(post);
            }
        }
    }

    deduped
}
