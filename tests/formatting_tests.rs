use blogbot::core::models::Post;
use blogbot::errors::BotError;
use blogbot::telegram::message_formatter::{
    EMPTY_KEYWORD_PROMPT, MatchKind, NO_MATCHES_MESSAGE, RESULT_LIMIT, build_result_replies,
    format_error_message, format_match_header, format_post_message,
};

/// Tests for the reply formatting logic
/// These verify the exact texts delivered to the chat and the shape of the
/// delivery plan (header first, capped item list).

fn post(title: &str, url: &str) -> Post {
    Post {
        title: title.to_string(),
        url: url.to_string(),
        labels: Vec::new(),
    }
}

#[test]
fn test_exact_match_header_format() {
    let header = format_match_header(2, MatchKind::Exact);

    assert_eq!(header, "🔍 Found 2 exact matches:");
}

#[test]
fn test_related_match_header_format() {
    let header = format_match_header(1, MatchKind::Related);

    assert_eq!(header, "🎯 Found 1 related matches:");
}

#[test]
fn test_post_message_format() {
    let message = format_post_message(&post("Intro to Rust", "https://blog.example.com/rust"));

    assert_eq!(message, "📖 *Intro to Rust*\nhttps://blog.example.com/rust");
}

#[test]
fn test_error_message_format() {
    let error = BotError::BloggerError("Invalid blog ID".to_string());
    let message = format_error_message(&error);

    assert_eq!(
        message,
        "⚠️ Error: Failed to access Blogger API: Invalid blog ID"
    );
}

#[test]
fn test_result_replies_header_precedes_items() {
    let posts = vec![post("A", "https://b.example/a"), post("B", "https://b.example/b")];

    let replies = build_result_replies(&posts, MatchKind::Exact);

    assert_eq!(replies.len(), 3);
    assert_eq!(replies[0], "🔍 Found 2 exact matches:");
    assert_eq!(replies[1], "📖 *A*\nhttps://b.example/a");
    assert_eq!(replies[2], "📖 *B*\nhttps://b.example/b");
}

#[test]
fn test_result_replies_capped_at_limit() {
    // 8 matches must never produce more than header + RESULT_LIMIT messages
    let posts: Vec<Post> = (0..8)
        .map(|i| post(&format!("P{i}"), &format!("https://b.example/{i}")))
        .collect();

    let replies = build_result_replies(&posts, MatchKind::Related);

    assert_eq!(
        replies.len(),
        1 + RESULT_LIMIT,
        "at most {RESULT_LIMIT} item messages may be delivered"
    );
    // The header still reports the full match count
    assert_eq!(replies[0], "🎯 Found 8 related matches:");
}

#[test]
fn test_result_replies_preserve_search_order() {
    let posts = vec![
        post("third", "https://b.example/3"),
        post("first", "https://b.example/1"),
        post("second", "https://b.example/2"),
    ];

    let replies = build_result_replies(&posts, MatchKind::Exact);

    assert!(replies[1].contains("third"), "item order must follow search output order");
    assert!(replies[2].contains("first"));
    assert!(replies[3].contains("second"));
}

#[test]
fn test_prompt_and_no_match_texts() {
    assert_eq!(EMPTY_KEYWORD_PROMPT, "ℹ️ Please send a search keyword");
    assert_eq!(NO_MATCHES_MESSAGE, "❌ No matches found. Try different keywords.");
}
