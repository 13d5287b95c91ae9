use std::error::Error;

use blogbot::errors::BotError;

#[test]
fn test_bot_error_implements_error_trait() {
    // Verify BotError implements the Error trait
    fn assert_error<T: Error>(_: &T) {}

    let error = BotError::ParseError("test error".to_string());
    assert_error(&error);
}

#[test]
fn test_bot_error_display() {
    // Verify Display implementation works correctly
    let error = BotError::BloggerError("API failed".to_string());
    assert_eq!(format!("{error}"), "Failed to access Blogger API: API failed");

    let error = BotError::TelegramError("chat not found".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to access Telegram API: chat not found"
    );

    let error = BotError::HttpError("Connection error".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to send HTTP request: Connection error"
    );

    let error = BotError::ParseError("no chat".to_string());
    assert_eq!(format!("{error}"), "Failed to parse webhook update: no chat");
}

#[test]
fn test_bot_error_from_conversions() {
    // Test conversion from anyhow::Error
    let err = anyhow::anyhow!("test error");
    let bot_err: BotError = err.into();

    match bot_err {
        BotError::BloggerError(msg) => assert!(msg.contains("test error")),
        _ => panic!("Unexpected error type"),
    }

    // We can't easily construct a reqwest::Error directly, but we can verify
    // that the From<reqwest::Error> trait is implemented by checking
    // that our conversion function compiles
    #[allow(unused)]
    #[allow(clippy::items_after_statements)]
    fn _check_reqwest_conversion(err: reqwest::Error) -> BotError {
        // This function is never called, it just verifies the conversion exists
        BotError::from(err)
    }
}
