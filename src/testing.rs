//! Fixtures shared by unit tests.

use crate::bot::views::WelcomeView;
use reqwest::Url;
use teloxide::types::{Me, Message, Update};

/// Chat the fixture messages are sent from.
pub const CHAT_ID: i64 = 218_485_655;

/// Username the fixture bot runs under.
pub const BOT_USERNAME: &str = "bitjackz_bot";

fn message_json(text: &str) -> serde_json::Value {
    serde_json::json!({
        "message_id": 6557,
        "from": {
            "id": CHAT_ID,
            "is_bot": false,
            "first_name": "Waffle",
            "username": "waffle",
            "language_code": "en"
        },
        "chat": {
            "id": CHAT_ID,
            "first_name": "Waffle",
            "username": "waffle",
            "type": "private"
        },
        "date": 1_569_518_342,
        "text": text
    })
}

/// Private text message from a regular user.
pub fn text_message(text: &str) -> Message {
    serde_json::from_value(message_json(text)).expect("fixture message deserializes")
}

/// Update carrying a new text message.
pub fn message_update(text: &str) -> Update {
    // `Update` only deserializes its kind correctly from text, not from a `Value`.
    serde_json::from_str(&serde_json::json!({
        "update_id": 892_252_934,
        "message": message_json(text)
    }).to_string())
    .expect("fixture update deserializes")
}

/// Update carrying an edit of a text message.
pub fn edited_message_update(text: &str) -> Update {
    serde_json::from_str(&serde_json::json!({
        "update_id": 892_252_935,
        "edited_message": message_json(text)
    }).to_string())
    .expect("fixture update deserializes")
}

/// Identity returned by `getMe` for the fixture bot.
pub fn bot_me() -> Me {
    serde_json::from_value(serde_json::json!({
        "id": 5_000_000_001_u64,
        "is_bot": true,
        "first_name": "BitJackz",
        "username": BOT_USERNAME,
        "can_join_groups": true,
        "can_read_all_group_messages": false,
        "supports_inline_queries": false,
        "can_connect_to_business": false,
        "has_main_web_app": false
    }))
    .expect("fixture me deserializes")
}

/// View with the stock BitJackz values.
pub fn welcome_view() -> WelcomeView {
    WelcomeView::new(
        "Welcome to BitJackz!",
        "🎰 Open BitJackz",
        Url::parse("https://your-domain.com").expect("valid url"),
    )
}
