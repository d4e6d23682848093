use crate::bot::transport::ReplyTransport;
use crate::bot::views::WelcomeView;
use std::sync::Arc;
use teloxide::{prelude::*, types::ChatId, utils::command::BotCommands, RequestError};
use tracing::info;

// Helper function to get user name from Message
fn get_user_name(msg: &Message) -> String {
    if let Some(ref user) = msg.from {
        if let Some(ref username) = user.username {
            return username.clone();
        }
        if !user.first_name.is_empty() {
            return user.first_name.clone();
        }
    }
    "Unknown".to_string()
}

/// Safe extraction of user ID from a message.
/// Returns 0 if the user information is missing.
#[must_use]
pub fn get_user_id_safe(msg: &Message) -> i64 {
    msg.from.as_ref().map_or(0, |u| u.id.0.cast_signed())
}

/// Supported commands for the bot
#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "Supported commands:")]
pub enum Command {
    /// Show the welcome message with the web app button.
    /// Carries the deep-link payload, empty for a bare `/start`.
    #[command(description = "Open BitJackz.")]
    Start(String),
}

/// Rewrite message text into the form `BotCommands::parse` expects.
///
/// The command token is lowercased and separated from its arguments by a
/// single space, whatever whitespace the user typed. Returns `None` for text
/// that is not a command.
#[must_use]
pub fn normalize_command_text(text: &str) -> Option<String> {
    if !text.starts_with('/') {
        return None;
    }

    let (head, rest) = text
        .split_once(char::is_whitespace)
        .map_or((text, ""), |(head, rest)| (head, rest.trim()));
    let head = head.to_lowercase();

    if rest.is_empty() {
        Some(head)
    } else {
        Some(format!("{head} {rest}"))
    }
}

/// Parse a command case-insensitively, accepting any whitespace before the payload.
#[must_use]
pub fn parse_command(text: &str, bot_username: &str) -> Option<Command> {
    let normalized = normalize_command_text(text)?;
    Command::parse(&normalized, bot_username).ok()
}

/// Reply to `/start` with the welcome text and the web app keyboard.
///
/// Sends exactly one message. Transport errors are returned unchanged.
///
/// # Errors
///
/// Returns the transport's `RequestError` if the message cannot be sent.
pub async fn start<T>(
    transport: &T,
    chat_id: ChatId,
    view: &WelcomeView,
) -> Result<(), RequestError>
where
    T: ReplyTransport + ?Sized,
{
    transport
        .send_with_keyboard(chat_id, view.text().to_string(), view.keyboard())
        .await
}

/// Dispatcher endpoint for parsed commands.
///
/// # Errors
///
/// Propagates send failures to the dispatcher's error handler.
pub async fn handle_command(
    msg: Message,
    cmd: Command,
    view: Arc<WelcomeView>,
    transport: Arc<dyn ReplyTransport>,
) -> Result<(), RequestError> {
    match cmd {
        Command::Start(payload) => {
            let user_id = get_user_id_safe(&msg);
            let user_name = get_user_name(&msg);
            info!(
                user_id,
                user_name = %user_name,
                payload = %payload,
                "User initiated /start command."
            );

            start(transport.as_ref(), msg.chat.id, &view).await
        }
    }
}
