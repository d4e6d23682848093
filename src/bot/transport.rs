use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{ChatId, InlineKeyboardMarkup};
use teloxide::RequestError;

/// Outbound side of a command reply.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReplyTransport: Send + Sync {
    /// Send `text` to `chat_id` with an inline keyboard attached.
    async fn send_with_keyboard(
        &self,
        chat_id: ChatId,
        text: String,
        markup: InlineKeyboardMarkup,
    ) -> Result<(), RequestError>;
}

/// Transport backed by the Telegram Bot API.
pub struct TelegramReplyTransport {
    bot: Bot,
}

impl TelegramReplyTransport {
    /// Wrap a bot client.
    pub const fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl ReplyTransport for TelegramReplyTransport {
    async fn send_with_keyboard(
        &self,
        chat_id: ChatId,
        text: String,
        markup: InlineKeyboardMarkup,
    ) -> Result<(), RequestError> {
        self.bot
            .send_message(chat_id, text)
            .reply_markup(markup)
            .await
            .map(|_| ())
    }
}
