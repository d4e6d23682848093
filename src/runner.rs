use crate::bot::handlers::{handle_command, parse_command, Command};
use crate::bot::resilient::retry_telegram_operation;
use crate::bot::transport::{ReplyTransport, TelegramReplyTransport};
use crate::bot::views::WelcomeView;
use crate::config::{RetryPolicy, Settings};
use anyhow::{Context, Result};
use std::sync::Arc;
use teloxide::dispatching::UpdateHandler;
use teloxide::prelude::*;
use teloxide::types::Me;
use teloxide::utils::command::BotCommands;
use tracing::{debug, info};

/// Run the bot: verify the token, publish commands, then long-poll until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the token is rejected or startup registration fails.
pub async fn run_bot(settings: Arc<Settings>) -> Result<()> {
    let view = Arc::new(WelcomeView::from_settings(&settings)?);
    let policy = RetryPolicy::default();

    let bot = Bot::new(settings.telegram_token.clone());

    verify_token(&bot, policy).await?;

    if settings.register_commands {
        register_commands(&bot, policy).await?;
    }
    if settings.web_app_menu_button {
        install_menu_button(&bot, &view, policy).await?;
    }

    let transport: Arc<dyn ReplyTransport> = Arc::new(TelegramReplyTransport::new(bot.clone()));
    let handler = setup_handler();

    info!("Bot is running...");

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![view, transport])
        .default_handler(|upd| async move {
            debug!(update_id = upd.id.0, "Ignoring update without a handler");
        })
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}

async fn verify_token(bot: &Bot, policy: RetryPolicy) -> Result<()> {
    let me = retry_telegram_operation(policy, || async move { bot.get_me().await })
        .await
        .context("Telegram rejected the bot token")?;
    info!("Authorized as @{}", me.username());
    Ok(())
}

async fn register_commands(bot: &Bot, policy: RetryPolicy) -> Result<()> {
    retry_telegram_operation(policy, || async move {
        bot.set_my_commands(Command::bot_commands()).await
    })
    .await
    .context("Failed to publish bot commands")?;
    info!("Bot commands published.");
    Ok(())
}

async fn install_menu_button(bot: &Bot, view: &WelcomeView, policy: RetryPolicy) -> Result<()> {
    retry_telegram_operation(policy, || async move {
        bot.set_chat_menu_button()
            .menu_button(view.menu_button())
            .await
    })
    .await
    .context("Failed to install web app menu button")?;
    info!("Web app menu button installed for {}", view.url());
    Ok(())
}

/// Update tree: messages whose text is a `/start` command reach [`handle_command`].
///
/// Needs `Update`, `Me`, `Arc<WelcomeView>` and `Arc<dyn ReplyTransport>` in the
/// dependency map. The dispatcher supplies the first two.
#[must_use]
pub fn setup_handler() -> UpdateHandler<teloxide::RequestError> {
    Update::filter_message()
        .filter_map(|msg: Message, me: Me| {
            let bot_username = me.user.username.unwrap_or_default();
            msg.text().and_then(|text| parse_command(text, &bot_username))
        })
        .endpoint(handle_command)
}
