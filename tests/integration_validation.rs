use anyhow::{Context, Result};
use bitjackz_bot::bot::resilient::retry_telegram_operation;
use bitjackz_bot::config::{RetryPolicy, Settings};
use dotenvy::dotenv;
use std::path::Path;
use teloxide::prelude::*;
use tracing::info;
use tracing_subscriber::{prelude::*, EnvFilter};

#[tokio::test]
#[ignore = "Requires real credentials"]
async fn test_credentials_validation() -> Result<()> {
    load_dotenv();
    init_tracing();

    info!("Starting integration test for credentials validation...");
    let settings = Settings::new().context("TELEGRAM_TOKEN missing (check .env file)")?;

    let bot = Bot::new(settings.telegram_token.clone());
    let client = &bot;
    let me = retry_telegram_operation(RetryPolicy::default(), || async move {
        client.get_me().await
    })
    .await
    .context("Telegram rejected the token")?;

    info!("Token belongs to @{}", me.username());
    assert!(me.user.is_bot);

    info!("Credentials validation test passed successfully.");
    Ok(())
}

fn load_dotenv() {
    let env_path = Path::new("../.env");
    if env_path.exists() {
        let _ = dotenvy::from_path(env_path);
    } else {
        dotenv().ok();
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
