use bitjackz_bot::config::{Settings, SettingsError};
use std::env;

// Single test so the environment is not mutated concurrently
#[test]
fn test_config_env_loading() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Token from the plain environment variable, defaults for the rest
    env::set_var("TELEGRAM_TOKEN", "123456:dummy_token");
    env::remove_var("WEB_APP_URL");

    let settings = Settings::new()?;
    assert_eq!(settings.telegram_token, "123456:dummy_token");
    assert_eq!(settings.web_app_url, "https://your-domain.com");

    // 2. Upper-case variables map onto snake_case fields
    env::set_var("WEB_APP_URL", "https://mapping.test/casino");
    env::set_var("WEB_APP_MENU_BUTTON", "true");

    let settings = Settings::new()?;
    assert_eq!(settings.web_app_url, "https://mapping.test/casino");
    assert!(settings.web_app_menu_button);

    env::remove_var("WEB_APP_URL");
    env::remove_var("WEB_APP_MENU_BUTTON");

    // 3. Empty token counts as unset
    env::set_var("TELEGRAM_TOKEN", "");
    assert!(matches!(Settings::new(), Err(SettingsError::MissingToken)));

    env::remove_var("TELEGRAM_TOKEN");
    assert!(matches!(Settings::new(), Err(SettingsError::MissingToken)));

    Ok(())
}
