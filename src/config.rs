//! Configuration and settings management
//!
//! Loads settings from optional config files and environment variables.

use config::{Config, ConfigError, Environment, File};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Web app opened by the welcome button when nothing else is configured.
pub const DEFAULT_WEB_APP_URL: &str = "https://your-domain.com";
/// Text sent in reply to `/start`.
pub const DEFAULT_WELCOME_TEXT: &str = "Welcome to BitJackz!";
/// Label of the inline web app button.
pub const DEFAULT_WEB_APP_BUTTON_TEXT: &str = "🎰 Open BitJackz";

/// Initial delay before retrying a failed Telegram API call at startup.
pub const TELEGRAM_API_INITIAL_BACKOFF_MS: u64 = 500;
/// Upper bound for the retry delay.
pub const TELEGRAM_API_MAX_BACKOFF_MS: u64 = 10_000;
/// Number of retries after the first failed attempt.
pub const TELEGRAM_API_MAX_RETRIES: usize = 3;

/// Errors raised while loading or validating [`Settings`].
#[derive(Debug, Error)]
pub enum SettingsError {
    /// `TELEGRAM_TOKEN` is absent or blank.
    #[error("TELEGRAM_TOKEN is not set")]
    MissingToken,
    /// The configured web app URL cannot be opened by Telegram.
    #[error("invalid web app url '{url}': {reason}")]
    InvalidWebAppUrl {
        /// Raw configured value
        url: String,
        /// What is wrong with it
        reason: String,
    },
    /// Underlying source could not be read or deserialized.
    #[error("failed to load configuration: {0}")]
    Load(#[from] ConfigError),
}

/// Application settings loaded from environment variables
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Settings {
    /// Telegram Bot API token
    #[serde(default)]
    pub telegram_token: String,

    /// Address of the web app opened by the welcome button
    #[serde(default = "default_web_app_url")]
    pub web_app_url: String,

    /// Reply text for `/start`
    #[serde(default = "default_welcome_text")]
    pub welcome_text: String,

    /// Label of the web app button
    #[serde(default = "default_web_app_button_text")]
    pub web_app_button_text: String,

    /// Publish the command list to Telegram on startup
    #[serde(default = "default_true")]
    pub register_commands: bool,

    /// Install the web app as the chat menu button on startup
    #[serde(default)]
    pub web_app_menu_button: bool,
}

fn default_web_app_url() -> String {
    DEFAULT_WEB_APP_URL.to_string()
}

fn default_welcome_text() -> String {
    DEFAULT_WELCOME_TEXT.to_string()
}

fn default_web_app_button_text() -> String {
    DEFAULT_WEB_APP_BUTTON_TEXT.to_string()
}

const fn default_true() -> bool {
    true
}

/// Build the layered configuration source set.
///
/// # Errors
///
/// Returns a `ConfigError` if a present config file cannot be parsed.
pub fn build_config() -> Result<Config, ConfigError> {
    let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

    Config::builder()
        .add_source(File::with_name("config/default").required(false))
        .add_source(File::with_name(&format!("config/{run_mode}")).required(false))
        // Not checked into git
        .add_source(File::with_name("config/local").required(false))
        // Eg.. `APP_WEB_APP_URL=https://... ./target/app`
        .add_source(Environment::with_prefix("APP").separator("__"))
        // UPPER_SNAKE_CASE maps to snake_case, empty values count as unset
        .add_source(Environment::default().ignore_empty(true))
        .build()
}

impl Settings {
    /// Create new settings by loading from environment and files
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use bitjackz_bot::config::Settings;
    ///
    /// let settings = Settings::new().expect("Failed to load configuration");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns a `SettingsError` if loading fails or the values are unusable.
    pub fn new() -> Result<Self, SettingsError> {
        Self::from_config(build_config()?)
    }

    /// Deserialize and validate settings from an already built source set.
    ///
    /// # Errors
    ///
    /// Returns `MissingToken` for a blank token and `InvalidWebAppUrl` when the
    /// button target is not an absolute http(s) URL.
    pub fn from_config(config: Config) -> Result<Self, SettingsError> {
        let mut settings: Self = config.try_deserialize()?;

        settings.telegram_token = settings.telegram_token.trim().to_string();
        if settings.telegram_token.is_empty() {
            return Err(SettingsError::MissingToken);
        }

        settings.web_app_url()?;
        Ok(settings)
    }

    /// Parsed web app URL.
    ///
    /// # Errors
    ///
    /// Returns `InvalidWebAppUrl` if the value does not parse or is not http(s).
    pub fn web_app_url(&self) -> Result<Url, SettingsError> {
        let invalid = |reason: String| SettingsError::InvalidWebAppUrl {
            url: self.web_app_url.clone(),
            reason,
        };

        let url = Url::parse(self.web_app_url.trim()).map_err(|e| invalid(e.to_string()))?;
        match url.scheme() {
            "https" | "http" => Ok(url),
            other => Err(invalid(format!("unsupported scheme '{other}'"))),
        }
    }
}

/// Backoff parameters for Telegram API calls made during startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// First delay
    pub initial_backoff: Duration,
    /// Delay ceiling
    pub max_backoff: Duration,
    /// Retries after the first attempt
    pub max_retries: usize,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            initial_backoff: Duration::from_millis(TELEGRAM_API_INITIAL_BACKOFF_MS),
            max_backoff: Duration::from_millis(TELEGRAM_API_MAX_BACKOFF_MS),
            max_retries: TELEGRAM_API_MAX_RETRIES,
        }
    }
}
