//! View layer for bot UI components
//!
//! Contains the welcome message and the web app keyboard.

use crate::config::{Settings, SettingsError};
use reqwest::Url;
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup, MenuButton, WebAppInfo};

/// Everything the `/start` reply is made of.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WelcomeView {
    text: String,
    button_text: String,
    url: Url,
}

impl WelcomeView {
    /// Create a view from its parts.
    #[must_use]
    pub fn new(text: impl Into<String>, button_text: impl Into<String>, url: Url) -> Self {
        Self {
            text: text.into(),
            button_text: button_text.into(),
            url,
        }
    }

    /// Build the view from loaded settings.
    ///
    /// # Errors
    ///
    /// Returns `InvalidWebAppUrl` if the configured URL does not parse.
    pub fn from_settings(settings: &Settings) -> Result<Self, SettingsError> {
        Ok(Self::new(
            settings.welcome_text.clone(),
            settings.web_app_button_text.clone(),
            settings.web_app_url()?,
        ))
    }

    /// Message text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Web app target.
    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }

    fn web_app(&self) -> WebAppInfo {
        WebAppInfo {
            url: self.url.clone(),
        }
    }

    /// Single-row keyboard with one button opening the web app.
    #[must_use]
    pub fn keyboard(&self) -> InlineKeyboardMarkup {
        InlineKeyboardMarkup::new(vec![vec![InlineKeyboardButton::web_app(
            self.button_text.clone(),
            self.web_app(),
        )]])
    }

    /// Chat menu button opening the same web app.
    #[must_use]
    pub fn menu_button(&self) -> MenuButton {
        MenuButton::WebApp {
            text: self.button_text.clone(),
            web_app: self.web_app(),
        }
    }
}
