#![deny(missing_docs)]
//! Telegram bot that greets users with a button opening the BitJackz web app.

/// Telegram-specific handlers and views.
pub mod bot;
/// Settings loaded from config files and environment.
pub mod config;
/// Tracing setup with token redaction.
pub mod logging;
/// Bot runtime entrypoint.
pub mod runner;

#[cfg(test)]
mod testing;
