/// Command parsing and the `/start` responder
pub mod handlers;
/// Retry for Telegram API calls made during startup
pub mod resilient;
/// Outbound message seam
pub mod transport;
/// Welcome message and web app keyboard
pub mod views;
