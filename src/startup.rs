use dioxus_logger::tracing::Level;
use serenity::http::Http;
use std::sync::Arc;

use crate::{config::Config, data::discord::SerenityDirectory, error::AppError};

/// Installs the global tracing subscriber.
///
/// # Arguments
/// - `level` - Most verbose level that is printed
///
/// # Returns
/// - `Ok(())` - Logger installed
/// - `Err(AppError::LoggerErr)` - A global subscriber was already set
pub fn init_logger(level: Level) -> Result<(), AppError> {
    dioxus_logger::init(level).map_err(|e| AppError::LoggerErr(e.to_string()))
}

/// Creates the directory service backed by the Discord REST API.
///
/// No request is made here; the token is first used by the first fetch.
///
/// # Arguments
/// - `config` - Application configuration containing the bot token
///
/// # Returns
/// - `SerenityDirectory` - Directory service authenticated with the bot token
pub fn setup_directory(config: &Config) -> SerenityDirectory {
    let http = Arc::new(Http::new(&config.discord_bot_token));
    SerenityDirectory::new(http)
}
