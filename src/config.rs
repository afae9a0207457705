use dioxus_logger::tracing::Level;
use std::path::PathBuf;

use crate::{error::config::ConfigError, util::parse::parse_guild_ids};

const DEFAULT_OUTPUT_DIR: &str = ".";
const DEFAULT_LOG_LEVEL: Level = Level::INFO;

pub struct Config {
    pub discord_bot_token: String,

    /// Guilds to generate from, without duplicates, in configured order.
    pub guild_ids: Vec<u64>,

    pub output_dir: PathBuf,
    pub log_level: Level,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// `DISCORD_GUILD_IDS` takes precedence; `DISCORD_DEV_GUILD_IDS` is used only
    /// when it is unset or lists no guild.
    ///
    /// # Returns
    /// - `Ok(Config)` - Every required variable is set and valid
    /// - `Err(ConfigError)` - A variable is missing or invalid, or no guild is configured
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads configuration through a variable lookup function.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let discord_bot_token = lookup("DISCORD_BOT_TOKEN")
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?;

        let mut guild_ids = Vec::new();
        for var in ["DISCORD_GUILD_IDS", "DISCORD_DEV_GUILD_IDS"] {
            if let Some(value) = lookup(var) {
                guild_ids = parse_guild_ids(var, &value)?;
            }
            if !guild_ids.is_empty() {
                break;
            }
        }
        if guild_ids.is_empty() {
            return Err(ConfigError::NoGuilds);
        }

        let output_dir = lookup("GENERATOR_OUTPUT_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

        let log_level = match lookup("LOG_LEVEL").filter(|level| !level.trim().is_empty()) {
            Some(level) => level
                .trim()
                .parse::<Level>()
                .map_err(|_| ConfigError::InvalidLogLevel(level))?,
            None => DEFAULT_LOG_LEVEL,
        };

        Ok(Self {
            discord_bot_token,
            guild_ids,
            output_dir,
            log_level,
        })
    }
}
