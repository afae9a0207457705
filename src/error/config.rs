use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The generator requires this environment variable to be defined. Check the
    /// `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// A guild ID in a comma-separated list is not a non-zero u64.
    #[error("Invalid guild ID '{value}' in {var}")]
    InvalidGuildId {
        /// Environment variable the list was read from
        var: String,
        /// The offending list entry
        value: String,
    },

    /// Neither `DISCORD_GUILD_IDS` nor `DISCORD_DEV_GUILD_IDS` lists a guild.
    #[error("At least one guild must be provided in DISCORD_GUILD_IDS or DISCORD_DEV_GUILD_IDS")]
    NoGuilds,

    /// `LOG_LEVEL` is not a tracing level name.
    #[error("Invalid log level '{0}', expected one of trace, debug, info, warn, error")]
    InvalidLogLevel(String),
}
