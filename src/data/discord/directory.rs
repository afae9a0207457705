//! Directory service seam.
//!
//! `DirectoryService` is the only way the generator talks to Discord. Production
//! code uses `SerenityDirectory`, which wraps Serenity's REST client; tests provide
//! their own implementation. Pagination and rate limiting are handled by Serenity.

use serenity::{all::GuildId, async_trait, http::Http};
use std::sync::Arc;

use crate::model::discord::{DiscordGuildChannel, DiscordGuildRole};

/// Per-guild listing operations of the directory service.
#[async_trait]
pub trait DirectoryService: Send + Sync {
    /// Lists every channel of a guild, categories included.
    async fn guild_channels(&self, guild_id: u64)
        -> Result<Vec<DiscordGuildChannel>, serenity::Error>;

    /// Lists every role of a guild, managed roles included.
    async fn guild_roles(&self, guild_id: u64) -> Result<Vec<DiscordGuildRole>, serenity::Error>;
}

/// Directory service backed by Discord's REST API.
pub struct SerenityDirectory {
    http: Arc<Http>,
}

impl SerenityDirectory {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl DirectoryService for SerenityDirectory {
    async fn guild_channels(
        &self,
        guild_id: u64,
    ) -> Result<Vec<DiscordGuildChannel>, serenity::Error> {
        let channels = self.http.get_channels(GuildId::new(guild_id)).await?;

        Ok(channels
            .iter()
            .map(|channel| DiscordGuildChannel::from_serenity(guild_id, channel))
            .collect())
    }

    async fn guild_roles(&self, guild_id: u64) -> Result<Vec<DiscordGuildRole>, serenity::Error> {
        let roles = self.http.get_guild_roles(GuildId::new(guild_id)).await?;

        Ok(roles
            .iter()
            .map(|role| DiscordGuildRole::from_serenity(guild_id, role))
            .collect())
    }
}
