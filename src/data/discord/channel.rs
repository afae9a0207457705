use dioxus_logger::tracing;

use crate::{
    data::discord::DirectoryService, error::generator::FetchError,
    model::discord::DiscordGuildChannel,
};

/// Repository listing guild channels from the directory service.
pub struct DiscordGuildChannelRepository<'a> {
    directory: &'a dyn DirectoryService,
}

impl<'a> DiscordGuildChannelRepository<'a> {
    /// Creates a new repository instance.
    ///
    /// # Arguments
    /// - `directory` - Directory service to list channels from
    pub fn new(directory: &'a dyn DirectoryService) -> Self {
        Self { directory }
    }

    /// Retrieves the channels of every given guild.
    ///
    /// Guilds are queried one after another in the given order. The first failing
    /// guild aborts the whole fetch and nothing is returned, so callers never see a
    /// partial union.
    ///
    /// # Arguments
    /// - `guild_ids` - Guilds to list channels from
    ///
    /// # Returns
    /// - `Ok(Vec<DiscordGuildChannel>)` - Channels of all guilds, in fetch order
    /// - `Err(FetchError)` - Listing failed for one of the guilds
    pub async fn get_by_guild_ids(
        &self,
        guild_ids: &[u64],
    ) -> Result<Vec<DiscordGuildChannel>, FetchError> {
        let mut channels = Vec::new();

        for &guild_id in guild_ids {
            tracing::info!("Fetching channels for guild {}", guild_id);

            let guild_channels = self
                .directory
                .guild_channels(guild_id)
                .await
                .map_err(|e| FetchError::new("channels", guild_id, e))?;

            tracing::info!(
                "Fetched {} channels for guild {}",
                guild_channels.len(),
                guild_id
            );

            channels.extend(guild_channels);
        }

        Ok(channels)
    }
}
