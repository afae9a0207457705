use dioxus_logger::tracing;

use crate::{
    data::discord::DirectoryService, error::generator::FetchError,
    model::discord::DiscordGuildRole,
};

/// Repository listing guild roles from the directory service.
pub struct DiscordGuildRoleRepository<'a> {
    directory: &'a dyn DirectoryService,
}

impl<'a> DiscordGuildRoleRepository<'a> {
    /// Creates a new repository instance.
    ///
    /// # Arguments
    /// - `directory` - Directory service to list roles from
    pub fn new(directory: &'a dyn DirectoryService) -> Self {
        Self { directory }
    }

    /// Retrieves the roles of every given guild.
    ///
    /// Same all-or-nothing behavior as the channel repository: the first failing
    /// guild aborts the fetch.
    ///
    /// # Arguments
    /// - `guild_ids` - Guilds to list roles from
    ///
    /// # Returns
    /// - `Ok(Vec<DiscordGuildRole>)` - Roles of all guilds, in fetch order
    /// - `Err(FetchError)` - Listing failed for one of the guilds
    pub async fn get_by_guild_ids(
        &self,
        guild_ids: &[u64],
    ) -> Result<Vec<DiscordGuildRole>, FetchError> {
        let mut roles = Vec::new();

        for &guild_id in guild_ids {
            tracing::info!("Fetching roles for guild {}", guild_id);

            let guild_roles = self
                .directory
                .guild_roles(guild_id)
                .await
                .map_err(|e| FetchError::new("roles", guild_id, e))?;

            tracing::info!("Fetched {} roles for guild {}", guild_roles.len(), guild_id);

            roles.extend(guild_roles);
        }

        Ok(roles)
    }
}
