//! Discord guild role domain models.
//!
//! Provides the domain model for roles fetched from a guild, tracking role identity,
//! hierarchy position and whether an integration owns the role.

use serenity::all::Role;

/// Discord role within a guild with hierarchy position.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscordGuildRole {
    /// Discord role ID as a u64.
    pub role_id: u64,
    /// Discord guild ID as a u64.
    pub guild_id: u64,
    /// Role display name.
    pub name: String,
    /// Role position in the guild's role hierarchy (higher = more important).
    pub position: i32,
    /// Whether the role is owned by a bot or integration.
    ///
    /// Managed roles cannot be assigned by members and are never generated.
    pub managed: bool,
}

impl DiscordGuildRole {
    /// Converts a Serenity role to a domain model at the fetch boundary.
    ///
    /// A role counts as managed when Discord flags it as such or when its tags point
    /// at a bot or an integration.
    ///
    /// # Arguments
    /// - `guild_id` - Guild the role was listed from
    /// - `role` - Role returned by the Discord API
    pub fn from_serenity(guild_id: u64, role: &Role) -> Self {
        Self {
            role_id: role.id.get(),
            guild_id,
            name: role.name.clone(),
            position: role.position as i32,
            managed: role.managed
                || role.tags.bot_id.is_some()
                || role.tags.integration_id.is_some(),
        }
    }
}
