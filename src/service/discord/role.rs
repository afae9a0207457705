use dioxus_logger::tracing;

use crate::model::discord::DiscordGuildRole;

/// Filters and orders fetched roles for enum generation.
///
/// Drops every role managed by a bot or integration, since those cannot be assigned
/// by members, then orders the remaining roles from the top of the hierarchy down.
/// The sort is stable: roles sharing a position keep their fetch order.
///
/// # Arguments
/// - `roles` - Roles as fetched from every configured guild
///
/// # Returns
/// - `Vec<DiscordGuildRole>` - Assignable roles, highest position first
pub fn filter_and_sort_roles(mut roles: Vec<DiscordGuildRole>) -> Vec<DiscordGuildRole> {
    roles.retain(|role| {
        if role.managed {
            tracing::debug!(
                "Skipping managed role {} ({}) in guild {}",
                role.name,
                role.role_id,
                role.guild_id
            );
        }
        !role.managed
    });

    roles.sort_by(|a, b| b.position.cmp(&a.position));

    roles
}
