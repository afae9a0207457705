use crate::model::discord::{ChannelKind, DiscordGuildChannel, DiscordGuildRole};
use crate::service::discord::{filter_and_sort_roles, resolve_parent, sort_channels};

mod resolve_parent;

const GUILD_ID: u64 = 900;

fn role(role_id: u64, name: &str, position: i32, managed: bool) -> DiscordGuildRole {
    DiscordGuildRole {
        role_id,
        guild_id: GUILD_ID,
        name: name.to_string(),
        position,
        managed,
    }
}

fn channel(
    channel_id: u64,
    name: &str,
    kind: ChannelKind,
    parent_id: Option<u64>,
    position: i32,
) -> DiscordGuildChannel {
    DiscordGuildChannel {
        channel_id,
        guild_id: GUILD_ID,
        name: name.to_string(),
        kind,
        parent_id,
        position,
    }
}

fn category(channel_id: u64, name: &str, position: i32) -> DiscordGuildChannel {
    channel(channel_id, name, ChannelKind::Category, None, position)
}

fn names(channels: &[DiscordGuildChannel]) -> Vec<&str> {
    channels.iter().map(|c| c.name.as_str()).collect()
}
