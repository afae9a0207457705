//! Discord guild channel domain models.
//!
//! Provides the domain model for channels fetched from a guild, tracking channel
//! identity, kind, parent category and position for ordering. Serenity channels are
//! converted at the fetch boundary so the sorting and generation layers never touch
//! the API types directly.

use serenity::all::{ChannelType, GuildChannel};

/// Channel kinds the generator distinguishes.
///
/// Every kind Discord reports that is not listed here collapses into `Other` and is
/// dropped before generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelKind {
    Text,
    Voice,
    News,
    Forum,
    Category,
    Other,
}

/// Ordering used between sibling channels of different kinds.
const KIND_PRIORITY: [ChannelKind; 4] = [
    ChannelKind::Text,
    ChannelKind::News,
    ChannelKind::Forum,
    ChannelKind::Voice,
];

impl ChannelKind {
    /// Maps a Serenity channel type onto the kinds the generator knows about.
    pub fn from_serenity(kind: ChannelType) -> Self {
        match kind {
            ChannelType::Text => Self::Text,
            ChannelType::Voice => Self::Voice,
            ChannelType::News => Self::News,
            ChannelType::Forum => Self::Forum,
            ChannelType::Category => Self::Category,
            _ => Self::Other,
        }
    }

    /// Rank of this kind among generated non-category channels.
    ///
    /// # Returns
    /// - `Some(rank)` - Lower ranks sort first (text, news, forum, voice)
    /// - `None` - Categories and unsupported kinds, which never enter the channel enum
    pub fn priority(self) -> Option<usize> {
        KIND_PRIORITY.iter().position(|kind| *kind == self)
    }
}

/// Discord channel within a guild with hierarchy information.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscordGuildChannel {
    /// Discord channel ID as a u64.
    pub channel_id: u64,
    /// Discord guild ID as a u64.
    pub guild_id: u64,
    /// Channel display name.
    pub name: String,
    pub kind: ChannelKind,
    /// Parent category reference as reported by Discord, if any.
    ///
    /// The reference is not guaranteed to match a fetched category.
    pub parent_id: Option<u64>,
    /// Channel position among its siblings (for display ordering).
    pub position: i32,
}

impl DiscordGuildChannel {
    /// Converts a Serenity channel to a domain model at the fetch boundary.
    ///
    /// # Arguments
    /// - `guild_id` - Guild the channel was listed from
    /// - `channel` - Channel returned by the Discord API
    pub fn from_serenity(guild_id: u64, channel: &GuildChannel) -> Self {
        Self {
            channel_id: channel.id.get(),
            guild_id,
            name: channel.name.clone(),
            kind: ChannelKind::from_serenity(channel.kind),
            parent_id: channel.parent_id.map(|id| id.get()),
            position: channel.position as i32,
        }
    }

    pub fn is_category(&self) -> bool {
        self.kind == ChannelKind::Category
    }
}
