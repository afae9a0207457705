use dioxus_logger::tracing;
use std::{cmp::Ordering, collections::HashMap};

use crate::model::discord::DiscordGuildChannel;

/// Channels split into categories and generated channels, both in final order.
#[derive(Debug, Clone, PartialEq)]
pub struct SortedChannels {
    /// Category channels, lowest position first.
    pub categories: Vec<DiscordGuildChannel>,
    /// Text, news, forum and voice channels in generation order.
    pub channels: Vec<DiscordGuildChannel>,
}

/// Partitions, filters and orders fetched channels for enum generation.
///
/// Categories are sorted by position. Non-category channels of an unsupported kind
/// (stage, directory, threads...) are dropped, and the rest are ordered by:
///
/// 1. Channels without a parent category first
/// 2. Parent category position
/// 3. Kind, in the order text, news, forum, voice
/// 4. Channel position
///
/// Every step is stable, so channels comparing equal keep their fetch order.
///
/// # Arguments
/// - `channels` - Channels as fetched from every configured guild
///
/// # Returns
/// - `SortedChannels` - Ordered categories and generated channels
pub fn sort_channels(channels: Vec<DiscordGuildChannel>) -> SortedChannels {
    let (mut categories, others): (Vec<_>, Vec<_>) =
        channels.into_iter().partition(|channel| channel.is_category());

    let mut channels: Vec<DiscordGuildChannel> = others
        .into_iter()
        .filter(|channel| {
            let supported = channel.kind.priority().is_some();
            if !supported {
                tracing::debug!(
                    "Dropping channel {} ({}) of unsupported kind {:?}",
                    channel.name,
                    channel.channel_id,
                    channel.kind
                );
            }
            supported
        })
        .collect();

    categories.sort_by_key(|category| category.position);

    let category_positions: HashMap<u64, i32> = categories
        .iter()
        .map(|category| (category.channel_id, category.position))
        .collect();

    channels.sort_by(|a, b| compare_channels(a, b, &category_positions));

    SortedChannels {
        categories,
        channels,
    }
}

/// Finds the fetched category a channel belongs to.
///
/// A parent reference that matches none of the given categories resolves to `None`,
/// exactly as if the channel had no parent at all. The channel is then ordered and
/// generated as a top-level channel rather than failing the run.
///
/// # Arguments
/// - `channel` - Channel whose parent to resolve
/// - `categories` - Categories fetched in the same run
///
/// # Returns
/// - `Some(&DiscordGuildChannel)` - The matching category
/// - `None` - No parent reference, or a reference to an unknown category
pub fn resolve_parent<'a>(
    channel: &DiscordGuildChannel,
    categories: &'a [DiscordGuildChannel],
) -> Option<&'a DiscordGuildChannel> {
    let parent_id = channel.parent_id?;
    let parent = categories
        .iter()
        .find(|category| category.channel_id == parent_id);

    if parent.is_none() {
        tracing::debug!(
            "Channel {} ({}) references unknown category {}, treating it as top-level",
            channel.name,
            channel.channel_id,
            parent_id
        );
    }

    parent
}

fn compare_channels(
    a: &DiscordGuildChannel,
    b: &DiscordGuildChannel,
    category_positions: &HashMap<u64, i32>,
) -> Ordering {
    let parent_position =
        |channel: &DiscordGuildChannel| channel.parent_id.and_then(|id| category_positions.get(&id));

    match (parent_position(a), parent_position(b)) {
        (None, None) => a.position.cmp(&b.position),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(parent_a), Some(parent_b)) => parent_a
            .cmp(parent_b)
            .then_with(|| a.kind.priority().cmp(&b.kind.priority()))
            .then_with(|| a.position.cmp(&b.position)),
    }
}
