//! Test factory for creating Serenity GuildChannel objects.

use serenity::all::GuildChannel;

/// Raw Discord channel type numbers accepted by `create_test_channel`.
pub mod channel_type {
    pub const TEXT: u8 = 0;
    pub const VOICE: u8 = 2;
    pub const CATEGORY: u8 = 4;
    pub const NEWS: u8 = 5;
    pub const STAGE: u8 = 13;
    pub const FORUM: u8 = 15;
}

/// Creates a test Serenity GuildChannel with customizable fields.
///
/// Creates a GuildChannel object by deserializing JSON with the provided values.
/// Permission overwrites, flags and tags are empty; every optional field is unset.
///
/// # Arguments
/// - `channel_id` - Discord channel ID (snowflake)
/// - `guild_id` - Discord guild ID (snowflake)
/// - `name` - Channel name
/// - `kind` - Raw Discord channel type, see `channel_type`
/// - `parent_id` - Parent category ID, if any
/// - `position` - Channel position among its siblings
///
/// # Panics
/// - If the JSON cannot be deserialized into a GuildChannel (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// let category = create_test_channel(100, 42, "General", channel_type::CATEGORY, None, 0);
/// let chat = create_test_channel(101, 42, "chat", channel_type::TEXT, Some(100), 0);
/// ```
pub fn create_test_channel(
    channel_id: u64,
    guild_id: u64,
    name: &str,
    kind: u8,
    parent_id: Option<u64>,
    position: u16,
) -> GuildChannel {
    serde_json::from_value(serde_json::json!({
        "id": channel_id.to_string(),
        "guild_id": guild_id.to_string(),
        "type": kind,
        "name": name,
        "position": position,
        "parent_id": parent_id.map(|id| id.to_string()),
        "permission_overwrites": [],
        "nsfw": false,
        "flags": 0,
        "available_tags": [],
        "applied_tags": [],
    }))
    .expect("Failed to create test channel - invalid JSON structure")
}
