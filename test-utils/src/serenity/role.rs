//! Test factory for creating Serenity Role objects.

use serenity::all::Role;

/// Creates a test Serenity Role with customizable fields.
///
/// Creates a Role object by deserializing JSON with the provided values.
/// All other fields are set to reasonable defaults (not hoisted, not managed,
/// not mentionable, with zero permissions).
///
/// # Arguments
/// - `role_id` - Discord role ID (snowflake)
/// - `name` - Role name
/// - `color` - Role color as a 32-bit integer (RGB)
/// - `position` - Role position in the hierarchy (higher = more important)
///
/// # Panics
/// - If the JSON cannot be deserialized into a Role (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// let role = create_test_role(123456789, "Admin", 0xFF0000, 10);
/// assert_eq!(role.name, "Admin");
/// assert_eq!(role.position, 10);
/// ```
pub fn create_test_role(role_id: u64, name: &str, color: u32, position: u16) -> Role {
    serde_json::from_value(serde_json::json!({
        "id": role_id.to_string(),
        "name": name,
        "color": color,
        "colors": {
            "primary_color": color,
            "secondary_color": null,
            "tertiary_color": null,
        },
        "hoist": false,
        "icon": null,
        "unicode_emoji": null,
        "position": position,
        "permissions": "0",
        "managed": false,
        "mentionable": false,
    }))
    .expect("Failed to create test role - invalid JSON structure")
}

/// Creates a test Serenity Role owned by an integration.
///
/// Discord marks such roles as managed; when `bot_id` is given the role also
/// carries the bot tag, like the role Discord creates for an invited bot.
///
/// # Arguments
/// - `role_id` - Discord role ID (snowflake)
/// - `name` - Role name
/// - `position` - Role position in the hierarchy
/// - `bot_id` - User ID of the bot owning the role, if any
///
/// # Panics
/// - If the JSON cannot be deserialized into a Role (indicates invalid test data)
pub fn create_test_managed_role(
    role_id: u64,
    name: &str,
    position: u16,
    bot_id: Option<u64>,
) -> Role {
    let tags = match bot_id {
        Some(bot_id) => serde_json::json!({ "bot_id": bot_id.to_string() }),
        None => serde_json::json!({}),
    };

    serde_json::from_value(serde_json::json!({
        "id": role_id.to_string(),
        "name": name,
        "color": 0,
        "colors": {
            "primary_color": 0,
            "secondary_color": null,
            "tertiary_color": null,
        },
        "hoist": false,
        "icon": null,
        "unicode_emoji": null,
        "position": position,
        "permissions": "0",
        "managed": true,
        "mentionable": false,
        "tags": tags,
    }))
    .expect("Failed to create test managed role - invalid JSON structure")
}
