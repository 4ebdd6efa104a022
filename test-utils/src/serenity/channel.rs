//! Test factory for creating Serenity GuildChannel objects.

use serde_json::Value;
use serenity::all::GuildChannel;

/// Raw JSON for a guild text channel without permission overwrites.
///
/// # Arguments
/// - `channel_id` - Discord channel ID (snowflake)
/// - `guild_id` - Guild the channel belongs to
/// - `name` - Channel name
/// - `position` - Sorting position of the channel
pub fn text_channel_json(channel_id: u64, guild_id: u64, name: &str, position: u16) -> Value {
    serde_json::json!({
        "id": channel_id.to_string(),
        "guild_id": guild_id.to_string(),
        "type": 0,
        "name": name,
        "position": position,
        "permission_overwrites": [],
        "nsfw": false,
        "parent_id": null,
        "topic": null,
        "last_message_id": null,
        "rate_limit_per_user": 0,
    })
}

/// Adds a role overwrite denying the given permission bits to a channel JSON value.
///
/// # Arguments
/// - `channel` - Channel JSON produced by `text_channel_json`
/// - `role_id` - Role the overwrite applies to (guild ID for `@everyone`)
/// - `deny` - Permission bits to deny
pub fn with_role_deny(mut channel: Value, role_id: u64, deny: u64) -> Value {
    if let Some(overwrites) = channel["permission_overwrites"].as_array_mut() {
        overwrites.push(serde_json::json!({
            "id": role_id.to_string(),
            "type": 0,
            "allow": "0",
            "deny": deny.to_string(),
        }));
    }
    channel
}

/// Creates a test Serenity text channel.
///
/// # Panics
/// - If the JSON cannot be deserialized into a GuildChannel (indicates invalid test data)
pub fn create_test_channel(
    channel_id: u64,
    guild_id: u64,
    name: &str,
    position: u16,
) -> GuildChannel {
    serde_json::from_value(text_channel_json(channel_id, guild_id, name, position))
        .expect("Failed to create test channel - invalid JSON structure")
}
