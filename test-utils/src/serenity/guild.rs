//! Test factory for creating Serenity Guild objects.

use serde_json::Value;
use serenity::all::Guild;

/// Creates a test Serenity Guild without roles, channels, or members.
///
/// # Arguments
/// - `guild_id` - Discord guild ID (snowflake)
/// - `name` - Guild name
/// - `owner_id` - User ID of the guild owner
///
/// # Panics
/// - If the JSON cannot be deserialized into a Guild (indicates invalid test data)
pub fn create_test_guild(guild_id: u64, name: &str, owner_id: u64) -> Guild {
    guild_from_json(guild_json(guild_id, name, owner_id, vec![], vec![], vec![]))
}

/// Creates a test Serenity Guild populated with roles, channels, and members.
///
/// The pieces are raw JSON values, typically produced by `role_json`,
/// `text_channel_json`, and `member_json`, so the guild deserializes exactly like a
/// `GUILD_CREATE` payload would.
///
/// # Arguments
/// - `guild_id` - Discord guild ID (snowflake); also the `@everyone` role ID
/// - `owner_id` - User ID of the guild owner
/// - `roles` - Role objects, include `@everyone` for permission calculations
/// - `channels` - Channel objects
/// - `members` - Member objects
///
/// # Panics
/// - If the JSON cannot be deserialized into a Guild (indicates invalid test data)
pub fn create_test_guild_with(
    guild_id: u64,
    owner_id: u64,
    roles: Vec<Value>,
    channels: Vec<Value>,
    members: Vec<Value>,
) -> Guild {
    guild_from_json(guild_json(
        guild_id,
        "Test Guild",
        owner_id,
        roles,
        channels,
        members,
    ))
}

fn guild_from_json(value: Value) -> Guild {
    serde_json::from_value(value).expect("Failed to create test guild - invalid JSON structure")
}

fn guild_json(
    guild_id: u64,
    name: &str,
    owner_id: u64,
    roles: Vec<Value>,
    channels: Vec<Value>,
    members: Vec<Value>,
) -> Value {
    let member_count = members.len();

    serde_json::json!({
        "id": guild_id.to_string(),
        "name": name,
        "icon": null,
        "owner_id": owner_id.to_string(),
        "afk_timeout": 300,
        "verification_level": 0,
        "default_message_notifications": 0,
        "explicit_content_filter": 0,
        "roles": roles,
        "emojis": [],
        "stickers": [],
        "features": [],
        "mfa_level": 0,
        "system_channel_flags": 0,
        "premium_tier": 0,
        "premium_subscription_count": 0,
        "premium_progress_bar_enabled": false,
        "preferred_locale": "en-US",
        "nsfw_level": 0,
        "joined_at": "2020-01-01T00:00:00.000000+00:00",
        "large": false,
        "member_count": member_count,
        "voice_states": [],
        "channels": channels,
        "threads": [],
        "presences": [],
        "max_presences": 25000,
        "max_members": 100000,
        "unavailable": false,
        "members": members,
        "stage_instances": [],
        "guild_scheduled_events": [],
    })
}
