//! Test factory for creating Serenity Member objects.

use serde_json::Value;
use serenity::all::Member;

use super::message::user_json;

/// Raw JSON for a guild member.
///
/// # Arguments
/// - `guild_id` - Guild the member belongs to
/// - `user_id` - Discord user ID (snowflake)
/// - `username` - Account username
/// - `nick` - Guild nickname, if any
/// - `role_ids` - Roles assigned to the member (excluding `@everyone`)
pub fn member_json(
    guild_id: u64,
    user_id: u64,
    username: &str,
    nick: Option<&str>,
    role_ids: &[u64],
) -> Value {
    let roles: Vec<String> = role_ids.iter().map(|id| id.to_string()).collect();

    serde_json::json!({
        "guild_id": guild_id.to_string(),
        "user": user_json(user_id, username, false),
        "nick": nick,
        "avatar": null,
        "roles": roles,
        "joined_at": "2020-01-01T00:00:00.000000+00:00",
        "premium_since": null,
        "deaf": false,
        "mute": false,
        "flags": 0,
        "pending": false,
    })
}

/// Creates a test Serenity Member.
///
/// # Panics
/// - If the JSON cannot be deserialized into a Member (indicates invalid test data)
pub fn create_test_member(
    guild_id: u64,
    user_id: u64,
    username: &str,
    nick: Option<&str>,
    role_ids: &[u64],
) -> Member {
    serde_json::from_value(member_json(guild_id, user_id, username, nick, role_ids))
        .expect("Failed to create test member - invalid JSON structure")
}
