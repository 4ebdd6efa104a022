//! Test factory for creating Serenity Role objects.

use serde_json::Value;
use serenity::all::Role;

/// Raw JSON for a role as Discord delivers it.
///
/// # Arguments
/// - `role_id` - Discord role ID (snowflake); use the guild ID for `@everyone`
/// - `name` - Role name
/// - `position` - Role position in the hierarchy (higher = more important)
/// - `permissions` - Permission bits granted by the role
pub fn role_json(role_id: u64, name: &str, position: u16, permissions: u64) -> Value {
    serde_json::json!({
        "id": role_id.to_string(),
        "name": name,
        "color": 0,
        "hoist": false,
        "icon": null,
        "unicode_emoji": null,
        "position": position,
        "permissions": permissions.to_string(),
        "managed": false,
        "mentionable": false,
    })
}

/// Creates a test Serenity Role with no permissions.
///
/// # Arguments
/// - `role_id` - Discord role ID (snowflake)
/// - `name` - Role name
/// - `position` - Role position in the hierarchy (higher = more important)
///
/// # Panics
/// - If the JSON cannot be deserialized into a Role (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::role::create_test_role;
///
/// let role = create_test_role(123456789, "Moderator", 10);
/// assert_eq!(role.position, 10);
/// ```
pub fn create_test_role(role_id: u64, name: &str, position: u16) -> Role {
    serde_json::from_value(role_json(role_id, name, position, 0))
        .expect("Failed to create test role - invalid JSON structure")
}
