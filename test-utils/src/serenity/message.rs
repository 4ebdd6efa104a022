//! Test factory for creating Serenity Message objects.

use serde_json::Value;
use serenity::all::Message;

/// Raw JSON for a user object.
pub fn user_json(user_id: u64, username: &str, bot: bool) -> Value {
    serde_json::json!({
        "id": user_id.to_string(),
        "username": username,
        "discriminator": "0",
        "global_name": null,
        "avatar": null,
        "bot": bot,
    })
}

/// Creates a test Serenity Message with optional embed titles.
///
/// Each entry in `embed_titles` becomes one rich embed, in order; `None` produces an
/// embed without a title.
///
/// # Arguments
/// - `message_id` - Discord message ID (snowflake)
/// - `channel_id` - Channel the message was posted in
/// - `author_id` - User ID of the author
/// - `author_is_bot` - Whether the author is a bot account
/// - `embed_titles` - Titles of the embeds carried by the message
///
/// # Panics
/// - If the JSON cannot be deserialized into a Message (indicates invalid test data)
pub fn create_test_message(
    message_id: u64,
    channel_id: u64,
    author_id: u64,
    author_is_bot: bool,
    embed_titles: &[Option<&str>],
) -> Message {
    let embeds: Vec<Value> = embed_titles
        .iter()
        .map(|title| {
            serde_json::json!({
                "type": "rich",
                "title": title,
                "fields": [],
            })
        })
        .collect();

    serde_json::from_value(serde_json::json!({
        "id": message_id.to_string(),
        "channel_id": channel_id.to_string(),
        "author": user_json(author_id, "author", author_is_bot),
        "content": "",
        "timestamp": "2020-01-01T00:00:00.000000+00:00",
        "edited_timestamp": null,
        "tts": false,
        "mention_everyone": false,
        "mentions": [],
        "mention_roles": [],
        "attachments": [],
        "embeds": embeds,
        "pinned": false,
        "type": 0,
    }))
    .expect("Failed to create test message - invalid JSON structure")
}

/// Creates a bot-authored message carrying a single embed with the given title.
pub fn create_test_panel_message(
    message_id: u64,
    channel_id: u64,
    bot_id: u64,
    title: &str,
) -> Message {
    create_test_message(message_id, channel_id, bot_id, true, &[Some(title)])
}
