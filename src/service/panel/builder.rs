//! Builders for the wait panel message.
//!
//! Button custom IDs are fixed; the interaction handler routes presses by these IDs, so
//! panels posted by an earlier run keep working.

use serenity::all::{ButtonStyle, CreateActionRow, CreateButton, CreateEmbed, CreateMessage};

use crate::model::nickname::NicknamePrefix;

pub const ACTIVATE_BUTTON_ID: &str = "wait_on";
pub const DEACTIVATE_BUTTON_ID: &str = "wait_off";

pub fn panel_buttons() -> CreateActionRow {
    CreateActionRow::Buttons(vec![
        CreateButton::new(ACTIVATE_BUTTON_ID)
            .label("Activate")
            .style(ButtonStyle::Success),
        CreateButton::new(DEACTIVATE_BUTTON_ID)
            .label("Deactivate")
            .style(ButtonStyle::Danger),
    ])
}

/// Builds the panel message posted into the panel channel.
///
/// The embed title is what identifies the panel when channel history is scanned, so it
/// must match the configured title exactly.
pub fn panel_message(title: &str, prefix: &NicknamePrefix) -> CreateMessage {
    let embed = CreateEmbed::new().title(title).description(format!(
        "Press **Activate** to add `{prefix}` to the front of your nickname, \
         **Deactivate** to remove it again.\n\
         Only your own nickname is changed.",
        prefix = prefix.as_str()
    ));

    CreateMessage::new()
        .embed(embed)
        .components(vec![panel_buttons()])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn custom_ids(value: &Value, found: &mut Vec<String>) {
        match value {
            Value::Object(map) => {
                if let Some(Value::String(id)) = map.get("custom_id") {
                    found.push(id.clone());
                }
                map.values().for_each(|v| custom_ids(v, found));
            }
            Value::Array(items) => items.iter().for_each(|v| custom_ids(v, found)),
            _ => {}
        }
    }

    #[test]
    fn panel_message_carries_title_and_both_buttons() {
        let message = panel_message("Wait Mode Panel", &NicknamePrefix::new("WAIT_"));
        let json = serde_json::to_value(&message).unwrap();

        assert_eq!(json["embeds"][0]["title"], "Wait Mode Panel");
        assert!(json["embeds"][0]["description"]
            .as_str()
            .unwrap()
            .contains("`WAIT_`"));

        let mut ids = Vec::new();
        custom_ids(&json["components"], &mut ids);
        assert_eq!(ids, vec![ACTIVATE_BUTTON_ID, DEACTIVATE_BUTTON_ID]);
    }
}
