//! `/set-panel-channel` administrator command.
//!
//! Stores the channel chosen for the wait panel in a guild and installs the panel there
//! right away. Only members with Manage Server may use it. A panel left in the
//! previously configured channel is not removed.

use dioxus_logger::tracing;
use serenity::all::{
    ChannelId, ChannelType, CommandInteraction, CommandOptionType, Context, CreateCommand,
    CreateCommandOption, Mentionable, Permissions, ResolvedValue,
};

use crate::{
    bot::command::reply_ephemeral, error::AppError, model::panel::PanelOutcome, state::BotState,
};

pub const NAME: &str = "set-panel-channel";

const CHANNEL_OPTION: &str = "channel";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Choose the channel where the wait panel is posted")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::Channel,
                CHANNEL_OPTION,
                "Text channel for the wait panel",
            )
            .channel_types(vec![ChannelType::Text])
            .required(true),
        )
        .default_member_permissions(Permissions::MANAGE_GUILD)
        .dm_permission(false)
}

/// Handles the command.
///
/// Discord hides the command from members lacking Manage Server, but server admins can
/// override command permissions, so the permission is checked again here.
///
/// # Arguments
/// - `state` - Bot state holding the config store and panel installer
/// - `ctx` - Discord context
/// - `command` - The command interaction
///
/// # Returns
/// - `Ok(())` - Member received a reply (success or a reason for refusal)
/// - `Err(AppError::DiscordErr)` - Replying to the interaction failed
pub async fn run(
    state: &BotState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let Some(guild_id) = command.guild_id else {
        return reply_ephemeral(ctx, command, "This command can only be used in a server.").await;
    };

    let can_manage_guild = command
        .member
        .as_ref()
        .and_then(|member| member.permissions)
        .is_some_and(|permissions| permissions.manage_guild());
    if !can_manage_guild {
        return reply_ephemeral(
            ctx,
            command,
            "You need the Manage Server permission to use this command.",
        )
        .await;
    }

    let Some(channel_id) = channel_option(command) else {
        return reply_ephemeral(ctx, command, "Please choose a text channel.").await;
    };

    if let Err(e) = state.store.set_channel(guild_id, channel_id).await {
        tracing::error!(
            "Failed to save panel channel {} for guild {}: {}",
            channel_id,
            guild_id,
            e
        );
        return reply_ephemeral(ctx, command, "❌ Failed to save the panel channel.").await;
    }

    tracing::info!(
        "User {} set the panel channel of guild {} to {}",
        command.user.id,
        guild_id,
        channel_id
    );

    reply_ephemeral(
        ctx,
        command,
        format!(
            "✅ The wait panel will now be shown in {}.",
            channel_id.mention()
        ),
    )
    .await?;

    match state.installer.ensure_panel_once(ctx, guild_id).await? {
        PanelOutcome::NoChannel => tracing::warn!(
            "Panel channel {} of guild {} is not usable, no panel installed",
            channel_id,
            guild_id
        ),
        PanelOutcome::AlreadyInstalled(..) | PanelOutcome::Installed(..) => {}
    }

    Ok(())
}

fn channel_option(command: &CommandInteraction) -> Option<ChannelId> {
    command
        .data
        .options()
        .into_iter()
        .find(|option| option.name == CHANNEL_OPTION)
        .and_then(|option| match option.value {
            ResolvedValue::Channel(channel) => Some(channel.id),
            _ => None,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requires_manage_guild_and_a_guild() {
        let json = serde_json::to_value(register()).unwrap();

        assert_eq!(json["name"], NAME);
        assert_eq!(
            json["default_member_permissions"],
            Permissions::MANAGE_GUILD.bits().to_string()
        );
        assert_eq!(json["dm_permission"], false);
    }

    #[test]
    fn takes_one_required_text_channel() {
        let json = serde_json::to_value(register()).unwrap();
        let options = json["options"].as_array().unwrap();

        assert_eq!(options.len(), 1);
        assert_eq!(options[0]["name"], CHANNEL_OPTION);
        assert_eq!(options[0]["required"], true);
        assert_eq!(options[0]["channel_types"], serde_json::json!([0]));
    }
}
