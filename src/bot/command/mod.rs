//! Slash commands.
//!
//! The command list is registered globally on `ready` and per guild when the bot joins
//! a new guild, so the command is usable there before the global registration has
//! propagated. Interactions are dispatched by command name.

use dioxus_logger::tracing;
use serenity::all::{
    Command, CommandInteraction, Context, CreateCommand, CreateInteractionResponse,
    CreateInteractionResponseMessage, GuildId,
};

use crate::{error::AppError, state::BotState};

pub mod set_panel_channel;

/// Every slash command the bot offers.
pub fn all() -> Vec<CreateCommand> {
    vec![set_panel_channel::register()]
}

/// Replaces the global command list.
///
/// # Returns
/// - `Ok(usize)` - Number of commands Discord acknowledged
/// - `Err(serenity::Error)` - Registration request failed
pub async fn register_global(ctx: &Context) -> Result<usize, serenity::Error> {
    let commands = Command::set_global_commands(&ctx.http, all()).await?;
    Ok(commands.len())
}

/// Replaces the command list scoped to a single guild.
pub async fn register_guild(ctx: &Context, guild_id: GuildId) -> Result<(), serenity::Error> {
    guild_id.set_commands(&ctx.http, all()).await?;
    Ok(())
}

/// Routes a slash command to its handler by name.
pub async fn dispatch(
    state: &BotState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    match command.data.name.as_str() {
        set_panel_channel::NAME => set_panel_channel::run(state, ctx, command).await,
        other => {
            tracing::warn!("Received unknown command /{}", other);
            Ok(())
        }
    }
}

/// Sends an ephemeral text reply to a slash command.
pub async fn reply_ephemeral(
    ctx: &Context,
    command: &CommandInteraction,
    content: impl Into<String>,
) -> Result<(), AppError> {
    command
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new()
                    .content(content)
                    .ephemeral(true),
            ),
        )
        .await?;

    Ok(())
}
