//! Presses on the wait panel's two buttons.
//!
//! Buttons carry fixed custom IDs (see `service::panel::builder`), so presses on panels
//! posted before a restart keep working without re-sending anything. Each press is
//! answered with an ephemeral reply that is deleted again through the auto-delete
//! scheduler.

use std::{collections::HashMap, sync::Arc};

use dioxus_logger::tracing;
use serenity::all::{
    ComponentInteraction, Context, CreateInteractionResponse, CreateInteractionResponseMessage,
    CreateMessage, EditMember, GuildId, Member, Mentionable, Permissions, Role, RoleId, UserId,
};

use crate::{
    error::{discord::DiscordFailure, AppError},
    model::rank::RoleRank,
    service::{
        nickname::{ToggleAction, ToggleContext, ToggleDecision},
        panel::builder::{ACTIVATE_BUTTON_ID, DEACTIVATE_BUTTON_ID},
    },
    state::BotState,
};

/// Maps a component custom ID to the panel action it triggers.
pub fn action_for(custom_id: &str) -> Option<ToggleAction> {
    match custom_id {
        ACTIVATE_BUTTON_ID => Some(ToggleAction::Activate),
        DEACTIVATE_BUTTON_ID => Some(ToggleAction::Deactivate),
        _ => None,
    }
}

/// Collects what the toggle decision needs from Discord data.
///
/// # Arguments
/// - `guild_id` - Guild of the interaction, its ID is also the `@everyone` role ID
/// - `owner_id` - Guild owner
/// - `roles` - All roles of the guild
/// - `bot_roles` - Roles assigned to the bot's member
/// - `member` - The member who pressed the button
/// - `app_permissions` - The bot's permissions in the interaction channel
pub fn toggle_context(
    guild_id: GuildId,
    owner_id: UserId,
    roles: &HashMap<RoleId, Role>,
    bot_roles: &[RoleId],
    member: &Member,
    app_permissions: Option<Permissions>,
) -> ToggleContext {
    ToggleContext {
        is_owner: member.user.id == owner_id,
        bot_can_manage_nicknames: app_permissions
            .is_some_and(|permissions| permissions.manage_nicknames()),
        bot_rank: RoleRank::highest(guild_id, roles, bot_roles),
        member_rank: RoleRank::highest(guild_id, roles, &member.roles),
        nickname: member.nick.clone(),
        username: member.user.name.clone(),
    }
}

/// Handles a press on one of the panel buttons.
///
/// # Arguments
/// - `state` - Bot state holding the prefix and the auto-delete scheduler
/// - `ctx` - Discord context
/// - `interaction` - The button interaction
/// - `action` - Action resolved from the button's custom ID
///
/// # Returns
/// - `Ok(())` - Member received a reply
/// - `Err(AppError::DiscordErr)` - Guild data could not be fetched or the reply failed
pub async fn handle_button(
    state: &BotState,
    ctx: &Context,
    interaction: &ComponentInteraction,
    action: ToggleAction,
) -> Result<(), AppError> {
    let (Some(guild_id), Some(member)) = (interaction.guild_id, interaction.member.as_ref())
    else {
        tracing::debug!("Ignoring wait panel press outside a guild");
        return Ok(());
    };

    let guild = guild_id.to_partial_guild(ctx).await?;
    let bot_id = ctx.cache.current_user().id;
    let bot_member = guild_id.member(ctx, bot_id).await?;

    let toggle = toggle_context(
        guild_id,
        guild.owner_id,
        &guild.roles,
        &bot_member.roles,
        member,
        interaction.app_permissions,
    );

    match action.evaluate(&state.prefix, &toggle) {
        ToggleDecision::Rejected(rejection) => {
            tracing::debug!(
                "Refused {:?} for user {} in guild {}: {:?}",
                action,
                member.user.id,
                guild_id,
                rejection
            );
            reply_ephemeral(state, ctx, interaction, rejection.message()).await
        }
        ToggleDecision::AlreadyActive => {
            reply_ephemeral(state, ctx, interaction, "Wait mode is already active ✅").await?;
            send_already_active_notice(state, ctx, interaction, member).await;
            Ok(())
        }
        ToggleDecision::AlreadyInactive => {
            reply_ephemeral(state, ctx, interaction, "Wait mode is already inactive ✅").await
        }
        ToggleDecision::Rename(nickname) => {
            let edit = EditMember::new()
                .nickname(nickname.as_str())
                .audit_log_reason(action.audit_reason());

            match guild_id.edit_member(&ctx.http, member.user.id, edit).await {
                Ok(_) => {
                    tracing::info!(
                        "Renamed user {} in guild {} to {:?}",
                        member.user.id,
                        guild_id,
                        nickname
                    );
                    reply_ephemeral(state, ctx, interaction, action.success_message()).await
                }
                Err(e) => {
                    tracing::warn!(
                        "Failed to rename user {} in guild {} ({}): {}",
                        member.user.id,
                        guild_id,
                        DiscordFailure::classify(&e),
                        e
                    );
                    reply_ephemeral(state, ctx, interaction, "❌ Could not change your nickname.")
                        .await
                }
            }
        }
    }
}

/// Replies ephemerally and schedules the reply's deletion.
///
/// The reply is looked up again to obtain its message ID, which keys the scheduled
/// deletion. Failing to look it up or to delete it only leaves the reply visible.
async fn reply_ephemeral(
    state: &BotState,
    ctx: &Context,
    interaction: &ComponentInteraction,
    content: &str,
) -> Result<(), AppError> {
    interaction
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new()
                    .content(content)
                    .ephemeral(true),
            ),
        )
        .await?;

    let message = match interaction.get_response(&ctx.http).await {
        Ok(message) => message,
        Err(e) => {
            tracing::debug!(
                "Could not fetch ephemeral reply for auto-delete ({}): {}",
                DiscordFailure::classify(&e),
                e
            );
            return Ok(());
        }
    };

    let http = Arc::clone(&ctx.http);
    let token = interaction.token.clone();
    state
        .auto_delete
        .schedule(message.id, state.settings.auto_delete_delay, async move {
            if let Err(e) = http.delete_original_interaction_response(&token).await {
                tracing::debug!(
                    "Ephemeral reply not deleted ({}): {}",
                    DiscordFailure::classify(&e),
                    e
                );
            }
        })
        .await;

    tracing::debug!(
        "Scheduled deletion of reply {}, {} deletion(s) pending",
        message.id,
        state.auto_delete.pending().await
    );

    Ok(())
}

/// Posts a short public reminder that the member already carries the prefix.
async fn send_already_active_notice(
    state: &BotState,
    ctx: &Context,
    interaction: &ComponentInteraction,
    member: &Member,
) {
    let channel_id = interaction.channel_id;
    let notice = CreateMessage::new().content(format!(
        "{} already has the `{}` prefix.",
        member.mention(),
        state.prefix.as_str()
    ));

    let message = match channel_id.send_message(&ctx.http, notice).await {
        Ok(message) => message,
        Err(e) => {
            tracing::warn!(
                "Failed to send wait mode notice in channel {} ({}): {}",
                channel_id,
                DiscordFailure::classify(&e),
                e
            );
            return;
        }
    };

    let http = Arc::clone(&ctx.http);
    let message_id = message.id;
    state
        .auto_delete
        .schedule(message_id, state.settings.auto_delete_delay, async move {
            if let Err(e) = channel_id.delete_message(&*http, message_id).await {
                tracing::debug!(
                    "Wait mode notice {} not deleted ({}): {}",
                    message_id,
                    DiscordFailure::classify(&e),
                    e
                );
            }
        })
        .await;
}
