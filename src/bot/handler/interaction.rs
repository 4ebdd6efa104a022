use dioxus_logger::tracing;
use serenity::all::{Context, Interaction};

use crate::{
    bot::{command, component::wait_panel},
    state::BotState,
};

/// Routes slash commands and panel button presses.
///
/// Errors are logged here; the member already received whatever reply the handler
/// managed to send.
///
/// # Arguments
/// - `state` - Shared bot state
/// - `ctx` - Discord context
/// - `interaction` - Incoming interaction
pub async fn handle_interaction_create(state: &BotState, ctx: Context, interaction: Interaction) {
    match interaction {
        Interaction::Command(cmd) => {
            if let Err(e) = command::dispatch(state, &ctx, &cmd).await {
                tracing::error!(
                    "Command /{} failed in guild {:?}: {}",
                    cmd.data.name,
                    cmd.guild_id,
                    e
                );
            }
        }
        Interaction::Component(component) => {
            let Some(action) = wait_panel::action_for(&component.data.custom_id) else {
                tracing::debug!("Ignoring unknown component {}", component.data.custom_id);
                return;
            };

            if let Err(e) = wait_panel::handle_button(state, &ctx, &component, action).await {
                tracing::error!(
                    "Wait panel button {} failed for user {}: {}",
                    component.data.custom_id,
                    component.user.id,
                    e
                );
            }
        }
        _ => {}
    }
}
