//! Guild event handlers for panel installation.
//!
//! The panel is installed in two situations:
//! - On startup, once the cache holds every guild the bot is already in (`cache_ready`)
//! - When the bot joins a new guild (`guild_create` with `is_new == Some(true)`)
//!
//! `guild_create` also fires for guilds becoming available on startup or after an
//! outage; those are covered by `cache_ready` and ignored here.

use dioxus_logger::tracing;
use serenity::all::{Context, Guild, GuildId};

use crate::{
    bot::command,
    error::discord::DiscordFailure,
    model::panel::PanelOutcome,
    state::BotState,
};

/// Installs the panel in every cached guild once the cache is ready.
///
/// Guilds are processed one after another; a failure in one guild is logged and does
/// not stop the others.
///
/// # Arguments
/// - `state` - Bot state holding the panel installer
/// - `ctx` - Discord context
/// - `guilds` - IDs of all guilds the bot is in
pub async fn handle_cache_ready(state: &BotState, ctx: Context, guilds: Vec<GuildId>) {
    tracing::info!("Cache ready, checking wait panels in {} guild(s)", guilds.len());

    for guild_id in guilds {
        install_panel(state, &ctx, guild_id).await;
    }
}

/// Handles the guild_create event.
///
/// Only acts when the bot has just joined the guild: syncs the guild scoped command
/// list so the command is usable immediately, then installs the panel. A failed command
/// sync is not a reason to skip the panel.
///
/// # Arguments
/// - `state` - Bot state holding the panel installer
/// - `ctx` - Discord context
/// - `guild` - Guild data from Discord
/// - `is_new` - `Some(true)` when the bot joined this guild just now
pub async fn handle_guild_create(
    state: &BotState,
    ctx: Context,
    guild: Guild,
    is_new: Option<bool>,
) {
    if is_new != Some(true) {
        tracing::debug!("Guild {} ({}) available", guild.name, guild.id);
        return;
    }

    tracing::info!("Joined guild {} ({})", guild.name, guild.id);

    if let Err(e) = command::register_guild(&ctx, guild.id).await {
        tracing::debug!(
            "Ignoring command sync failure in guild {} ({}): {}",
            guild.id,
            DiscordFailure::classify(&e),
            e
        );
    }

    install_panel(state, &ctx, guild.id).await;
}

async fn install_panel(state: &BotState, ctx: &Context, guild_id: GuildId) {
    match state.installer.ensure_panel_once(ctx, guild_id).await {
        Ok(PanelOutcome::NoChannel) => {
            tracing::debug!("No wait panel installed in guild {}", guild_id)
        }
        Ok(_) => {}
        Err(e) => tracing::error!("Failed to install wait panel in guild {}: {}", guild_id, e),
    }
}
