//! Ready event handler for bot initialization.
//!
//! This module handles the `ready` event which is fired when the bot successfully
//! connects to Discord's gateway and completes the initial handshake.
//!
//! The ready handler is used to:
//! - Log connection information
//! - Register the slash commands globally
//!
//! Panel installation waits for `cache_ready`, since it needs the cached guild state.

use dioxus_logger::tracing;
use serenity::all::{Context, Ready};

use crate::{bot::command, error::discord::DiscordFailure};

/// Handles the ready event when the bot connects to Discord.
///
/// Fires on every (re)connection. Global command registration replaces the whole set,
/// so repeating it is harmless. A registration failure is logged and the bot keeps
/// running; existing commands stay registered with Discord.
///
/// # Arguments
/// - `ctx` - Discord context for the command registration request
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(ctx: Context, ready: Ready) {
    tracing::info!(
        "{} is connected to Discord ({} guild(s))",
        ready.user.name,
        ready.guilds.len()
    );

    match command::register_global(&ctx).await {
        Ok(count) => tracing::info!("Registered {} global command(s)", count),
        Err(e) => tracing::error!(
            "Failed to register global commands ({}): {}",
            DiscordFailure::classify(&e),
            e
        ),
    }
}
