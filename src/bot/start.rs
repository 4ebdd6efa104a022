use dioxus_logger::tracing;
use serenity::all::{Client, GatewayIntents};

use crate::{bot::handler::Handler, config::Config, error::AppError, state::BotState};

/// Starts the Discord bot in a blocking manner
///
/// Creates the Serenity client with the bot's event handler and runs it until the
/// connection is closed.
///
/// # Arguments
/// - `config` - Application configuration holding the bot token
/// - `state` - Shared bot state handed to the event handler
///
/// # Returns
/// - `Ok(())` if the bot ran and shut down cleanly
/// - `Err(AppError)` if bot initialization or connection fails
pub async fn start_bot(config: &Config, state: BotState) -> Result<(), AppError> {
    let intents = GatewayIntents::GUILDS | GatewayIntents::GUILD_MESSAGES;

    let handler = Handler::new(state);

    let mut client = Client::builder(&config.discord_token, intents)
        .event_handler(handler)
        .await?;

    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
