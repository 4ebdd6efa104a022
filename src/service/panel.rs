//! Panel installation.
//!
//! Ensures each guild has the wait panel posted once. The panel's identity is not
//! persisted: a panel counts as installed when a bot-authored message whose first embed
//! carries the panel title is among the most recent `scan_limit` messages of the target
//! channel. A panel pushed further back by chat traffic is no longer seen and a new one
//! is posted. Changing the configured channel does not remove a panel left in the old
//! channel.

use std::sync::Arc;

use dioxus_logger::tracing;
use serenity::all::{ChannelId, Context, GetMessages, GuildId, Message, MessageId, UserId};

use crate::{
    data::panel_config::PanelConfigStore,
    error::{discord::DiscordFailure, AppError},
    model::{
        nickname::NicknamePrefix,
        panel::{PanelOutcome, PanelSettings},
    },
    service::channel_selector::{candidates_from_guild, resolve_panel_channel},
};

pub mod builder;

/// Service installing the wait panel into guilds.
#[derive(Clone)]
pub struct PanelInstaller {
    store: Arc<PanelConfigStore>,
    settings: PanelSettings,
    prefix: NicknamePrefix,
}

impl PanelInstaller {
    /// Creates a new PanelInstaller instance.
    ///
    /// # Arguments
    /// - `store` - Shared panel config store holding administrator choices
    /// - `settings` - Panel title, scan window, and channel keywords
    /// - `prefix` - Nickname prefix, shown in the panel description
    pub fn new(
        store: Arc<PanelConfigStore>,
        settings: PanelSettings,
        prefix: NicknamePrefix,
    ) -> Self {
        Self {
            store,
            settings,
            prefix,
        }
    }

    /// Posts the panel in a guild unless one is already visible.
    ///
    /// Resolves the target channel (configured channel if still usable, otherwise the
    /// channel selector), scans its recent history for an existing panel, and sends a new
    /// panel only if none was found. A failed history read is logged and treated as "no
    /// panel found", so the guild ends up with a panel rather than none.
    ///
    /// # Arguments
    /// - `ctx` - Discord context; guild state is read from the cache
    /// - `guild_id` - Guild to install the panel in
    ///
    /// # Returns
    /// - `Ok(PanelOutcome::NoChannel)` - Guild not cached or no channel accepts messages
    /// - `Ok(PanelOutcome::AlreadyInstalled)` - Existing panel found, nothing sent
    /// - `Ok(PanelOutcome::Installed)` - New panel sent
    /// - `Err(AppError::DiscordErr)` - Sending the panel failed
    pub async fn ensure_panel_once(
        &self,
        ctx: &Context,
        guild_id: GuildId,
    ) -> Result<PanelOutcome, AppError> {
        let bot_id = ctx.cache.current_user().id;

        // Cache guard must be released before the next await.
        let snapshot = ctx
            .cache
            .guild(guild_id)
            .map(|guild| (guild.name.clone(), candidates_from_guild(&guild, bot_id)));

        let Some((guild_name, candidates)) = snapshot else {
            tracing::warn!("Guild {} is not cached, skipping wait panel", guild_id);
            return Ok(PanelOutcome::NoChannel);
        };

        let configured = self.store.channel_for(guild_id).await;
        let target =
            resolve_panel_channel(configured, &candidates, &self.settings.channel_keywords);

        let history = match target {
            Some(channel_id) => self.recent_history(ctx, guild_id, channel_id).await,
            None => Vec::new(),
        };

        match plan_install(target, &history, bot_id, &self.settings.title) {
            InstallPlan::NoChannel => {
                tracing::warn!(
                    "{} ({}): no channel available for the wait panel",
                    guild_name,
                    guild_id
                );
                Ok(PanelOutcome::NoChannel)
            }
            InstallPlan::Keep(channel_id, message_id) => {
                tracing::debug!(
                    "Keeping existing wait panel {} in channel {} of {}",
                    message_id,
                    channel_id,
                    guild_name
                );
                Ok(PanelOutcome::AlreadyInstalled(channel_id, message_id))
            }
            InstallPlan::Send(channel_id) => {
                let message = channel_id
                    .send_message(
                        &ctx.http,
                        builder::panel_message(&self.settings.title, &self.prefix),
                    )
                    .await?;

                tracing::info!(
                    "Installed wait panel in channel {} of {} ({})",
                    channel_id,
                    guild_name,
                    guild_id
                );

                Ok(PanelOutcome::Installed(channel_id, message.id))
            }
        }
    }

    /// Reads the scan window of a channel; a failed read yields no messages.
    async fn recent_history(
        &self,
        ctx: &Context,
        guild_id: GuildId,
        channel_id: ChannelId,
    ) -> Vec<Message> {
        match channel_id
            .messages(&ctx.http, GetMessages::new().limit(self.settings.scan_limit))
            .await
        {
            Ok(messages) => messages,
            Err(e) => {
                tracing::warn!(
                    "Failed to read history of channel {} in guild {} ({}): {}",
                    channel_id,
                    guild_id,
                    DiscordFailure::classify(&e),
                    e
                );
                Vec::new()
            }
        }
    }
}

/// What an installation attempt should do once the target channel and its recent
/// history are known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallPlan {
    NoChannel,
    Keep(ChannelId, MessageId),
    Send(ChannelId),
}

/// Decides between skipping, keeping an existing panel, and sending a new one.
///
/// # Arguments
/// - `target` - Channel resolved for the panel, `None` if no channel is usable
/// - `history` - Recent messages of `target`; empty when the read failed
/// - `bot_id` - User ID of the bot
/// - `title` - Panel embed title
pub fn plan_install(
    target: Option<ChannelId>,
    history: &[Message],
    bot_id: UserId,
    title: &str,
) -> InstallPlan {
    let Some(channel_id) = target else {
        return InstallPlan::NoChannel;
    };

    match find_existing_panel(history, bot_id, title) {
        Some(message_id) => InstallPlan::Keep(channel_id, message_id),
        None => InstallPlan::Send(channel_id),
    }
}

/// Finds the panel among recently fetched messages.
///
/// # Arguments
/// - `messages` - Channel history, any order
/// - `bot_id` - User ID of the bot
/// - `title` - Panel embed title
///
/// # Returns
/// ID of the first message authored by the bot whose first embed has exactly `title`
pub fn find_existing_panel(
    messages: &[Message],
    bot_id: UserId,
    title: &str,
) -> Option<MessageId> {
    messages
        .iter()
        .find(|message| {
            message.author.id == bot_id
                && message
                    .embeds
                    .first()
                    .and_then(|embed| embed.title.as_deref())
                    == Some(title)
        })
        .map(|message| message.id)
}
