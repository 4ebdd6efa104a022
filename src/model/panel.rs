//! Panel placement and installation models.

use std::time::Duration;

use serenity::all::{ChannelId, MessageId};

use crate::config::Config;

/// Settings describing what the panel looks like and how it is found again.
#[derive(Debug, Clone)]
pub struct PanelSettings {
    /// Embed title; a bot message whose first embed carries it is the panel.
    pub title: String,
    /// Number of most recent messages scanned for an existing panel.
    pub scan_limit: u8,
    /// Channel name keywords in priority order, lowercase.
    pub channel_keywords: Vec<String>,
    /// Delay before ephemeral replies and notices are removed.
    pub auto_delete_delay: Duration,
}

impl PanelSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            title: config.panel_title.clone(),
            scan_limit: config.panel_scan_limit,
            channel_keywords: config.panel_channel_keywords.clone(),
            auto_delete_delay: config.auto_delete_delay,
        }
    }
}

/// A guild text channel considered for hosting the panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelChannelCandidate {
    pub id: ChannelId,
    pub name: String,
    pub position: u16,
    /// Whether the bot may send messages there.
    pub can_send: bool,
}

/// Result of one panel installation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelOutcome {
    /// No channel in the guild accepts messages from the bot.
    NoChannel,
    /// A panel was found within the scan window; nothing was sent.
    AlreadyInstalled(ChannelId, MessageId),
    /// A new panel message was sent.
    Installed(ChannelId, MessageId),
}
