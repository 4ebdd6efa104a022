//! Panel channel selection.
//!
//! Picks the text channel the panel is posted in when an administrator has not pinned
//! one. The result depends on the guild's current channels and permissions and is
//! recomputed on every installation rather than cached.

use serenity::all::{ChannelId, ChannelType, Guild, UserId};

use crate::model::panel::PanelChannelCandidate;

/// Builds the candidate list from a cached guild.
///
/// Only text channels are considered. Candidates are returned in the guild's display
/// order (position, then ID), which is the iteration order used by the selector.
///
/// # Arguments
/// - `guild` - Cached guild with channels, roles, and the bot's own member
/// - `bot_id` - User ID of the bot
///
/// # Returns
/// Candidate channels; `can_send` is false everywhere if the bot's member is not cached
pub fn candidates_from_guild(guild: &Guild, bot_id: UserId) -> Vec<PanelChannelCandidate> {
    let bot_member = guild.members.get(&bot_id);

    let mut candidates: Vec<PanelChannelCandidate> = guild
        .channels
        .values()
        .filter(|channel| channel.kind == ChannelType::Text)
        .map(|channel| PanelChannelCandidate {
            id: channel.id,
            name: channel.name.clone(),
            position: channel.position,
            can_send: bot_member.is_some_and(|member| {
                guild.user_permissions_in(channel, member).send_messages()
            }),
        })
        .collect();

    candidates.sort_by_key(|candidate| (candidate.position, candidate.id));
    candidates
}

/// Picks a panel channel by name priority.
///
/// Keywords are tried in priority order; for each keyword the first sendable channel (in
/// candidate order) whose lowercase name contains it wins. A match on an earlier keyword
/// therefore beats any match on a later one regardless of where the channels sit. When
/// no keyword matches, the sendable channel with the lowest position is used.
///
/// # Arguments
/// - `candidates` - Channels in guild display order
/// - `keywords` - Name substrings in priority order
///
/// # Returns
/// - `Some(ChannelId)` - Chosen channel
/// - `None` - No channel allows the bot to send messages
pub fn select_panel_channel(
    candidates: &[PanelChannelCandidate],
    keywords: &[String],
) -> Option<ChannelId> {
    let sendable: Vec<&PanelChannelCandidate> =
        candidates.iter().filter(|candidate| candidate.can_send).collect();

    if sendable.is_empty() {
        return None;
    }

    for keyword in keywords {
        let keyword = keyword.to_lowercase();
        if let Some(candidate) = sendable
            .iter()
            .find(|candidate| candidate.name.to_lowercase().contains(&keyword))
        {
            return Some(candidate.id);
        }
    }

    sendable
        .iter()
        .min_by_key(|candidate| (candidate.position, candidate.id))
        .map(|candidate| candidate.id)
}

/// Resolves the channel the panel belongs in.
///
/// The configured channel wins while it is still a text channel the bot can send to;
/// otherwise the selector decides.
pub fn resolve_panel_channel(
    configured: Option<ChannelId>,
    candidates: &[PanelChannelCandidate],
    keywords: &[String],
) -> Option<ChannelId> {
    let configured = configured.filter(|channel_id| {
        candidates
            .iter()
            .any(|candidate| candidate.id == *channel_id && candidate.can_send)
    });

    configured.or_else(|| select_panel_channel(candidates, keywords))
}
