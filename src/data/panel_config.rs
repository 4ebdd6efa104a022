//! Panel config store backed by a JSON file.
//!
//! This module provides `PanelConfigStore`, the handle through which handlers read and
//! change the channel an administrator pinned the panel to. The file holds a single JSON
//! object mapping guild ID strings to channel ID integers:
//!
//! ```json
//! {
//!     "123456789012345678": 234567890123456789
//! }
//! ```
//!
//! The file is read once when the store is loaded and rewritten in full on every change.
//! There is no file locking and no migration of stale entries; a channel that has since
//! been deleted simply fails validation when the panel installer resolves it.

use std::{
    collections::{BTreeMap, HashMap},
    num::NonZeroU64,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use serenity::all::{ChannelId, GuildId};
use tokio::sync::RwLock;

use crate::error::store::PanelConfigError;

/// On-disk shape of the panel config file.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
struct PanelConfigFile {
    channels: BTreeMap<String, NonZeroU64>,
}

/// Store providing access to the configured panel channel of each guild.
///
/// Constructed once at startup and shared by `Arc` with every handler. The in-memory map
/// is guarded by a read/write lock that is held across the file write, so concurrent
/// admin commands are applied one after the other.
pub struct PanelConfigStore {
    path: PathBuf,
    channels: RwLock<HashMap<GuildId, ChannelId>>,
}

impl PanelConfigStore {
    /// Loads the store from the given file.
    ///
    /// # Arguments
    /// - `path` - Location of the panel config file
    ///
    /// # Returns
    /// - `Ok(PanelConfigStore)` - Store with the file's entries, empty if the file is absent
    /// - `Err(PanelConfigError::Io)` - File exists but could not be read
    /// - `Err(PanelConfigError::Json)` - File is not a JSON object of channel IDs
    /// - `Err(PanelConfigError::InvalidGuildId)` - A key is not a guild ID
    pub async fn load(path: impl Into<PathBuf>) -> Result<Self, PanelConfigError> {
        let path = path.into();

        let channels = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => parse_channels(&raw)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            path,
            channels: RwLock::new(channels),
        })
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Gets the channel configured for a guild, if an administrator set one.
    pub async fn channel_for(&self, guild_id: GuildId) -> Option<ChannelId> {
        self.channels.read().await.get(&guild_id).copied()
    }

    /// Number of guilds with a configured channel.
    pub async fn len(&self) -> usize {
        self.channels.read().await.len()
    }

    /// Sets the panel channel for a guild and rewrites the file.
    ///
    /// The new mapping only becomes visible once the file was written, so a failed write
    /// leaves both the file and the in-memory state as they were.
    ///
    /// # Arguments
    /// - `guild_id` - Guild being configured
    /// - `channel_id` - Channel the panel should be posted in
    ///
    /// # Returns
    /// - `Ok(())` - Mapping stored and persisted
    /// - `Err(PanelConfigError)` - The file could not be written
    pub async fn set_channel(
        &self,
        guild_id: GuildId,
        channel_id: ChannelId,
    ) -> Result<(), PanelConfigError> {
        let mut channels = self.channels.write().await;

        let mut updated = channels.clone();
        updated.insert(guild_id, channel_id);
        write_channels(&self.path, &updated).await?;

        *channels = updated;

        Ok(())
    }
}

fn parse_channels(raw: &str) -> Result<HashMap<GuildId, ChannelId>, PanelConfigError> {
    let file: PanelConfigFile = serde_json::from_str(raw)?;

    file.channels
        .into_iter()
        .map(|(key, channel_id)| {
            let guild_id = key
                .trim()
                .parse::<NonZeroU64>()
                .map_err(|source| PanelConfigError::InvalidGuildId {
                    value: key.clone(),
                    source,
                })?;
            Ok((GuildId::from(guild_id), ChannelId::from(channel_id)))
        })
        .collect()
}

async fn write_channels(
    path: &Path,
    channels: &HashMap<GuildId, ChannelId>,
) -> Result<(), PanelConfigError> {
    let file = PanelConfigFile {
        channels: channels
            .iter()
            .map(|(guild_id, channel_id)| (guild_id.to_string(), NonZeroU64::from(*channel_id)))
            .collect(),
    };

    // Four-space indentation, non-ASCII characters written as-is.
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    file.serialize(&mut serializer)?;

    tokio::fs::write(path, buf).await?;

    Ok(())
}
