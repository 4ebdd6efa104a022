//! Discord bot integration.
//!
//! This module wires the services into Serenity: the event handler reacts to gateway
//! events, `command` defines the administrator slash command, and `component` builds and
//! handles the wait panel buttons.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Guild, channel and role state for the cache, plus guild join events
//! - `GUILD_MESSAGES` - Message events in guilds
//!
//! Neither is privileged. Message history is fetched over HTTP, where the bot always
//! sees the embeds of its own messages.

pub mod command;
pub mod component;
pub mod handler;
pub mod start;
