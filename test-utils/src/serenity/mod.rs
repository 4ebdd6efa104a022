//! Test factories for creating Serenity API objects.
//!
//! This module provides factory functions for creating mock Serenity structs
//! (Guild, Role, Channel, Member, Message) for testing purposes. These factories create
//! valid Serenity objects by deserializing JSON, simulating what Discord's API
//! would return.
//!
//! Each factory also exposes its raw JSON form (`*_json`) so that composite objects such
//! as a guild carrying channels and members can be assembled from the same defaults.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_guild_with, role_json, text_channel_json};
//!
//! let guild = create_test_guild_with(
//!     1,
//!     100,
//!     vec![role_json(1, "@everyone", 0, 3072)],
//!     vec![text_channel_json(10, 1, "general", 0)],
//!     vec![],
//! );
//! ```
//!
//! # Available Factories
//!
//! - `guild::create_test_guild` - Create Serenity Guild objects
//! - `role::create_test_role` - Create Serenity Role objects
//! - `channel::create_test_channel` - Create Serenity GuildChannel objects
//! - `member::create_test_member` - Create Serenity Member objects
//! - `message::create_test_message` - Create Serenity Message objects

pub mod channel;
pub mod guild;
pub mod member;
pub mod message;
pub mod role;

// Re-export commonly used functions for convenience
pub use channel::{create_test_channel, text_channel_json, with_role_deny};
pub use guild::{create_test_guild, create_test_guild_with};
pub use member::{create_test_member, member_json};
pub use message::{create_test_message, create_test_panel_message};
pub use role::{create_test_role, role_json};
