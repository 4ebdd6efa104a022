//! Business logic of the bot.
//!
//! Decision logic (channel selection, nickname toggling, panel detection) is written as
//! pure functions over domain models; the services that talk to Discord wrap those
//! decisions with the Serenity calls.

pub mod auto_delete;
pub mod channel_selector;
pub mod nickname;
pub mod panel;
