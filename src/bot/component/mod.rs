//! Message components the bot posts and reacts to.

pub mod wait_panel;
