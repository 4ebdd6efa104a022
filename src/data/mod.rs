//! Persistence layer.
//!
//! The only persisted state is the per-guild panel channel mapping, kept in a flat JSON
//! file. Repositories here convert between the on-disk representation and Serenity ID
//! types so the rest of the bot never touches raw strings.

pub mod panel_config;

#[cfg(test)]
mod test;
