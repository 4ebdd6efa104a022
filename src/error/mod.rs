//! Error types for the bot.
//!
//! This module provides the application's error hierarchy. `AppError` is the top-level
//! error type that wraps domain-specific errors; it is returned from startup and from
//! every fallible handler step, and is logged at the event handler boundary since there
//! is no caller to propagate it to beyond that point.

pub mod config;
pub mod discord;
pub mod store;

use thiserror::Error;

use crate::error::{config::ConfigError, store::PanelConfigError};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the bot. Most variants use
/// `#[from]` for automatic error conversion.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Always fatal, the bot cannot connect without a valid configuration.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Panel config file could not be read, parsed, or written.
    ///
    /// Fatal at startup; during an admin command it is reported to the invoking
    /// administrator and logged.
    #[error(transparent)]
    StoreErr(#[from] PanelConfigError),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
