//! Classification of Discord API failures.
//!
//! Several Discord calls are allowed to fail without aborting the operation around
//! them (history scans, deleting auto-delete replies, guild-scoped command sync). They
//! are still logged, and `DiscordFailure` tells the log reader whether the target was
//! gone, access was revoked, or the network misbehaved.

use std::fmt;

use serenity::http::HttpError;

/// Coarse class of a failed Discord call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscordFailure {
    /// The resource no longer exists (HTTP 404), e.g. a message already deleted.
    NotFound,
    /// The bot lacks access (HTTP 401/403), e.g. permissions changed mid-operation.
    Forbidden,
    /// The request never produced a Discord response.
    Network,
    /// Anything else: other status codes, gateway or model errors.
    Other,
}

impl DiscordFailure {
    /// Classifies a Serenity error.
    pub fn classify(err: &serenity::Error) -> Self {
        match err {
            serenity::Error::Http(HttpError::UnsuccessfulRequest(response)) => {
                Self::from_status(response.status_code.as_u16())
            }
            serenity::Error::Http(HttpError::Request(_)) | serenity::Error::Io(_) => Self::Network,
            _ => Self::Other,
        }
    }

    /// Classifies an HTTP status code returned by Discord.
    pub fn from_status(status: u16) -> Self {
        match status {
            404 => Self::NotFound,
            401 | 403 => Self::Forbidden,
            _ => Self::Other,
        }
    }
}

impl fmt::Display for DiscordFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::NotFound => "not found",
            Self::Forbidden => "forbidden",
            Self::Network => "network",
            Self::Other => "other",
        };
        f.write_str(label)
    }
}
