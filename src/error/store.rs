use std::num::ParseIntError;
use thiserror::Error;

/// Failures reading or writing the panel config file.
#[derive(Error, Debug)]
pub enum PanelConfigError {
    /// The file exists but could not be read, or could not be written.
    #[error("Failed to access panel config file: {0}")]
    Io(#[from] std::io::Error),

    /// The file contents are not a JSON object of guild IDs to channel IDs.
    #[error("Panel config file is corrupt: {0}")]
    Json(#[from] serde_json::Error),

    /// A key of the JSON object is not a guild snowflake.
    #[error("Failed to parse guild ID from '{value}': {source}")]
    InvalidGuildId {
        /// The key that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },
}
