use std::{path::PathBuf, str::FromStr, time::Duration};

use crate::error::{config::ConfigError, AppError};

const DEFAULT_PANEL_CONFIG_PATH: &str = "panel_config.json";
const DEFAULT_NICKNAME_PREFIX: &str = "WAIT_";
const DEFAULT_PANEL_TITLE: &str = "Wait Mode Panel";
const DEFAULT_PANEL_SCAN_LIMIT: u8 = 20;
const DEFAULT_AUTO_DELETE_SECONDS: u64 = 5;
const DEFAULT_PANEL_CHANNEL_KEYWORDS: &str = "wait-bot,wait,wait-panel";

/// Discord caps a single history request at 100 messages.
const MAX_PANEL_SCAN_LIMIT: u8 = 100;

pub struct Config {
    pub discord_token: String,

    pub panel_config_path: PathBuf,

    pub nickname_prefix: String,
    pub panel_title: String,
    pub panel_scan_limit: u8,
    pub panel_channel_keywords: Vec<String>,

    pub auto_delete_delay: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// `from_env` passes the process environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let discord_token = lookup("DISCORD_TOKEN")
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("DISCORD_TOKEN".to_string()))?;

        let nickname_prefix =
            lookup("NICKNAME_PREFIX").unwrap_or_else(|| DEFAULT_NICKNAME_PREFIX.to_string());
        if nickname_prefix.is_empty() {
            return Err(invalid("NICKNAME_PREFIX", nickname_prefix).into());
        }

        let panel_scan_limit: u8 = parse_or(&lookup, "PANEL_SCAN_LIMIT", DEFAULT_PANEL_SCAN_LIMIT)?;
        if panel_scan_limit == 0 || panel_scan_limit > MAX_PANEL_SCAN_LIMIT {
            return Err(invalid("PANEL_SCAN_LIMIT", panel_scan_limit.to_string()).into());
        }

        let panel_channel_keywords = parse_keywords(
            &lookup("PANEL_CHANNEL_KEYWORDS")
                .unwrap_or_else(|| DEFAULT_PANEL_CHANNEL_KEYWORDS.to_string()),
        );

        Ok(Self {
            discord_token,
            panel_config_path: lookup("PANEL_CONFIG_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_PANEL_CONFIG_PATH)),
            nickname_prefix,
            panel_title: lookup("PANEL_TITLE").unwrap_or_else(|| DEFAULT_PANEL_TITLE.to_string()),
            panel_scan_limit,
            panel_channel_keywords,
            auto_delete_delay: Duration::from_secs(parse_or(
                &lookup,
                "AUTO_DELETE_SECONDS",
                DEFAULT_AUTO_DELETE_SECONDS,
            )?),
        })
    }
}

fn invalid(name: &str, value: String) -> ConfigError {
    ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value,
    }
}

fn parse_or<F, T>(lookup: &F, name: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        Some(value) => value.trim().parse().map_err(|_| invalid(name, value)),
        None => Ok(default),
    }
}

/// Splits a comma separated keyword list, keeping order and dropping blanks.
fn parse_keywords(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|keyword| keyword.trim().to_lowercase())
        .filter(|keyword| !keyword.is_empty())
        .collect()
}
