//! # Configuration
//!
//! Process configuration read once at startup from the environment (after
//! `.env` has been loaded by the binary) and passed by reference from there on.
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.1.0: Overridable API base URLs for pointing the clients at a local mock
//! - 1.0.0: Required tokens, channel and database id

use super::error::ConfigError;

pub const DEFAULT_NOTION_API_URL: &str = "https://api.notion.com";
pub const DEFAULT_SLACK_API_URL: &str = "https://slack.com";
const DEFAULT_LOG_LEVEL: &str = "info";

pub const REQUIRED_VARS: [&str; 4] = [
    "NOTION_TOKEN",
    "SLACK_BOT_TOKEN",
    "SLACK_CHANNEL_ID",
    "NOTION_DATABASE_ID",
];

#[derive(Debug, Clone)]
pub struct Config {
    pub notion_token: String,
    pub slack_bot_token: String,
    pub slack_channel_id: String,
    pub notion_database_id: String,
    pub notion_api_url: String,
    pub slack_api_url: String,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup. Blank values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let missing: Vec<&'static str> = REQUIRED_VARS
            .iter()
            .copied()
            .filter(|key| get(*key).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(ConfigError { missing });
        }

        let required = |key: &str| get(key).unwrap_or_default();

        Ok(Config {
            notion_token: required("NOTION_TOKEN"),
            slack_bot_token: required("SLACK_BOT_TOKEN"),
            slack_channel_id: required("SLACK_CHANNEL_ID"),
            notion_database_id: required("NOTION_DATABASE_ID"),
            notion_api_url: get("NOTION_API_URL")
                .unwrap_or_else(|| DEFAULT_NOTION_API_URL.to_string()),
            slack_api_url: get("SLACK_API_URL")
                .unwrap_or_else(|| DEFAULT_SLACK_API_URL.to_string()),
            log_level: get("LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        })
    }
}
