//! Application configuration loaded from environment variables.

use anyhow::{Context, Result};
use secrecy::SecretString;
use serde::Deserialize;
use std::time::Duration;

/// Application configuration.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Telegram bot token (`BOT_TOKEN`)
    pub bot_token: SecretString,

    /// Store connection string (`DATABASE_URL`)
    pub database_url: String,

    /// Bot configuration
    pub bot: BotConfig,

    /// Telegram API configuration
    #[serde(default)]
    pub telegram: TelegramConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BotConfig {
    /// Telegram username allowed to run admin commands
    pub admin_username: String,

    /// Entries shown by /leaderboard
    #[serde(default = "default_leaderboard_size")]
    pub leaderboard_size: usize,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TelegramConfig {
    /// Bot API base URL
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Long-polling timeout for getUpdates
    #[serde(default = "default_poll_timeout", with = "humantime_serde")]
    pub poll_timeout: Duration,
}

impl TelegramConfig {
    /// HTTP timeout; leaves headroom over the long-poll.
    pub fn request_timeout(&self) -> Duration {
        self.poll_timeout + Duration::from_secs(10)
    }
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            poll_timeout: default_poll_timeout(),
        }
    }
}

fn default_leaderboard_size() -> usize {
    10
}

fn default_log_level() -> String {
    "info".into()
}

fn default_api_url() -> String {
    "https://api.telegram.org".into()
}

fn default_poll_timeout() -> Duration {
    Duration::from_secs(25)
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        Self::from_environment(config::Environment::default())
    }

    /// Build configuration from an environment source.
    ///
    /// Nested keys use `__` (`BOT__ADMIN_USERNAME`); top-level keys like
    /// `BOT_TOKEN` keep their single underscore.
    pub fn from_environment(environment: config::Environment) -> Result<Self> {
        let config = config::Config::builder()
            .add_source(
                environment
                    .separator("__")
                    // Keep strings as strings; usernames may look numeric.
                    .try_parsing(false),
            )
            .build()
            .context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }
}
