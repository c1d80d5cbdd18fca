use anyhow::{Context, Result};
use config::Environment;
use serde::{Deserialize, Serialize};

use crate::models::ProductUrl;

pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";
pub const DEFAULT_CHECK_INTERVAL_SECONDS: u64 = 30 * 60;
pub const FETCH_TIMEOUT_SECONDS: u64 = 15;
pub const NOTIFY_TIMEOUT_SECONDS: u64 = 10;
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

const PRODUCT_URLS: &[&str] = &[
    "https://anbu-clothing.rs/product/yu-gi-oh-duks-332",
    // Add more product URLs here
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub telegram: TelegramConfig,
    pub product_urls: Vec<ProductUrl>,
    pub check_interval_seconds: u64,
    pub user_agent: String,
    pub fetch_timeout_seconds: u64,
    pub notify_timeout_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub chat_id: String,
    pub api_url: String,
}

/// Keys read from the environment. `config` lowercases variable names, so
/// `TELEGRAM_BOT_TOKEN` arrives as `telegram_bot_token`.
#[derive(Debug, Deserialize)]
struct EnvSettings {
    telegram_bot_token: String,
    telegram_chat_id: String,
    telegram_api_url: String,
    check_interval_seconds: u64,
}

impl Config {
    /// Builds a config with the fixed defaults and the given credentials.
    pub fn new(telegram: TelegramConfig, product_urls: Vec<ProductUrl>) -> Self {
        Self {
            telegram,
            product_urls,
            check_interval_seconds: DEFAULT_CHECK_INTERVAL_SECONDS,
            user_agent: USER_AGENT.to_string(),
            fetch_timeout_seconds: FETCH_TIMEOUT_SECONDS,
            notify_timeout_seconds: NOTIFY_TIMEOUT_SECONDS,
        }
    }

    /// Loads the config from the process environment. Fails when either
    /// Telegram credential is missing.
    pub fn load() -> Result<Self> {
        Self::from_environment(Environment::default())
    }

    pub fn from_environment(environment: Environment) -> Result<Self> {
        let settings = config::Config::builder()
            .set_default("telegram_api_url", DEFAULT_TELEGRAM_API_URL)?
            .set_default("check_interval_seconds", DEFAULT_CHECK_INTERVAL_SECONDS as i64)?
            .add_source(environment)
            .build()
            .context("Failed to read configuration from environment")?;

        let env: EnvSettings = settings
            .try_deserialize()
            .context("TELEGRAM_BOT_TOKEN and TELEGRAM_CHAT_ID must be set")?;

        let telegram = TelegramConfig {
            bot_token: env.telegram_bot_token,
            chat_id: env.telegram_chat_id,
            api_url: env.telegram_api_url,
        };
        let product_urls = PRODUCT_URLS.iter().map(|url| ProductUrl::from(*url)).collect();

        let mut config = Self::new(telegram, product_urls);
        config.check_interval_seconds = env.check_interval_seconds;
        Ok(config)
    }

    pub fn check_interval_minutes(&self) -> u64 {
        self.check_interval_seconds / 60
    }
}
