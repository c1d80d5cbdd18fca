pub mod message;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use std::time::Duration;
use tracing::{error, info};
use url::Url;

use crate::config::TelegramConfig;
use crate::error::NotifyError;
use crate::models::{ProductUrl, SaleInfo};
pub use message::format_message;

/// Delivers a sale alert for one product.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, product_url: &ProductUrl, info: &SaleInfo) -> Result<(), NotifyError>;
}

pub struct TelegramNotifier {
    client: Client,
    config: TelegramConfig,
    timeout: Duration,
}

impl TelegramNotifier {
    pub fn new(client: Client, config: TelegramConfig, timeout: Duration) -> Self {
        Self {
            client,
            config,
            timeout,
        }
    }

    /// `<api_url>/bot<token>/sendMessage`
    pub fn endpoint(&self) -> Result<Url, NotifyError> {
        let mut base = self.config.api_url.clone();
        if !base.ends_with('/') {
            base.push('/');
        }
        // The leading "./" keeps the token's colon from being read as a scheme.
        let path = format!("./bot{}/sendMessage", self.config.bot_token);
        let endpoint = Url::parse(&base)?.join(&path)?;
        Ok(endpoint)
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn notify(
        &self,
        product_url: &ProductUrl,
        info: &SaleInfo,
    ) -> Result<(), NotifyError> {
        let payload = json!({
            "chat_id": self.config.chat_id,
            "text": format_message(product_url, info),
        });

        let response = self
            .client
            .post(self.endpoint()?)
            .timeout(self.timeout)
            .json(&payload)
            .send()
            .await?;

        if response.status().is_success() {
            info!("[OK] Notification sent for {}", product_url);
            Ok(())
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            error!("[ERROR] Failed to send notification: {} {}", status, body);
            Err(NotifyError::Rejected { status, body })
        }
    }
}
