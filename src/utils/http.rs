use anyhow::Result;
use reqwest::{Client, ClientBuilder};
use std::time::Duration;

use crate::config::Config;
use crate::error::CheckError;
use crate::models::ProductUrl;

/// Shared client for page fetches and notifications. The timeout here is the
/// page fetch timeout; notifications override it per request.
pub fn create_client(config: &Config) -> Result<Client> {
    let client = ClientBuilder::new()
        .user_agent(config.user_agent.as_str())
        .timeout(Duration::from_secs(config.fetch_timeout_seconds))
        .build()?;

    Ok(client)
}

/// GET a product page and return its body. No retries.
pub async fn fetch_page(client: &Client, url: &ProductUrl) -> Result<String, CheckError> {
    let network_error = |source: reqwest::Error| CheckError::Network {
        url: url.to_string(),
        source,
    };

    let response = client.get(url.as_str()).send().await.map_err(network_error)?;

    let status = response.status();
    if !status.is_success() {
        return Err(CheckError::Http {
            url: url.to_string(),
            status,
        });
    }

    response.text().await.map_err(network_error)
}
