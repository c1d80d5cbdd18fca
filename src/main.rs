use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

use sale_watch::config::Config;
use sale_watch::scheduler::Scheduler;
use sale_watch::telegram::TelegramNotifier;
use sale_watch::utils;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // A missing .env file is fine; the variables may come from the environment.
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("sale_watch=info".parse()?),
        )
        .init();

    // Load configuration
    let config = Arc::new(Config::load()?);

    info!("Sale checker started.");
    info!("Checking every {} minutes.", config.check_interval_minutes());

    let client = utils::http::create_client(&config)?;
    let notifier = TelegramNotifier::new(
        client.clone(),
        config.telegram.clone(),
        Duration::from_secs(config.notify_timeout_seconds),
    );

    let scheduler = Scheduler::new(config, client, notifier);
    scheduler
        .run_until(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!("Failed to listen for Ctrl+C: {}", e);
                std::future::pending::<()>().await;
            }
        })
        .await;

    info!("Sale checker stopped.");
    Ok(())
}
