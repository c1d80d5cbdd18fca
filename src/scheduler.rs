use chrono::Local;
use reqwest::Client;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{error, info, warn};

use crate::config::Config;
use crate::detector::detect_sale;
use crate::error::CheckError;
use crate::models::{CheckResult, ProductUrl};
use crate::telegram::Notifier;
use crate::utils::http::fetch_page;

/// Counts for one pass over the product list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CycleSummary {
    pub checked: usize,
    pub on_sale: usize,
    pub notified: usize,
    pub failed: usize,
}

/// Checks every configured product in turn, then sleeps until the next cycle.
pub struct Scheduler<N: Notifier> {
    config: Arc<Config>,
    client: Client,
    notifier: N,
}

impl<N: Notifier> Scheduler<N> {
    pub fn new(config: Arc<Config>, client: Client, notifier: N) -> Self {
        Self {
            config,
            client,
            notifier,
        }
    }

    pub async fn check_product(&self, url: &ProductUrl) -> Result<CheckResult, CheckError> {
        let html = fetch_page(&self.client, url).await?;
        Ok(detect_sale(&html, url))
    }

    /// One cycle. A failing URL is logged and skipped; it never stops the
    /// remaining URLs from being checked.
    pub async fn check_all_products(&self) -> CycleSummary {
        let mut summary = CycleSummary::default();
        info!("Checking {} product(s)...", self.config.product_urls.len());

        for url in &self.config.product_urls {
            match self.check_product(url).await {
                Ok(result) if result.on_sale => {
                    summary.checked += 1;
                    summary.on_sale += 1;

                    match &result.info.details {
                        Some(details) => info!("[SALE] {} - {}", url, details),
                        None => info!("[SALE] {}", url),
                    }

                    match self.notifier.notify(url, &result.info).await {
                        Ok(()) => summary.notified += 1,
                        Err(e) => {
                            error!("[ERROR] Notification for {} not delivered: {}", url, e)
                        }
                    }
                }
                Ok(_) => {
                    summary.checked += 1;
                    info!("[no sale] {}", url);
                }
                Err(e) => {
                    summary.failed += 1;
                    error!("[ERROR] Could not check {}: {}", url, e);
                }
            }
        }

        summary
    }

    /// Run cycles until `shutdown` resolves. Shutdown is only observed while
    /// waiting between cycles, so a started cycle always finishes.
    pub async fn run_until<F>(&self, shutdown: F)
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);
        let interval = Duration::from_secs(self.config.check_interval_seconds);

        loop {
            info!(
                "--- Starting new check cycle at {} ---",
                Local::now().format("%Y-%m-%d %H:%M:%S")
            );

            let summary = self.check_all_products().await;
            info!(
                "Check cycle completed: {} checked, {} on sale, {} notified, {} failed",
                summary.checked, summary.on_sale, summary.notified, summary.failed
            );
            info!("Next check in {} minutes...", self.config.check_interval_minutes());

            tokio::select! {
                _ = &mut shutdown => {
                    warn!("Shutdown signal received, stopping");
                    break;
                }
                _ = sleep(interval) => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TelegramConfig;
    use crate::error::NotifyError;
    use crate::models::{SaleDetails, SaleInfo};
    use crate::utils::http::create_client;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use std::sync::Mutex;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[derive(Default)]
    struct RecordingNotifier {
        sent: Mutex<Vec<(ProductUrl, SaleInfo)>>,
        fail: bool,
    }

    #[async_trait]
    impl Notifier for RecordingNotifier {
        async fn notify(
            &self,
            product_url: &ProductUrl,
            info: &SaleInfo,
        ) -> Result<(), NotifyError> {
            self.sent.lock().unwrap().push((product_url.clone(), info.clone()));
            if self.fail {
                Err(NotifyError::Rejected {
                    status: reqwest::StatusCode::BAD_GATEWAY,
                    body: "down".to_string(),
                })
            } else {
                Ok(())
            }
        }
    }

    const SALE_PAGE: &str = r#"<html><head>
        <script type="application/ld+json">{"offers": {"lowPrice": 1000, "compareAtPrice": {"amount": 1500}, "priceCurrency": "RSD"}}</script>
        </head><body>Duks</body></html>"#;
    const KEYWORD_PAGE: &str = "<html><body>Rasprodaja do kraja nedelje</body></html>";
    const PLAIN_PAGE: &str = "<html><body>Duks, 4500 RSD</body></html>";

    async fn shop() -> MockServer {
        let server = MockServer::start().await;
        for (route, response) in [
            ("/sale", ResponseTemplate::new(200).set_body_string(SALE_PAGE)),
            ("/keyword", ResponseTemplate::new(200).set_body_string(KEYWORD_PAGE)),
            ("/plain", ResponseTemplate::new(200).set_body_string(PLAIN_PAGE)),
            ("/missing", ResponseTemplate::new(404)),
        ] {
            Mock::given(method("GET"))
                .and(path(route))
                .respond_with(response)
                .mount(&server)
                .await;
        }
        server
    }

    fn scheduler(
        server: &MockServer,
        routes: &[&str],
        notifier: RecordingNotifier,
    ) -> Scheduler<RecordingNotifier> {
        let urls = routes
            .iter()
            .map(|route| ProductUrl(format!("{}{}", server.uri(), route)))
            .collect();
        let config = Config::new(
            TelegramConfig {
                bot_token: "token".to_string(),
                chat_id: "1".to_string(),
                api_url: server.uri(),
            },
            urls,
        );
        let client = create_client(&config).unwrap();
        Scheduler::new(Arc::new(config), client, notifier)
    }

    #[tokio::test]
    async fn failed_url_does_not_abort_cycle() {
        let server = shop().await;
        let scheduler = scheduler(
            &server,
            &["/missing", "/sale", "/plain", "/keyword"],
            RecordingNotifier::default(),
        );

        let summary = scheduler.check_all_products().await;

        assert_eq!(
            summary,
            CycleSummary {
                checked: 3,
                on_sale: 2,
                notified: 2,
                failed: 1,
            }
        );

        let sent = scheduler.notifier.sent.lock().unwrap();
        let notified_urls: Vec<String> = sent.iter().map(|(url, _)| url.to_string()).collect();
        assert_eq!(
            notified_urls,
            vec![format!("{}/sale", server.uri()), format!("{}/keyword", server.uri())]
        );
        assert_eq!(
            sent[0].1.details,
            Some(SaleDetails::PriceDrop {
                current_price: rust_decimal::Decimal::new(1000, 0),
                original_price: rust_decimal::Decimal::new(1500, 0),
                currency: "RSD".to_string(),
            })
        );
    }

    #[tokio::test]
    async fn notification_failure_is_swallowed() {
        let server = shop().await;
        let notifier = RecordingNotifier {
            fail: true,
            ..Default::default()
        };
        let scheduler = scheduler(&server, &["/sale", "/keyword"], notifier);

        let summary = scheduler.check_all_products().await;

        assert_eq!(summary.on_sale, 2);
        assert_eq!(summary.notified, 0);
        assert_eq!(summary.failed, 0);
        assert_eq!(scheduler.notifier.sent.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn notifies_again_on_every_cycle() {
        let server = shop().await;
        let scheduler = scheduler(&server, &["/sale"], RecordingNotifier::default());

        scheduler.check_all_products().await;
        scheduler.check_all_products().await;

        assert_eq!(scheduler.notifier.sent.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn run_until_stops_after_cycle_when_shutdown_is_ready() {
        let server = shop().await;
        let scheduler = scheduler(&server, &["/sale", "/plain"], RecordingNotifier::default());

        tokio::time::timeout(Duration::from_secs(5), scheduler.run_until(std::future::ready(())))
            .await
            .expect("scheduler did not stop");

        assert_eq!(scheduler.notifier.sent.lock().unwrap().len(), 1);
    }
}
