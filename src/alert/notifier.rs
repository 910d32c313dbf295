//! Discord webhook delivery.

use serde_json::json;
use tracing::{info, instrument, warn};

use crate::config::Config;
use crate::error::AlertError;
use crate::metrics;

/// Webhook statuses Discord uses to acknowledge delivery.
const ACCEPTED_STATUSES: [u16; 2] = [200, 204];

/// Dispatches alert messages to a Discord webhook.
///
/// Built once at startup. A missing webhook URL disables delivery rather
/// than failing construction; sends then error with
/// [`AlertError::NotConfigured`].
#[derive(Debug, Clone)]
pub struct DiscordNotifier {
    /// HTTP client for webhook requests.
    http: reqwest::Client,
    /// Webhook URL, if configured.
    webhook_url: Option<String>,
}

impl DiscordNotifier {
    /// Create a notifier from config.
    pub fn new(config: &Config) -> Self {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_millis(config.http_timeout_ms))
            .build()
            .expect("failed to create HTTP client");

        Self {
            http,
            webhook_url: config.discord_webhook_url.clone(),
        }
    }

    /// Whether a webhook URL is configured.
    pub fn is_active(&self) -> bool {
        self.webhook_url.is_some()
    }

    /// Post a message to the webhook.
    ///
    /// Fails before any network call when no webhook URL is set. Discord
    /// acknowledges with 200 or 204; any other status is a rejection.
    #[instrument(skip(self, message), fields(chars = message.len()))]
    pub async fn send(&self, message: &str) -> Result<(), AlertError> {
        let url = self
            .webhook_url
            .as_deref()
            .ok_or(AlertError::NotConfigured)?;

        let response = match self
            .http
            .post(url)
            .json(&json!({ "content": message }))
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                metrics::inc_alert_failures();
                return Err(AlertError::Http(e));
            }
        };

        let status = response.status();
        if !ACCEPTED_STATUSES.contains(&status.as_u16()) {
            metrics::inc_alert_failures();
            warn!(status = %status, "discord webhook rejected alert");
            return Err(AlertError::Rejected { status });
        }

        metrics::inc_alerts_sent();
        info!("alert delivered");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_webhook(webhook_url: Option<&str>) -> Config {
        Config {
            gamma_api_url: "https://gamma-api.polymarket.com".to_string(),
            http_timeout_ms: 2000,
            discord_webhook_url: webhook_url.map(str::to_string),
            port: 8080,
            metrics_enabled: false,
            metrics_port: 9090,
        }
    }

    #[test]
    fn active_only_with_webhook_url() {
        assert!(!DiscordNotifier::new(&config_with_webhook(None)).is_active());
        assert!(
            DiscordNotifier::new(&config_with_webhook(Some("https://discord.com/api/webhooks/1")))
                .is_active()
        );
    }

    #[tokio::test]
    async fn send_without_webhook_fails_fast() {
        let notifier = DiscordNotifier::new(&config_with_webhook(None));

        let err = notifier.send("hello").await.unwrap_err();
        assert!(matches!(err, AlertError::NotConfigured));
    }
}
