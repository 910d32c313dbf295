//! Application configuration loaded from environment variables.

use serde::Deserialize;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Upstream API ===
    /// Gamma API base URL.
    #[serde(default = "default_gamma_api_url")]
    pub gamma_api_url: String,

    /// Outbound HTTP timeout in milliseconds.
    #[serde(default = "default_http_timeout_ms")]
    pub http_timeout_ms: u64,

    // === Alerting ===
    /// Discord webhook URL. Absent means alerting is disabled.
    #[serde(default)]
    pub discord_webhook_url: Option<String>,

    // === Server Configuration ===
    /// HTTP server port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Expose Prometheus metrics.
    #[serde(default = "default_true")]
    pub metrics_enabled: bool,

    /// Prometheus scrape port.
    #[serde(default = "default_metrics_port")]
    pub metrics_port: u16,
}

fn default_gamma_api_url() -> String {
    "https://gamma-api.polymarket.com".to_string()
}

fn default_http_timeout_ms() -> u64 {
    10_000
}

fn default_port() -> u16 {
    8080
}

fn default_true() -> bool {
    true
}

fn default_metrics_port() -> u16 {
    9090
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<(), String> {
        if self.gamma_api_url.is_empty() {
            return Err("GAMMA_API_URL is required".to_string());
        }

        if !self.gamma_api_url.starts_with("http") {
            return Err("GAMMA_API_URL must be an http(s) URL".to_string());
        }

        if let Some(url) = &self.discord_webhook_url {
            if !url.starts_with("http") {
                return Err("DISCORD_WEBHOOK_URL must be an http(s) URL".to_string());
            }
        }

        if self.http_timeout_ms == 0 {
            return Err("HTTP_TIMEOUT_MS must be greater than 0".to_string());
        }

        Ok(())
    }

    /// Check if a Discord webhook is configured.
    pub fn alerting_enabled(&self) -> bool {
        self.discord_webhook_url.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> Config {
        Config {
            gamma_api_url: default_gamma_api_url(),
            http_timeout_ms: default_http_timeout_ms(),
            discord_webhook_url: None,
            port: default_port(),
            metrics_enabled: true,
            metrics_port: default_metrics_port(),
        }
    }

    #[test]
    fn default_values_are_sensible() {
        assert_eq!(default_gamma_api_url(), "https://gamma-api.polymarket.com");
        assert_eq!(default_http_timeout_ms(), 10_000);
        assert_eq!(default_port(), 8080);
        assert_eq!(default_metrics_port(), 9090);
        assert!(default_true());
    }

    #[test]
    fn validate_accepts_defaults() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_gamma_url() {
        let config = Config {
            gamma_api_url: "".to_string(),
            ..base_config()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_non_http_webhook_url() {
        let config = Config {
            discord_webhook_url: Some("discord.com/api/webhooks/123".to_string()),
            ..base_config()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn alerting_disabled_without_webhook() {
        assert!(!base_config().alerting_enabled());

        let config = Config {
            discord_webhook_url: Some("https://discord.com/api/webhooks/123".to_string()),
            ..base_config()
        };
        assert!(config.alerting_enabled());
    }
}
