use serde::Deserialize;
use std::env;

use crate::constants::{DEFAULT_DEVICE_PORT, DEFAULT_PRICE_DELAY_MINUTES, DEFAULT_QUOTE_API_URL};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // Server
    pub host: String,
    pub port: u16,

    // Quote source
    pub quote_api_url: String,
    pub price_delay_minutes: i64,

    // Default pair when the query omits the symbols
    pub default_base: String,
    pub default_quote: String,

    // Display device (LaMetric Time on the local network)
    pub device_ip: Option<String>,
    pub device_port: u16,
    pub device_api_key: Option<String>,

    // CORS
    pub cors_allowed_origins: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Config {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "9020".to_string())
                .parse()?,

            quote_api_url: env::var("QUOTE_API_URL")
                .unwrap_or_else(|_| DEFAULT_QUOTE_API_URL.to_string()),
            price_delay_minutes: env::var("PRICE_DELAY_MINUTES")
                .unwrap_or_else(|_| DEFAULT_PRICE_DELAY_MINUTES.to_string())
                .parse()?,

            default_base: env::var("DEFAULT_BASE").unwrap_or_else(|_| "ETH".to_string()),
            default_quote: env::var("DEFAULT_QUOTE").unwrap_or_else(|_| "USD".to_string()),

            device_ip: env::var("LAMETRIC_IP").ok(),
            device_port: env::var("LAMETRIC_PORT")
                .unwrap_or_else(|_| DEFAULT_DEVICE_PORT.to_string())
                .parse()?,
            device_api_key: env::var("LAMETRIC_API_KEY").ok(),

            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .unwrap_or_else(|_| "*".to_string()),
        })
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if url::Url::parse(&self.quote_api_url).is_err() {
            anyhow::bail!("QUOTE_API_URL is not a valid URL: {}", self.quote_api_url);
        }
        if self.price_delay_minutes <= 0 {
            anyhow::bail!(
                "PRICE_DELAY_MINUTES must be positive, got {}",
                self.price_delay_minutes
            );
        }
        if crate::utils::normalize_symbol(&self.default_base).is_err() {
            anyhow::bail!("DEFAULT_BASE is not a valid currency symbol");
        }
        if crate::utils::normalize_symbol(&self.default_quote).is_err() {
            anyhow::bail!("DEFAULT_QUOTE is not a valid currency symbol");
        }

        if self.device_ip.is_some() && self.device_api_key.is_none() {
            tracing::warn!("LAMETRIC_IP set without LAMETRIC_API_KEY; device push disabled");
        }
        if self.device_ip.is_none() {
            tracing::warn!("No display device configured; /crypto/push will return 503");
        }
        if self.cors_allowed_origins.trim().is_empty() {
            tracing::warn!("CORS_ALLOWED_ORIGINS is empty; requests may be blocked");
        }

        Ok(())
    }

    /// Device coordinates when both the address and the API key are present.
    pub fn device(&self) -> Option<(String, u16, String)> {
        match (&self.device_ip, &self.device_api_key) {
            (Some(ip), Some(key)) => Some((ip.clone(), self.device_port, key.clone())),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> Config {
        Config {
            host: "0.0.0.0".to_string(),
            port: 9020,
            quote_api_url: DEFAULT_QUOTE_API_URL.to_string(),
            price_delay_minutes: 3,
            default_base: "ETH".to_string(),
            default_quote: "USD".to_string(),
            device_ip: None,
            device_port: DEFAULT_DEVICE_PORT,
            device_api_key: None,
            cors_allowed_origins: "*".to_string(),
        }
    }

    #[test]
    fn validate_accepts_defaults() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_delay() {
        let mut config = base_config();
        config.price_delay_minutes = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_bad_api_url() {
        let mut config = base_config();
        config.quote_api_url = "not a url".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn device_requires_both_ip_and_key() {
        let mut config = base_config();
        assert!(config.device().is_none());

        config.device_ip = Some("192.168.2.50".to_string());
        assert!(config.device().is_none());

        config.device_api_key = Some("secret".to_string());
        let (ip, port, key) = config.device().expect("device should be configured");
        assert_eq!(ip, "192.168.2.50");
        assert_eq!(port, DEFAULT_DEVICE_PORT);
        assert_eq!(key, "secret");
    }
}
