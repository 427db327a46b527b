use std::time::Duration;

use crate::constants::{HTTP_CONNECT_TIMEOUT_SECS, HTTP_REQUEST_TIMEOUT_SECS};
use crate::error::{AppError, Result};
use crate::models::Notification;

/// Push client for a LaMetric Time device on the local network.
///
/// The device terminates TLS with a self-signed certificate, so certificate
/// validation is disabled for this client only.
#[derive(Debug, Clone)]
pub struct LaMetricClient {
    ip: String,
    port: u16,
    api_key: String,
}

impl LaMetricClient {
    pub fn new(ip: String, port: u16, api_key: String) -> Self {
        Self { ip, port, api_key }
    }

    fn notifications_url(&self) -> String {
        format!(
            "https://{}:{}/api/v2/device/notifications",
            self.ip, self.port
        )
    }

    pub async fn send(&self, notification: &Notification) -> Result<()> {
        let client = reqwest::Client::builder()
            .danger_accept_invalid_certs(true)
            .connect_timeout(Duration::from_secs(HTTP_CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(HTTP_REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| AppError::Internal(format!("HTTP client init failed: {}", e)))?;

        let response = client
            .post(self.notifications_url())
            .basic_auth("dev", Some(&self.api_key))
            .json(notification)
            .send()
            .await
            .map_err(|e| AppError::DeviceUnreachable(format!("device push failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::DeviceUnreachable(format!(
                "device returned {}: {}",
                status, body
            )));
        }

        tracing::info!("Notification delivered to device at {}", self.ip);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notifications_url_targets_the_device_api() {
        let client = LaMetricClient::new("192.168.2.50".to_string(), 4343, "key".to_string());
        assert_eq!(
            client.notifications_url(),
            "https://192.168.2.50:4343/api/v2/device/notifications"
        );
    }
}
