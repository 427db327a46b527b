use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures_util::future::try_join_all;
use rust_decimal::Decimal;
use serde_json::Value;
use std::time::Duration;
use url::Url;

use crate::constants::{HTTP_CONNECT_TIMEOUT_SECS, HTTP_REQUEST_TIMEOUT_SECS};
use crate::error::{AppError, Result};
use crate::models::PairKey;
use crate::services::QuoteSource;

/// Quote source backed by the public CryptoCompare min-api.
///
/// Spot: `GET /price?fsym=..&tsyms=..`, body keyed by the quote symbol.
/// History: `GET /pricehistorical?fsym=..&tsyms=..&ts=..` per target day,
/// body keyed `{base: {quote: price}}`.
#[derive(Debug, Clone)]
pub struct CryptoCompareClient {
    api_url: String,
}

impl CryptoCompareClient {
    pub fn new(api_url: String) -> Self {
        Self { api_url }
    }

    async fn get_json(&self, path: &str, params: &[(&str, String)]) -> Result<Value> {
        let mut url = Url::parse(&format!(
            "{}/{}",
            self.api_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        ))
        .map_err(|e| AppError::Internal(format!("Invalid quote API URL: {}", e)))?;

        {
            let mut query = url.query_pairs_mut();
            for (key, value) in params {
                query.append_pair(key, value);
            }
        }

        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(HTTP_CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(HTTP_REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| AppError::Internal(format!("HTTP client init failed: {}", e)))?;

        let response = client
            .get(url)
            .send()
            .await
            .map_err(|e| AppError::FetchFailure(format!("quote request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::FetchFailure(format!(
                "quote source returned {}: {}",
                status, body
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| AppError::MalformedResponse(format!("quote body parse failed: {}", e)))?;

        reject_error_body(&body)?;
        Ok(body)
    }

    async fn historical_point(&self, pair: &PairKey, target: DateTime<Utc>) -> Result<Decimal> {
        let body = self
            .get_json(
                "pricehistorical",
                &[
                    ("fsym", pair.base.clone()),
                    ("tsyms", pair.quote.clone()),
                    ("ts", target.timestamp().to_string()),
                ],
            )
            .await?;
        historical_price(&body, &pair.base, &pair.quote)
    }
}

#[async_trait]
impl QuoteSource for CryptoCompareClient {
    async fn fetch_spot(&self, pair: &PairKey) -> Result<Decimal> {
        let body = self
            .get_json(
                "price",
                &[("fsym", pair.base.clone()), ("tsyms", pair.quote.clone())],
            )
            .await?;
        spot_price(&body, &pair.quote)
    }

    async fn fetch_history(
        &self,
        pair: &PairKey,
        targets: &[DateTime<Utc>],
    ) -> Result<Vec<Decimal>> {
        // One request per day; any single point failing fails the batch.
        let fetches = targets
            .iter()
            .map(|target| self.historical_point(pair, *target));
        try_join_all(fetches).await
    }
}

/// CryptoCompare reports some failures as 200 bodies with a Response=Error
/// envelope.
fn reject_error_body(body: &Value) -> Result<()> {
    if body.get("Response").and_then(Value::as_str) == Some("Error") {
        let message = body
            .get("Message")
            .and_then(Value::as_str)
            .unwrap_or("unknown quote source error");
        return Err(AppError::MalformedResponse(message.to_string()));
    }
    Ok(())
}

fn spot_price(body: &Value, quote: &str) -> Result<Decimal> {
    let value = body.get(quote).ok_or_else(|| {
        AppError::MalformedResponse(format!("missing `{}` in spot response", quote))
    })?;
    decimal_value(value, quote)
}

fn historical_price(body: &Value, base: &str, quote: &str) -> Result<Decimal> {
    let value = body
        .get(base)
        .and_then(|inner| inner.get(quote))
        .ok_or_else(|| {
            AppError::MalformedResponse(format!(
                "missing `{}.{}` in historical response",
                base, quote
            ))
        })?;
    decimal_value(value, quote)
}

fn decimal_value(value: &Value, key: &str) -> Result<Decimal> {
    match value {
        // Parse the number's own rendering, not an f64 round-trip
        Value::Number(number) => number.to_string().parse::<Decimal>().map_err(|e| {
            AppError::MalformedResponse(format!("non-numeric `{}` value: {}", key, e))
        }),
        other => Err(AppError::MalformedResponse(format!(
            "non-numeric `{}` value: {}",
            key, other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn spot_price_reads_the_quote_key() {
        let body = json!({"USD": 3000.25});
        let price = spot_price(&body, "USD").expect("valid body");
        assert_eq!(price, "3000.25".parse::<Decimal>().expect("decimal"));
    }

    #[test]
    fn spot_price_missing_key_is_malformed() {
        let body = json!({"EUR": 2800.0});
        let err = spot_price(&body, "USD").expect_err("missing key");
        assert!(matches!(err, AppError::MalformedResponse(_)));
    }

    #[test]
    fn spot_price_non_numeric_value_is_malformed() {
        let body = json!({"USD": "three thousand"});
        let err = spot_price(&body, "USD").expect_err("non-numeric value");
        assert!(matches!(err, AppError::MalformedResponse(_)));
    }

    #[test]
    fn historical_price_reads_the_nested_keys() {
        let body = json!({"ETH": {"USD": 2950.5}});
        let price = historical_price(&body, "ETH", "USD").expect("valid body");
        assert_eq!(price, "2950.5".parse::<Decimal>().expect("decimal"));
    }

    #[test]
    fn historical_price_missing_base_is_malformed() {
        let body = json!({"BTC": {"USD": 40000.0}});
        let err = historical_price(&body, "ETH", "USD").expect_err("missing base");
        assert!(matches!(err, AppError::MalformedResponse(_)));
    }

    #[test]
    fn error_envelope_is_rejected_even_with_status_200() {
        let body = json!({
            "Response": "Error",
            "Message": "There is no data for the symbol XYZ"
        });
        let err = reject_error_body(&body).expect_err("error envelope");
        match err {
            AppError::MalformedResponse(message) => {
                assert!(message.contains("no data for the symbol"))
            }
            other => panic!("expected MalformedResponse, got {:?}", other),
        }
    }

    #[test]
    fn plain_bodies_pass_the_error_check() {
        assert!(reject_error_body(&json!({"USD": 1.0})).is_ok());
    }
}
