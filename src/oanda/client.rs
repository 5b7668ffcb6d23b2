//! OANDA candles client
//!
//! Fetches mid-point candle history for an instrument. Authentication is a
//! Bearer token; no request signing is involved.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

use super::types::CandleResponse;
use crate::config::FeedConfig;
use crate::scanner::BarSource;
use crate::{Candle, Symbol};

/// OANDA v20 API client
#[derive(Debug, Clone)]
pub struct OandaClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl OandaClient {
    /// Create a new client for the given host and token
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        OandaClient {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Create a client from the feed configuration
    pub fn from_config(config: &FeedConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .context("OANDA API key not configured (set OANDA_API_KEY)")?;

        Ok(Self::new(
            config.base_url.clone(),
            api_key,
            Duration::from_secs(config.timeout_secs),
        ))
    }

    /// Fetch mid-point candles for an instrument, oldest first
    ///
    /// # Arguments
    /// * `instrument` - OANDA instrument name (e.g., "EUR_USD")
    /// * `granularity` - Bar granularity label (e.g., "M15")
    /// * `count` - Number of candles to request
    pub async fn get_candles(
        &self,
        instrument: &str,
        granularity: &str,
        count: u32,
    ) -> Result<Vec<Candle>> {
        let url = format!("{}/v3/instruments/{}/candles", self.base_url, instrument);

        let params = [
            ("count", count.to_string()),
            ("granularity", granularity.to_string()),
            ("price", "M".to_string()),
        ];

        debug!(
            "Fetching candles: instrument={}, granularity={}, count={}",
            instrument, granularity, count
        );

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.api_key)
            .query(&params)
            .send()
            .await
            .context("Failed to send request to OANDA")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("OANDA API error {}: {}", status, body);
        }

        let parsed: CandleResponse = response
            .json()
            .await
            .context("Failed to parse OANDA response")?;

        let mut candles = Vec::with_capacity(parsed.candles.len());
        for raw in parsed.candles {
            match Candle::try_from(raw) {
                Ok(candle) => candles.push(candle),
                Err(e) => warn!("Dropping malformed candle for {}: {:#}", instrument, e),
            }
        }

        Ok(candles)
    }
}

#[async_trait]
impl BarSource for OandaClient {
    async fn fetch_candles(
        &self,
        instrument: &Symbol,
        granularity: &str,
        count: u32,
    ) -> Result<Vec<Candle>> {
        self.get_candles(instrument.as_str(), granularity, count)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_requires_api_key() {
        let config = FeedConfig::default();
        assert!(OandaClient::from_config(&config).is_err());

        let config = FeedConfig {
            api_key: Some("token".to_string()),
            ..Default::default()
        };
        assert!(OandaClient::from_config(&config).is_ok());
    }
}
