//! Configuration management
//!
//! Handles loading and parsing of JSON configuration files with environment
//! variable support for the feed token and webhook URL.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::Symbol;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub watch: WatchConfig,
    #[serde(default)]
    pub feed: FeedConfig,
    #[serde(default)]
    pub notifier: NotifierConfig,
    #[serde(default)]
    pub scheduler: SchedulerConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default = "default_detector_name")]
    pub detector_name: String,
    /// Detector parameter block, parsed by the selected detector's factory
    #[serde(default = "default_detector_params")]
    pub detector: serde_json::Value,
}

fn default_detector_name() -> String {
    "vwap_breakout".to_string()
}

fn default_detector_params() -> serde_json::Value {
    serde_json::json!({})
}

impl Config {
    /// Load configuration from JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref()).context("Failed to read config file")?;
        let mut config: Config =
            serde_json::from_str(&contents).context("Failed to parse config JSON")?;
        config.apply_env();
        Ok(config)
    }

    /// Overlay credentials and operator settings from the environment
    pub fn apply_env(&mut self) {
        if let Ok(api_key) = std::env::var("OANDA_API_KEY") {
            self.feed.api_key = Some(api_key);
        }
        if let Ok(url) = std::env::var("DISCORD_WEBHOOK_URL") {
            self.notifier.webhook_url = Some(url);
        }
        if let Ok(offset) = std::env::var("TIMEZONE_OFFSET") {
            if let Ok(hours) = offset.parse() {
                self.notifier.timezone_offset_hours = hours;
            }
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            watch: WatchConfig::default(),
            feed: FeedConfig::default(),
            notifier: NotifierConfig::default(),
            scheduler: SchedulerConfig::default(),
            server: ServerConfig::default(),
            detector_name: default_detector_name(),
            detector: default_detector_params(),
        }
    }
}

/// Instruments to scan and the bar granularity to request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchConfig {
    pub pairs: Vec<String>,
    /// Bar granularity label understood by the feed (e.g. "M15")
    pub granularity: String,
    /// Bars requested per instrument per pass
    pub candle_count: u32,
}

impl Default for WatchConfig {
    fn default() -> Self {
        WatchConfig {
            pairs: vec![
                "GBP_USD".to_string(),
                "EUR_USD".to_string(),
                "XAU_USD".to_string(),
            ],
            granularity: "M15".to_string(),
            candle_count: 100,
        }
    }
}

impl WatchConfig {
    pub fn symbols(&self) -> Vec<Symbol> {
        self.pairs.iter().map(|s| Symbol::new(s.clone())).collect()
    }
}

/// Price feed connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for FeedConfig {
    fn default() -> Self {
        FeedConfig {
            api_key: None,
            base_url: "https://api-fxpractice.oanda.com".to_string(),
            timeout_secs: 30,
        }
    }
}

/// Webhook delivery settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotifierConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
    /// Hour offset applied to embed timestamps for operator-local display
    pub timezone_offset_hours: i64,
}

impl Default for NotifierConfig {
    fn default() -> Self {
        NotifierConfig {
            webhook_url: None,
            timezone_offset_hours: 0,
        }
    }
}

/// Scan cadence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// Seconds between scheduler ticks; closed-market ticks are skipped
    pub interval_secs: u64,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        SchedulerConfig { interval_secs: 300 }
    }
}

/// Liveness endpoint settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            bind: "0.0.0.0:5000".to_string(),
        }
    }
}
