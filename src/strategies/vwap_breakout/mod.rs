//! VWAP Breakout Detector
//!
//! Momentum-confirmation setup relative to the session VWAP.

mod config;
mod detector;

pub use config::VwapBreakoutConfig;
pub use detector::VwapBreakoutDetector;

use crate::{Config, Detector};
use anyhow::Result;

/// Create detector from config (called by the factory)
pub fn create(config: &Config) -> Result<Box<dyn Detector>> {
    let detector_config: VwapBreakoutConfig = serde_json::from_value(config.detector.clone())
        .map_err(|e| anyhow::anyhow!("Failed to parse vwap_breakout config: {}", e))?;
    Ok(Box::new(VwapBreakoutDetector::new(detector_config)))
}
