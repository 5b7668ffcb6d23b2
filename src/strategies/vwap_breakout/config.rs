//! VWAP Breakout Detector Configuration

use serde::{Deserialize, Serialize};

/// VWAP Breakout Detector Configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VwapBreakoutConfig {
    /// Minimum bars required before a setup is considered (default: 20)
    pub min_history: usize,
    /// Real-body fraction of the high-low range that confirms the bar (default: 0.5)
    pub confirmation_multiplier: f64,
    /// Target distance as a multiple of the entry's deviation from VWAP (default: 2.0)
    pub target_multiplier: f64,
    /// Decimal places for stop and target prices (default: 5)
    pub price_decimals: u32,
}

impl Default for VwapBreakoutConfig {
    fn default() -> Self {
        VwapBreakoutConfig {
            min_history: 20,
            confirmation_multiplier: 0.5,
            target_multiplier: 2.0,
            price_decimals: 5,
        }
    }
}
