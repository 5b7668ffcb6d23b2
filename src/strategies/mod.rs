//! Setup detectors
//!
//! A detector classifies one instrument's bar history into at most one trade
//! setup per pass. Detectors are pure: no state is retained between calls,
//! which keeps them trivially testable and lets the scanner own all mutable
//! state.

pub mod vwap_breakout;

pub use vwap_breakout::{VwapBreakoutConfig, VwapBreakoutDetector};

use crate::{Candle, Config, Signal, Symbol};
use anyhow::Result;

/// Contract every setup detector must implement.
///
/// `detect` returns `Some(Signal)` for a confirmed setup and `None`
/// otherwise; insufficient history and an undefined indicator are "no setup",
/// never errors.
pub trait Detector: Send + Sync {
    /// Detector identifier (must match the config's detector_name)
    fn name(&self) -> &'static str;

    /// Classify the bar sequence (oldest first) for one instrument
    fn detect(&self, symbol: &Symbol, candles: &[Candle]) -> Option<Signal>;
}

/// Create a detector from configuration
pub fn create_detector(config: &Config) -> Result<Box<dyn Detector>> {
    match config.detector_name.as_str() {
        "vwap_breakout" => vwap_breakout::create(config),
        other => anyhow::bail!("Unknown detector: '{}'. Available: vwap_breakout", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_detector_from_default_config() {
        let config = Config::default();
        let detector = create_detector(&config).unwrap();
        assert_eq!(detector.name(), "vwap_breakout");
    }

    #[test]
    fn test_create_detector_rejects_unknown_name() {
        let config = Config {
            detector_name: "does_not_exist".to_string(),
            ..Default::default()
        };
        assert!(create_detector(&config).is_err());
    }
}
