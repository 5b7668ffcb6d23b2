//! VWAP Breakout Detector Implementation
//!
//! ## Setup Logic
//! 1. VWAP over the history excluding the current bar
//! 2. Current close above VWAP with a confirmed body -> Buy
//! 3. Current close below VWAP with a confirmed body -> Sell
//! 4. Target at twice the deviation from VWAP, stop at VWAP
//!
//! Confirmation compares the real body against the full high-low range of the
//! bar, which filters out indecisive bars with small bodies relative to their
//! range.

use crate::indicators::{round_to, vwap};
use crate::strategies::Detector;
use crate::{Candle, Side, Signal, Symbol};

use super::config::VwapBreakoutConfig;

/// VWAP Breakout Detector
pub struct VwapBreakoutDetector {
    config: VwapBreakoutConfig,
}

impl VwapBreakoutDetector {
    pub fn new(config: VwapBreakoutConfig) -> Self {
        VwapBreakoutDetector { config }
    }
}

impl Detector for VwapBreakoutDetector {
    fn name(&self) -> &'static str {
        "vwap_breakout"
    }

    fn detect(&self, _symbol: &Symbol, candles: &[Candle]) -> Option<Signal> {
        if candles.len() < self.config.min_history {
            return None;
        }

        let (current, history) = candles.split_last()?;
        let vwap = vwap(history)?;

        let body = (current.close - current.open).abs();
        let range = (current.high - current.low).abs();
        let confirmed = body > self.config.confirmation_multiplier * range;

        let decimals = self.config.price_decimals;

        // Buy is checked before Sell; a bar can never trigger both.
        // Entry stays unrounded, only the derived stop and target are rounded.
        if current.close > vwap && confirmed {
            let entry = current.close;
            Some(Signal {
                side: Side::Buy,
                entry,
                take_profit: round_to(entry + self.config.target_multiplier * (entry - vwap), decimals),
                stop_loss: round_to(vwap, decimals),
            })
        } else if current.close < vwap && confirmed {
            let entry = current.close;
            Some(Signal {
                side: Side::Sell,
                entry,
                take_profit: round_to(entry - self.config.target_multiplier * (vwap - entry), decimals),
                stop_loss: round_to(vwap, decimals),
            })
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn history_bar(i: usize) -> Candle {
        // Typical price (1.2 + 1.0 + 1.1) / 3 on every bar, uniform volume,
        // so the VWAP of the history window is exactly that typical price.
        Candle::new_unchecked(
            Utc::now() - Duration::minutes(15 * (40 - i as i64)),
            1.1,
            1.2,
            1.0,
            1.1,
            1000.0,
        )
    }

    fn history(count: usize) -> Vec<Candle> {
        (0..count).map(history_bar).collect()
    }

    fn history_vwap() -> f64 {
        (1.2 + 1.0 + 1.1) / 3.0
    }

    fn detector() -> VwapBreakoutDetector {
        VwapBreakoutDetector::new(VwapBreakoutConfig::default())
    }

    #[test]
    fn test_short_history_yields_no_setup() {
        let mut candles = history(18);
        // Strongly confirmed breakout bar, still below the 20 bar minimum
        candles.push(Candle::new_unchecked(
            Utc::now(),
            1.1085,
            1.1105,
            1.108,
            1.11,
            1000.0,
        ));

        let signal = detector().detect(&Symbol::new("EUR_USD"), &candles);
        assert!(signal.is_none());
    }

    #[test]
    fn test_zero_volume_history_yields_no_setup() {
        let mut candles: Vec<Candle> = history(25)
            .into_iter()
            .map(|mut c| {
                c.volume = 0.0;
                c
            })
            .collect();
        candles.push(Candle::new_unchecked(
            Utc::now(),
            1.1085,
            1.1105,
            1.108,
            1.11,
            1000.0,
        ));

        let signal = detector().detect(&Symbol::new("EUR_USD"), &candles);
        assert!(signal.is_none());
    }

    #[test]
    fn test_buy_setup_derivation() {
        let vwap = history_vwap();
        let mut candles = history(25);
        // Close 0.01 above VWAP, body 0.0015 vs range 0.0025
        candles.push(Candle::new_unchecked(
            Utc::now(),
            1.1085,
            1.1105,
            1.108,
            1.11,
            1000.0,
        ));

        let signal = detector()
            .detect(&Symbol::new("EUR_USD"), &candles)
            .expect("confirmed breakout above VWAP should produce a setup");

        assert_eq!(signal.side, Side::Buy);
        assert_eq!(signal.entry, 1.11);
        assert_eq!(signal.stop_loss, round_to(vwap, 5));
        assert_eq!(signal.take_profit, round_to(1.11 + 2.0 * (1.11 - vwap), 5));
        assert_eq!(signal.stop_loss, 1.1);
        assert_eq!(signal.take_profit, 1.13);
    }

    #[test]
    fn test_sell_setup_derivation() {
        let vwap = history_vwap();
        let mut candles = history(25);
        // Close 0.01 below VWAP, body 0.0015 vs range 0.0025
        candles.push(Candle::new_unchecked(
            Utc::now(),
            1.0915,
            1.092,
            1.0895,
            1.09,
            1000.0,
        ));

        let signal = detector()
            .detect(&Symbol::new("EUR_USD"), &candles)
            .expect("confirmed breakdown below VWAP should produce a setup");

        assert_eq!(signal.side, Side::Sell);
        assert_eq!(signal.entry, 1.09);
        assert_eq!(signal.stop_loss, round_to(vwap, 5));
        assert_eq!(signal.take_profit, round_to(1.09 - 2.0 * (vwap - 1.09), 5));
        assert_eq!(signal.stop_loss, 1.1);
        assert_eq!(signal.take_profit, 1.07);
    }

    #[test]
    fn test_indecisive_bar_yields_no_setup() {
        let mut candles = history(25);
        // Close well above VWAP but body (0.0005) is under half the range (0.005)
        candles.push(Candle::new_unchecked(
            Utc::now(),
            1.1095,
            1.113,
            1.108,
            1.11,
            1000.0,
        ));

        let signal = detector().detect(&Symbol::new("EUR_USD"), &candles);
        assert!(signal.is_none());
    }

    #[test]
    fn test_body_exactly_at_threshold_is_not_confirmed() {
        let mut candles = history(25);
        // body = 0.5 and range = 1.0 are exactly representable, so
        // body == 0.5 * range holds exactly and the strict inequality fails
        candles.push(Candle::new_unchecked(
            Utc::now(),
            1.0,
            2.0,
            1.0,
            1.5,
            1000.0,
        ));

        let signal = detector().detect(&Symbol::new("EUR_USD"), &candles);
        assert!(signal.is_none());
    }

    #[test]
    fn test_custom_min_history() {
        let config = VwapBreakoutConfig {
            min_history: 30,
            ..Default::default()
        };
        let detector = VwapBreakoutDetector::new(config);

        let mut candles = history(25);
        candles.push(Candle::new_unchecked(
            Utc::now(),
            1.1085,
            1.1105,
            1.108,
            1.11,
            1000.0,
        ));

        // 26 bars satisfies the default but not the raised minimum
        assert!(detector.detect(&Symbol::new("EUR_USD"), &candles).is_none());
    }
}
