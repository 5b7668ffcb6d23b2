//! Price indicators used by the detection core
//!
//! Only the volume-weighted pieces the scanner needs live here. Every function
//! is a pure single pass over its input slice.

use crate::Candle;

/// Typical price of a single candle: (high + low + close) / 3
pub fn typical_price(candle: &Candle) -> f64 {
    (candle.high + candle.low + candle.close) / 3.0
}

/// Calculate the Volume Weighted Average Price over a candle window.
///
/// Returns `None` for an empty window or when cumulative volume is zero,
/// so callers never divide by zero.
pub fn vwap(candles: &[Candle]) -> Option<f64> {
    let mut cumulative_tp_vol = 0.0;
    let mut cumulative_vol = 0.0;

    for candle in candles {
        cumulative_tp_vol += typical_price(candle) * candle.volume;
        cumulative_vol += candle.volume;
    }

    if cumulative_vol > 0.0 {
        Some(cumulative_tp_vol / cumulative_vol)
    } else {
        None
    }
}

/// Round a price to the given number of decimal places
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}
