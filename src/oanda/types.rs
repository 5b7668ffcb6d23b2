//! OANDA v20 API response types
//!
//! Candle prices arrive as JSON strings on the wire; conversion into the
//! internal `Candle` parses and validates them.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::Candle;

/// Response body of the instrument candles endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct CandleResponse {
    pub instrument: String,
    pub granularity: String,
    #[serde(default)]
    pub candles: Vec<OandaCandle>,
}

/// One candlestick as returned by the API
#[derive(Debug, Clone, Deserialize)]
pub struct OandaCandle {
    #[serde(default)]
    pub complete: bool,
    pub volume: f64,
    pub time: String,
    pub mid: MidPrices,
}

/// Mid-point OHLC prices, string-encoded on the wire
#[derive(Debug, Clone, Deserialize)]
pub struct MidPrices {
    pub o: String,
    pub h: String,
    pub l: String,
    pub c: String,
}

impl TryFrom<OandaCandle> for Candle {
    type Error = anyhow::Error;

    fn try_from(raw: OandaCandle) -> Result<Self> {
        let datetime = raw
            .time
            .parse::<DateTime<Utc>>()
            .unwrap_or_else(|_| Utc::now());

        let open: f64 = raw.mid.o.parse().context("Failed to parse open price")?;
        let high: f64 = raw.mid.h.parse().context("Failed to parse high price")?;
        let low: f64 = raw.mid.l.parse().context("Failed to parse low price")?;
        let close: f64 = raw.mid.c.parse().context("Failed to parse close price")?;

        Candle::new(datetime, open, high, low, close, raw.volume).map_err(Into::into)
    }
}
