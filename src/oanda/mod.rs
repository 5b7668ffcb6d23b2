//! OANDA v20 REST API client for fetching candle data

pub mod client;
pub mod types;

pub use client::OandaClient;
pub use types::{CandleResponse, MidPrices, OandaCandle};
