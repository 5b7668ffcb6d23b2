//! Discord webhook client
//!
//! Sends one embed per signal. Delivery is fire-and-forget per pass: a failed
//! post is reported to the caller and never retried here.

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{Duration, Utc};
use reqwest::Client;
use serde::Serialize;

use crate::config::NotifierConfig;
use crate::scanner::Notifier;
use crate::{Side, Signal, Symbol};

/// Embed sidebar color for Buy signals (green)
const BUY_COLOR: u32 = 3_066_993;

/// Embed sidebar color for Sell signals (red)
const SELL_COLOR: u32 = 15_158_332;

#[derive(Debug, Serialize)]
struct WebhookPayload {
    embeds: Vec<Embed>,
}

#[derive(Debug, Serialize)]
struct Embed {
    title: String,
    description: String,
    color: u32,
    timestamp: String,
}

/// Discord webhook notifier
#[derive(Debug, Clone)]
pub struct DiscordNotifier {
    client: Client,
    webhook_url: String,
    timezone_offset_hours: i64,
}

impl DiscordNotifier {
    pub fn new(webhook_url: impl Into<String>, timezone_offset_hours: i64) -> Self {
        DiscordNotifier {
            client: Client::new(),
            webhook_url: webhook_url.into(),
            timezone_offset_hours,
        }
    }

    /// Create a notifier from the delivery configuration
    pub fn from_config(config: &NotifierConfig) -> Result<Self> {
        let webhook_url = config
            .webhook_url
            .clone()
            .context("Discord webhook URL not configured (set DISCORD_WEBHOOK_URL)")?;

        Ok(Self::new(webhook_url, config.timezone_offset_hours))
    }

    /// TradingView chart link for the instrument
    fn chart_url(instrument: &Symbol) -> String {
        format!(
            "https://www.tradingview.com/chart/?symbol=OANDA:{}",
            instrument.as_str().replace('_', "")
        )
    }

    fn build_embed(&self, instrument: &Symbol, signal: &Signal) -> Embed {
        let timestamp = Utc::now() + Duration::hours(self.timezone_offset_hours);

        Embed {
            title: format!("{} Signal on {}", signal.side, instrument),
            description: format!(
                "📍 **Entry**: `{}`\n🎯 **TP**: `{}`\n🛑 **SL**: `{}`\n\n[📈 Chart]({})",
                signal.entry,
                signal.take_profit,
                signal.stop_loss,
                Self::chart_url(instrument)
            ),
            color: match signal.side {
                Side::Buy => BUY_COLOR,
                Side::Sell => SELL_COLOR,
            },
            timestamp: timestamp.to_rfc3339(),
        }
    }
}

#[async_trait]
impl Notifier for DiscordNotifier {
    async fn notify(&self, instrument: &Symbol, signal: &Signal) -> Result<()> {
        let payload = WebhookPayload {
            embeds: vec![self.build_embed(instrument, signal)],
        };

        let response = self
            .client
            .post(&self.webhook_url)
            .json(&payload)
            .send()
            .await
            .context("Failed to post webhook")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Discord webhook error {}: {}", status, body);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signal(side: Side) -> Signal {
        Signal {
            side,
            entry: 1.11,
            take_profit: 1.13,
            stop_loss: 1.1,
        }
    }

    #[test]
    fn test_chart_url_strips_underscore() {
        let url = DiscordNotifier::chart_url(&Symbol::new("EUR_USD"));
        assert_eq!(url, "https://www.tradingview.com/chart/?symbol=OANDA:EURUSD");
    }

    #[test]
    fn test_buy_embed_contents() {
        let notifier = DiscordNotifier::new("https://example.invalid/webhook", 0);
        let embed = notifier.build_embed(&Symbol::new("EUR_USD"), &signal(Side::Buy));

        assert_eq!(embed.title, "Buy Signal on EUR_USD");
        assert_eq!(embed.color, BUY_COLOR);
        assert!(embed.description.contains("`1.11`"));
        assert!(embed.description.contains("`1.13`"));
        assert!(embed.description.contains("`1.1`"));
        assert!(embed.description.contains("OANDA:EURUSD"));
    }

    #[test]
    fn test_sell_embed_color() {
        let notifier = DiscordNotifier::new("https://example.invalid/webhook", 0);
        let embed = notifier.build_embed(&Symbol::new("GBP_USD"), &signal(Side::Sell));

        assert_eq!(embed.title, "Sell Signal on GBP_USD");
        assert_eq!(embed.color, SELL_COLOR);
    }
}
