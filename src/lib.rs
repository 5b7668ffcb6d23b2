//! VWAP Signal Scanner
//!
//! Periodically inspects recent price history for a small set of
//! instruments, computes a volume-weighted average price, detects a
//! momentum-confirmation breakout setup relative to it, and announces each
//! distinct setup exactly once over a Discord webhook.
//!
//! The detection core (indicator, detector, dedup journal, scan cycle) is
//! pure and synchronous; the OANDA feed, webhook delivery, liveness endpoint
//! and tick scheduler sit around it as replaceable collaborators.
//!
//! ## Example (one detection pass against a custom feed)
//! ```no_run
//! use vwap_sentry::discord::DiscordNotifier;
//! use vwap_sentry::oanda::OandaClient;
//! use vwap_sentry::scanner::Scanner;
//! use vwap_sentry::{strategies, Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::default();
//!     let detector = strategies::create_detector(&config)?;
//!     let source = OandaClient::from_config(&config.feed)?;
//!     let notifier = DiscordNotifier::from_config(&config.notifier)?;
//!
//!     let mut scanner = Scanner::new(config.watch, detector, source, notifier);
//!     let report = scanner.run_cycle().await;
//!     println!("sent {} alerts", report.sent);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod dedup;
pub mod discord;
pub mod indicators;
pub mod oanda;
pub mod scanner;
pub mod server;
pub mod session;
pub mod strategies;
pub mod types;

pub use config::{Config, FeedConfig, NotifierConfig, SchedulerConfig, ServerConfig, WatchConfig};
pub use dedup::SignalJournal;
pub use scanner::{BarSource, CycleReport, Notifier, Scanner};
pub use strategies::Detector;
pub use types::*;

// Re-export the collaborator clients for convenience
pub use discord::DiscordNotifier;
pub use oanda::OandaClient;
