//! Single Scan Command
//!
//! Runs exactly one pass over the configured instruments and exits. Useful as
//! an operational smoke test; the market-session gate is deliberately not
//! consulted here.

use anyhow::{Context, Result};
use tracing::info;

use vwap_sentry::discord::DiscordNotifier;
use vwap_sentry::oanda::OandaClient;
use vwap_sentry::scanner::Scanner;
use vwap_sentry::{strategies, Config};

pub fn run(config_path: String) -> Result<()> {
    dotenv::dotenv().ok();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to build tokio runtime")?;

    runtime.block_on(run_async(config_path))
}

async fn run_async(config_path: String) -> Result<()> {
    let config = Config::from_file(&config_path)
        .context(format!("Failed to load config from {}", config_path))?;

    let detector = strategies::create_detector(&config)?;
    let source = OandaClient::from_config(&config.feed)?;
    let notifier = DiscordNotifier::from_config(&config.notifier)?;
    let mut scanner = Scanner::new(config.watch.clone(), detector, source, notifier);

    let report = scanner.run_cycle().await;

    info!(
        "Scan finished: scanned={} signals={} sent={} failures={}",
        report.scanned, report.signals, report.sent, report.failures
    );

    Ok(())
}
