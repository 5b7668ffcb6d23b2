//! Continuous Scan Command
//!
//! Runs the scheduler loop: a tick source invokes one scan pass per interval,
//! the market-session gate skips closed-market ticks, and Ctrl+C shuts the
//! loop down cleanly. A pass still in flight defers the next tick instead of
//! overlapping it.

use anyhow::{Context, Result};
use chrono::Utc;
use std::time::Duration;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{error, info};

use vwap_sentry::discord::DiscordNotifier;
use vwap_sentry::oanda::OandaClient;
use vwap_sentry::scanner::Scanner;
use vwap_sentry::{session, strategies, Config};

pub fn run(config_path: String, interval_secs: Option<u64>, no_server: bool) -> Result<()> {
    dotenv::dotenv().ok();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to build tokio runtime")?;

    runtime.block_on(run_async(config_path, interval_secs, no_server))
}

async fn run_async(config_path: String, interval_secs: Option<u64>, no_server: bool) -> Result<()> {
    let mut config = Config::from_file(&config_path)
        .context(format!("Failed to load config from {}", config_path))?;

    if let Some(secs) = interval_secs {
        config.scheduler.interval_secs = secs;
    }

    info!("VWAP signal scanner starting");
    info!("Pairs: {}", config.watch.pairs.join(", "));
    info!("Granularity: {}", config.watch.granularity);
    info!("Detector: {}", config.detector_name);
    info!("Scan interval: {}s", config.scheduler.interval_secs);

    let detector = strategies::create_detector(&config)?;
    let source = OandaClient::from_config(&config.feed)?;
    let notifier = DiscordNotifier::from_config(&config.notifier)?;
    let mut scanner = Scanner::new(config.watch.clone(), detector, source, notifier);

    if !no_server {
        let bind = config.server.bind.clone();
        tokio::spawn(async move {
            if let Err(e) = vwap_sentry::server::serve(&bind).await {
                error!("Liveness server error: {:#}", e);
            }
        });
    }

    let mut tick = interval(Duration::from_secs(config.scheduler.interval_secs));
    tick.set_missed_tick_behavior(MissedTickBehavior::Delay);

    info!("Starting scan loop...");

    loop {
        tokio::select! {
            _ = tick.tick() => {
                if !session::is_market_open(Utc::now()) {
                    info!("Market closed");
                    continue;
                }

                scanner.run_cycle().await;
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Received Ctrl+C, shutting down...");
                break;
            }
        }
    }

    info!("Scanner stopped after {} cycles", scanner.cycle_count());
    Ok(())
}
