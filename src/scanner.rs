//! Scan cycle orchestration
//!
//! One pass sweeps the configured instruments: fetch bar history, run the
//! detector, consult the dedup journal, deliver the alert. Failures on one
//! instrument never stop the pass; the journal is written only after a
//! delivery succeeds, so a failed delivery leaves the same setup eligible on
//! the next pass.
//!
//! The cycle performs no sleeping or interval control; cadence belongs to the
//! scheduler in the `run` command.

use anyhow::Result;
use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::dedup::SignalJournal;
use crate::strategies::Detector;
use crate::{Candle, Signal, Symbol, WatchConfig};

/// Bar history provider for one instrument, oldest bar first
#[async_trait]
pub trait BarSource {
    async fn fetch_candles(
        &self,
        instrument: &Symbol,
        granularity: &str,
        count: u32,
    ) -> Result<Vec<Candle>>;
}

/// Outbound alert delivery
#[async_trait]
pub trait Notifier {
    async fn notify(&self, instrument: &Symbol, signal: &Signal) -> Result<()>;
}

/// Summary of a single scan pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CycleReport {
    /// Instruments whose bar history was fetched and inspected
    pub scanned: usize,
    /// Setups detected, whether or not they were new
    pub signals: usize,
    /// Alerts delivered and recorded in the journal
    pub sent: usize,
    /// Instruments skipped on fetch or delivery failure
    pub failures: usize,
}

/// Sweeps instruments and turns confirmed setups into alerts
pub struct Scanner<S, N> {
    watch: WatchConfig,
    detector: Box<dyn Detector>,
    source: S,
    notifier: N,
    journal: SignalJournal,
    cycle_count: u64,
}

impl<S: BarSource, N: Notifier> Scanner<S, N> {
    pub fn new(watch: WatchConfig, detector: Box<dyn Detector>, source: S, notifier: N) -> Self {
        Scanner {
            watch,
            detector,
            source,
            notifier,
            journal: SignalJournal::new(),
            cycle_count: 0,
        }
    }

    /// Number of scan passes run so far
    pub fn cycle_count(&self) -> u64 {
        self.cycle_count
    }

    /// Read access to the dedup journal, mainly for tests and diagnostics
    pub fn journal(&self) -> &SignalJournal {
        &self.journal
    }

    /// Run one pass over every configured instrument
    pub async fn run_cycle(&mut self) -> CycleReport {
        self.cycle_count += 1;
        let mut report = CycleReport::default();

        info!("📡 Scan cycle {} started", self.cycle_count);

        for symbol in self.watch.symbols() {
            let candles = match self
                .source
                .fetch_candles(&symbol, &self.watch.granularity, self.watch.candle_count)
                .await
            {
                Ok(candles) => candles,
                Err(e) => {
                    warn!("Failed to fetch candles for {}: {:#}", symbol, e);
                    report.failures += 1;
                    continue;
                }
            };

            report.scanned += 1;

            let Some(signal) = self.detector.detect(&symbol, &candles) else {
                debug!("No setup on {}", symbol);
                continue;
            };

            report.signals += 1;

            if !self.journal.is_new(&symbol, &signal) {
                debug!("No new signal for {} (entry {} already sent)", symbol, signal.entry);
                continue;
            }

            match self.notifier.notify(&symbol, &signal).await {
                Ok(()) => {
                    self.journal.record(&symbol, &signal);
                    report.sent += 1;
                    info!(
                        "✅ {} signal sent for {}: entry={} tp={} sl={}",
                        signal.side, symbol, signal.entry, signal.take_profit, signal.stop_loss
                    );
                }
                Err(e) => {
                    // Journal untouched: the setup stays eligible next pass
                    warn!("Failed to deliver {} alert for {}: {:#}", signal.side, symbol, e);
                    report.failures += 1;
                }
            }
        }

        info!(
            "Cycle {} complete: scanned={} signals={} sent={} failures={}",
            self.cycle_count, report.scanned, report.signals, report.sent, report.failures
        );

        report
    }
}
