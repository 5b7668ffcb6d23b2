//! Signal deduplication
//!
//! Tracks the entry price of the last alert sent per instrument so an
//! unchanged setup is announced once. The journal is an explicitly owned
//! value handed to the scanner, never a process-wide global, which keeps
//! scan cycles testable in isolation.

use std::collections::HashMap;

use crate::{Signal, Symbol};

/// Per-instrument record of the last notified entry price.
///
/// State lives in memory only and starts empty on every process start.
/// Entries are overwritten, never pruned; the map is bounded by the
/// configured instrument list.
#[derive(Debug, Default)]
pub struct SignalJournal {
    last_entries: HashMap<Symbol, f64>,
}

impl SignalJournal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether this signal differs from the last one notified for the
    /// instrument. Exact float equality on the entry price: a recomputed
    /// identical entry is suppressed, any different entry re-triggers.
    pub fn is_new(&self, symbol: &Symbol, signal: &Signal) -> bool {
        match self.last_entries.get(symbol) {
            Some(&last_entry) => last_entry != signal.entry,
            None => true,
        }
    }

    /// Record the signal as notified, overwriting any previous entry.
    pub fn record(&mut self, symbol: &Symbol, signal: &Signal) {
        self.last_entries.insert(symbol.clone(), signal.entry);
    }

    pub fn len(&self) -> usize {
        self.last_entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.last_entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Side;

    fn signal(entry: f64) -> Signal {
        Signal {
            side: Side::Buy,
            entry,
            take_profit: entry + 0.002,
            stop_loss: entry - 0.001,
        }
    }

    #[test]
    fn test_first_signal_is_new() {
        let journal = SignalJournal::new();
        let symbol = Symbol::new("EUR_USD");

        assert!(journal.is_new(&symbol, &signal(1.1)));
        assert!(journal.is_empty());
    }

    #[test]
    fn test_identical_entry_is_suppressed_then_different_retriggers() {
        let mut journal = SignalJournal::new();
        let symbol = Symbol::new("EUR_USD");

        let first = signal(1.1);
        assert!(journal.is_new(&symbol, &first));
        journal.record(&symbol, &first);

        // Same entry price recomputed on the next pass
        assert!(!journal.is_new(&symbol, &signal(1.1)));

        // Any different entry, however small the difference
        assert!(journal.is_new(&symbol, &signal(1.10001)));
    }

    #[test]
    fn test_record_overwrites() {
        let mut journal = SignalJournal::new();
        let symbol = Symbol::new("GBP_USD");

        journal.record(&symbol, &signal(1.25));
        journal.record(&symbol, &signal(1.26));

        assert_eq!(journal.len(), 1);
        assert!(!journal.is_new(&symbol, &signal(1.26)));
        assert!(journal.is_new(&symbol, &signal(1.25)));
    }

    #[test]
    fn test_instruments_are_tracked_independently() {
        let mut journal = SignalJournal::new();
        let eur = Symbol::new("EUR_USD");
        let gbp = Symbol::new("GBP_USD");

        journal.record(&eur, &signal(1.1));

        assert!(!journal.is_new(&eur, &signal(1.1)));
        assert!(journal.is_new(&gbp, &signal(1.1)));
    }
}
