//! Market session gate
//!
//! The scheduler skips scan passes outside the trading week. The check is a
//! plain weekday test in UTC: Monday through Friday counts as open.

use chrono::{DateTime, Datelike, Utc};

/// Whether the market is considered open at the given instant
pub fn is_market_open(now: DateTime<Utc>) -> bool {
    now.weekday().num_days_from_monday() < 5
}
