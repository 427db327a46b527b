use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use std::fmt;

/// Ordered currency pair key: base before quote. A pair and its inverse are
/// distinct cache keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PairKey {
    pub base: String,
    pub quote: String,
}

impl PairKey {
    pub fn new(base: impl Into<String>, quote: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            quote: quote.into(),
        }
    }
}

impl fmt::Display for PairKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.base, self.quote)
    }
}

/// Last fetched spot price for a pair. Replaced whole on refresh.
#[derive(Debug, Clone)]
pub struct SpotEntry {
    pub price: Decimal,
    pub fetched_at: DateTime<Utc>,
}

impl SpotEntry {
    pub fn is_stale(&self, now: DateTime<Utc>, delay: Duration) -> bool {
        now.signed_duration_since(self.fetched_at) >= delay
    }
}

/// Daily history series for a pair: oldest to newest, index 0 is 14 days
/// old, the last index is yesterday. Replaced whole on refresh.
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub series: Vec<Decimal>,
    pub refreshed_at: DateTime<Utc>,
}

impl HistoryEntry {
    /// History is refreshed once per calendar day.
    pub fn is_stale(&self, now: DateTime<Utc>) -> bool {
        now.date_naive() != self.refreshed_at.date_naive()
    }
}

/// The renderable answer for one pair: current spot price plus the history
/// series rescaled for the sparkline.
#[derive(Debug, Clone)]
pub struct PairView {
    pub price: Decimal,
    pub normalized: Vec<f64>,
}
