use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

use crate::constants::HISTORY_DAYS;
use crate::error::{AppError, Result};
use crate::models::{HistoryEntry, PairKey, PairView, SpotEntry};
use crate::services::sparkline;

/// External collaborator that retrieves quotes over the network.
///
/// Implementations own their transport concerns (timeouts included); any
/// failure surfaces as a typed error and the cache treats it as a failed
/// refresh.
#[async_trait]
pub trait QuoteSource: Send + Sync {
    async fn fetch_spot(&self, pair: &PairKey) -> Result<Decimal>;

    /// Returns one price per target timestamp, in the same order.
    async fn fetch_history(
        &self,
        pair: &PairKey,
        targets: &[DateTime<Utc>],
    ) -> Result<Vec<Decimal>>;
}

/// Per-pair cache of spot prices and daily history series.
///
/// Spot entries go stale after the configured delay; history entries go
/// stale on calendar-day change. Entries are computed fully before being
/// published into the maps, and refreshes for the same pair are serialized
/// behind a per-pair lock so concurrent requests cannot write conflicting
/// entries.
pub struct QuoteCache {
    delay: Duration,
    spots: RwLock<HashMap<PairKey, SpotEntry>>,
    histories: RwLock<HashMap<PairKey, HistoryEntry>>,
    pair_locks: Mutex<HashMap<PairKey, Arc<Mutex<()>>>>,
}

impl QuoteCache {
    pub fn new(delay_minutes: i64) -> Self {
        Self {
            delay: Duration::minutes(delay_minutes),
            spots: RwLock::new(HashMap::new()),
            histories: RwLock::new(HashMap::new()),
            pair_locks: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the renderable view for a pair, refreshing whatever is stale
    /// through `source` first.
    pub async fn get_view(&self, pair: &PairKey, source: &dyn QuoteSource) -> Result<PairView> {
        self.view_at(pair, source, Utc::now()).await
    }

    async fn view_at(
        &self,
        pair: &PairKey,
        source: &dyn QuoteSource,
        now: DateTime<Utc>,
    ) -> Result<PairView> {
        let lock = self.pair_lock(pair).await;
        let _refresh_guard = lock.lock().await;

        let series = self.current_history(pair, source, now).await?;
        let price = self.current_spot(pair, source, now).await?;

        Ok(PairView {
            price,
            normalized: sparkline::normalize(&series),
        })
    }

    async fn pair_lock(&self, pair: &PairKey) -> Arc<Mutex<()>> {
        let mut locks = self.pair_locks.lock().await;
        locks
            .entry(pair.clone())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    async fn current_history(
        &self,
        pair: &PairKey,
        source: &dyn QuoteSource,
        now: DateTime<Utc>,
    ) -> Result<Vec<Decimal>> {
        let cached = self.histories.read().await.get(pair).cloned();
        if let Some(ref entry) = cached {
            if !entry.is_stale(now) {
                return Ok(entry.series.clone());
            }
        }

        let targets = history_targets(now);
        let fetched = source
            .fetch_history(pair, &targets)
            .await
            .and_then(|series| {
                if series.len() == HISTORY_DAYS {
                    Ok(series)
                } else {
                    Err(AppError::MalformedResponse(format!(
                        "expected {} history points for {}, got {}",
                        HISTORY_DAYS,
                        pair,
                        series.len()
                    )))
                }
            });

        match fetched {
            Ok(series) => {
                let entry = HistoryEntry {
                    series: series.clone(),
                    refreshed_at: now,
                };
                self.histories.write().await.insert(pair.clone(), entry);
                Ok(series)
            }
            // A stale entry is still servable; only a cold cache propagates
            // the failure.
            Err(err) => match cached {
                Some(entry) => {
                    tracing::warn!("History refresh failed for {}, serving stale: {}", pair, err);
                    Ok(entry.series)
                }
                None => Err(err),
            },
        }
    }

    async fn current_spot(
        &self,
        pair: &PairKey,
        source: &dyn QuoteSource,
        now: DateTime<Utc>,
    ) -> Result<Decimal> {
        let cached = self.spots.read().await.get(pair).cloned();
        if let Some(ref entry) = cached {
            if !entry.is_stale(now, self.delay) {
                return Ok(entry.price);
            }
        }

        match source.fetch_spot(pair).await {
            Ok(price) => {
                let entry = SpotEntry {
                    price,
                    fetched_at: now,
                };
                self.spots.write().await.insert(pair.clone(), entry);
                Ok(price)
            }
            Err(err) => match cached {
                Some(entry) => {
                    tracing::warn!("Spot refresh failed for {}, serving stale: {}", pair, err);
                    Ok(entry.price)
                }
                None => Err(err),
            },
        }
    }
}

/// Day-granularity fetch targets, oldest first: 14 days ago through
/// yesterday.
fn history_targets(now: DateTime<Utc>) -> Vec<DateTime<Utc>> {
    (1..=HISTORY_DAYS as i64)
        .rev()
        .map(|days_back| now - Duration::days(days_back))
        .collect()
}
