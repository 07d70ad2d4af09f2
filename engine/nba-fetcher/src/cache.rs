use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;

use crate::error::Result;
use crate::roster::{RosterDirectory, RosterEntry};

/// Time-bounded, per-season roster cache in front of another directory.
///
/// A zero TTL disables caching. Failed fetches are never stored.
pub struct CachedRosterDirectory<D> {
    inner: D,
    ttl: Duration,
    entries: Mutex<HashMap<String, (Instant, Vec<RosterEntry>)>>,
}

impl<D: RosterDirectory> CachedRosterDirectory<D> {
    pub fn new(inner: D, ttl: Duration) -> Self {
        Self {
            inner,
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    fn cached(&self, season: &str) -> Option<Vec<RosterEntry>> {
        let entries = self.entries.lock();
        let (fetched_at, roster) = entries.get(season)?;
        (fetched_at.elapsed() < self.ttl).then(|| roster.clone())
    }

    /// Drop every cached roster
    pub fn invalidate(&self) {
        self.entries.lock().clear();
    }
}

#[async_trait]
impl<D: RosterDirectory> RosterDirectory for CachedRosterDirectory<D> {
    async fn fetch_roster(&self, season: &str) -> Result<Vec<RosterEntry>> {
        if self.ttl.is_zero() {
            return self.inner.fetch_roster(season).await;
        }

        if let Some(roster) = self.cached(season) {
            debug!("Roster cache hit for {}", season);
            return Ok(roster);
        }

        let roster = self.inner.fetch_roster(season).await?;
        self.entries
            .lock()
            .insert(season.to_string(), (Instant::now(), roster.clone()));
        Ok(roster)
    }
}
