//! DashMap Metrics Store
//!
//! Implements MetricsStore using DashMap for lock-free concurrent access.

use crate::domain::entities::{FizzBuzzRequest, MetricsEntry};
use crate::domain::ports::{MetricsError, MetricsStore};
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// Hit counter for a single request signature.
#[derive(Debug)]
pub struct RequestCounter {
    /// Number of times the signature was recorded
    pub hits: AtomicU64,
    /// Position of the signature in first-seen order
    pub seq: u64,
}

impl RequestCounter {
    fn new(seq: u64) -> Self {
        Self {
            hits: AtomicU64::new(0),
            seq,
        }
    }
}

/// DashMap-backed metrics store.
///
/// Entry creation happens under the shard write lock, so the sequence number
/// is taken exactly once per signature and a new entry is never observed with
/// zero hits. Increments on an existing entry only take a read lock and bump
/// its atomic counter.
pub struct DashMapMetricsStore {
    counters: DashMap<FizzBuzzRequest, RequestCounter>,
    next_seq: AtomicU64,
}

impl DashMapMetricsStore {
    /// Create an empty metrics store.
    pub fn new() -> Self {
        Self {
            counters: DashMap::new(),
            next_seq: AtomicU64::new(0),
        }
    }

    /// Get the hit count for a specific signature (for debugging).
    pub fn hits(&self, request: &FizzBuzzRequest) -> u64 {
        self.counters
            .get(request)
            .map(|c| c.hits.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    /// Snapshot of (seq, entry) pairs sorted by first-seen order.
    fn snapshot(&self) -> Vec<(u64, MetricsEntry)> {
        let mut entries: Vec<(u64, MetricsEntry)> = self
            .counters
            .iter()
            .map(|e| {
                (
                    e.seq,
                    MetricsEntry::new(e.key().clone(), e.hits.load(Ordering::Relaxed)),
                )
            })
            .collect();
        entries.sort_by_key(|(seq, _)| *seq);
        entries
    }
}

impl Default for DashMapMetricsStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsStore for DashMapMetricsStore {
    fn record(&self, request: &FizzBuzzRequest) {
        let hits = match self.counters.get(request) {
            Some(counter) => counter.hits.fetch_add(1, Ordering::Relaxed) + 1,
            None => {
                // the shard stays write-locked until the first increment lands
                let counter = self.counters.entry(request.clone()).or_insert_with(|| {
                    RequestCounter::new(self.next_seq.fetch_add(1, Ordering::Relaxed))
                });
                counter.hits.fetch_add(1, Ordering::Relaxed) + 1
            }
        };
        tracing::debug!("recorded request {} (hits={})", request, hits);
    }

    fn list(&self) -> Vec<MetricsEntry> {
        self.snapshot().into_iter().map(|(_, entry)| entry).collect()
    }

    fn top_hit(&self) -> Result<MetricsEntry, MetricsError> {
        // snapshot is in first-seen order; keep the earliest on ties
        self.snapshot()
            .into_iter()
            .map(|(_, entry)| entry)
            .fold(None::<MetricsEntry>, |best, entry| match best {
                Some(b) if b.hits >= entry.hits => Some(b),
                _ => Some(entry),
            })
            .ok_or(MetricsError::NotFound)
    }

    fn len(&self) -> usize {
        self.counters.len()
    }
}
