//! Search result cache
//!
//! A TTL-and-capacity bounded map from query keys to result bundles.
//! Eviction is approximate FIFO: when the cache overflows, the
//! first-inserted key still present is dropped. Reads never reorder
//! entries and overwrites keep a key's original position, so the order is
//! insertion order, not recency. This exact behavior is load-bearing for
//! reproducibility; do not upgrade it to LRU.

use crate::models::SearchResults;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Time source for cache entries, injectable so tests control expiry
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// Wall-clock time
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock that only moves when told to
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<Instant>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Mutex::new(Instant::now()),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += by;
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        *self.now.lock().unwrap()
    }
}

struct CacheEntry {
    value: SearchResults,
    inserted: Instant,
}

#[derive(Default)]
struct CacheInner {
    entries: HashMap<String, CacheEntry>,
    /// Keys in insertion order; each present key appears exactly once
    order: VecDeque<String>,
}

/// Cache for computed search bundles
pub struct SearchCache {
    inner: Mutex<CacheInner>,
    ttl: Duration,
    capacity: usize,
    clock: Arc<dyn Clock>,
}

impl SearchCache {
    /// Create a cache with the given TTL (seconds) and entry capacity
    pub fn new(ttl_seconds: u64, capacity: usize) -> Self {
        Self {
            inner: Mutex::new(CacheInner::default()),
            ttl: Duration::from_secs(ttl_seconds),
            capacity,
            clock: Arc::new(SystemClock),
        }
    }

    /// Replace the time source
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Get a cached bundle, treating expired entries as absent
    pub fn get(&self, key: &str) -> Option<SearchResults> {
        let now = self.clock.now();
        let inner = self.inner.lock().unwrap();
        let entry = inner.entries.get(key)?;
        if now.duration_since(entry.inserted) < self.ttl {
            Some(entry.value.clone())
        } else {
            None
        }
    }

    /// Store a bundle, evicting the first-inserted key on overflow
    ///
    /// Overwriting an existing key refreshes its timestamp but keeps its
    /// position in the eviction order.
    pub fn put(&self, key: String, value: SearchResults) {
        let now = self.clock.now();
        let mut inner = self.inner.lock().unwrap();
        let previous = inner.entries.insert(
            key.clone(),
            CacheEntry {
                value,
                inserted: now,
            },
        );
        if previous.is_none() {
            inner.order.push_back(key);
        }
        if inner.entries.len() > self.capacity {
            while let Some(oldest) = inner.order.pop_front() {
                if inner.entries.remove(&oldest).is_some() {
                    break;
                }
            }
        }
    }

    /// Number of entries currently held, expired ones included
    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Build the cache key for a (query, type filter) pair
///
/// The raw query string is used verbatim: "Foo" and "foo" cache
/// separately even though matching is case-insensitive. Known
/// inefficiency, kept for compatibility.
pub fn cache_key(query: &str, search_type: Option<&str>) -> String {
    format!("{}_{}", query, search_type.unwrap_or("all"))
}
