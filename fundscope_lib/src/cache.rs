//! In-memory TTL cache with single-flight loading, backed by `DashMap`.
//!
//! Each key owns a slot holding a `tokio::sync::OnceCell`. Concurrent callers
//! asking for the same key await the same initialization, so the loader runs
//! once per key per TTL window. A failed load leaves the slot empty and the
//! next caller retries.

use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

use dashmap::DashMap;
use tokio::sync::OnceCell;

/// A loaded value with its load time.
struct Loaded<V> {
    value: Arc<V>,
    loaded_at: Instant,
}

struct Slot<V> {
    cell: OnceCell<Loaded<V>>,
}

impl<V> Slot<V> {
    fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }
}

/// Thread-safe cache of loaded values keyed by input identity.
pub struct RecordCache<V> {
    slots: DashMap<String, Arc<Slot<V>>>,
    ttl: Duration,
}

impl<V> RecordCache<V> {
    /// Creates a new cache with the given time-to-live for entries.
    pub fn new(ttl: Duration) -> Self {
        Self {
            slots: DashMap::new(),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    fn is_expired(&self, loaded: &Loaded<V>) -> bool {
        loaded.loaded_at.elapsed() >= self.ttl
    }

    /// Returns the live slot for `key`, replacing it if its value expired.
    fn slot_for(&self, key: &str) -> Arc<Slot<V>> {
        if let Some(entry) = self.slots.get(key) {
            let slot = Arc::clone(entry.value());
            drop(entry);
            let expired = matches!(slot.cell.get(), Some(loaded) if self.is_expired(loaded));
            if !expired {
                return slot;
            }
            self.slots.remove_if(key, |_, current| Arc::ptr_eq(current, &slot));
        }
        Arc::clone(
            self.slots
                .entry(key.to_string())
                .or_insert_with(|| Arc::new(Slot::new()))
                .value(),
        )
    }

    /// Returns the cached value for `key`, or `None` if missing, loading or expired.
    pub fn get(&self, key: &str) -> Option<Arc<V>> {
        let entry = self.slots.get(key)?;
        let loaded = entry.value().cell.get()?;
        if self.is_expired(loaded) {
            drop(entry);
            self.slots.remove(key);
            return None;
        }
        Some(Arc::clone(&loaded.value))
    }

    /// Returns the cached value for `key`, running `load` on a miss.
    ///
    /// Concurrent misses for the same key share one `load` call.
    pub async fn get_or_load<F, Fut, E>(&self, key: &str, load: F) -> Result<Arc<V>, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        let slot = self.slot_for(key);
        let loaded = slot
            .cell
            .get_or_try_init(move || async move {
                let value = load().await?;
                Ok::<_, E>(Loaded {
                    value: Arc::new(value),
                    loaded_at: Instant::now(),
                })
            })
            .await?;
        Ok(Arc::clone(&loaded.value))
    }

    /// Drops the entry for `key`; the next request reloads it.
    pub fn invalidate(&self, key: &str) {
        self.slots.remove(key);
    }

    /// Removes all entries from the cache.
    pub fn clear(&self) {
        self.slots.clear();
    }

    /// Number of keys with a slot, including ones still loading.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
