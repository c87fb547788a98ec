//! Time-To-Live Cache
//!
//! Generic key/value cache where every entry is evicted a fixed duration
//! after it was inserted. Each insert arms a one-shot expiry task for its
//! key; the value map and the timer map are always mutated together under
//! the same lock, so readers can never observe a half-removed entry.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Arc, Weak};
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::debug;

// == Expiry Timer ==
/// Handle to the pending expiry task for one key.
///
/// The generation stamp identifies which insert armed the task. A timer is
/// only allowed to evict the entry it was armed for: if the key has been
/// overwritten since, the stamp no longer matches and the callback is inert.
#[derive(Debug)]
struct ExpiryTimer {
    generation: u64,
    task: JoinHandle<()>,
}

// == Shared State ==
/// Combined cache state, guarded as a single unit.
#[derive(Debug)]
struct Shared<K, V> {
    /// Key-value storage
    entries: HashMap<K, V>,
    /// One pending expiry task per live key
    timers: HashMap<K, ExpiryTimer>,
    /// Monotonic counter stamping each insert
    next_generation: u64,
}

impl<K: Eq + Hash, V> Shared<K, V> {
    /// Removes the entry and retires its timer in one step.
    ///
    /// Aborting a timer that has already fired is a no-op, so this is safe
    /// for both caller-initiated and expiry-initiated removal.
    fn remove(&mut self, key: &K) {
        self.entries.remove(key);
        if let Some(timer) = self.timers.remove(key) {
            timer.task.abort();
        }
    }
}

// == TTL Cache ==
/// Thread-safe cache with automatic per-entry expiration.
///
/// The TTL is fixed at construction and applies uniformly to every entry.
/// Cloning the cache yields another handle to the same underlying state.
#[derive(Debug)]
pub struct TtlCache<K, V> {
    shared: Arc<RwLock<Shared<K, V>>>,
    ttl: Duration,
}

impl<K, V> Clone for TtlCache<K, V> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
            ttl: self.ttl,
        }
    }
}

impl<K, V> TtlCache<K, V>
where
    K: Eq + Hash + Clone + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    // == Constructor ==
    /// Creates an empty cache whose entries live for `ttl` after insertion.
    pub fn new(ttl: Duration) -> Self {
        Self {
            shared: Arc::new(RwLock::new(Shared {
                entries: HashMap::new(),
                timers: HashMap::new(),
                next_generation: 0,
            })),
            ttl,
        }
    }

    // == Insert ==
    /// Stores a key-value pair, overwriting any previous value.
    ///
    /// Arms a fresh expiry timer measured from this call. When the key was
    /// already present, the old timer is aborted before the new one takes
    /// its place, so at most one expiry task is ever outstanding per key.
    pub async fn insert(&self, key: K, value: V) {
        let mut shared = self.shared.write().await;

        shared.next_generation += 1;
        let generation = shared.next_generation;

        shared.entries.insert(key.clone(), value);

        let task = spawn_expiry(Arc::downgrade(&self.shared), key.clone(), generation, self.ttl);
        if let Some(stale) = shared.timers.insert(key, ExpiryTimer { generation, task }) {
            stale.task.abort();
        }
    }

    // == Get ==
    /// Returns a clone of the cached value, or `None` if the key was never
    /// inserted, already expired, or explicitly removed.
    ///
    /// Reading has no effect on the entry's remaining lifetime.
    pub async fn get(&self, key: &K) -> Option<V> {
        let shared = self.shared.read().await;
        shared.entries.get(key).cloned()
    }

    // == Remove ==
    /// Removes an entry and cancels its pending expiry timer.
    ///
    /// Removing an absent key is a no-op.
    pub async fn remove(&self, key: &K) {
        let mut shared = self.shared.write().await;
        shared.remove(key);
    }

    // == Length ==
    /// Returns the current number of live entries.
    pub async fn len(&self) -> usize {
        self.shared.read().await.entries.len()
    }

    /// Returns true if the cache holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.shared.read().await.entries.is_empty()
    }

    /// Number of expiry timers currently armed. Always equals `len`.
    #[cfg(test)]
    pub(crate) async fn timer_count(&self) -> usize {
        self.shared.read().await.timers.len()
    }
}

// == Expiry Task ==
/// Spawns the one-shot task that evicts `key` once `ttl` has elapsed.
///
/// The task holds only a weak reference to the cache state, so pending
/// timers never keep a dropped cache alive. The generation check makes a
/// timer that survived its own cancellation harmless: it only evicts if it
/// is still the timer on record for the key.
fn spawn_expiry<K, V>(
    shared: Weak<RwLock<Shared<K, V>>>,
    key: K,
    generation: u64,
    ttl: Duration,
) -> JoinHandle<()>
where
    K: Eq + Hash + Clone + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    tokio::spawn(async move {
        tokio::time::sleep(ttl).await;

        let Some(shared) = shared.upgrade() else {
            return;
        };
        let mut shared = shared.write().await;

        let current = shared.timers.get(&key).map(|timer| timer.generation);
        if current == Some(generation) {
            debug!("cache entry expired after {:?}", ttl);
            shared.remove(&key);
        }
    })
}
