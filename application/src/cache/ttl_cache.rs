//! Generic expiring key/value store.
//!
//! Expiry is checked lazily on [`get`](TtlCache::get) and
//! [`has`](TtlCache::has), and eagerly by a periodic sweep
//! ([`spawn_sweeper`](TtlCache::spawn_sweeper)). An entry is expired when
//! `now - stored_at > ttl`.
//!
//! When a *new* key is inserted into a full cache, the entry with the oldest
//! write time is evicted first. Reads do not refresh an entry, so this is an
//! LRU approximation by write time.
//!
//! All state sits behind one `std::sync::Mutex` that is never held across
//! an `.await`, so sweeps and request-driven reads and writes serialize
//! without racing. Time comes from `tokio::time::Instant`, which lets tests
//! drive expiry with a paused clock.

use regex::Regex;
use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Default time-to-live for entries stored without an explicit ttl
pub const DEFAULT_TTL: Duration = Duration::from_secs(300);

/// Default capacity
pub const DEFAULT_MAX_SIZE: usize = 100;

/// Default period of the background sweep
pub const DEFAULT_SWEEP_INTERVAL: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
struct CacheEntry<V> {
    value: V,
    stored_at: Instant,
    ttl: Duration,
    /// Write sequence, breaks ties between entries stored at the same instant.
    seq: u64,
}

impl<V> CacheEntry<V> {
    fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.stored_at) > self.ttl
    }
}

#[derive(Debug)]
struct CacheState<V> {
    entries: HashMap<String, CacheEntry<V>>,
    next_seq: u64,
}

impl<V> CacheState<V> {
    fn remove_expired(&mut self, now: Instant) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired(now));
        before - self.entries.len()
    }

    fn evict_oldest(&mut self) -> Option<String> {
        let oldest = self
            .entries
            .iter()
            .min_by_key(|(_, entry)| (entry.stored_at, entry.seq))
            .map(|(key, _)| key.clone())?;
        self.entries.remove(&oldest);
        Some(oldest)
    }
}

/// Expiring key/value cache with bounded size.
///
/// Cloning yields another handle to the same store.
pub struct TtlCache<V> {
    state: Arc<Mutex<CacheState<V>>>,
    default_ttl: Duration,
    max_size: usize,
}

impl<V> Clone for TtlCache<V> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            default_ttl: self.default_ttl,
            max_size: self.max_size,
        }
    }
}

impl<V: Clone + Send + 'static> Default for TtlCache<V> {
    fn default() -> Self {
        Self::new(DEFAULT_TTL, DEFAULT_MAX_SIZE)
    }
}

impl<V: Clone + Send + 'static> TtlCache<V> {
    /// Create a cache. A `max_size` of zero is treated as one.
    pub fn new(default_ttl: Duration, max_size: usize) -> Self {
        Self {
            state: Arc::new(Mutex::new(CacheState {
                entries: HashMap::new(),
                next_seq: 0,
            })),
            default_ttl,
            max_size: max_size.max(1),
        }
    }

    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    fn lock(&self) -> MutexGuard<'_, CacheState<V>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Value for `key`, or `None` if absent or expired. Expired entries are removed.
    pub fn get(&self, key: &str) -> Option<V> {
        let now = Instant::now();
        let mut state = self.lock();
        match state.entries.get(key) {
            Some(entry) if entry.is_expired(now) => {
                state.entries.remove(key);
                None
            }
            Some(entry) => Some(entry.value.clone()),
            None => None,
        }
    }

    /// Whether a live entry exists for `key`. Expired entries are removed.
    pub fn has(&self, key: &str) -> bool {
        let now = Instant::now();
        let mut state = self.lock();
        match state.entries.get(key) {
            Some(entry) if entry.is_expired(now) => {
                state.entries.remove(key);
                false
            }
            Some(_) => true,
            None => false,
        }
    }

    /// Store `value` under `key` with `ttl`, or the default ttl when `None`.
    ///
    /// Overwriting an existing key never evicts; inserting a new key into a
    /// full cache evicts the entry with the oldest write time.
    pub fn set(&self, key: impl Into<String>, value: V, ttl: Option<Duration>) {
        let key = key.into();
        let now = Instant::now();
        let mut state = self.lock();

        if !state.entries.contains_key(&key)
            && state.entries.len() >= self.max_size
            && let Some(evicted) = state.evict_oldest()
        {
            debug!(key = %evicted, "Cache full, evicted oldest entry");
        }

        let seq = state.next_seq;
        state.next_seq += 1;
        state.entries.insert(
            key,
            CacheEntry {
                value,
                stored_at: now,
                ttl: ttl.unwrap_or(self.default_ttl),
                seq,
            },
        );
    }

    /// Remove `key`. Returns whether an entry was present.
    pub fn delete(&self, key: &str) -> bool {
        self.lock().entries.remove(key).is_some()
    }

    /// Remove every entry whose key matches `pattern`. Returns the count removed.
    pub fn delete_pattern(&self, pattern: &Regex) -> usize {
        let mut state = self.lock();
        let before = state.entries.len();
        state.entries.retain(|key, _| !pattern.is_match(key));
        before - state.entries.len()
    }

    pub fn clear(&self) {
        self.lock().entries.clear();
    }

    /// Number of stored entries, including expired ones not yet collected.
    pub fn size(&self) -> usize {
        self.lock().entries.len()
    }

    /// Remove every expired entry now. Returns the count removed.
    pub fn sweep(&self) -> usize {
        self.lock().remove_expired(Instant::now())
    }

    /// Return the cached value for `key`, or run `fetcher` and cache its result.
    ///
    /// Only successful results are stored. A fetcher error is returned to the
    /// caller unchanged and leaves the cache untouched. The lock is not held
    /// while `fetcher` runs, so concurrent misses on one key may each fetch.
    pub async fn memoize<F, Fut, E>(
        &self,
        key: &str,
        fetcher: F,
        ttl: Option<Duration>,
    ) -> Result<V, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        if let Some(hit) = self.get(key) {
            return Ok(hit);
        }

        let value = fetcher().await?;
        self.set(key, value.clone(), ttl);
        Ok(value)
    }

    /// Start the periodic sweep on the current tokio runtime.
    ///
    /// The task stops when `shutdown` is cancelled or when every handle to
    /// this cache has been dropped.
    pub fn spawn_sweeper(&self, interval: Duration, shutdown: CancellationToken) -> JoinHandle<()> {
        let state: Weak<Mutex<CacheState<V>>> = Arc::downgrade(&self.state);

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    biased;
                    _ = shutdown.cancelled() => break,
                    _ = ticker.tick() => {
                        let Some(state) = state.upgrade() else {
                            break;
                        };
                        let removed = state
                            .lock()
                            .unwrap_or_else(PoisonError::into_inner)
                            .remove_expired(Instant::now());
                        if removed > 0 {
                            debug!(removed, "Cache sweep removed expired entries");
                        }
                    }
                }
            }

            debug!("Cache sweeper stopped");
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn secs(n: u64) -> Duration {
        Duration::from_secs(n)
    }

    #[tokio::test(start_paused = true)]
    async fn test_get_after_set() {
        let cache = TtlCache::new(secs(60), 10);
        cache.set("k", 1, Some(secs(10)));
        assert_eq!(cache.get("k"), Some(1));
        assert!(cache.has("k"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_lazy_expiry_on_get() {
        let cache = TtlCache::new(secs(60), 10);
        cache.set("k", "v", Some(secs(10)));
        cache.set("other", "w", None);

        tokio::time::advance(secs(10)).await;
        assert_eq!(cache.get("k"), Some("v"), "exactly ttl old is still live");

        tokio::time::advance(secs(1)).await;
        assert_eq!(cache.size(), 2);
        assert_eq!(cache.get("k"), None);
        assert_eq!(cache.size(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_lazy_expiry_on_has() {
        let cache = TtlCache::new(secs(5), 10);
        cache.set("k", 1, None);
        tokio::time::advance(secs(6)).await;
        assert!(!cache.has("k"));
        assert_eq!(cache.size(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_full_cache_evicts_oldest_write() {
        let cache = TtlCache::new(secs(60), 3);
        cache.set("a", 1, None);
        cache.set("b", 2, None);
        cache.set("c", 3, None);

        cache.set("d", 4, None);

        assert_eq!(cache.size(), 3);
        assert_eq!(cache.get("a"), None);
        assert_eq!(cache.get("b"), Some(2));
        assert_eq!(cache.get("d"), Some(4));
    }

    #[tokio::test(start_paused = true)]
    async fn test_eviction_ignores_reads() {
        let cache = TtlCache::new(secs(60), 2);
        cache.set("a", 1, None);
        tokio::time::advance(secs(1)).await;
        cache.set("b", 2, None);
        // Reading "a" does not make it younger.
        assert_eq!(cache.get("a"), Some(1));
        cache.set("c", 3, None);
        assert!(!cache.has("a"));
        assert!(cache.has("b"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_overwrite_does_not_evict() {
        let cache = TtlCache::new(secs(60), 2);
        cache.set("a", 1, None);
        cache.set("b", 2, None);
        cache.set("a", 10, None);
        assert_eq!(cache.size(), 2);
        assert_eq!(cache.get("a"), Some(10));
        assert_eq!(cache.get("b"), Some(2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_delete_and_clear() {
        let cache = TtlCache::new(secs(60), 10);
        cache.set("a", 1, None);
        cache.set("b", 2, None);
        assert!(cache.delete("a"));
        assert!(!cache.delete("a"));
        assert_eq!(cache.size(), 1);
        cache.clear();
        assert_eq!(cache.size(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_delete_pattern() {
        let cache = TtlCache::new(secs(60), 10);
        cache.set("models:google", 1, None);
        cache.set("models:openai", 2, None);
        cache.set("prompt:triad", 3, None);

        let removed = cache.delete_pattern(&Regex::new("^models:").unwrap());
        assert_eq!(removed, 2);
        assert_eq!(cache.size(), 1);
        assert!(cache.has("prompt:triad"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_manual_sweep_removes_only_expired() {
        let cache = TtlCache::new(secs(60), 10);
        cache.set("short", 1, Some(secs(5)));
        cache.set("long", 2, Some(secs(50)));
        tokio::time::advance(secs(6)).await;
        assert_eq!(cache.sweep(), 1);
        assert_eq!(cache.size(), 1);
        assert!(cache.has("long"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_background_sweeper_removes_expired() {
        let cache = TtlCache::new(secs(10), 10);
        cache.set("k", 1, None);
        let shutdown = CancellationToken::new();
        let handle = cache.spawn_sweeper(secs(30), shutdown.clone());

        tokio::time::sleep(secs(31)).await;
        // size() does not expire lazily, so only the sweep can have removed it.
        assert_eq!(cache.size(), 0);

        shutdown.cancel();
        handle.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_sweeper_stops_when_cache_dropped() {
        let cache: TtlCache<u8> = TtlCache::new(secs(10), 10);
        let handle = cache.spawn_sweeper(secs(1), CancellationToken::new());
        drop(cache);
        tokio::time::sleep(secs(2)).await;
        handle.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_memoize_fetches_once_within_ttl() {
        let cache = TtlCache::new(secs(60), 10);
        let calls = AtomicUsize::new(0);

        for _ in 0..2 {
            let value: Result<u32, String> = cache
                .memoize(
                    "answer",
                    || async {
                        calls.fetch_add(1, Ordering::SeqCst);
                        Ok(42)
                    },
                    None,
                )
                .await;
            assert_eq!(value, Ok(42));
        }

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_memoize_refetches_after_expiry() {
        let cache = TtlCache::new(secs(60), 10);
        let calls = AtomicUsize::new(0);
        let fetch = || async { Ok::<_, String>(calls.fetch_add(1, Ordering::SeqCst)) };

        assert_eq!(cache.memoize("k", fetch, Some(secs(5))).await, Ok(0));
        tokio::time::advance(secs(6)).await;
        assert_eq!(cache.memoize("k", fetch, Some(secs(5))).await, Ok(1));
    }

    #[tokio::test(start_paused = true)]
    async fn test_memoize_propagates_error_and_stores_nothing() {
        let cache: TtlCache<u32> = TtlCache::new(secs(60), 10);
        let result = cache
            .memoize("k", || async { Err::<u32, _>("upstream down") }, None)
            .await;
        assert_eq!(result, Err("upstream down"));
        assert_eq!(cache.size(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_clones_share_state() {
        let cache = TtlCache::new(secs(60), 10);
        let other = cache.clone();
        other.set("k", 7, None);
        assert_eq!(cache.get("k"), Some(7));
    }

    #[test]
    fn test_zero_capacity_is_clamped() {
        let cache: TtlCache<u8> = TtlCache::new(secs(1), 0);
        assert_eq!(cache.max_size(), 1);
    }
}
