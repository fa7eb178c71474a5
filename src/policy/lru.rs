//! # Least Recently Used (LRU) Cache
//!
//! Fixed-capacity key-value cache with O(1) `get`/`put` and O(1) eviction of
//! the least-recently-used entry.
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────────────┐
//!   │                           LruCache<K, V>                             │
//!   │                                                                      │
//!   │   ┌──────────────────────────────────────────────────────────────┐   │
//!   │   │  index: FxHashMap<K, SlotId>                                 │   │
//!   │   │                                                              │   │
//!   │   │   "A" ──────────────┐                                        │   │
//!   │   │   "B" ───────────┐  │                                        │   │
//!   │   │   "C" ────────┐  │  │                                        │   │
//!   │   └───────────────┼──┼──┼────────────────────────────────────────┘   │
//!   │                   │  │  │                                            │
//!   │   ┌───────────────┼──┼──┼────────────────────────────────────────┐   │
//!   │   │  list: RecencyList<Entry<K, V>>  (arena-backed)              │   │
//!   │   │               ▼  ▼  ▼                                        │   │
//!   │   │  HEAD ──► [A:1] ◄──► [B:2] ◄──► [C:3] ◄── TAIL               │   │
//!   │   │  slot 0    MRU                   LRU      slot 1             │   │
//!   │   └──────────────────────────────────────────────────────────────┘   │
//!   │                                                                      │
//!   │   capacity: usize (fixed, > 0)                                       │
//!   └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A key is in `index` if and only if its entry is linked between `HEAD` and
//! `TAIL`. Every mutating method updates both sides before returning.
//!
//! ## Operations Flow
//!
//! ```text
//!   put(D) with the cache full (capacity = 3)
//!   ═══════════════════════════════════════════════════════════════════
//!     Before:  HEAD ─► [A] ◄─► [B] ◄─► [C] ◄─ TAIL
//!     1. Evict TAIL.prev = [C]: unlink, drop "C" from index, free slot
//!     2. Allocate [D] (reuses C's slot), splice after HEAD, index "D"
//!     After:   HEAD ─► [D] ◄─► [A] ◄─► [B] ◄─ TAIL
//!
//!   get(B)
//!   ═══════════════════════════════════════════════════════════════════
//!     1. index lookup: O(1)
//!     2. unlink [B], splice after HEAD: O(1)
//!     After:   HEAD ─► [B] ◄─► [D] ◄─► [A] ◄─ TAIL
//! ```
//!
//! ## Methods
//!
//! | Method             | Complexity | Touches | Description                           |
//! |--------------------|------------|---------|---------------------------------------|
//! | `try_new(cap)`     | O(1)*      | -       | Construct; rejects `cap == 0`         |
//! | `get(&k)`          | O(1)       | yes     | Lookup + move to MRU                  |
//! | `put(k, v)`        | O(1)       | yes     | Insert or update, evicting LRU if full|
//! | `insert(k, v)`     | O(1)       | yes     | `put` that returns the replaced value |
//! | `peek(&k)`         | O(1)       | no      | Lookup without reordering             |
//! | `contains(&k)`     | O(1)       | no      | Membership                            |
//! | `touch(&k)`        | O(1)       | yes     | Move to MRU without reading           |
//! | `peek_lru()`       | O(1)       | no      | Next eviction victim                  |
//! | `pop_lru()`        | O(1)       | -       | Evict the LRU entry now               |
//! | `recency_rank(&k)` | O(n)       | no      | 0 = MRU                               |
//! | `iter()`           | O(n)       | no      | `(&K, &V)` from MRU to LRU            |
//!
//! \* `try_new` preallocates the index and arena unless disabled through
//! [`CacheBuilder`](crate::builder::CacheBuilder).
//!
//! ## Lifecycle
//!
//! Entries are created by `put` of an absent key and destroyed only by
//! eviction (implicitly in `put`, explicitly in `pop_lru`). There is no
//! `remove` and no `clear`.
//!
//! ## Returned references
//!
//! `get` and `peek` return `&V` borrowed from the cache. The borrow checker
//! ends that borrow before the next `&mut self` call, so a returned reference
//! can never observe a later eviction. `ConcurrentLruCache` cannot lend
//! references across its lock and returns clones or runs a closure instead.
//!
//! ## Thread Safety
//!
//! - `LruCache`: single-threaded; every recency update needs `&mut self`.
//! - `ConcurrentLruCache` (feature `concurrency`): `Arc<parking_lot::RwLock<_>>`.
//!   `get` takes the **write** lock because it moves the entry; only
//!   non-touching reads (`peek`, `contains`, `len`) share the read lock.
//!
//! ## Example Usage
//!
//! ```
//! use lrukit::policy::lru::LruCache;
//!
//! let mut cache = LruCache::new(3);
//! cache.put("A", 1);
//! cache.put("B", 2);
//! cache.put("C", 3);
//!
//! assert_eq!(cache.get("B"), Some(&2));
//! assert_eq!(cache.get("A"), Some(&1));
//!
//! // Recency is now A, B, C (MRU → LRU); D evicts C.
//! cache.put("D", 4);
//! assert_eq!(cache.get("C"), None);
//! assert!(cache.contains("A") && cache.contains("B") && cache.contains("D"));
//! ```

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;
use std::mem;
#[cfg(feature = "concurrency")]
use std::sync::Arc;

#[cfg(feature = "concurrency")]
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::builder::CacheConfig;
use crate::ds::recency_list::RecencyList;
use crate::ds::slot_arena::SlotId;
use crate::error::{ConfigError, InvariantError};
#[cfg(feature = "metrics")]
use crate::metrics::metrics_impl::LruMetrics;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::LruMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::{
    CoreMetricsRecorder, LruMetricsReadRecorder, LruMetricsRecorder, MetricsSnapshotProvider,
};
#[cfg(feature = "concurrency")]
use crate::traits::ConcurrentCache;
use crate::traits::{CoreCache, LruCacheTrait};

/// Upper bound on entries reserved up front when preallocation is on.
/// Larger caches still work; they grow past this on demand.
const MAX_PREALLOC_ENTRIES: usize = 1 << 20;

/// One cached pair. The key is duplicated here so eviction can find the
/// index entry to drop.
#[derive(Debug)]
struct Entry<K, V> {
    key: K,
    value: V,
}

/// Fixed-capacity LRU cache.
///
/// See the [module docs](self) for layout and complexity.
pub struct LruCache<K, V> {
    index: FxHashMap<K, SlotId>,
    list: RecencyList<Entry<K, V>>,
    capacity: usize,
    #[cfg(feature = "metrics")]
    metrics: LruMetrics,
}

impl<K, V> LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Creates a cache holding at most `capacity` entries.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero. See [`try_new`](Self::try_new).
    ///
    /// # Example
    ///
    /// ```
    /// use lrukit::policy::lru::LruCache;
    ///
    /// let cache: LruCache<u64, String> = LruCache::new(100);
    /// assert_eq!(cache.capacity(), 100);
    /// assert!(cache.is_empty());
    /// ```
    pub fn new(capacity: usize) -> Self {
        match Self::try_new(capacity) {
            Ok(cache) => cache,
            Err(e) => panic!("{}", e),
        }
    }

    /// Creates a cache, returning an error instead of panicking on a zero
    /// capacity.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `capacity` is zero.
    pub fn try_new(capacity: usize) -> Result<Self, ConfigError> {
        Self::try_with_config(CacheConfig {
            capacity,
            ..CacheConfig::default()
        })
    }

    /// Creates a cache from a full [`CacheConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `config.capacity` is zero.
    pub fn try_with_config(config: CacheConfig) -> Result<Self, ConfigError> {
        if config.capacity == 0 {
            return Err(ConfigError::new("cache capacity must be greater than zero"));
        }

        let reserve = if config.prealloc_memory {
            config.capacity.min(MAX_PREALLOC_ENTRIES)
        } else {
            0
        };

        debug!(
            capacity = config.capacity,
            reserved = reserve,
            "created LRU cache"
        );

        Ok(Self {
            index: FxHashMap::with_capacity_and_hasher(reserve, Default::default()),
            list: RecencyList::with_capacity(reserve),
            capacity: config.capacity,
            #[cfg(feature = "metrics")]
            metrics: LruMetrics::default(),
        })
    }

    /// Returns the number of live entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Returns the fixed capacity set at construction.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns `true` if `key` is cached. Does not update recency.
    #[inline]
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(key)
    }

    /// Looks up `key` and marks it most recently used.
    ///
    /// A miss returns `None`; it is not an error. The returned reference is
    /// valid until the next call that takes `&mut self`.
    ///
    /// # Example
    ///
    /// ```
    /// use lrukit::policy::lru::LruCache;
    ///
    /// let mut cache = LruCache::new(2);
    /// cache.put(1, "one");
    /// cache.put(2, "two");
    ///
    /// assert_eq!(cache.get(&1), Some(&"one"));
    /// assert_eq!(cache.get(&3), None);
    ///
    /// // 1 was touched, so 2 is evicted
    /// cache.put(3, "three");
    /// assert!(!cache.contains(&2));
    /// ```
    #[inline]
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let id = match self.index.get(key) {
            Some(&id) => id,
            None => {
                #[cfg(feature = "metrics")]
                self.metrics.record_get_miss();
                return None;
            },
        };

        #[cfg(feature = "metrics")]
        self.metrics.record_get_hit();

        let moved = self.list.move_to_front(id);
        debug_assert!(moved, "index points at an unlinked slot");
        self.list.get(id).map(|entry| &entry.value)
    }

    /// Looks up `key` without changing recency.
    #[inline]
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        #[cfg(feature = "metrics")]
        self.metrics.record_peek_call();

        let &id = self.index.get(key)?;

        #[cfg(feature = "metrics")]
        self.metrics.record_peek_hit();

        self.list.get(id).map(|entry| &entry.value)
    }

    /// Inserts or updates `key` and marks it most recently used.
    ///
    /// When `key` is new and the cache is full, the least recently used entry
    /// is evicted first, so `len()` never exceeds `capacity()`.
    ///
    /// # Example
    ///
    /// ```
    /// use lrukit::policy::lru::LruCache;
    ///
    /// let mut cache = LruCache::new(1);
    /// cache.put("a", 1);
    /// cache.put("b", 2); // evicts "a"
    /// assert_eq!(cache.len(), 1);
    /// assert_eq!(cache.get("a"), None);
    /// assert_eq!(cache.get("b"), Some(&2));
    /// ```
    #[inline]
    pub fn put(&mut self, key: K, value: V) {
        let _ = self.insert(key, value);
    }

    /// Same as [`put`](Self::put), but hands back the value it replaced.
    ///
    /// Returns `None` for a new key, including when inserting it evicted
    /// another entry.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        #[cfg(feature = "metrics")]
        self.metrics.record_insert_call();

        if let Some(&id) = self.index.get(&key) {
            #[cfg(feature = "metrics")]
            self.metrics.record_insert_update();

            let previous = self
                .list
                .get_mut(id)
                .map(|entry| mem::replace(&mut entry.value, value));
            debug_assert!(previous.is_some(), "index points at a freed slot");
            self.list.move_to_front(id);
            return previous;
        }

        #[cfg(feature = "metrics")]
        self.metrics.record_insert_new();

        if self.list.len() >= self.capacity {
            #[cfg(feature = "metrics")]
            self.metrics.record_evict_call();

            let _evicted = self.evict_tail();

            #[cfg(feature = "metrics")]
            if _evicted.is_some() {
                self.metrics.record_evicted_entry();
            }
        }

        let id = self.list.push_front(Entry {
            key: key.clone(),
            value,
        });
        self.index.insert(key, id);

        debug_assert_eq!(self.index.len(), self.list.len());
        debug_assert!(self.list.len() <= self.capacity);
        None
    }

    /// Marks `key` most recently used without reading it.
    ///
    /// Returns `false` if the key is absent.
    pub fn touch<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        #[cfg(feature = "metrics")]
        self.metrics.record_touch_call();

        let Some(&id) = self.index.get(key) else {
            return false;
        };
        self.list.move_to_front(id);

        #[cfg(feature = "metrics")]
        self.metrics.record_touch_found();

        true
    }

    /// Returns the entry that the next eviction would remove.
    pub fn peek_lru(&self) -> Option<(&K, &V)> {
        #[cfg(feature = "metrics")]
        self.metrics.record_peek_lru_call();

        let entry = self.list.back()?;

        #[cfg(feature = "metrics")]
        self.metrics.record_peek_lru_found();

        Some((&entry.key, &entry.value))
    }

    /// Evicts the least recently used entry now and returns it.
    ///
    /// # Example
    ///
    /// ```
    /// use lrukit::policy::lru::LruCache;
    ///
    /// let mut cache = LruCache::new(10);
    /// cache.put(1, "one");
    /// cache.put(2, "two");
    /// cache.get(&1);
    ///
    /// assert_eq!(cache.pop_lru(), Some((2, "two")));
    /// assert_eq!(cache.len(), 1);
    /// ```
    pub fn pop_lru(&mut self) -> Option<(K, V)> {
        #[cfg(feature = "metrics")]
        self.metrics.record_pop_lru_call();

        if self.list.is_empty() {
            return None;
        }
        let popped = self.evict_tail();

        #[cfg(feature = "metrics")]
        if popped.is_some() {
            self.metrics.record_pop_lru_found();
        }

        popped
    }

    /// Position of `key` from the MRU end (0 = most recently used).
    ///
    /// Walks the list, so this is O(n); meant for diagnostics and tests.
    pub fn recency_rank<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        #[cfg(feature = "metrics")]
        self.metrics.record_recency_rank_call();

        let &target = self.index.get(key)?;
        for (rank, id) in self.list.iter_ids().enumerate() {
            #[cfg(feature = "metrics")]
            self.metrics.record_recency_rank_scan_step();

            if id == target {
                #[cfg(feature = "metrics")]
                self.metrics.record_recency_rank_found();
                return Some(rank);
            }
        }
        None
    }

    /// Iterates `(key, value)` pairs from most to least recently used.
    /// Does not update recency.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.list.iter().map(|entry| (&entry.key, &entry.value))
    }

    /// Unlinks `TAIL.prev`, drops its key from the index and frees its slot.
    ///
    /// Callers guarantee the cache is non-empty.
    fn evict_tail(&mut self) -> Option<(K, V)> {
        debug_assert!(!self.list.is_empty(), "evict_tail on an empty cache");

        let Entry { key, value } = self.list.pop_back()?;
        let indexed = self.index.remove(&key);
        debug_assert!(indexed.is_some(), "evicted key was not indexed");

        trace!(
            len = self.list.len(),
            capacity = self.capacity,
            "evicted least recently used entry"
        );
        Some((key, value))
    }

    /// Validates that the index and the recency list describe the same set of
    /// entries. O(n); meant for tests and debugging.
    ///
    /// # Errors
    ///
    /// Returns [`InvariantError`] naming the first broken invariant.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        self.list.check_invariants()?;

        if self.index.len() != self.list.len() {
            return Err(InvariantError::new(format!(
                "index has {} keys but list has {} entries",
                self.index.len(),
                self.list.len()
            )));
        }
        if self.list.len() > self.capacity {
            return Err(InvariantError::new(format!(
                "len {} exceeds capacity {}",
                self.list.len(),
                self.capacity
            )));
        }
        for (id, entry) in self.list.iter_entries() {
            match self.index.get(&entry.key) {
                Some(&indexed) if indexed == id => {},
                Some(&indexed) => {
                    return Err(InvariantError::new(format!(
                        "entry in slot {:?} is indexed at {:?}",
                        id, indexed
                    )));
                },
                None => {
                    return Err(InvariantError::new(format!(
                        "entry in slot {:?} has no index entry",
                        id
                    )));
                },
            }
        }
        Ok(())
    }
}

#[cfg(feature = "metrics")]
impl<K, V> LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    pub fn metrics_snapshot(&self) -> LruMetricsSnapshot {
        LruMetricsSnapshot {
            get_calls: self.metrics.get_calls,
            get_hits: self.metrics.get_hits,
            get_misses: self.metrics.get_misses,
            insert_calls: self.metrics.insert_calls,
            insert_updates: self.metrics.insert_updates,
            insert_new: self.metrics.insert_new,
            evict_calls: self.metrics.evict_calls,
            evicted_entries: self.metrics.evicted_entries,
            pop_lru_calls: self.metrics.pop_lru_calls,
            pop_lru_found: self.metrics.pop_lru_found,
            touch_calls: self.metrics.touch_calls,
            touch_found: self.metrics.touch_found,
            peek_calls: self.metrics.peek_calls.get(),
            peek_hits: self.metrics.peek_hits.get(),
            peek_lru_calls: self.metrics.peek_lru_calls.get(),
            peek_lru_found: self.metrics.peek_lru_found.get(),
            recency_rank_calls: self.metrics.recency_rank_calls.get(),
            recency_rank_found: self.metrics.recency_rank_found.get(),
            recency_rank_scan_steps: self.metrics.recency_rank_scan_steps.get(),
            cache_len: self.list.len(),
            capacity: self.capacity,
        }
    }
}

#[cfg(feature = "metrics")]
impl<K, V> MetricsSnapshotProvider<LruMetricsSnapshot> for LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn snapshot(&self) -> LruMetricsSnapshot {
        self.metrics_snapshot()
    }
}

impl<K, V> CoreCache<K, V> for LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    #[inline]
    fn insert(&mut self, key: K, value: V) -> Option<V> {
        LruCache::insert(self, key, value)
    }

    #[inline]
    fn get(&mut self, key: &K) -> Option<&V> {
        LruCache::get(self, key)
    }

    #[inline]
    fn contains(&self, key: &K) -> bool {
        LruCache::contains(self, key)
    }

    #[inline]
    fn len(&self) -> usize {
        self.list.len()
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<K, V> LruCacheTrait<K, V> for LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn pop_lru(&mut self) -> Option<(K, V)> {
        LruCache::pop_lru(self)
    }

    fn peek_lru(&self) -> Option<(&K, &V)> {
        LruCache::peek_lru(self)
    }

    fn touch(&mut self, key: &K) -> bool {
        LruCache::touch(self, key)
    }

    fn recency_rank(&self, key: &K) -> Option<usize> {
        LruCache::recency_rank(self, key)
    }
}

impl<K, V> fmt::Debug for LruCache<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCache")
            .field("len", &self.list.len())
            .field("capacity", &self.capacity)
            .finish_non_exhaustive()
    }
}

impl<K, V> Default for LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Creates a cache with [`CacheConfig::default`] (capacity 1000).
    fn default() -> Self {
        Self::new(CacheConfig::default().capacity)
    }
}

impl<K, V> Extend<(K, V)> for LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

/// Thread-safe handle over an [`LruCache`] guarded by one `parking_lot::RwLock`.
///
/// Every `get`/`put` is a single critical section under the write lock, so no
/// caller can observe an entry unlinked but not yet relinked, or indexed but
/// not yet listed. Cloning the handle shares the same cache.
///
/// Values leave the lock by clone ([`get`](Self::get)) or through a closure
/// ([`get_with`](Self::get_with)) so no reference outlives the lock guard.
///
/// # Example
///
/// ```
/// use lrukit::policy::lru::ConcurrentLruCache;
///
/// let cache: ConcurrentLruCache<u32, String> = ConcurrentLruCache::new(100);
/// let handle = cache.clone();
/// std::thread::spawn(move || handle.put(1, "one".to_string()))
///     .join()
///     .unwrap();
/// assert_eq!(cache.get(&1).as_deref(), Some("one"));
/// ```
#[cfg(feature = "concurrency")]
pub struct ConcurrentLruCache<K, V> {
    inner: Arc<RwLock<LruCache<K, V>>>,
}

#[cfg(feature = "concurrency")]
impl<K, V> Clone for ConcurrentLruCache<K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

#[cfg(feature = "concurrency")]
impl<K, V> fmt::Debug for ConcurrentLruCache<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cache = self.inner.read();
        f.debug_struct("ConcurrentLruCache")
            .field("len", &cache.list.len())
            .field("capacity", &cache.capacity)
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "concurrency")]
impl<K, V> From<LruCache<K, V>> for ConcurrentLruCache<K, V> {
    fn from(cache: LruCache<K, V>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(cache)),
        }
    }
}

#[cfg(feature = "concurrency")]
impl<K, V> ConcurrentLruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Creates a shared cache holding at most `capacity` entries.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero. See [`try_new`](Self::try_new).
    pub fn new(capacity: usize) -> Self {
        LruCache::new(capacity).into()
    }

    /// # Errors
    ///
    /// Returns [`ConfigError`] if `capacity` is zero.
    pub fn try_new(capacity: usize) -> Result<Self, ConfigError> {
        Ok(LruCache::try_new(capacity)?.into())
    }

    /// Looks up `key`, marks it most recently used and returns a clone.
    ///
    /// Takes the write lock: a hit reorders the recency list.
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        V: Clone,
    {
        let mut cache = self.inner.write();
        cache.get(key).cloned()
    }

    /// Looks up `key`, marks it most recently used and runs `f` on the value
    /// while the lock is held.
    pub fn get_with<Q, R>(&self, key: &Q, f: impl FnOnce(&V) -> R) -> Option<R>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let mut cache = self.inner.write();
        cache.get(key).map(f)
    }

    /// Clone of the value for `key` without touching it. Read lock only.
    pub fn peek<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        V: Clone,
    {
        let cache = self.inner.read();
        cache.peek(key).cloned()
    }

    /// Runs `f` on the value for `key` without touching it. Read lock only.
    pub fn peek_with<Q, R>(&self, key: &Q, f: impl FnOnce(&V) -> R) -> Option<R>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let cache = self.inner.read();
        cache.peek(key).map(f)
    }

    pub fn put(&self, key: K, value: V) {
        let mut cache = self.inner.write();
        cache.put(key, value);
    }

    /// Inserts or updates `key`, returning the replaced value.
    pub fn insert(&self, key: K, value: V) -> Option<V> {
        let mut cache = self.inner.write();
        cache.insert(key, value)
    }

    pub fn touch<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let mut cache = self.inner.write();
        cache.touch(key)
    }

    pub fn pop_lru(&self) -> Option<(K, V)> {
        let mut cache = self.inner.write();
        cache.pop_lru()
    }

    /// Clone of the entry the next eviction would remove.
    pub fn peek_lru(&self) -> Option<(K, V)>
    where
        V: Clone,
    {
        let cache = self.inner.read();
        cache.peek_lru().map(|(k, v)| (k.clone(), v.clone()))
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let cache = self.inner.read();
        cache.contains(key)
    }

    pub fn len(&self) -> usize {
        let cache = self.inner.read();
        cache.len()
    }

    pub fn is_empty(&self) -> bool {
        let cache = self.inner.read();
        cache.is_empty()
    }

    pub fn capacity(&self) -> usize {
        let cache = self.inner.read();
        cache.capacity()
    }

    /// Runs [`LruCache::check_invariants`] under the read lock.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        let cache = self.inner.read();
        cache.check_invariants()
    }
}

#[cfg(all(feature = "metrics", feature = "concurrency"))]
impl<K, V> ConcurrentLruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    pub fn metrics_snapshot(&self) -> LruMetricsSnapshot {
        let cache = self.inner.read();
        cache.metrics_snapshot()
    }
}

#[cfg(all(feature = "metrics", feature = "concurrency"))]
impl<K, V> MetricsSnapshotProvider<LruMetricsSnapshot> for ConcurrentLruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn snapshot(&self) -> LruMetricsSnapshot {
        self.metrics_snapshot()
    }
}

#[cfg(feature = "concurrency")]
impl<K, V> ConcurrentCache for ConcurrentLruCache<K, V>
where
    K: Send + Sync,
    V: Send + Sync,
{
}
