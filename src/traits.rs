//! # Cache Traits
//!
//! Generic interface over the LRU cache so callers (benchmarks, the dhat
//! profiler, downstream wrappers) can be written against behaviour rather
//! than a concrete type.
//!
//! ## Architecture
//!
//! ```text
//!   ┌─────────────────────────────────────────┐
//!   │            CoreCache<K, V>              │
//!   │                                         │
//!   │  insert(&mut, K, V) → Option<V>         │
//!   │  get(&mut, &K) → Option<&V>             │
//!   │  contains(&, &K) → bool                 │
//!   │  len(&) → usize                         │
//!   │  is_empty(&) → bool                     │
//!   │  capacity(&) → usize                    │
//!   └──────────────────┬──────────────────────┘
//!                      │
//!                      ▼
//!   ┌─────────────────────────────────────────┐
//!   │          LruCacheTrait<K, V>            │
//!   │                                         │
//!   │  pop_lru() → (K, V)                     │
//!   │  peek_lru() → (&K, &V)                  │
//!   │  touch(&K) → bool                       │
//!   │  recency_rank(&K) → usize               │
//!   └─────────────────────────────────────────┘
//! ```
//!
//! ## Why there is no `remove` or `clear`
//!
//! An entry leaves the cache only through eviction of the least-recently-used
//! slot (automatically on `insert`, or explicitly via `pop_lru`). Keeping
//! arbitrary removal off the trait surface keeps that lifecycle true for every
//! implementor.
//!
//! ## Thread Safety
//!
//! - Implementors of these traits take `&mut self` for anything that moves
//!   recency, including `get`.
//! - Use the [`ConcurrentCache`] marker to require a thread-safe implementation.
//! - `ConcurrentLruCache` (feature `concurrency`) wraps the core in a single lock.

/// Core cache operations.
///
/// # Example
///
/// ```
/// use lrukit::traits::CoreCache;
/// use lrukit::policy::lru::LruCache;
///
/// fn warm_cache<C: CoreCache<u64, String>>(cache: &mut C, data: &[(u64, String)]) {
///     for (key, value) in data {
///         cache.insert(*key, value.clone());
///     }
/// }
///
/// let mut cache = LruCache::new(100);
/// warm_cache(&mut cache, &[(1, "one".to_string()), (2, "two".to_string())]);
/// assert_eq!(CoreCache::len(&cache), 2);
/// ```
pub trait CoreCache<K, V> {
    /// Inserts a key-value pair, returning the previous value if it existed.
    ///
    /// If the cache is at capacity and `key` is new, the least-recently-used
    /// entry is evicted first.
    ///
    /// # Example
    ///
    /// ```
    /// use lrukit::traits::CoreCache;
    /// use lrukit::policy::lru::LruCache;
    ///
    /// let mut cache = LruCache::new(10);
    ///
    /// // New key returns None
    /// assert_eq!(CoreCache::insert(&mut cache, 1, "first"), None);
    ///
    /// // Existing key returns previous value
    /// assert_eq!(CoreCache::insert(&mut cache, 1, "second"), Some("first"));
    /// ```
    fn insert(&mut self, key: K, value: V) -> Option<V>;

    /// Gets a reference to a value by key and marks it most recently used.
    ///
    /// Use [`contains`](Self::contains) to test membership without touching.
    fn get(&mut self, key: &K) -> Option<&V>;

    /// Checks if a key exists without updating recency.
    fn contains(&self, key: &K) -> bool;

    /// Returns the current number of entries in the cache.
    fn len(&self) -> usize;

    /// Returns `true` if the cache contains no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the maximum number of entries the cache holds.
    fn capacity(&self) -> usize;
}

/// Recency-specific operations.
///
/// # Example
///
/// ```
/// use lrukit::traits::{CoreCache, LruCacheTrait};
/// use lrukit::policy::lru::LruCache;
///
/// let mut cache = LruCache::new(3);
/// cache.put(1, "a");
/// cache.put(2, "b");
/// cache.put(3, "c");
///
/// // Key 1 is LRU until touched
/// assert!(LruCacheTrait::touch(&mut cache, &1));
/// assert_eq!(LruCacheTrait::peek_lru(&cache), Some((&2, &"b")));
/// assert_eq!(LruCacheTrait::recency_rank(&cache, &1), Some(0));
/// ```
pub trait LruCacheTrait<K, V>: CoreCache<K, V> {
    /// Evicts and returns the least recently used entry.
    fn pop_lru(&mut self) -> Option<(K, V)>;

    /// Returns the least recently used entry without evicting or touching it.
    fn peek_lru(&self) -> Option<(&K, &V)>;

    /// Marks `key` most recently used without reading its value.
    ///
    /// Returns `false` if the key is absent.
    fn touch(&mut self, key: &K) -> bool;

    /// Position of `key` in recency order (0 = MRU). O(n).
    fn recency_rank(&self, key: &K) -> Option<usize>;
}

/// Marker trait for caches that are safe to share across threads.
///
/// Implemented by `ConcurrentLruCache` when the `concurrency` feature is on.
/// Usage: `fn use_cache<C: ConcurrentCache + Clone>(cache: &C)`.
pub trait ConcurrentCache: Send + Sync {}
