//! lrukit: a fixed-capacity least-recently-used cache.
//!
//! [`LruCache`](policy::lru::LruCache) keeps at most `capacity` entries and
//! evicts the least recently used one when a new key arrives at a full cache.
//! `get` and `put` are O(1): a hash index maps keys to slots in an arena-backed
//! doubly linked list bounded by head and tail sentinels.
//!
//! ```
//! use lrukit::prelude::*;
//!
//! let mut cache = LruCache::new(2);
//! cache.put("a", 1);
//! cache.put("b", 2);
//! cache.get("a");
//! cache.put("c", 3); // evicts "b"
//! assert!(!cache.contains("b"));
//! ```
//!
//! Features: `concurrency` (lock-protected `ConcurrentLruCache`), `metrics`
//! (operation counters and a Prometheus text exporter), `dhat-heap` (heap
//! profiling binary).

pub mod builder;
pub mod ds;
pub mod error;
pub mod policy;

#[cfg(feature = "metrics")]
pub mod metrics;

pub mod prelude;
pub mod traits;
