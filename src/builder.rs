//! Cache configuration and builder.
//!
//! [`CacheConfig`] is the plain-data form; [`CacheBuilder`] is the chained
//! form most callers use. Both end in [`LruCache::try_with_config`], which is
//! the single place capacity is validated.
//!
//! ## Example
//!
//! ```rust
//! use lrukit::builder::CacheBuilder;
//!
//! let mut cache = CacheBuilder::new(100).build::<u64, String>();
//! cache.put(1, "hello".to_string());
//! assert_eq!(cache.get(&1), Some(&"hello".to_string()));
//!
//! assert!(CacheBuilder::new(0).try_build::<u64, String>().is_err());
//! ```

use std::hash::Hash;

use crate::error::ConfigError;
#[cfg(feature = "concurrency")]
use crate::policy::lru::ConcurrentLruCache;
use crate::policy::lru::LruCache;

/// Construction parameters for an [`LruCache`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheConfig {
    /// Maximum number of entries the cache can hold. Must be non-zero.
    pub capacity: usize,

    /// Pre-allocate the index and node arena for `capacity` entries.
    ///
    /// When false, memory grows as entries arrive (may cause latency spikes
    /// during warm-up).
    pub prealloc_memory: bool,
}

impl Default for CacheConfig {
    /// Defaults:
    /// - `capacity`: 1000
    /// - `prealloc_memory`: true
    fn default() -> Self {
        Self {
            capacity: 1000,
            prealloc_memory: true,
        }
    }
}

/// Builder for [`LruCache`] and, with the `concurrency` feature,
/// [`ConcurrentLruCache`].
#[derive(Debug, Clone)]
pub struct CacheBuilder {
    config: CacheConfig,
}

impl CacheBuilder {
    /// Create a new cache builder with the specified capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            config: CacheConfig {
                capacity,
                ..CacheConfig::default()
            },
        }
    }

    pub fn from_config(config: CacheConfig) -> Self {
        Self { config }
    }

    /// Toggle up-front allocation of the index and node arena.
    pub fn prealloc(mut self, enabled: bool) -> Self {
        self.config.prealloc_memory = enabled;
        self
    }

    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Build the cache, reporting an invalid capacity as an error.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the capacity is zero.
    pub fn try_build<K, V>(self) -> Result<LruCache<K, V>, ConfigError>
    where
        K: Eq + Hash + Clone,
    {
        LruCache::try_with_config(self.config)
    }

    /// Build the cache.
    ///
    /// # Panics
    ///
    /// Panics if the capacity is zero. Use [`try_build`](Self::try_build) to
    /// handle that case.
    pub fn build<K, V>(self) -> LruCache<K, V>
    where
        K: Eq + Hash + Clone,
    {
        match self.try_build() {
            Ok(cache) => cache,
            Err(e) => panic!("{}", e),
        }
    }

    /// Build a shareable, lock-protected cache.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the capacity is zero.
    #[cfg(feature = "concurrency")]
    pub fn try_build_concurrent<K, V>(self) -> Result<ConcurrentLruCache<K, V>, ConfigError>
    where
        K: Eq + Hash + Clone,
    {
        Ok(self.try_build()?.into())
    }
}
