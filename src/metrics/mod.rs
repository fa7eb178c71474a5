//! Operation counters for [`LruCache`](crate::policy::lru::LruCache).
//!
//! Compiled only with the `metrics` feature. Recording, snapshotting and
//! exporting are split into separate traits so the cache only ever writes
//! counters and never knows who reads them.

pub mod cell;
pub mod exporter;
pub mod metrics_impl;
pub mod snapshot;
pub mod traits;
