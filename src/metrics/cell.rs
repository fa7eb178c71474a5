use std::sync::atomic::{AtomicU64, Ordering};

/// Counter bumped from `&self` paths (`peek`, `peek_lru`, `recency_rank`).
///
/// Those paths may run under a shared read lock in `ConcurrentLruCache`, so
/// several threads can increment the same cell at once. Relaxed ordering is
/// enough: counters are observational and never gate control flow.
#[derive(Debug, Default)]
pub struct MetricsCell(AtomicU64);

impl MetricsCell {
    #[inline]
    pub fn new() -> Self {
        Self(AtomicU64::new(0))
    }

    #[inline]
    pub fn get(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn incr(&self) {
        self.0.fetch_add(1, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incr_from_shared_reference() {
        let cell = MetricsCell::new();
        let shared = &cell;
        shared.incr();
        shared.incr();
        assert_eq!(cell.get(), 2);
    }

    #[test]
    fn concurrent_increments_are_not_lost() {
        let cell = MetricsCell::default();
        std::thread::scope(|s| {
            for _ in 0..4 {
                s.spawn(|| {
                    for _ in 0..1000 {
                        cell.incr();
                    }
                });
            }
        });
        assert_eq!(cell.get(), 4000);
    }
}
