// ==============================================
// CONCURRENT LRU TESTS (integration)
// ==============================================
#![cfg(feature = "concurrency")]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;

use lrukit::prelude::*;

fn assert_concurrent<C: ConcurrentCache + Clone>(_: &C) {}

#[test]
fn handle_is_concurrent_cache() {
    let cache: ConcurrentLruCache<u64, Vec<u8>> = ConcurrentLruCache::new(8);
    assert_concurrent(&cache);
}

#[test]
fn parallel_puts_respect_capacity() {
    let capacity = 64;
    let cache: ConcurrentLruCache<u64, u64> = ConcurrentLruCache::new(capacity);
    let num_threads = 8;
    let per_thread = 1_000u64;
    let barrier = Arc::new(Barrier::new(num_threads));

    let handles: Vec<_> = (0..num_threads as u64)
        .map(|thread_id| {
            let cache = cache.clone();
            let barrier = barrier.clone();
            thread::spawn(move || {
                barrier.wait();
                for i in 0..per_thread {
                    cache.put(thread_id * per_thread + i, i);
                    assert!(cache.len() <= capacity);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(cache.len(), capacity);
    cache.check_invariants().unwrap();
}

#[test]
fn mixed_get_put_keeps_index_and_list_consistent() {
    let cache: ConcurrentLruCache<u32, String> = ConcurrentLruCache::new(32);
    let num_threads = 6;
    let barrier = Arc::new(Barrier::new(num_threads));
    let hits = Arc::new(AtomicUsize::new(0));

    let handles: Vec<_> = (0..num_threads as u32)
        .map(|thread_id| {
            let cache = cache.clone();
            let barrier = barrier.clone();
            let hits = hits.clone();
            thread::spawn(move || {
                barrier.wait();
                for i in 0..2_000u32 {
                    let key = (thread_id * 7 + i) % 48;
                    match i % 5 {
                        0 | 1 => cache.put(key, format!("v{}", key)),
                        2 => {
                            if let Some(v) = cache.get(&key) {
                                assert_eq!(v, format!("v{}", key));
                                hits.fetch_add(1, Ordering::Relaxed);
                            }
                        },
                        3 => {
                            let _ = cache.get_with(&key, |v| v.len());
                        },
                        _ => {
                            let _ = cache.peek(&key);
                            let _ = cache.contains(&key);
                        },
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert!(cache.len() <= 32);
    assert!(hits.load(Ordering::Relaxed) > 0);
    cache.check_invariants().unwrap();
}

#[test]
fn concurrent_pop_lru_returns_each_entry_once() {
    let cache: ConcurrentLruCache<usize, usize> = ConcurrentLruCache::new(1_000);
    for i in 0..1_000 {
        cache.put(i, i);
    }

    let num_threads = 4;
    let barrier = Arc::new(Barrier::new(num_threads));
    let handles: Vec<_> = (0..num_threads)
        .map(|_| {
            let cache = cache.clone();
            let barrier = barrier.clone();
            thread::spawn(move || {
                barrier.wait();
                let mut popped = Vec::new();
                while let Some((k, _)) = cache.pop_lru() {
                    popped.push(k);
                }
                popped
            })
        })
        .collect();

    let mut all: Vec<usize> = handles
        .into_iter()
        .flat_map(|h| h.join().unwrap())
        .collect();
    all.sort_unstable();

    assert_eq!(all, (0..1_000).collect::<Vec<_>>());
    assert!(cache.is_empty());
}
