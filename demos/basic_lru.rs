//! Walkthrough of LRU eviction on a three-entry cache.
//!
//! Run with: cargo run --example basic_lru
//! Eviction events: RUST_LOG=lrukit=trace cargo run --example basic_lru

use lrukit::policy::lru::LruCache;
use tracing_subscriber::EnvFilter;

fn report(cache: &mut LruCache<&'static str, i32>, key: &str) {
    match cache.get(key) {
        Some(value) => println!("Get {}: {}, true", key, value),
        None => println!("Get {}: -, false", key),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut cache = LruCache::new(3);

    for (key, value) in [("A", 1), ("B", 2), ("C", 3)] {
        println!("Put: {}={}", key, value);
        cache.put(key, value);
    }

    // B then A become the most recently used; C is now the oldest
    report(&mut cache, "B");
    report(&mut cache, "A");

    println!("Put: D=4 (cache full, evicts C)");
    cache.put("D", 4);

    for key in ["A", "B", "C", "D"] {
        report(&mut cache, key);
    }

    let order: Vec<_> = cache.iter().map(|(k, _)| *k).collect();
    println!("\nRecency order (MRU -> LRU): {:?}", order);
    println!("Next victim: {:?}", cache.peek_lru());
}
