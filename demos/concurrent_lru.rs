//! Sharing one LRU cache across worker threads.
//!
//! Run with: cargo run --example concurrent_lru --features concurrency

use std::thread;

use lrukit::builder::CacheBuilder;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cache = match CacheBuilder::new(16).try_build_concurrent::<u32, String>() {
        Ok(cache) => cache,
        Err(e) => {
            eprintln!("invalid cache configuration: {}", e);
            return;
        },
    };

    let workers: Vec<_> = (0..4u32)
        .map(|worker| {
            let cache = cache.clone();
            thread::spawn(move || {
                let mut hits = 0;
                for i in 0..100u32 {
                    let key = (worker + i) % 24;
                    if cache.get_with(&key, |v| v.len()).is_some() {
                        hits += 1;
                    } else {
                        cache.put(key, format!("computed by worker {}", worker));
                    }
                }
                hits
            })
        })
        .collect();

    for (worker, handle) in workers.into_iter().enumerate() {
        match handle.join() {
            Ok(hits) => println!("worker {} hits: {}", worker, hits),
            Err(_) => eprintln!("worker {} panicked", worker),
        }
    }

    println!("final size: {} / {}", cache.len(), cache.capacity());
    if let Some((key, value)) = cache.peek_lru() {
        println!("next victim: {} ({})", key, value);
    }
}
