//! DHAT heap profiler for lrukit.
//!
//! Run with: cargo run --bin dhat_profile --release --features dhat-heap
//! View results: Open dhat-heap.json in <https://nnethercote.github.io/dh_view/dh_view.html>
//!
//! Compares a preallocated cache with one that grows on demand. After warm-up
//! neither should allocate for nodes again: evictions free a slot that the
//! next insert reuses.

#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

use lrukit::builder::CacheBuilder;
use lrukit::policy::lru::LruCache;
use lrukit::traits::CoreCache;

const CAPACITY: usize = 4096;
const OPERATIONS: usize = 100_000;
const UNIVERSE: u64 = 16_384;

/// XorShift64 for deterministic key streams.
struct KeyStream {
    state: u64,
}

impl KeyStream {
    fn new(seed: u64) -> Self {
        Self { state: seed.max(1) }
    }

    fn next(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// 90% of draws land in the first tenth of `universe`.
    fn hot_key(&mut self, universe: u64) -> u64 {
        let hot = universe / 10;
        if self.next() % 10 != 0 {
            self.next() % hot
        } else {
            hot + self.next() % (universe - hot)
        }
    }
}

/// Read-through loop: a miss inserts the key.
fn read_through<C: CoreCache<u64, Vec<u8>>>(cache: &mut C, keys: impl Iterator<Item = u64>) {
    for key in keys {
        if cache.get(&key).is_none() {
            let _ = cache.insert(key, key.to_le_bytes().to_vec());
        }
    }
}

fn run(label: &str, mut cache: LruCache<u64, Vec<u8>>) {
    println!("=== {} ===", label);

    read_through(&mut cache, 0..CAPACITY as u64);

    let mut stream = KeyStream::new(42);
    read_through(&mut cache, (0..OPERATIONS).map(|_| stream.hot_key(UNIVERSE)));

    read_through(&mut cache, (0..OPERATIONS as u64 / 2).map(|i| i % UNIVERSE));

    read_through(
        &mut cache,
        (0..OPERATIONS as u64 / 4).map(|i| UNIVERSE + i),
    );

    let mut drained = 0usize;
    while cache.len() > CAPACITY / 2 {
        if cache.pop_lru().is_some() {
            drained += 1;
        }
    }

    println!("  Final size: {} (drained {})", cache.len(), drained);
}

fn main() {
    let _profiler = dhat::Profiler::new_heap();

    println!("lrukit DHAT Heap Profiling");
    println!("==========================\n");

    run(
        "LRU (preallocated)",
        CacheBuilder::new(CAPACITY).prealloc(true).build(),
    );
    run(
        "LRU (grow on demand)",
        CacheBuilder::new(CAPACITY).prealloc(false).build(),
    );

    println!("\n==========================");
    println!("Profile written to dhat-heap.json");
}
