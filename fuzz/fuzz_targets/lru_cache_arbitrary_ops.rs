#![no_main]

use libfuzzer_sys::fuzz_target;
use lrukit::policy::lru::LruCache;

// Arbitrary put/get/peek/touch/pop_lru sequences on LruCache, replayed on a
// Vec ordered MRU first. The first byte picks the capacity (1..=16).
fuzz_target!(|data: &[u8]| {
    let Some((&cap_byte, ops)) = data.split_first() else {
        return;
    };
    let capacity = usize::from(cap_byte % 16) + 1;
    let mut cache: LruCache<u8, u8> = LruCache::new(capacity);
    let mut model: Vec<(u8, u8)> = Vec::new();

    for chunk in ops.chunks_exact(3) {
        let key = chunk[1] % 32;
        let value = chunk[2];
        let pos = model.iter().position(|(k, _)| *k == key);

        match chunk[0] % 5 {
            0 => {
                cache.put(key, value);
                match pos {
                    Some(p) => {
                        model.remove(p);
                    },
                    None if model.len() == capacity => {
                        model.pop();
                    },
                    None => {},
                }
                model.insert(0, (key, value));
            },
            1 => {
                let expected = pos.map(|p| model[p].1);
                assert_eq!(cache.get(&key).copied(), expected);
                if let Some(p) = pos {
                    let entry = model.remove(p);
                    model.insert(0, entry);
                }
            },
            2 => {
                assert_eq!(cache.peek(&key).copied(), pos.map(|p| model[p].1));
            },
            3 => {
                assert_eq!(cache.touch(&key), pos.is_some());
                if let Some(p) = pos {
                    let entry = model.remove(p);
                    model.insert(0, entry);
                }
            },
            _ => {
                assert_eq!(cache.pop_lru(), model.pop());
            },
        }

        assert!(cache.len() <= capacity);
        assert!(cache.iter().map(|(k, v)| (*k, *v)).eq(model.iter().copied()));
    }
});
