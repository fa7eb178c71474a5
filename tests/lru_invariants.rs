// ==============================================
// LRU BEHAVIOUR TESTS (integration)
// ==============================================
use lrukit::builder::CacheBuilder;
use lrukit::prelude::*;
use proptest::prelude::*;

fn mru_to_lru<V>(cache: &LruCache<&'static str, V>) -> Vec<&'static str> {
    cache.iter().map(|(k, _)| *k).collect()
}

mod walkthrough {
    use super::*;

    #[test]
    fn put_get_put_evicts_least_recent() {
        let mut cache = LruCache::new(3);
        cache.put("A", 1);
        cache.put("B", 2);
        cache.put("C", 3);
        assert_eq!(mru_to_lru(&cache), ["C", "B", "A"]);

        assert_eq!(cache.get("B"), Some(&2));
        assert_eq!(cache.get("A"), Some(&1));
        assert_eq!(mru_to_lru(&cache), ["A", "B", "C"]);

        cache.put("D", 4);
        assert_eq!(mru_to_lru(&cache), ["D", "A", "B"]);

        let results: Vec<_> = ["A", "B", "C", "D"]
            .iter()
            .map(|k| cache.get(k).copied())
            .collect();
        assert_eq!(results, [Some(1), Some(2), None, Some(4)]);
        cache.check_invariants().unwrap();
    }

    #[test]
    fn capacity_one_holds_only_the_latest_key() {
        let mut cache = CacheBuilder::new(1).build();
        cache.put("A", 1);
        cache.put("B", 2);
        assert_eq!(cache.get("A"), None);
        assert_eq!(cache.get("B"), Some(&2));
        cache.put("B", 3);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("B"), Some(&3));
    }

    #[test]
    fn zero_capacity_is_a_configuration_error() {
        let err = LruCache::<&str, i32>::try_new(0).unwrap_err();
        assert_eq!(err.message(), "cache capacity must be greater than zero");
        assert!(CacheBuilder::new(0).try_build::<u8, u8>().is_err());
    }

    #[test]
    fn returned_reference_is_current_value() {
        let mut cache = LruCache::new(2);
        cache.put("k", String::from("first"));
        let len = cache.get("k").map(String::len);
        cache.put("k", String::from("second!"));
        assert_eq!(len, Some(5));
        assert_eq!(cache.get("k").map(String::as_str), Some("second!"));
    }
}

mod generic_use {
    use super::*;

    fn read_through<C: LruCacheTrait<u32, u32>>(cache: &mut C, key: u32) -> u32 {
        if let Some(v) = cache.get(&key) {
            return *v;
        }
        let value = key * 2;
        cache.insert(key, value);
        value
    }

    #[test]
    fn read_through_fills_then_hits() {
        let mut cache = LruCache::new(4);
        for key in [1, 2, 1, 3, 4, 5, 1] {
            assert_eq!(read_through(&mut cache, key), key * 2);
        }
        // 2 was the least recent when 5 arrived
        assert!(!cache.contains(&2));
        assert_eq!(cache.recency_rank(&1), Some(0));
        assert_eq!(cache.peek_lru(), Some((&3, &6)));
    }
}

// ==============================================
// PROPERTIES
// ==============================================

#[derive(Debug, Clone)]
enum Op {
    Put(u8, u16),
    Get(u8),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0u8..32, any::<u16>()).prop_map(|(k, v)| Op::Put(k, v)),
        (0u8..32).prop_map(Op::Get),
    ]
}

/// Recency order after replaying `ops` on a plain `Vec` (index 0 = MRU).
fn simulate(capacity: usize, ops: &[Op]) -> Vec<(u8, u16)> {
    let mut order: Vec<(u8, u16)> = Vec::new();
    for op in ops {
        match *op {
            Op::Put(k, v) => {
                if let Some(pos) = order.iter().position(|(key, _)| *key == k) {
                    order.remove(pos);
                } else if order.len() == capacity {
                    order.pop();
                }
                order.insert(0, (k, v));
            },
            Op::Get(k) => {
                if let Some(pos) = order.iter().position(|(key, _)| *key == k) {
                    let entry = order.remove(pos);
                    order.insert(0, entry);
                }
            },
        }
    }
    order
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[cfg_attr(miri, ignore)]
    #[test]
    fn len_never_exceeds_capacity(
        capacity in 1usize..20,
        ops in prop::collection::vec(op_strategy(), 0..400)
    ) {
        let mut cache = LruCache::new(capacity);
        for op in &ops {
            match *op {
                Op::Put(k, v) => cache.put(k, v),
                Op::Get(k) => { cache.get(&k); },
            }
            prop_assert!(cache.len() <= capacity);
        }
    }

    #[cfg_attr(miri, ignore)]
    #[test]
    fn final_state_matches_simulation(
        capacity in 1usize..20,
        ops in prop::collection::vec(op_strategy(), 0..400)
    ) {
        let mut cache = LruCache::new(capacity);
        for op in &ops {
            match *op {
                Op::Put(k, v) => cache.put(k, v),
                Op::Get(k) => { cache.get(&k); },
            }
        }

        let actual: Vec<_> = cache.iter().map(|(k, v)| (*k, *v)).collect();
        prop_assert_eq!(actual, simulate(capacity, &ops));
        cache.check_invariants().unwrap();
    }

    #[cfg_attr(miri, ignore)]
    #[test]
    fn repeated_get_leaves_others_in_place(
        keys in prop::collection::hash_set(0u8..64, 2..16),
        pick in any::<prop::sample::Index>(),
        repeats in 1usize..6
    ) {
        let keys: Vec<u8> = keys.into_iter().collect();
        let mut cache = LruCache::new(keys.len());
        for &k in &keys {
            cache.put(k, ());
        }
        let target = keys[pick.index(keys.len())];

        cache.get(&target);
        let once: Vec<u8> = cache.iter().map(|(k, _)| *k).collect();
        for _ in 0..repeats {
            cache.get(&target);
        }
        let many: Vec<u8> = cache.iter().map(|(k, _)| *k).collect();
        prop_assert_eq!(once, many);
    }
}
