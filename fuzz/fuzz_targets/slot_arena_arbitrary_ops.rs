#![no_main]

use libfuzzer_sys::fuzz_target;
use lrukit::ds::SlotArena;

// Arbitrary insert/remove/get_mut sequences on SlotArena, checked against a
// shadow Vec<Option<u32>> indexed by slot.
fuzz_target!(|data: &[u8]| {
    let mut arena: SlotArena<u32> = SlotArena::new();
    let mut shadow: Vec<Option<u32>> = Vec::new();
    let mut ids = Vec::new();

    for pair in data.chunks_exact(2) {
        let value = u32::from(pair[1]);

        match pair[0] % 5 {
            0 => {
                let id = arena.insert(value);
                if id.index() == shadow.len() {
                    shadow.push(Some(value));
                } else {
                    // reused slots must have been free
                    assert_eq!(shadow[id.index()], None);
                    shadow[id.index()] = Some(value);
                }
                ids.push(id);
            },
            1 => {
                if let Some(&id) = ids.get(value as usize % ids.len().max(1)) {
                    let expected = shadow[id.index()].take();
                    assert_eq!(arena.remove(id), expected);
                }
            },
            2 => {
                if let Some(&id) = ids.get(value as usize % ids.len().max(1)) {
                    if let Some(slot) = arena.get_mut(id) {
                        *slot = value;
                        shadow[id.index()] = Some(value);
                    }
                }
            },
            3 => {
                if let Some(&id) = ids.get(value as usize % ids.len().max(1)) {
                    assert_eq!(arena.get(id), shadow[id.index()].as_ref());
                    assert_eq!(arena.contains(id), shadow[id.index()].is_some());
                }
            },
            _ => {
                assert_eq!(arena.iter().count(), arena.len());
            },
        }

        let live = shadow.iter().filter(|slot| slot.is_some()).count();
        assert_eq!(arena.len(), live);
        assert_eq!(arena.slot_count(), shadow.len());
    }
});
