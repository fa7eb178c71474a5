#![no_main]

use std::collections::VecDeque;

use libfuzzer_sys::fuzz_target;
use lrukit::ds::{RecencyList, SlotId};

// Arbitrary push_front/move_to_front/pop_back/remove sequences on
// RecencyList, checked against a VecDeque of (id, value) ordered MRU first.
fuzz_target!(|data: &[u8]| {
    let mut list: RecencyList<u8> = RecencyList::new();
    let mut model: VecDeque<(SlotId, u8)> = VecDeque::new();

    for pair in data.chunks_exact(2) {
        let arg = pair[1];

        match pair[0] % 5 {
            0 => {
                let id = list.push_front(arg);
                model.push_front((id, arg));
            },
            1 => {
                if !model.is_empty() {
                    let pos = arg as usize % model.len();
                    if let Some(entry) = model.remove(pos) {
                        assert!(list.move_to_front(entry.0));
                        model.push_front(entry);
                    }
                }
            },
            2 => {
                assert_eq!(list.pop_back(), model.pop_back().map(|(_, v)| v));
            },
            3 => {
                if !model.is_empty() {
                    let pos = arg as usize % model.len();
                    if let Some((id, v)) = model.remove(pos) {
                        assert_eq!(list.remove(id), Some(v));
                        assert!(!list.contains(id));
                    }
                }
            },
            _ => {
                let front = model.front().map(|(id, _)| *id);
                let back = model.back().map(|(id, _)| *id);
                assert_eq!(list.front_id(), front);
                assert_eq!(list.back_id(), back);
            },
        }

        assert_eq!(list.len(), model.len());
        assert!(list.iter().copied().eq(model.iter().map(|(_, v)| *v)));
    }
});
