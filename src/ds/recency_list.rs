//! Sentinel-bounded doubly linked list backed by [`SlotArena`].
//!
//! Nodes live in a `SlotArena` and link to each other by [`SlotId`], so the
//! list needs no raw pointers and no shared ownership. Two sentinel nodes are
//! allocated up front in fixed slots and are never freed:
//!
//! ```text
//!   arena (SlotArena<Node<T>>)
//!   ┌────────┬──────────────────────────────────────────────┐
//!   │ SlotId │ Node { value, prev, next }                   │
//!   ├────────┼──────────────────────────────────────────────┤
//!   │ 0 HEAD │ { value: None,    prev: HEAD, next: id_2 }   │
//!   │ 1 TAIL │ { value: None,    prev: id_3, next: TAIL }   │
//!   │ id_2   │ { value: Some(A), prev: HEAD, next: id_3 }   │
//!   │ id_3   │ { value: Some(B), prev: id_2, next: TAIL }   │
//!   └────────┴──────────────────────────────────────────────┘
//!
//!   HEAD ─► [A] ◄──► [B] ◄── TAIL
//!           MRU      LRU
//! ```
//!
//! Because `HEAD` and `TAIL` always exist, splicing never branches on an
//! empty list or an end node: every live node has a real `prev` and `next`.
//!
//! ## Operations
//! - `push_front(value)`: allocate + insert after `HEAD`
//! - `move_to_front(id)`: unlink + insert after `HEAD`
//! - `pop_back()`: unlink `TAIL.prev` + free its slot
//! - `remove(id)`: unlink + free slot
//!
//! All of the above are O(1); iteration is O(n) from MRU to LRU.

use crate::ds::slot_arena::{SlotArena, SlotId};
use crate::error::InvariantError;

const HEAD: SlotId = SlotId(0);
const TAIL: SlotId = SlotId(1);
const SENTINELS: usize = 2;

#[derive(Debug)]
struct Node<T> {
    value: Option<T>,
    prev: SlotId,
    next: SlotId,
}

impl<T> Node<T> {
    fn sentinel() -> Self {
        Self {
            value: None,
            prev: HEAD,
            next: TAIL,
        }
    }
}

/// Recency list with fixed `HEAD`/`TAIL` sentinels stored in the arena.
#[derive(Debug)]
pub struct RecencyList<T> {
    arena: SlotArena<Node<T>>,
}

impl<T> RecencyList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty list with room for `capacity` data nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut arena = SlotArena::with_capacity(capacity.saturating_add(SENTINELS));
        let head = arena.insert(Node::sentinel());
        let tail = arena.insert(Node::sentinel());
        debug_assert_eq!((head, tail), (HEAD, TAIL));
        Self { arena }
    }

    /// Returns the number of data nodes (sentinels excluded).
    pub fn len(&self) -> usize {
        self.arena.len() - SENTINELS
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if `id` is a live data node of this list.
    pub fn contains(&self, id: SlotId) -> bool {
        !is_sentinel(id) && self.arena.contains(id)
    }

    /// Returns the id right after `HEAD` (the MRU node).
    pub fn front_id(&self) -> Option<SlotId> {
        let first = self.arena.get(HEAD)?.next;
        (first != TAIL).then_some(first)
    }

    /// Returns the id right before `TAIL` (the LRU node).
    pub fn back_id(&self) -> Option<SlotId> {
        let last = self.arena.get(TAIL)?.prev;
        (last != HEAD).then_some(last)
    }

    pub fn front(&self) -> Option<&T> {
        self.front_id().and_then(|id| self.get(id))
    }

    pub fn back(&self) -> Option<&T> {
        self.back_id().and_then(|id| self.get(id))
    }

    /// Returns the value stored at `id`; sentinels have none.
    pub fn get(&self, id: SlotId) -> Option<&T> {
        self.arena.get(id).and_then(|node| node.value.as_ref())
    }

    pub fn get_mut(&mut self, id: SlotId) -> Option<&mut T> {
        self.arena.get_mut(id).and_then(|node| node.value.as_mut())
    }

    /// Allocates a node for `value` and splices it in after `HEAD`.
    pub fn push_front(&mut self, value: T) -> SlotId {
        let id = self.arena.insert(Node {
            value: Some(value),
            prev: HEAD,
            next: TAIL,
        });
        self.insert_after_head(id);
        id
    }

    /// Moves a live node to the MRU position; returns `false` if `id` is not
    /// a data node of this list.
    pub fn move_to_front(&mut self, id: SlotId) -> bool {
        if !self.contains(id) {
            return false;
        }
        if self.front_id() == Some(id) {
            return true;
        }
        self.unlink(id);
        self.insert_after_head(id);
        true
    }

    /// Unlinks and frees the LRU node, returning its value.
    pub fn pop_back(&mut self) -> Option<T> {
        let id = self.back_id()?;
        self.remove(id)
    }

    /// Unlinks and frees the node `id`, returning its value.
    pub fn remove(&mut self, id: SlotId) -> Option<T> {
        if !self.contains(id) {
            return None;
        }
        self.unlink(id)?;
        self.arena.remove(id).and_then(|node| node.value)
    }

    /// Returns an iterator over values from MRU to LRU.
    pub fn iter(&self) -> RecencyListIter<'_, T> {
        RecencyListIter {
            list: self,
            current: self.first_link(),
            remaining: self.len(),
        }
    }

    /// Returns an iterator over `(SlotId, &T)` from MRU to LRU.
    pub fn iter_entries(&self) -> RecencyListEntryIter<'_, T> {
        RecencyListEntryIter {
            list: self,
            current: self.first_link(),
            remaining: self.len(),
        }
    }

    /// Returns an iterator over ids from MRU to LRU.
    pub fn iter_ids(&self) -> impl Iterator<Item = SlotId> + '_ {
        self.iter_entries().map(|(id, _)| id)
    }

    fn first_link(&self) -> SlotId {
        self.arena.get(HEAD).map_or(TAIL, |head| head.next)
    }

    /// Connects the neighbours of `id` to each other. The node keeps its slot
    /// and its stale links until it is re-inserted or freed.
    fn unlink(&mut self, id: SlotId) -> Option<()> {
        debug_assert!(!is_sentinel(id), "sentinels are never unlinked");
        let (prev, next) = {
            let node = self.arena.get(id)?;
            (node.prev, node.next)
        };

        if let Some(prev_node) = self.arena.get_mut(prev) {
            prev_node.next = next;
        }
        if let Some(next_node) = self.arena.get_mut(next) {
            next_node.prev = prev;
        }
        Some(())
    }

    /// Splices `id` between `HEAD` and `HEAD.next`.
    fn insert_after_head(&mut self, id: SlotId) -> Option<()> {
        let old_first = self.arena.get(HEAD)?.next;

        let node = self.arena.get_mut(id)?;
        node.prev = HEAD;
        node.next = old_first;

        if let Some(head) = self.arena.get_mut(HEAD) {
            head.next = id;
        }
        if let Some(first) = self.arena.get_mut(old_first) {
            first.prev = id;
        }
        Some(())
    }

    /// Walks `HEAD → TAIL` and checks link symmetry, node count, and that
    /// every occupied slot is reachable.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        let head = self
            .arena
            .get(HEAD)
            .ok_or_else(|| InvariantError::new("HEAD sentinel missing"))?;
        let tail = self
            .arena
            .get(TAIL)
            .ok_or_else(|| InvariantError::new("TAIL sentinel missing"))?;
        if head.value.is_some() || tail.value.is_some() {
            return Err(InvariantError::new("sentinel holds a value"));
        }

        let mut count = 0usize;
        let mut prev = HEAD;
        let mut current = head.next;
        while current != TAIL {
            let node = self.arena.get(current).ok_or_else(|| {
                InvariantError::new(format!("dangling SlotId {:?} after {:?}", current, prev))
            })?;
            if node.value.is_none() {
                return Err(InvariantError::new(format!(
                    "data node {:?} has no value",
                    current
                )));
            }
            if node.prev != prev {
                return Err(InvariantError::new(format!(
                    "node {:?} prev is {:?}, expected {:?}",
                    current, node.prev, prev
                )));
            }
            count += 1;
            if count > self.len() {
                return Err(InvariantError::new("cycle detected in recency list"));
            }
            prev = current;
            current = node.next;
        }

        if tail.prev != prev {
            return Err(InvariantError::new(format!(
                "TAIL prev is {:?}, expected {:?}",
                tail.prev, prev
            )));
        }
        if count != self.len() {
            return Err(InvariantError::new(format!(
                "walked {} nodes but arena holds {}",
                count,
                self.len()
            )));
        }
        Ok(())
    }
}

impl<T> Default for RecencyList<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn is_sentinel(id: SlotId) -> bool {
    id == HEAD || id == TAIL
}

/// Iterator over values from MRU to LRU.
pub struct RecencyListIter<'a, T> {
    list: &'a RecencyList<T>,
    current: SlotId,
    remaining: usize,
}

impl<'a, T> Iterator for RecencyListIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current == TAIL {
            return None;
        }
        let node = self.list.arena.get(self.current)?;
        self.current = node.next;
        self.remaining = self.remaining.saturating_sub(1);
        node.value.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

/// Iterator over `(SlotId, &T)` pairs from MRU to LRU.
pub struct RecencyListEntryIter<'a, T> {
    list: &'a RecencyList<T>,
    current: SlotId,
    remaining: usize,
}

impl<'a, T> Iterator for RecencyListEntryIter<'a, T> {
    type Item = (SlotId, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        if self.current == TAIL {
            return None;
        }
        let id = self.current;
        let node = self.list.arena.get(id)?;
        self.current = node.next;
        self.remaining = self.remaining.saturating_sub(1);
        node.value.as_ref().map(|value| (id, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values<T: Copy>(list: &RecencyList<T>) -> Vec<T> {
        list.iter().copied().collect()
    }

    #[test]
    fn new_list_has_only_sentinels() {
        let list: RecencyList<u32> = RecencyList::new();
        assert!(list.is_empty());
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
        assert_eq!(list.front_id(), None);
        assert_eq!(list.back_id(), None);
        assert!(!list.contains(HEAD));
        assert!(!list.contains(TAIL));
        list.check_invariants().unwrap();
    }

    #[test]
    fn push_front_orders_mru_first() {
        let mut list = RecencyList::new();
        let a = list.push_front("a");
        let b = list.push_front("b");
        let c = list.push_front("c");

        assert_eq!(values(&list), vec!["c", "b", "a"]);
        assert_eq!(list.front_id(), Some(c));
        assert_eq!(list.back_id(), Some(a));
        assert!(list.contains(b));
        assert_eq!(list.len(), 3);
        list.check_invariants().unwrap();
    }

    #[test]
    fn move_to_front_from_middle_and_back() {
        let mut list = RecencyList::new();
        let a = list.push_front("a");
        let b = list.push_front("b");
        let _c = list.push_front("c");

        assert!(list.move_to_front(b));
        assert_eq!(values(&list), vec!["b", "c", "a"]);

        assert!(list.move_to_front(a));
        assert_eq!(values(&list), vec!["a", "b", "c"]);

        // Already MRU: no-op
        assert!(list.move_to_front(a));
        assert_eq!(values(&list), vec!["a", "b", "c"]);
        list.check_invariants().unwrap();
    }

    #[test]
    fn move_to_front_rejects_sentinels_and_freed_ids() {
        let mut list = RecencyList::new();
        let a = list.push_front(1);
        assert!(!list.move_to_front(HEAD));
        assert!(!list.move_to_front(TAIL));

        list.remove(a);
        assert!(!list.move_to_front(a));
        list.check_invariants().unwrap();
    }

    #[test]
    fn pop_back_returns_lru_first() {
        let mut list = RecencyList::new();
        list.push_front(1);
        list.push_front(2);
        list.push_front(3);

        assert_eq!(list.pop_back(), Some(1));
        assert_eq!(list.pop_back(), Some(2));
        assert_eq!(list.pop_back(), Some(3));
        assert_eq!(list.pop_back(), None);
        assert!(list.is_empty());
        list.check_invariants().unwrap();
    }

    #[test]
    fn remove_middle_and_ends() {
        let mut list = RecencyList::new();
        let a = list.push_front("a");
        let b = list.push_front("b");
        let c = list.push_front("c");

        assert_eq!(list.remove(b), Some("b"));
        assert_eq!(values(&list), vec!["c", "a"]);

        assert_eq!(list.remove(c), Some("c"));
        assert_eq!(list.front(), Some(&"a"));
        assert_eq!(list.back(), Some(&"a"));

        assert_eq!(list.remove(a), Some("a"));
        assert_eq!(list.remove(a), None);
        assert!(list.is_empty());
        list.check_invariants().unwrap();
    }

    #[test]
    fn sentinel_ids_cannot_be_removed() {
        let mut list: RecencyList<u8> = RecencyList::new();
        assert_eq!(list.remove(HEAD), None);
        assert_eq!(list.remove(TAIL), None);
        list.check_invariants().unwrap();
    }

    #[test]
    fn freed_slots_are_reused() {
        let mut list = RecencyList::with_capacity(2);
        let a = list.push_front(1);
        list.push_front(2);
        list.pop_back();
        let c = list.push_front(3);
        assert_eq!(a, c);
        assert_eq!(values(&list), vec![3, 2]);
        list.check_invariants().unwrap();
    }

    #[test]
    fn get_mut_updates_value() {
        let mut list = RecencyList::new();
        let id = list.push_front(10);
        if let Some(value) = list.get_mut(id) {
            *value = 20;
        }
        assert_eq!(list.get(id), Some(&20));
        assert_eq!(list.get(HEAD), None);
    }

    #[test]
    fn entry_and_id_iters_agree() {
        let mut list = RecencyList::new();
        let a = list.push_front('a');
        let b = list.push_front('b');

        let ids: Vec<_> = list.iter_ids().collect();
        assert_eq!(ids, vec![b, a]);

        let entries: Vec<_> = list.iter_entries().map(|(id, v)| (id, *v)).collect();
        assert_eq!(entries, vec![(b, 'b'), (a, 'a')]);
        assert_eq!(list.iter().size_hint(), (2, Some(2)));
    }
}
