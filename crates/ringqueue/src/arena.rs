use std::fmt;

// =============================================================================
// NODE STORAGE
// =============================================================================
//
// The ring is cyclic (tail links to head), so nodes cannot own each other.
// Instead every node lives in a slot of one `Vec`, and links are slot
// indices wrapped in `NodeId`.
//
// - A node is allocated on enqueue and released on dequeue/delete; released
//   slots go onto an intrusive free list and are reused first.
// - A `NodeId` is only meaningful while its slot is occupied. The queue never
//   hands ids out, so a stale id can only come from a bug in the queue itself.
// - Accessing a vacant slot is such a bug and panics.
//
// =============================================================================

/// Handle to an occupied slot in a `NodeArena`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(usize);

impl NodeId {
    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One element plus the link to its successor in ring order.
#[derive(Debug, Clone)]
pub(crate) struct Node<E> {
    pub(crate) value: E,
    pub(crate) next: NodeId,
}

#[derive(Debug, Clone)]
enum Slot<E> {
    Occupied(Node<E>),
    /// Next vacant slot in the free list.
    Vacant(Option<NodeId>),
}

/// Slot table holding the nodes of one ring.
#[derive(Debug, Clone)]
pub(crate) struct NodeArena<E> {
    slots: Vec<Slot<E>>,
    free: Option<NodeId>,
    live: usize,
}

impl<E> NodeArena<E> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: None,
            live: 0,
        }
    }

    /// Number of occupied slots.
    #[inline]
    pub(crate) fn live(&self) -> usize {
        self.live
    }

    /// Number of slots ever created (occupied or vacant).
    #[inline]
    pub(crate) fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Slots available without reallocating.
    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Stores `value` in a fresh node that links to itself (a ring of one).
    pub(crate) fn alloc(&mut self, value: E) -> NodeId {
        let id = match self.free {
            Some(id) => {
                let Slot::Vacant(next_free) = &self.slots[id.0] else {
                    unreachable!("free list points at occupied slot {:?}", id);
                };
                self.free = *next_free;
                self.slots[id.0] = Slot::Occupied(Node { value, next: id });
                id
            }
            None => {
                let id = NodeId(self.slots.len());
                self.slots.push(Slot::Occupied(Node { value, next: id }));
                id
            }
        };
        self.live += 1;
        id
    }

    /// Frees the slot and moves its value out.
    pub(crate) fn release(&mut self, id: NodeId) -> E {
        let slot = std::mem::replace(&mut self.slots[id.0], Slot::Vacant(self.free));
        match slot {
            Slot::Occupied(node) => {
                self.free = Some(id);
                self.live -= 1;
                node.value
            }
            Slot::Vacant(_) => unreachable!("double release of node {:?}", id),
        }
    }

    /// Drops every node and forgets all slots.
    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free = None;
        self.live = 0;
    }

    /// Returns the node in `id`, or `None` if the slot is vacant or out of range.
    #[inline]
    pub(crate) fn get(&self, id: NodeId) -> Option<&Node<E>> {
        match self.slots.get(id.0) {
            Some(Slot::Occupied(node)) => Some(node),
            _ => None,
        }
    }

    #[inline]
    fn node(&self, id: NodeId) -> &Node<E> {
        match &self.slots[id.0] {
            Slot::Occupied(node) => node,
            Slot::Vacant(_) => unreachable!("dangling node id {:?}", id),
        }
    }

    #[inline]
    pub(crate) fn value(&self, id: NodeId) -> &E {
        &self.node(id).value
    }

    #[inline]
    pub(crate) fn next(&self, id: NodeId) -> NodeId {
        self.node(id).next
    }

    #[inline]
    pub(crate) fn set_next(&mut self, id: NodeId, next: NodeId) {
        match &mut self.slots[id.0] {
            Slot::Occupied(node) => node.next = next,
            Slot::Vacant(_) => unreachable!("relinking vacant node {:?}", id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alloc_links_to_self() {
        let mut arena = NodeArena::with_capacity(4);
        let id = arena.alloc("a");
        assert_eq!(arena.next(id), id);
        assert_eq!(*arena.value(id), "a");
        assert_eq!(arena.live(), 1);
    }

    #[test]
    fn test_released_slots_are_reused() {
        let mut arena = NodeArena::with_capacity(0);
        let a = arena.alloc(1u32);
        let b = arena.alloc(2u32);
        assert_eq!(arena.release(a), 1);
        assert!(arena.get(a).is_none());

        // LIFO reuse of the free list
        let c = arena.alloc(3u32);
        assert_eq!(c, a);
        assert_eq!(arena.slot_count(), 2);
        assert_eq!(arena.live(), 2);
        assert_eq!(*arena.value(b), 2);
        assert_eq!(*arena.value(c), 3);
    }

    #[test]
    fn test_free_list_chains_multiple_slots() {
        let mut arena = NodeArena::with_capacity(0);
        let ids: Vec<_> = (0..4u32).map(|v| arena.alloc(v)).collect();
        arena.release(ids[1]);
        arena.release(ids[3]);
        assert_eq!(arena.live(), 2);

        assert_eq!(arena.alloc(10), ids[3]);
        assert_eq!(arena.alloc(11), ids[1]);
        assert_eq!(arena.alloc(12), NodeId(4));
        assert_eq!(arena.live(), 5);
    }

    #[test]
    fn test_set_next() {
        let mut arena = NodeArena::with_capacity(2);
        let a = arena.alloc('a');
        let b = arena.alloc('b');
        arena.set_next(a, b);
        arena.set_next(b, a);
        assert_eq!(arena.next(a), b);
        assert_eq!(arena.next(b), a);
    }

    #[test]
    #[should_panic(expected = "double release")]
    fn test_double_release_panics() {
        let mut arena = NodeArena::with_capacity(1);
        let a = arena.alloc(());
        arena.release(a);
        arena.release(a);
    }
}
