use crate::arena::{NodeArena, NodeId};
use std::iter::FusedIterator;

/// Pull-based sequence returned by [`RingQueue::iterate`](crate::RingQueue::iterate).
///
/// Starts at the head and yields while the cursor has not reached the tail.
/// The tail element is therefore never yielded: a queue of one element yields
/// nothing, a queue of N ≥ 2 elements yields the first N − 1.
///
/// Existing callers of the partition buffer rely on this stop condition, so it
/// is kept as is. Use [`RingQueue::traverse`](crate::RingQueue::traverse) or
/// [`RingQueue::snapshot`](crate::RingQueue::snapshot) to see every element.
///
/// The sequence borrows the queue, so the queue cannot be mutated while it is
/// outstanding.
pub struct Iter<'a, E> {
    nodes: &'a NodeArena<E>,
    cursor: Option<NodeId>,
    tail: Option<NodeId>,
    remaining: usize,
}

impl<'a, E> Iter<'a, E> {
    pub(crate) fn new(
        nodes: &'a NodeArena<E>,
        head: Option<NodeId>,
        tail: Option<NodeId>,
        len: usize,
    ) -> Self {
        Self {
            nodes,
            cursor: head,
            tail,
            remaining: len.saturating_sub(1),
        }
    }

    /// Returns `true` if another call to `next` will yield an element.
    #[inline]
    pub fn has_next(&self) -> bool {
        self.cursor.is_some() && self.cursor != self.tail
    }
}

impl<'a, E> Iterator for Iter<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<&'a E> {
        if !self.has_next() {
            return None;
        }
        let current = self.cursor?;
        self.cursor = Some(self.nodes.next(current));
        self.remaining -= 1;
        Some(self.nodes.value(current))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<E> ExactSizeIterator for Iter<'_, E> {}

impl<E> FusedIterator for Iter<'_, E> {}

/// Full walk over all `len` nodes starting at `head`, in ring order.
pub(crate) struct Walk<'a, E> {
    nodes: &'a NodeArena<E>,
    cursor: Option<NodeId>,
    remaining: usize,
}

impl<'a, E> Walk<'a, E> {
    pub(crate) fn new(nodes: &'a NodeArena<E>, head: Option<NodeId>, len: usize) -> Self {
        Self {
            nodes,
            cursor: head,
            remaining: len,
        }
    }
}

impl<'a, E> Iterator for Walk<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<&'a E> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.cursor?;
        self.cursor = Some(self.nodes.next(current));
        self.remaining -= 1;
        Some(self.nodes.value(current))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}
