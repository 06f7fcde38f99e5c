use crate::arena::{NodeArena, NodeId};
use crate::invariants::{
    debug_assert_closed, debug_assert_ends_consistent, debug_assert_len_matches_live,
};
use crate::iter::{Iter, Walk};
use crate::{Config, Metrics, QueueError, SameInstance};
use std::fmt;

// =============================================================================
// RING LAYOUT
// =============================================================================
//
//      head                         tail
//       │                            │
//       ▼                            ▼
//     [ a ] ──► [ b ] ──► [ c ] ──► [ d ]
//       ▲                              │
//       └──────────────────────────────┘
//
// - `head` is the next element to dequeue, `tail` the most recently enqueued.
// - Whenever the queue is non-empty, `tail.next == head`. A single node links
//   to itself.
// - `head`, `tail` and `len` are always updated together: both ends are `None`
//   exactly when `len == 0`.
//
// Targeted removal walks predecessor/successor pairs starting at
// (head, head.next), so the head node itself is inspected last, as the
// successor of the tail.
//
// =============================================================================

/// Unbounded FIFO queue stored as a circular singly-linked list.
///
/// This is the in-memory buffer behind one topic partition. It is a plain
/// single-owner container: no locking, no capacity bound, no I/O. Wrap it in a
/// `Mutex` (or give it to one task) if several parties need it.
#[derive(Clone)]
pub struct RingQueue<E> {
    nodes: NodeArena<E>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    len: usize,
    config: Config,
    metrics: Metrics,
}

impl<E> RingQueue<E> {
    /// Creates an empty queue with the default configuration.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Creates an empty queue with the given configuration.
    pub fn with_config(config: Config) -> Self {
        Self {
            nodes: NodeArena::with_capacity(config.initial_capacity),
            head: None,
            tail: None,
            len: 0,
            config,
            metrics: Metrics::new(),
        }
    }

    /// Creates an empty queue with room for `capacity` elements before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config(Config {
            initial_capacity: capacity,
            ..Config::default()
        })
    }

    // ---------------------------------------------------------------------
    // STATUS
    // ---------------------------------------------------------------------

    /// Returns the number of elements in the queue.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the queue holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of node slots allocated.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Returns the configuration this queue was built with.
    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get a snapshot of metrics if enabled.
    pub fn metrics(&self) -> Metrics {
        if self.config.enable_metrics {
            self.metrics
        } else {
            Metrics::default()
        }
    }

    // ---------------------------------------------------------------------
    // PRODUCER API
    // ---------------------------------------------------------------------

    /// Appends an element at the back of the queue.
    ///
    /// Accepts either `E` or `Option<E>`. `None` is the absent value and is
    /// rejected with [`QueueError::InvalidArgument`], leaving the queue untouched.
    ///
    /// # Example
    /// ```
    /// use ringqueue::{QueueError, RingQueue};
    ///
    /// let mut queue = RingQueue::<u64>::new();
    /// queue.enqueue(7u64).unwrap();
    /// assert_eq!(queue.enqueue(None), Err(QueueError::InvalidArgument));
    /// assert_eq!(queue.len(), 1);
    /// ```
    pub fn enqueue<V>(&mut self, value: V) -> Result<(), QueueError>
    where
        V: Into<Option<E>>,
    {
        match value.into() {
            Some(value) => {
                self.link_back(value);
                Ok(())
            }
            None => {
                log::debug!("rejected absent value (len {})", self.len);
                if self.config.enable_metrics {
                    self.metrics.rejected += 1;
                }
                Err(QueueError::InvalidArgument)
            }
        }
    }

    /// Links a new node after the tail and re-closes the ring.
    fn link_back(&mut self, value: E) {
        let id = self.nodes.alloc(value);
        match (self.head, self.tail) {
            (Some(head), Some(tail)) => {
                self.nodes.set_next(tail, id);
                self.nodes.set_next(id, head);
            }
            // A fresh node already links to itself.
            _ => self.head = Some(id),
        }
        self.tail = Some(id);
        self.len += 1;

        if self.config.enable_metrics {
            self.metrics.enqueued += 1;
        }
        log::trace!("enqueued node {:?} (len {})", id, self.len);
        self.debug_check();
    }

    // ---------------------------------------------------------------------
    // CONSUMER API
    // ---------------------------------------------------------------------

    /// Removes and returns the front element, or `None` if the queue is empty.
    pub fn dequeue(&mut self) -> Option<E> {
        let (head, tail) = (self.head?, self.tail?);

        if head == tail {
            self.head = None;
            self.tail = None;
        } else {
            let next = self.nodes.next(head);
            self.head = Some(next);
            self.nodes.set_next(tail, next);
        }
        self.len -= 1;
        let value = self.nodes.release(head);

        if self.config.enable_metrics {
            self.metrics.dequeued += 1;
        }
        log::trace!("dequeued node {:?} (len {})", head, self.len);
        self.debug_check();
        Some(value)
    }

    /// Returns the front element without removing it.
    ///
    /// An empty queue yields [`QueueError::EmptyAccess`]; check
    /// [`is_empty`](Self::is_empty) first or use [`peek`](Self::peek) if an
    /// `Option` reads better at the call site.
    pub fn peek_head(&self) -> Result<&E, QueueError> {
        self.peek().ok_or(QueueError::EmptyAccess)
    }

    /// Returns the front element without removing it, or `None` if empty.
    #[inline]
    pub fn peek(&self) -> Option<&E> {
        self.head.map(|head| self.nodes.value(head))
    }

    /// Returns the back (most recently enqueued) element, or `None` if empty.
    #[inline]
    pub fn peek_tail(&self) -> Option<&E> {
        self.tail.map(|tail| self.nodes.value(tail))
    }

    /// Drops every element and resets the queue to empty.
    ///
    /// Cleared elements are not counted as dequeued or deleted.
    pub fn clear(&mut self) {
        if self.len > 0 {
            log::debug!("clearing {} elements", self.len);
        }
        self.nodes.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
        self.debug_check();
    }

    // ---------------------------------------------------------------------
    // SEARCH & TARGETED REMOVAL
    // ---------------------------------------------------------------------

    /// Returns true if `target` itself (not merely an equal value) is in the queue.
    ///
    /// Matching is by identity, see [`SameInstance`]. An `Arc` holding equal
    /// contents but a different allocation does not match.
    pub fn contains(&self, target: &E) -> bool
    where
        E: SameInstance,
    {
        self.walk().any(|value| value.same_instance(target))
    }

    /// Returns true if an element equal to `target` is in the queue.
    pub fn contains_value(&self, target: &E) -> bool
    where
        E: PartialEq,
    {
        self.walk().any(|value| value == target)
    }

    /// Removes the first occurrence of `target` itself, matching by identity.
    ///
    /// Candidates are inspected in ring order starting after the head, with the
    /// head last. Returns the removed element, or `None` (queue unchanged) if
    /// `target` is not present.
    ///
    /// # Example
    /// ```
    /// use ringqueue::RingQueue;
    /// use std::sync::Arc;
    ///
    /// let a = Arc::new("a");
    /// let b = Arc::new("b");
    /// let mut queue = RingQueue::<Arc<&str>>::new();
    /// queue.enqueue(Arc::clone(&a)).unwrap();
    /// queue.enqueue(Arc::clone(&b)).unwrap();
    ///
    /// assert!(queue.delete(&Arc::new("b")).is_none());
    /// assert!(queue.delete(&b).is_some());
    /// assert_eq!(queue.len(), 1);
    /// ```
    pub fn delete(&mut self, target: &E) -> Option<E>
    where
        E: SameInstance,
    {
        self.remove_first(|value| value.same_instance(target))
    }

    /// Removes the first element equal to `target`, using the same walk as
    /// [`delete`](Self::delete).
    pub fn delete_value(&mut self, target: &E) -> Option<E>
    where
        E: PartialEq,
    {
        self.remove_first(|value| value == target)
    }

    /// Walks (predecessor, successor) pairs from the head and unlinks the first
    /// successor accepted by `matches`.
    fn remove_first<F>(&mut self, mut matches: F) -> Option<E>
    where
        F: FnMut(&E) -> bool,
    {
        let head = self.head?;
        let mut pred = head;
        loop {
            let candidate = self.nodes.next(pred);
            if matches(self.nodes.value(candidate)) {
                return Some(self.unlink_after(pred));
            }
            pred = candidate;
            if pred == head {
                break;
            }
        }
        log::trace!("no matching element among {}", self.len);
        None
    }

    /// Unlinks the successor of `pred` and returns its value.
    fn unlink_after(&mut self, pred: NodeId) -> E {
        let victim = self.nodes.next(pred);

        if self.head == self.tail {
            self.head = None;
            self.tail = None;
        } else {
            let after = self.nodes.next(victim);
            self.nodes.set_next(pred, after);
            if self.head == Some(victim) {
                self.head = Some(after);
            }
            if self.tail == Some(victim) {
                self.tail = Some(pred);
            }
        }
        self.len -= 1;
        let value = self.nodes.release(victim);

        if self.config.enable_metrics {
            self.metrics.deleted += 1;
        }
        log::trace!("deleted node {:?} (len {})", victim, self.len);
        self.debug_check();
        value
    }

    // ---------------------------------------------------------------------
    // TRAVERSAL
    // ---------------------------------------------------------------------

    /// Calls `visit` on every element once, from head to tail.
    pub fn traverse<F>(&self, mut visit: F)
    where
        F: FnMut(&E),
    {
        for value in self.walk() {
            visit(value);
        }
    }

    /// Emits one `info` log record per element, from head to tail.
    pub fn log_contents(&self)
    where
        E: fmt::Debug,
    {
        self.traverse(|value| log::info!("{:?} ", value));
    }

    /// Returns the pull-based sequence over the queue.
    ///
    /// The sequence stops *before* the tail element; see [`Iter`] for the
    /// exact contract.
    pub fn iterate(&self) -> Iter<'_, E> {
        Iter::new(&self.nodes, self.head, self.tail, self.len)
    }

    /// Copies every element, head to tail, into a `Vec`.
    pub fn snapshot(&self) -> Vec<E>
    where
        E: Clone,
    {
        self.walk().cloned().collect()
    }

    pub(crate) fn walk(&self) -> Walk<'_, E> {
        Walk::new(&self.nodes, self.head, self.len)
    }

    // ---------------------------------------------------------------------
    // DIAGNOSTICS
    // ---------------------------------------------------------------------

    /// Walks the whole ring and verifies its structure: both ends present
    /// exactly when non-empty, `len` distinct nodes reachable from the head,
    /// the tail being the last of them, and the tail linking back to the head.
    ///
    /// O(n); meant for tests and diagnostics.
    pub fn is_well_formed(&self) -> bool {
        let (head, tail) = match (self.head, self.tail) {
            (None, None) => return self.len == 0 && self.nodes.live() == 0,
            (Some(head), Some(tail)) => (head, tail),
            _ => return false,
        };
        if self.len == 0 || self.nodes.live() != self.len {
            return false;
        }

        let mut seen = vec![false; self.nodes.slot_count()];
        let mut cursor = head;
        for step in 1..=self.len {
            let Some(node) = self.nodes.get(cursor) else {
                return false;
            };
            if std::mem::replace(&mut seen[cursor.index()], true) {
                return false;
            }
            if (step == self.len) != (cursor == tail) {
                return false;
            }
            cursor = node.next;
        }
        cursor == head
    }

    #[inline]
    fn debug_check(&self) {
        debug_assert_ends_consistent!(self.head, self.tail, self.len);
        debug_assert_closed!(self.nodes, self.head, self.tail);
        debug_assert_len_matches_live!(self.len, self.nodes.live());
    }
}

impl<E> Default for RingQueue<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: fmt::Debug> fmt::Debug for RingQueue<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.walk()).finish()
    }
}

impl<E> Extend<E> for RingQueue<E> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        for value in iter {
            self.link_back(value);
        }
    }
}

impl<E> FromIterator<E> for RingQueue<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        let mut queue = Self::with_capacity(lower.max(Config::default().initial_capacity));
        queue.extend(iter);
        queue
    }
}
