//! Debug assertion macros for ring queue invariants.
//!
//! These checks are only active in debug builds (`#[cfg(debug_assertions)]`), so
//! there is zero overhead in release builds. Each one is O(1); the full O(n)
//! walk lives in `RingQueue::is_well_formed`.

// =============================================================================
// Head/tail presence agrees with the count
// =============================================================================

/// Assert that head and tail are both present or both absent, and that this
/// matches whether the count is zero.
///
/// **Invariant**: `head.is_none() ⟺ tail.is_none() ⟺ len == 0`
///
/// Used in: every mutating operation, after relinking
macro_rules! debug_assert_ends_consistent {
    ($head:expr, $tail:expr, $len:expr) => {
        debug_assert!(
            $head.is_none() == $tail.is_none() && $head.is_none() == ($len == 0),
            "ends inconsistent: head {:?}, tail {:?}, len {}",
            $head,
            $tail,
            $len
        )
    };
}

// =============================================================================
// Circular closure
// =============================================================================

/// Assert that the tail links back to the head.
///
/// **Invariant**: `len ≥ 1 ⟹ tail.next == head`
///
/// Used in: `enqueue()`, `dequeue()`, `unlink_after()`
macro_rules! debug_assert_closed {
    ($nodes:expr, $head:expr, $tail:expr) => {
        if let (Some(head), Some(tail)) = ($head, $tail) {
            debug_assert!(
                $nodes.next(tail) == head,
                "ring not closed: tail {:?} links to {:?}, head is {:?}",
                tail,
                $nodes.next(tail),
                head
            )
        }
    };
}

// =============================================================================
// Count tracks live nodes
// =============================================================================

/// Assert that the count equals the number of occupied arena slots.
///
/// **Invariant**: `len == live nodes`
///
/// Used in: every mutating operation
macro_rules! debug_assert_len_matches_live {
    ($len:expr, $live:expr) => {
        debug_assert!(
            $len == $live,
            "count {} disagrees with {} live nodes",
            $len,
            $live
        )
    };
}

// =============================================================================
// Re-exports for crate-internal use
// =============================================================================

pub(crate) use debug_assert_closed;
pub(crate) use debug_assert_ends_consistent;
pub(crate) use debug_assert_len_matches_live;
