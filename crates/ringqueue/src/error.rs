//! Error types for ring queue operations.

use thiserror::Error;

/// Errors that can occur in queue operations.
///
/// Emptiness is never an error for `dequeue`, `contains`, `delete` or the
/// traversals; those report it through `None`, `false` or a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueueError {
    /// An absent value (`None`) was offered to `enqueue`. The queue is unchanged.
    #[error("cannot enqueue an absent value")]
    InvalidArgument,

    /// The head was requested from an empty queue.
    #[error("queue is empty")]
    EmptyAccess,
}

impl QueueError {
    /// Returns `true` if retrying after a state change can succeed (e.g., `EmptyAccess`
    /// once something has been enqueued).
    #[inline]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::EmptyAccess)
    }

    /// Returns `true` if the caller passed a value the queue can never accept.
    #[inline]
    pub fn is_caller_error(&self) -> bool {
        matches!(self, Self::InvalidArgument)
    }
}
