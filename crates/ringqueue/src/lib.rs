//! RingQueue - Circular Linked FIFO Buffer
//!
//! The in-memory buffer behind one topic partition of a publish/subscribe
//! queue service. Elements are kept in a circular singly-linked list whose
//! tail always links back to its head.
//!
//! # Key Features
//!
//! - Unbounded FIFO with O(1) enqueue and dequeue
//! - Arena-backed nodes with slot reuse (no per-node boxing, no `unsafe`)
//! - Identity-based search and removal ([`SameInstance`]) plus value-based variants
//! - Debug-build invariant checks on every mutation
//!
//! The queue does not lock, bound, or persist anything. The service layer that
//! owns a partition decides how access is serialized.
//!
//! # Example
//!
//! ```
//! use ringqueue::{Config, QueueError, RingQueue};
//! use std::sync::Arc;
//!
//! let mut partition = RingQueue::<Arc<String>>::with_config(Config::default());
//!
//! let first = Arc::new(String::from("order-created"));
//! partition.enqueue(Arc::clone(&first)).unwrap();
//! partition.enqueue(Arc::new(String::from("order-paid"))).unwrap();
//!
//! // The absent value is rejected
//! assert_eq!(partition.enqueue(None), Err(QueueError::InvalidArgument));
//!
//! assert!(partition.contains(&first));
//! assert_eq!(partition.peek_head().unwrap().as_str(), "order-created");
//!
//! // Strict FIFO
//! assert_eq!(partition.dequeue().unwrap().as_str(), "order-created");
//! assert_eq!(partition.dequeue().unwrap().as_str(), "order-paid");
//! assert!(partition.dequeue().is_none());
//! ```

mod arena;
mod config;
mod error;
mod identity;
mod invariants;
mod iter;
mod metrics;
mod queue;

pub use config::{Config, LARGE_PARTITION_CONFIG, SMALL_PARTITION_CONFIG};
pub use error::QueueError;
pub use identity::SameInstance;
pub use iter::Iter;
pub use metrics::Metrics;
pub use queue::RingQueue;
