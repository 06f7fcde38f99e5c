//! Property-based tests for the ring queue invariants.
//!
//! Random operation sequences are replayed against both `RingQueue` and a
//! `VecDeque` model; after every step the queue must agree with the model and
//! pass the full structural walk (`is_well_formed`).

use proptest::prelude::*;
use ringqueue::RingQueue;
use std::collections::VecDeque;
use std::sync::Arc;

#[derive(Debug, Clone)]
enum Op {
    Enqueue(u16),
    EnqueueAbsent,
    Dequeue,
    /// Delete the element at this position (modulo len) by identity.
    Delete(usize),
    /// Delete a freshly allocated lookalike of the element at this position.
    DeleteLookalike(usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => any::<u16>().prop_map(Op::Enqueue),
        1 => Just(Op::EnqueueAbsent),
        2 => Just(Op::Dequeue),
        2 => any::<usize>().prop_map(Op::Delete),
        1 => any::<usize>().prop_map(Op::DeleteLookalike),
    ]
}

fn same_order(queue: &RingQueue<Arc<u16>>, model: &VecDeque<Arc<u16>>) -> bool {
    let actual = queue.snapshot();
    actual.len() == model.len() && actual.iter().zip(model).all(|(a, m)| Arc::ptr_eq(a, m))
}

// =============================================================================
// Model agreement: FIFO order, count and structure after every operation
// =============================================================================

proptest! {
    #[test]
    fn prop_matches_vecdeque_model(ops in prop::collection::vec(op_strategy(), 0..200)) {
        let mut queue = RingQueue::<Arc<u16>>::new();
        let mut model: VecDeque<Arc<u16>> = VecDeque::new();

        for op in ops {
            match op {
                Op::Enqueue(v) => {
                    let item = Arc::new(v);
                    queue.enqueue(Arc::clone(&item)).unwrap();
                    model.push_back(item);
                }
                Op::EnqueueAbsent => {
                    prop_assert!(queue.enqueue(None).is_err());
                }
                Op::Dequeue => {
                    let got = queue.dequeue();
                    let want = model.pop_front();
                    match (got, want) {
                        (Some(g), Some(w)) => {
                            prop_assert!(Arc::ptr_eq(&g, &w));
                        }
                        (None, None) => {}
                        (g, w) => {
                            prop_assert!(false, "dequeue mismatch: {:?} vs {:?}", g, w);
                        }
                    }
                }
                Op::Delete(pos) => {
                    if model.is_empty() {
                        prop_assert!(queue.delete(&Arc::new(0)).is_none());
                    } else {
                        // Every Arc is a distinct allocation, so exactly one node matches.
                        let idx = pos % model.len();
                        let target = Arc::clone(&model[idx]);
                        let removed = queue.delete(&target);
                        prop_assert!(removed.is_some_and(|r| Arc::ptr_eq(&r, &target)));
                        model.remove(idx);
                    }
                }
                Op::DeleteLookalike(pos) => {
                    if !model.is_empty() {
                        let idx = pos % model.len();
                        let lookalike = Arc::new(*model[idx]);
                        prop_assert!(queue.delete(&lookalike).is_none());
                        prop_assert!(!queue.contains(&lookalike));
                    }
                }
            }

            prop_assert_eq!(queue.len(), model.len());
            prop_assert_eq!(queue.is_empty(), model.is_empty());
            prop_assert!(queue.is_well_formed(), "structure broken after {:?}", queue);
            prop_assert!(same_order(&queue, &model));
        }
    }
}

// =============================================================================
// FIFO order and drain
// =============================================================================

proptest! {
    #[test]
    fn prop_fifo_then_empty(values in prop::collection::vec(any::<u32>(), 0..500)) {
        let mut queue = RingQueue::<u32>::new();
        for &v in &values {
            queue.enqueue(v).unwrap();
        }

        let mut drained = Vec::with_capacity(values.len());
        while let Some(v) = queue.dequeue() {
            drained.push(v);
        }

        prop_assert_eq!(drained, values);
        prop_assert!(queue.is_empty());
        prop_assert_eq!(queue.dequeue(), None);
    }
}

// =============================================================================
// Traversal visits N, iteration yields N - 1
// =============================================================================

proptest! {
    #[test]
    fn prop_iterate_yields_all_but_tail(values in prop::collection::vec(any::<i64>(), 0..100)) {
        let queue: RingQueue<i64> = values.iter().copied().collect();

        let mut traversed = Vec::new();
        queue.traverse(|v| traversed.push(*v));
        prop_assert_eq!(&traversed, &values);

        let pulled: Vec<i64> = queue.iterate().copied().collect();
        let expected = &values[..values.len().saturating_sub(1)];
        prop_assert_eq!(pulled.as_slice(), expected);
    }
}

// =============================================================================
// Circularity after deletions
// =============================================================================

proptest! {
    #[test]
    fn prop_deletes_keep_ring_closed(
        values in prop::collection::vec(0u8..8, 1..60),
        targets in prop::collection::vec(0u8..8, 0..60),
    ) {
        let mut queue: RingQueue<u8> = values.iter().copied().collect();
        let mut removed = 0;

        for t in targets {
            let present = queue.contains_value(&t);
            let deleted = queue.delete_value(&t);
            prop_assert_eq!(deleted.is_some(), present);
            if deleted.is_some() {
                removed += 1;
            }
            prop_assert!(queue.is_well_formed());
        }

        prop_assert_eq!(queue.len(), values.len() - removed);
    }
}
