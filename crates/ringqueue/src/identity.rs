//! Identity comparison for `contains` and `delete`.
//!
//! Those two operations match a stored element against a target by identity:
//! the stored handle must point at the very same allocation as the target.
//! Two distinct allocations with equal contents never match. Use
//! `contains_value` / `delete_value` for `PartialEq` matching.

use std::rc::Rc;
use std::sync::Arc;

/// Handles that can tell whether they refer to the same instance.
pub trait SameInstance {
    /// Returns `true` if `self` and `other` refer to the same instance.
    fn same_instance(&self, other: &Self) -> bool;
}

impl<T: ?Sized> SameInstance for Arc<T> {
    #[inline]
    fn same_instance(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other)
    }
}

impl<T: ?Sized> SameInstance for Rc<T> {
    #[inline]
    fn same_instance(&self, other: &Self) -> bool {
        Rc::ptr_eq(self, other)
    }
}

impl<T: ?Sized> SameInstance for &T {
    #[inline]
    fn same_instance(&self, other: &Self) -> bool {
        std::ptr::eq(*self, *other)
    }
}
