//! Reference-counted payload wrapper.

use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

/// Shared immutable payload for list and closure values.
///
/// Wraps `Rc<T>`: cloning a value clones the handle, never the payload.
/// The whole engine is single-threaded, so `Rc` rather than `Arc`. The
/// constructor is private to the value module, which keeps payload
/// allocation behind the `Value` factory methods.
#[repr(transparent)]
pub struct Heap<T>(Rc<T>);

impl<T> Heap<T> {
    #[inline]
    pub(super) fn new(value: T) -> Self {
        Heap(Rc::new(value))
    }

    /// Identity comparison: do both handles point at the same cell.
    #[inline]
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Rc::ptr_eq(&a.0, &b.0)
    }
}

impl<T> Clone for Heap<T> {
    #[inline]
    fn clone(&self) -> Self {
        Heap(Rc::clone(&self.0))
    }
}

impl<T> Deref for Heap<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: fmt::Debug> fmt::Debug for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
