use core::fmt;
use core::marker::PhantomData;
use core::ptr::NonNull;

use super::iter::{RingDrain, RingIter};
use super::traits::DoubleNode;

/// An entry in a circular doubly linked ring.
///
/// Embed one in each record that participates in a ring (the field must be
/// named `link` for `#[derive(Node)]`), and keep one more as the ring's head.
/// The head is the sentinel: it marks the list boundary, is never treated as
/// data, and is its own neighbor in both directions exactly when the list is
/// empty. Because the sentinel is an ordinary entry in the ring, insertion
/// and removal need no empty-list special cases.
///
/// A linked entry must not be moved or dropped until it has been removed
/// from its ring; that includes the sentinel while the list is non-empty.
pub struct DoubleLink<T> {
    next: Option<NonNull<DoubleLink<T>>>,
    prev: Option<NonNull<DoubleLink<T>>>,
    _owner: PhantomData<NonNull<T>>,
}

impl<T> DoubleLink<T> {
    pub const fn new() -> Self {
        Self {
            next: None,
            prev: None,
            _owner: PhantomData,
        }
    }

    /// Makes this entry a ring of one: its own neighbor in both directions.
    /// This is the canonical empty state for a sentinel.
    pub fn init(&mut self) {
        let this = NonNull::from(&mut *self);
        self.next = Some(this);
        self.prev = Some(this);
    }

    /// Whether this entry is currently part of a ring. A sentinel counts as
    /// linked from `init` on, even while its list is empty.
    pub fn is_linked(&self) -> bool {
        self.next.is_some()
    }

    /// Whether the ring consists of this entry alone. On a sentinel this is
    /// the list's emptiness test; the ring invariant makes the `prev` form
    /// of the comparison equivalent.
    pub fn is_empty(&self) -> bool {
        self.next == Some(NonNull::from(self))
    }

    #[inline]
    pub(super) fn next(&self) -> Option<NonNull<DoubleLink<T>>> {
        self.next
    }

    #[inline]
    pub(super) fn prev(&self) -> Option<NonNull<DoubleLink<T>>> {
        self.prev
    }

    /// Links `new` between `prev` and `next`. The field-wise write order
    /// also covers `prev == next` (a ring of one), so the empty-sentinel
    /// case needs no branch.
    unsafe fn splice(
        new: NonNull<DoubleLink<T>>,
        prev: NonNull<DoubleLink<T>>,
        next: NonNull<DoubleLink<T>>,
    ) {
        unsafe {
            (*new.as_ptr()).prev = Some(prev);
            (*new.as_ptr()).next = Some(next);
            (*prev.as_ptr()).next = Some(new);
            (*next.as_ptr()).prev = Some(new);
        }
    }
}

impl<T: DoubleNode> DoubleLink<T> {
    /// Splices `new` immediately before this entry in the ring. Inserting
    /// before a sentinel appends at the list's logical end.
    ///
    /// # Safety
    ///
    /// This entry must be part of a well-formed ring of live entries, and
    /// `new` must point at a live record that is not linked anywhere.
    pub unsafe fn insert_before(&mut self, new: NonNull<T>) {
        unsafe {
            let this = NonNull::from(&mut *self);
            let prev = (*this.as_ptr())
                .prev
                .expect("insert_before on an unlinked ring entry");
            let new_link = NonNull::from((*new.as_ptr()).ring_mut());
            debug_assert!(
                !(*new_link.as_ptr()).is_linked(),
                "inserting a record that is already linked"
            );
            Self::splice(new_link, prev, this);
        }
    }

    /// Splices `new` immediately after this entry in the ring. Inserting
    /// after a sentinel prepends at the list's logical start.
    ///
    /// # Safety
    ///
    /// This entry must be part of a well-formed ring of live entries, and
    /// `new` must point at a live record that is not linked anywhere.
    pub unsafe fn insert_after(&mut self, new: NonNull<T>) {
        unsafe {
            let this = NonNull::from(&mut *self);
            let next = (*this.as_ptr())
                .next
                .expect("insert_after on an unlinked ring entry");
            let new_link = NonNull::from((*new.as_ptr()).ring_mut());
            debug_assert!(
                !(*new_link.as_ptr()).is_linked(),
                "inserting a record that is already linked"
            );
            Self::splice(new_link, this, next);
        }
    }

    /// Unconditionally reconnects this entry's neighbors to each other,
    /// resets this entry to the detached state, and returns the record
    /// holding it. No membership check is performed.
    ///
    /// # Safety
    ///
    /// This entry must be part of a well-formed ring of live entries and
    /// must be a record's embedded entry, not a sentinel: removing a
    /// sentinel corrupts the ring and recovers a record that does not exist.
    pub unsafe fn remove(&mut self) -> NonNull<T> {
        unsafe {
            let this = NonNull::from(&mut *self);
            let prev = (*this.as_ptr())
                .prev
                .expect("remove on an unlinked ring entry");
            let next = (*this.as_ptr())
                .next
                .expect("remove on an unlinked ring entry");
            (*prev.as_ptr()).next = Some(next);
            (*next.as_ptr()).prev = Some(prev);
            (*this.as_ptr()).next = None;
            (*this.as_ptr()).prev = None;
            T::from_ring(this)
        }
    }

    /// An iterator over the records of the ring headed by this sentinel.
    ///
    /// # Safety
    ///
    /// This entry must be a sentinel of a well-formed ring of live entries,
    /// and the ring must not be modified while the iterator is alive.
    pub unsafe fn iter(&self) -> RingIter<'_, T> {
        RingIter::new(self)
    }

    /// A removing iterator over the ring headed by this sentinel: each step
    /// detaches and yields the record after the sentinel. Dropping the
    /// iterator early leaves every unvisited record fully linked.
    ///
    /// # Safety
    ///
    /// This entry must be a sentinel of a well-formed ring of live entries.
    pub unsafe fn drain(&mut self) -> RingDrain<'_, T> {
        RingDrain::new(self)
    }
}

impl<T> Default for DoubleLink<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for DoubleLink<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DoubleLink")
            .field("next", &self.next)
            .field("prev", &self.prev)
            .finish()
    }
}

unsafe impl<T: Send> Send for DoubleLink<T> {}
unsafe impl<T: Sync> Sync for DoubleLink<T> {}

/// Scans the ring strictly between two entries: from `start_after`'s
/// successor up to, but not including, `end_before`. Returns the first record
/// for which `pred` holds, or `None` if the boundary is reached first.
/// Passing a list's sentinel for both arguments searches the whole list.
///
/// The predicate sees each record at most once; callers needing context
/// beyond the record close over it.
///
/// # Safety
///
/// Both boundaries must be entries of the same well-formed ring of live
/// entries, and every entry scanned between them must belong to a live
/// record (a sentinel inside the scanned range would be recovered as a
/// record that does not exist).
pub unsafe fn find_in_range<T: DoubleNode>(
    start_after: &DoubleLink<T>,
    end_before: &DoubleLink<T>,
    mut pred: impl FnMut(&T) -> bool,
) -> Option<NonNull<T>> {
    unsafe {
        let end = NonNull::from(end_before);
        let mut cur = start_after
            .next
            .expect("searching from an unlinked ring entry");
        while cur != end {
            let entry = T::from_ring(cur);
            if pred(entry.as_ref()) {
                return Some(entry);
            }
            cur = (*cur.as_ptr()).next.expect("ring entry with no successor");
        }
        None
    }
}
