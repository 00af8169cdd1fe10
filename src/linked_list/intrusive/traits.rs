use core::ptr::NonNull;

use super::double::DoubleLink;
use super::single::{SingleLink, Slot};

/// Binds a record type to the singly linked entry embedded inside it.
///
/// Implementations are normally generated with `#[derive(Node)]` for a struct
/// with a field named `link` of type [`SingleLink<Self>`]. The trait is the
/// crate's recovery operation: `link`/`link_mut` go from a record to its
/// embedded link, `from_link` goes back. Absent entries need no special
/// handling on recovery since `Option::map` over [`Self::from_link`] carries
/// `None` through unchanged.
///
/// # Safety
///
/// `link` and `link_mut` must return the same embedded field on every call,
/// and `from_link` must be its exact inverse: for any record `n`,
/// `Self::from_link(NonNull::from(n.link()))` must point back at `n`.
pub unsafe trait SingleNode: Sized {
    /// The embedded link of this record.
    fn link(&self) -> &SingleLink<Self>;

    /// The embedded link of this record.
    fn link_mut(&mut self) -> &mut SingleLink<Self>;

    /// Recovers the record holding the given embedded link.
    ///
    /// The returned pointer is only valid to dereference when `link` points
    /// at the `link` field of a live record.
    fn from_link(link: NonNull<SingleLink<Self>>) -> NonNull<Self>;

    /// The record following this one on its chain, if any.
    fn next_entry(&self) -> Option<NonNull<Self>> {
        self.link().next().map(Self::from_link)
    }

    /// Inserts `new` immediately after this record.
    ///
    /// # Safety
    ///
    /// This record must be on a well-formed chain of live records, and `new`
    /// must point at a live record that is not linked anywhere.
    unsafe fn insert_after(&mut self, new: NonNull<Self>) {
        unsafe {
            Slot::new(self.link_mut()).insert(new);
        }
    }

    /// Removes and returns the record following this one, if any.
    ///
    /// # Safety
    ///
    /// This record must be on a well-formed chain of live records.
    unsafe fn remove_next(&mut self) -> Option<NonNull<Self>> {
        unsafe { Slot::new(self.link_mut()).remove() }
    }
}

/// Binds a record type to the circular ring entry embedded inside it.
///
/// Implementations are normally generated with `#[derive(Node)]` for a struct
/// with a field named `link` of type [`DoubleLink<Self>`].
///
/// There is deliberately no typed successor here: a ring neighbor can be the
/// list's sentinel, which is a bare link and not a record, so recovery on an
/// arbitrary neighbor is not meaningful. [`find_in_range`] and [`RingIter`]
/// stop at the sentinel and only ever recover real records.
///
/// [`find_in_range`]: super::double::find_in_range
/// [`RingIter`]: super::iter::RingIter
///
/// # Safety
///
/// `ring` and `ring_mut` must return the same embedded field on every call,
/// and `from_ring` must be its exact inverse: for any record `n`,
/// `Self::from_ring(NonNull::from(n.ring()))` must point back at `n`.
pub unsafe trait DoubleNode: Sized {
    /// The embedded ring entry of this record.
    fn ring(&self) -> &DoubleLink<Self>;

    /// The embedded ring entry of this record.
    fn ring_mut(&mut self) -> &mut DoubleLink<Self>;

    /// Recovers the record holding the given embedded ring entry.
    ///
    /// The returned pointer is only valid to dereference when `link` points
    /// at the `link` field of a live record; in particular it must not be a
    /// list's sentinel.
    fn from_ring(link: NonNull<DoubleLink<Self>>) -> NonNull<Self>;
}
