use core::marker::PhantomData;
use core::ptr::NonNull;

use super::double::DoubleLink;
use super::queue::SinglyQueue;
use super::single::SinglyList;
use super::traits::{DoubleNode, SingleNode};

/// An iterator over the records of a [`SinglyList`] (or a queue built on
/// one), front to back.
pub struct Iter<'a, T: SingleNode> {
    current: Option<NonNull<T>>,
    _list: PhantomData<&'a SinglyList<T>>,
}

impl<'a, T: SingleNode> Iter<'a, T> {
    pub(super) fn new(list: &'a SinglyList<T>) -> Self {
        Self {
            current: list.first(),
            _list: PhantomData,
        }
    }
}

impl<T: SingleNode> Iterator for Iter<'_, T> {
    type Item = NonNull<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.inspect(|current| {
            self.current = unsafe { current.as_ref().next_entry() };
        })
    }
}

unsafe impl<T: SingleNode + Send> Send for Iter<'_, T> {}
unsafe impl<T: SingleNode + Sync> Sync for Iter<'_, T> {}

/// A removing iterator over a [`SinglyList`]: each step detaches and yields
/// the current front record.
///
/// There is deliberately no `Drop` glue: abandoning the iterator mid-way
/// leaves every unvisited record linked and the list fully usable.
pub struct Drain<'a, T: SingleNode> {
    list: &'a mut SinglyList<T>,
}

impl<'a, T: SingleNode> Drain<'a, T> {
    pub(super) fn new(list: &'a mut SinglyList<T>) -> Self {
        Self { list }
    }
}

impl<T: SingleNode> Iterator for Drain<'_, T> {
    type Item = NonNull<T>;

    fn next(&mut self) -> Option<Self::Item> {
        unsafe { self.list.head_slot().remove() }
    }
}

/// A removing iterator over a [`SinglyQueue`]. Identical to [`Drain`] except
/// that each step goes through the queue's `pop_front`, keeping the cached
/// tail slot correct even when the iterator is abandoned early.
pub struct QueueDrain<'a, T: SingleNode> {
    queue: &'a mut SinglyQueue<T>,
}

impl<'a, T: SingleNode> QueueDrain<'a, T> {
    pub(super) fn new(queue: &'a mut SinglyQueue<T>) -> Self {
        Self { queue }
    }
}

impl<T: SingleNode> Iterator for QueueDrain<'_, T> {
    type Item = NonNull<T>;

    fn next(&mut self) -> Option<Self::Item> {
        unsafe { self.queue.pop_front() }
    }
}

/// An iterator over the records of a ring, starting after the sentinel and
/// stopping when the walk returns to it.
pub struct RingIter<'a, T: DoubleNode> {
    head: NonNull<DoubleLink<T>>,
    current: NonNull<DoubleLink<T>>,
    _ring: PhantomData<&'a DoubleLink<T>>,
}

impl<'a, T: DoubleNode> RingIter<'a, T> {
    pub(super) fn new(head: &'a DoubleLink<T>) -> Self {
        Self {
            head: NonNull::from(head),
            current: head.next().expect("iterating an unlinked ring entry"),
            _ring: PhantomData,
        }
    }
}

impl<T: DoubleNode> Iterator for RingIter<'_, T> {
    type Item = NonNull<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current == self.head {
            return None;
        }
        let entry = T::from_ring(self.current);
        self.current = unsafe {
            (*self.current.as_ptr())
                .next()
                .expect("ring entry with no successor")
        };
        Some(entry)
    }
}

unsafe impl<T: DoubleNode + Send> Send for RingIter<'_, T> {}
unsafe impl<T: DoubleNode + Sync> Sync for RingIter<'_, T> {}

/// A removing iterator over a ring: each step detaches and yields the record
/// right after the sentinel, until only the sentinel remains.
///
/// As with [`Drain`], dropping this mid-way leaves the rest of the ring
/// fully linked behind the sentinel.
pub struct RingDrain<'a, T: DoubleNode> {
    head: &'a mut DoubleLink<T>,
}

impl<'a, T: DoubleNode> RingDrain<'a, T> {
    pub(super) fn new(head: &'a mut DoubleLink<T>) -> Self {
        Self { head }
    }
}

impl<T: DoubleNode> Iterator for RingDrain<'_, T> {
    type Item = NonNull<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.head.is_empty() {
            return None;
        }
        let first = self.head.next().expect("draining an unlinked ring entry");
        unsafe { Some((*first.as_ptr()).remove()) }
    }
}
