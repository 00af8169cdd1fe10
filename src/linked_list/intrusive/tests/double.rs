extern crate std;

use std::vec;
use std::vec::Vec;

use core::ptr::NonNull;

use crate::linked_list::intrusive::{
    double::{find_in_range, DoubleLink},
    node::DoubleItem,
    traits::DoubleNode,
};

/// Walks the whole ring once, asserting both directions of the ring
/// invariant on every entry (sentinel included), and returns the number of
/// data entries.
unsafe fn audit<T: DoubleNode>(head: &DoubleLink<T>) -> usize {
    unsafe {
        let start = NonNull::from(head);
        let mut cur = start;
        let mut entries = 0;
        loop {
            let next = (*cur.as_ptr()).next().unwrap();
            assert_eq!((*next.as_ptr()).prev(), Some(cur));
            let prev = (*cur.as_ptr()).prev().unwrap();
            assert_eq!((*prev.as_ptr()).next(), Some(cur));
            cur = next;
            if cur == start {
                break;
            }
            entries += 1;
        }
        entries
    }
}

unsafe fn collect(head: &DoubleLink<DoubleItem<i32>>) -> Vec<i32> {
    unsafe { head.iter().map(|entry| *entry.as_ref().data()).collect() }
}

#[test]
fn test_init_is_empty_ring_of_one() {
    let mut head = DoubleLink::<DoubleItem<i32>>::new();
    assert!(!head.is_linked());

    head.init();
    assert!(head.is_linked());
    assert!(head.is_empty());
    unsafe {
        assert_eq!(audit(&head), 0);
    }
}

#[test]
fn test_insert_before_sentinel_appends() {
    let mut head = DoubleLink::<DoubleItem<i32>>::new();
    head.init();

    let mut a = DoubleItem::new(1);
    let mut b = DoubleItem::new(2);
    let mut c = DoubleItem::new(3);

    unsafe {
        head.insert_before(NonNull::from(&mut a));
        assert_eq!(audit(&head), 1);
        head.insert_before(NonNull::from(&mut b));
        assert_eq!(audit(&head), 2);
        head.insert_before(NonNull::from(&mut c));
        assert_eq!(audit(&head), 3);

        assert!(!head.is_empty());
        assert_eq!(collect(&head), vec![1, 2, 3]);
    }
}

#[test]
fn test_insert_after_sentinel_prepends() {
    let mut head = DoubleLink::<DoubleItem<i32>>::new();
    head.init();

    let mut a = DoubleItem::new(1);
    let mut b = DoubleItem::new(2);

    unsafe {
        head.insert_after(NonNull::from(&mut a));
        head.insert_after(NonNull::from(&mut b));

        assert_eq!(collect(&head), vec![2, 1]);
        assert_eq!(audit(&head), 2);
    }
}

#[test]
fn test_insert_relative_to_entries() {
    let mut head = DoubleLink::<DoubleItem<i32>>::new();
    head.init();

    let mut a = DoubleItem::new(1);
    let mut b = DoubleItem::new(2);
    let mut c = DoubleItem::new(3);
    let mut d = DoubleItem::new(4);

    unsafe {
        head.insert_before(NonNull::from(&mut a));
        head.insert_before(NonNull::from(&mut d));

        // Splice into the middle from both sides of the same neighbor.
        d.ring_mut().insert_before(NonNull::from(&mut b));
        b.ring_mut().insert_after(NonNull::from(&mut c));

        assert_eq!(collect(&head), vec![1, 2, 3, 4]);
        assert_eq!(audit(&head), 4);
    }
}

#[test]
fn test_find_in_range_whole_list() {
    let mut head = DoubleLink::<DoubleItem<i32>>::new();
    head.init();

    let mut a = DoubleItem::new(1);
    let mut b = DoubleItem::new(2);
    let mut c = DoubleItem::new(3);

    unsafe {
        head.insert_before(NonNull::from(&mut a));
        head.insert_before(NonNull::from(&mut b));
        head.insert_before(NonNull::from(&mut c));

        let found = find_in_range(&head, &head, |e| *e.data() == 2).unwrap();
        assert_eq!(found.as_ptr(), &raw mut b);

        assert!(find_in_range(&head, &head, |e| *e.data() == 9).is_none());
    }
}

#[test]
fn test_find_in_range_bounded() {
    let mut head = DoubleLink::<DoubleItem<i32>>::new();
    head.init();

    let mut a = DoubleItem::new(1);
    let mut b = DoubleItem::new(1);
    let mut c = DoubleItem::new(1);

    unsafe {
        head.insert_before(NonNull::from(&mut a));
        head.insert_before(NonNull::from(&mut b));
        head.insert_before(NonNull::from(&mut c));

        // From a given entry to the end: the start entry itself is excluded.
        let found = find_in_range(a.ring(), &head, |e| *e.data() == 1).unwrap();
        assert_eq!(found.as_ptr(), &raw mut b);

        // Empty range: boundaries are adjacent.
        assert!(find_in_range(b.ring(), c.ring(), |_| true).is_none());
    }
}

#[test]
fn test_remove_middle_entry() {
    let mut head = DoubleLink::<DoubleItem<i32>>::new();
    head.init();

    let mut a = DoubleItem::new(1);
    let mut b = DoubleItem::new(2);
    let mut c = DoubleItem::new(3);

    unsafe {
        head.insert_before(NonNull::from(&mut a));
        head.insert_before(NonNull::from(&mut b));
        head.insert_before(NonNull::from(&mut c));

        let removed = b.ring_mut().remove();
        assert_eq!(removed.as_ptr(), &raw mut b);
        assert!(!b.ring().is_linked());

        assert_eq!(collect(&head), vec![1, 3]);
        assert_eq!(audit(&head), 2);

        // The detached record can go right back in, elsewhere.
        a.ring_mut().insert_before(NonNull::from(&mut b));
        assert_eq!(collect(&head), vec![2, 1, 3]);
        assert_eq!(audit(&head), 3);
    }
}

#[test]
fn test_empty_iff_all_removed() {
    let mut head = DoubleLink::<DoubleItem<i32>>::new();
    head.init();

    let mut a = DoubleItem::new(1);
    let mut b = DoubleItem::new(2);

    unsafe {
        head.insert_before(NonNull::from(&mut a));
        head.insert_after(NonNull::from(&mut b));
        assert!(!head.is_empty());

        a.ring_mut().remove();
        assert!(!head.is_empty());

        b.ring_mut().remove();
        assert!(head.is_empty());
        assert_eq!(audit(&head), 0);
    }
}

#[test]
fn test_ring_drain_abandoned_early() {
    let mut head = DoubleLink::<DoubleItem<i32>>::new();
    head.init();

    let mut a = DoubleItem::new(1);
    let mut b = DoubleItem::new(2);
    let mut c = DoubleItem::new(3);
    let mut d = DoubleItem::new(4);

    unsafe {
        head.insert_before(NonNull::from(&mut a));
        head.insert_before(NonNull::from(&mut b));
        head.insert_before(NonNull::from(&mut c));
        head.insert_before(NonNull::from(&mut d));

        let mut drained = vec![];
        for entry in head.drain() {
            drained.push(*entry.as_ref().data());
            if drained.len() == 2 {
                break;
            }
        }
        assert_eq!(drained, vec![1, 2]);
        assert!(!a.ring().is_linked());
        assert!(!b.ring().is_linked());

        // The abandoned drain left the remainder a well-formed ring.
        assert_eq!(collect(&head), vec![3, 4]);
        assert_eq!(audit(&head), 2);
    }
}

#[test]
fn test_ring_drain_to_empty() {
    let mut head = DoubleLink::<DoubleItem<i32>>::new();
    head.init();

    let mut a = DoubleItem::new(1);
    let mut b = DoubleItem::new(2);

    unsafe {
        head.insert_before(NonNull::from(&mut a));
        head.insert_before(NonNull::from(&mut b));

        assert_eq!(head.drain().count(), 2);
        assert!(head.is_empty());
        assert_eq!(audit(&head), 0);
    }
}
