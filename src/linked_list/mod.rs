//! Intrusive linked lists and queues.
//!
//! In an intrusive linked list, the links are embedded directly in the
//! records being linked, so inserting and removing rewires references that
//! the caller already owns instead of allocating nodes. This is in contrast
//! to a non-intrusive list, where the container allocates a node per element.
//!
//! # Examples
//!
//! ```
//! use braid_collections::linked_list::intrusive::{
//!     node::SingleItem,
//!     queue::SinglyQueue,
//! };
//! use core::ptr::NonNull;
//!
//! let mut queue = SinglyQueue::<SingleItem<i32>>::new();
//! let mut first = SingleItem::new(1);
//! let mut second = SingleItem::new(2);
//! let mut third = SingleItem::new(3);
//!
//! unsafe {
//!     queue.push_back(NonNull::from(&mut first));
//!     queue.push_back(NonNull::from(&mut second));
//!     queue.push_front(NonNull::from(&mut third));
//!
//!     let mut values = vec![];
//!     while let Some(entry) = queue.pop_front() {
//!         values.push(*entry.as_ref().data());
//!     }
//!     assert_eq!(values, vec![3, 1, 2]);
//! }
//! ```
pub mod intrusive;
