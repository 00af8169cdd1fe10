//! # Intrusive Linked Collections
//!
//! This module provides a singly linked list, a FIFO queue built on it, and
//! a circular doubly linked list, all intrusive: the link fields live inside
//! the caller's records, so no operation ever allocates.
//!
//! ## Core Components
//!
//! - [`traits`]: the [`SingleNode`](traits::SingleNode) and
//!   [`DoubleNode`](traits::DoubleNode) traits binding a record to its
//!   embedded link (the recovery operation), normally derived.
//! - [`single::SingleLink`], [`single::Slot`] and [`single::SinglyList`]:
//!   the singly linked chain and its slot handle for O(1) splicing at any
//!   known position.
//! - [`queue::SinglyQueue`]: a FIFO with a cached tail slot for O(1) appends.
//! - [`double::DoubleLink`]: the circular ring with a caller-owned sentinel.
//! - [`node::SingleItem`] and [`node::DoubleItem`]: ready-made link-plus-data
//!   records for callers without their own record type.
//!
//! ## Safety
//!
//! The structures only ever borrow records; the caller keeps ownership of
//! their storage and is responsible for upholding several invariants:
//!
//! - Records must outlive their membership in a list, and must not be moved
//!   while linked (for a ring, this includes the sentinel).
//! - A record must not be in two chains, or twice in one chain, at a time.
//! - A ring's sentinel must never be removed or treated as data.
//! - When iterating without removal, the structure must not be modified.
//! - All structures assume exclusive, single-threaded access.

pub mod traits;
pub mod single;
pub mod queue;
pub mod double;
pub mod node;
pub mod iter;

#[cfg(test)]
mod tests;
