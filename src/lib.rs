//! Intrusive collection toolkit.
//!
//! All structures in this crate are intrusive and allocation-free: the link
//! fields live inside the caller's records, the structures only rewire them,
//! and removed records go straight back to the caller. See
//! [`linked_list::intrusive`] for the component overview and the safety
//! contract.
#![no_std]

pub mod linked_list;

pub use braid_collection_derive::Node;
