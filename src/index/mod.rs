//! Index structures.
//!
//! - [`btree`] - The B+Tree that stores table rows keyed by id

pub mod btree;
