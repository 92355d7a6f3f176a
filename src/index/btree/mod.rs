//! Persistent B+Tree over fixed-size pages.
//!
//! Keys are row ids (`u32`); values are serialized rows. Leaves hold the
//! rows and are chained left-to-right through sibling pointers; internal
//! nodes hold separator keys (the max key of the subtree to their left).
//!
//! # Components
//! - [`layout`] - Byte offsets and sizes of every node field
//! - [`LeafNode`] / [`InternalNode`] - Typed views over a page
//! - [`Cursor`] - Positioning and sequential traversal
//! - [`leaf_insert`] and friends - Insertion and splitting
//! - [`TreeDump`] / [`report_constants`] - Introspection
//!
//! # Limits
//! A leaf holds up to [`LEAF_NODE_MAX_CELLS`](layout::LEAF_NODE_MAX_CELLS)
//! rows and an internal node up to
//! [`INTERNAL_NODE_MAX_KEYS`](crate::common::config::INTERNAL_NODE_MAX_KEYS)
//! keys. Internal nodes never split, so the tree is at most two levels deep.

mod cursor;
mod dump;
mod insert;
pub mod layout;
mod node;

pub use cursor::Cursor;
pub use dump::{report_constants, TreeDump};
pub use insert::{create_new_root, internal_insert, leaf_insert, node_max_key, update_parent_key};
pub use node::{node_type, InternalNode, LeafNode, NodeHeader, NodeType};
