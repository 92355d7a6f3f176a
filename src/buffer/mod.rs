//! Page cache management.
//!
//! The pager is the in-memory layer between the B+Tree and the database
//! file. Every page the tree touches lives here; tree code never talks to the
//! disk directly.
//!
//! # Components
//! - [`Pager`] - The page cache and allocator
//! - [`PagerStats`] - Cache counters

mod pager;
mod stats;

pub use pager::Pager;
pub use stats::PagerStats;
