//! Storage layer: the database file and its page-sized buffers.
//!
//! - [`DiskManager`] - Positioned page reads and writes, fsync
//! - [`Page`] - One aligned 4 KB buffer

mod disk_manager;
mod page;

pub use disk_manager::DiskManager;
pub use page::Page;
