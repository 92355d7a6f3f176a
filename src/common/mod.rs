//! Shared primitives used by every layer.
//!
//! - [`config`] - Page size, root page, internal-node fan-out
//! - [`error`] - The crate-wide [`Error`] and [`Result`]
//! - [`PageId`] - Page numbers

pub mod config;
pub mod error;
mod page_id;

pub use error::{Error, Result};
pub use page_id::PageId;
