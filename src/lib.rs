//! litlesql - a single-file table store built on a persistent B+Tree.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            litlesql                             │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Command Layer (command.rs)                  │   │
//! │  │          parse → execute → formatted output              │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Table Layer (table/)                        │   │
//! │  │       Table + SharedTable + Row codec                    │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Index Layer (index/btree/)                  │   │
//! │  │   node views + cursor + insert/split + tree dump         │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Buffer Layer (buffer/)                      │   │
//! │  │        Pager: page cache, allocation, write-back         │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Storage Layer (storage/)                    │   │
//! │  │              DiskManager + Page                          │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, Error, config)
//! - [`storage`] - Disk I/O and the page buffer
//! - [`buffer`] - The pager
//! - [`index`] - The B+Tree
//! - [`table`] - Rows and tables
//! - [`command`] - Statement parsing and execution
//!
//! # Quick Start
//! ```no_run
//! use litlesql::Table;
//!
//! let mut table = Table::open("test.db")?;
//! table.execute_insert(1, "user", "one@pe.com")?;
//!
//! for row in table.execute_select()? {
//!     println!("{}", row?);
//! }
//!
//! for line in table.dump_tree() {
//!     println!("{}", line?);
//! }
//! table.close()?;
//! # Ok::<(), litlesql::Error>(())
//! ```

pub mod buffer;
pub mod command;
pub mod common;
pub mod index;
pub mod storage;
pub mod table;

pub use common::{Error, PageId, Result};
pub use table::{Row, SharedTable, Table};
