//! The user-facing table: one B+Tree of rows in one database file.
//!
//! # Components
//! - [`row`] - Fixed-width row codec
//! - [`Table`] - Exclusive handle (open, insert, select, dump, close)
//! - [`SharedTable`] - Cloneable, mutex-guarded handle for multiple callers

pub mod row;
mod shared;

use std::path::Path;

use log::{debug, error};

use crate::buffer::Pager;
use crate::common::config::ROOT_PAGE_ID;
use crate::common::{PageId, Result};
use crate::index::btree::{self, node_type, Cursor, LeafNode, TreeDump};

pub use row::Row;
pub use shared::SharedTable;

/// An open table.
///
/// The root of the tree always lives on page 0. A fresh file gets an empty
/// root leaf on open; an existing file is validated by decoding its root
/// header.
///
/// Every dirty page is written back when the table is closed or dropped.
///
/// # Example
/// ```no_run
/// use litlesql::Table;
///
/// let mut table = Table::open("users.db")?;
/// table.execute_insert(1, "alice", "alice@example.com")?;
/// for row in table.execute_select()? {
///     println!("{}", row?);
/// }
/// table.close()?;
/// # Ok::<(), litlesql::Error>(())
/// ```
pub struct Table {
    pager: Pager,
    root_page: PageId,
}

impl Table {
    /// Open (or create) the table stored at `path`.
    ///
    /// # Errors
    /// - `Error::CorruptFile` if the file is not a whole number of pages
    /// - `Error::CorruptNode` if the root page has an unknown node type
    /// - `Error::CorruptCellCount` if the root claims more cells than fit
    /// - I/O errors from opening or reading the file
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut pager = Pager::open(path)?;
        let root_page = ROOT_PAGE_ID;

        if pager.num_pages() == 0 {
            let page_id = pager.allocate_page();
            let mut root = LeafNode::new(pager.get_page_mut(page_id)?);
            root.initialize();
            root.set_root(true);
            debug!("Initialized empty root leaf at {}", page_id);
        } else {
            node_type(root_page, pager.get_page(root_page)?.as_slice())?;
        }

        Ok(Self { pager, root_page })
    }

    /// Validate and insert a row.
    ///
    /// # Errors
    /// - `Error::InvalidId`, `Error::FieldTooLong` or `Error::NulInField` on
    ///   invalid input
    /// - `Error::DuplicateKey` if the id already exists
    /// - `Error::InternalSplitUnsupported` if the tree is out of room
    ///
    /// None of these leave the tree modified.
    pub fn execute_insert(&mut self, id: i32, username: &str, email: &str) -> Result<()> {
        let row = Row::new(id, username, email)?;
        self.insert_row(&row)
    }

    /// Insert an already-validated row.
    pub fn insert_row(&mut self, row: &Row) -> Result<()> {
        let cursor = Cursor::table_find(&mut self.pager, self.root_page, row.id())?;
        btree::leaf_insert(&mut self.pager, &cursor, row)
    }

    /// All rows in ascending id order.
    ///
    /// Rows are decoded one at a time as the iterator is driven.
    pub fn execute_select(&mut self) -> Result<Rows<'_>> {
        let cursor = Cursor::table_start(&mut self.pager, self.root_page)?;
        Ok(Rows {
            pager: &mut self.pager,
            cursor,
            failed: false,
        })
    }

    /// Lines of the structural tree dump, see [`TreeDump`].
    pub fn dump_tree(&mut self) -> TreeDump<'_> {
        TreeDump::new(&mut self.pager, self.root_page)
    }

    /// Named layout constants, see [`btree::report_constants`].
    pub fn report_constants(&self) -> [(&'static str, usize); 6] {
        btree::report_constants()
    }

    /// Number of rows. Walks the whole table.
    pub fn len(&mut self) -> Result<usize> {
        let mut count = 0;
        for row in self.execute_select()? {
            row?;
            count += 1;
        }
        Ok(count)
    }

    pub fn is_empty(&mut self) -> Result<bool> {
        let cursor = Cursor::table_start(&mut self.pager, self.root_page)?;
        Ok(cursor.end_of_table)
    }

    pub fn root_page(&self) -> PageId {
        self.root_page
    }

    /// The underlying pager, for inspection.
    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    /// Write every dirty page back and sync the file.
    pub fn flush(&mut self) -> Result<()> {
        self.pager.flush_all()
    }

    /// Flush and close the table, reporting any write-back failure.
    pub fn close(mut self) -> Result<()> {
        self.flush()
    }
}

impl Drop for Table {
    fn drop(&mut self) {
        debug!("Closing table: {}", self.pager.stats());
        if let Err(e) = self.pager.flush_all() {
            error!("Failed to flush table on drop: {}", e);
        }
    }
}

/// Iterator over the rows of a [`Table`], in key order.
///
/// Yields `Err` at most once; the iterator is exhausted afterwards.
pub struct Rows<'t> {
    pager: &'t mut Pager,
    cursor: Cursor,
    failed: bool,
}

impl Rows<'_> {
    fn step(&mut self) -> Result<Row> {
        let row = self.cursor.row(self.pager)?;
        self.cursor.advance(self.pager)?;
        Ok(row)
    }
}

impl Iterator for Rows<'_> {
    type Item = Result<Row>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.cursor.end_of_table {
            return None;
        }
        let row = self.step();
        self.failed = row.is_err();
        Some(row)
    }
}
