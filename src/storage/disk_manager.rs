//! Disk Manager - low-level file I/O for database pages.
//!
//! The [`DiskManager`] handles all direct file operations:
//! - Opening (or creating) the database file
//! - Reading and writing whole pages at their offsets
//! - Syncing the file to stable storage

use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

use log::debug;

use crate::common::config::PAGE_SIZE;
use crate::common::{PageId, Result};
use crate::storage::page::Page;

/// Manages disk I/O for a single database file.
///
/// # File Layout
/// The database is stored as a single file with pages laid out sequentially:
/// ```text
/// ┌─────────┬─────────┬─────────┬─────────┬─────────┐
/// │ Page 0  │ Page 1  │ Page 2  │  ...    │ Page N  │
/// │ (root)  │ (4KB)   │ (4KB)   │         │ (4KB)   │
/// └─────────┴─────────┴─────────┴─────────┴─────────┘
/// Offset:  0      4096     8192    ...    N×4096
/// ```
///
/// The disk manager does not validate the file length; the pager does that
/// at open. Pages past the end of the file read back as zeros, which is how
/// freshly allocated (not yet flushed) pages come into existence.
///
/// # Durability
/// Writes are not synced individually. Call [`DiskManager::sync`] once a batch
/// of writes is complete.
pub struct DiskManager {
    file: File,
    /// Current length of the file in bytes.
    file_length: u64,
}

impl DiskManager {
    /// Open the database file, creating it if it doesn't exist.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or created.
    pub fn open_or_create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&path)?;

        let file_length = file.metadata()?.len();
        debug!("opened {} ({} bytes)", path.as_ref().display(), file_length);

        Ok(Self { file, file_length })
    }

    /// Read a page from disk into `page`.
    ///
    /// If the page lies beyond the end of the file, `page` is zeroed instead.
    pub fn read_page(&mut self, page_id: PageId, page: &mut Page) -> Result<()> {
        let offset = page_id.offset();
        if offset >= self.file_length {
            page.reset();
            return Ok(());
        }

        self.file.seek(SeekFrom::Start(offset))?;
        self.file.read_exact(page.as_mut_slice())?;

        Ok(())
    }

    /// Write a page to disk at its offset, extending the file if needed.
    pub fn write_page(&mut self, page_id: PageId, page: &Page) -> Result<()> {
        let offset = page_id.offset();
        self.file.seek(SeekFrom::Start(offset))?;
        self.file.write_all(page.as_slice())?;

        self.file_length = self.file_length.max(offset + PAGE_SIZE as u64);
        Ok(())
    }

    /// Flush all written data to stable storage (`fsync`).
    pub fn sync(&mut self) -> Result<()> {
        self.file.sync_all()?;
        Ok(())
    }

    /// Get the size of the database file in bytes.
    #[inline]
    pub fn file_length(&self) -> u64 {
        self.file_length
    }
}
