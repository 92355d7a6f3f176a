//! Pager - the page cache between the B+Tree and the database file.
//!
//! The [`Pager`] provides:
//! - On-demand loading of pages from disk
//! - A stable in-memory buffer per page for the lifetime of the pager
//! - Append-only page allocation
//! - Dirty tracking and write-back on flush

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::path::Path;

use log::debug;

use crate::buffer::PagerStats;
use crate::common::config::PAGE_SIZE;
use crate::common::{Error, PageId, Result};
use crate::storage::{DiskManager, Page};

/// Owns the database file and every page buffer that has been touched.
///
/// # Architecture
/// ```text
/// ┌──────────────────────────────────────────────────────┐
/// │                        Pager                         │
/// │  ┌─────────────────────┐   ┌──────────────────────┐  │
/// │  │ pages               │   │ dirty                │  │
/// │  │ PageId → Box<Page>  │   │ HashSet<PageId>      │  │
/// │  └─────────────────────┘   └──────────────────────┘  │
/// │  ┌─────────────────────┐   ┌──────────────────────┐  │
/// │  │ num_pages           │   │ disk_manager         │  │
/// │  │ next free page no.  │   │ file + file length   │  │
/// │  └─────────────────────┘   └──────────────────────┘  │
/// └──────────────────────────────────────────────────────┘
/// ```
///
/// # Residency
/// There is no eviction: once loaded, a page stays in memory until the
/// pager is dropped. Buffers are boxed so each page keeps the same address
/// for as long as it is resident. This bounds the dataset by available
/// memory and is acceptable only because tables stay small.
///
/// # Usage
/// ```no_run
/// use litlesql::buffer::Pager;
///
/// let mut pager = Pager::open("test.db")?;
/// let page_id = pager.allocate_page();
/// pager.get_page_mut(page_id)?.as_mut_slice()[0] = 0xAB;
/// pager.flush_all()?;
/// # Ok::<(), litlesql::Error>(())
/// ```
pub struct Pager {
    /// Handles all file I/O.
    disk_manager: DiskManager,

    /// Resident page buffers.
    pages: HashMap<PageId, Box<Page>>,

    /// Pages modified since they were last written back.
    dirty: HashSet<PageId>,

    /// Number of pages handed out so far (on disk or pending).
    num_pages: u32,

    /// Cache counters.
    stats: PagerStats,
}

impl Pager {
    /// Open the database file, creating it if absent.
    ///
    /// # Errors
    /// - `Error::CorruptFile` if the file length is not a multiple of
    ///   [`PAGE_SIZE`]
    /// - I/O errors from opening the file
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let disk_manager = DiskManager::open_or_create(path)?;

        let file_length = disk_manager.file_length();
        if file_length % PAGE_SIZE as u64 != 0 {
            return Err(Error::CorruptFile { file_length });
        }

        let num_pages = (file_length / PAGE_SIZE as u64) as u32;
        debug!("pager opened with {} pages", num_pages);

        Ok(Self {
            disk_manager,
            pages: HashMap::new(),
            dirty: HashSet::new(),
            num_pages,
            stats: PagerStats::default(),
        })
    }

    // ========================================================================
    // Page access
    // ========================================================================

    /// Get a page for reading, loading it on first access.
    ///
    /// # Errors
    /// - `Error::PageNotFound` if the page was never allocated
    /// - I/O errors from reading the file
    pub fn get_page(&mut self, page_id: PageId) -> Result<&Page> {
        self.fetch(page_id).map(|page| &*page)
    }

    /// Get a page for writing, loading it on first access.
    ///
    /// The page is marked dirty and will be written back by the next
    /// [`flush`](Self::flush) or [`flush_all`](Self::flush_all).
    ///
    /// # Errors
    /// Same as [`get_page`](Self::get_page).
    pub fn get_page_mut(&mut self, page_id: PageId) -> Result<&mut Page> {
        self.fetch(page_id)?;
        self.dirty.insert(page_id);
        self.pages
            .get_mut(&page_id)
            .map(|page| &mut **page)
            .ok_or(Error::PageNotFound(page_id.0))
    }

    /// Hand out the next unused page number.
    ///
    /// Pages are only ever appended; numbers are never reused. The new page
    /// reads back as zeros until it is written.
    pub fn allocate_page(&mut self) -> PageId {
        let page_id = PageId::new(self.num_pages);
        self.num_pages += 1;
        self.stats.pages_allocated += 1;
        debug!("allocated {}", page_id);
        page_id
    }

    // ========================================================================
    // Write-back
    // ========================================================================

    /// Write a resident page back to its file offset.
    ///
    /// Pages that were never loaded have nothing to write and are skipped.
    pub fn flush(&mut self, page_id: PageId) -> Result<()> {
        let Some(page) = self.pages.get(&page_id) else {
            return Ok(());
        };

        self.disk_manager.write_page(page_id, page)?;
        self.dirty.remove(&page_id);
        self.stats.pages_written += 1;
        Ok(())
    }

    /// Write every dirty page back, in page order, then sync the file.
    pub fn flush_all(&mut self) -> Result<()> {
        let mut dirty: Vec<PageId> = self.dirty.iter().copied().collect();
        dirty.sort();

        for page_id in &dirty {
            self.flush(*page_id)?;
        }

        if !dirty.is_empty() {
            self.disk_manager.sync()?;
            debug!("flushed {} pages", dirty.len());
        }
        Ok(())
    }

    // ========================================================================
    // Info
    // ========================================================================

    /// Number of allocated pages.
    #[inline]
    pub fn num_pages(&self) -> u32 {
        self.num_pages
    }

    /// Current length of the database file in bytes.
    #[inline]
    pub fn file_length(&self) -> u64 {
        self.disk_manager.file_length()
    }

    /// Number of pages currently held in memory.
    pub fn resident_count(&self) -> usize {
        self.pages.len()
    }

    /// Whether a page has unflushed modifications.
    pub fn is_dirty(&self, page_id: PageId) -> bool {
        self.dirty.contains(&page_id)
    }

    /// Snapshot of the cache counters.
    pub fn stats(&self) -> PagerStats {
        self.stats
    }

    // ========================================================================
    // Internal
    // ========================================================================

    fn fetch(&mut self, page_id: PageId) -> Result<&mut Page> {
        if page_id.0 >= self.num_pages {
            return Err(Error::PageNotFound(page_id.0));
        }

        match self.pages.entry(page_id) {
            Entry::Occupied(entry) => {
                self.stats.cache_hits += 1;
                Ok(&mut **entry.into_mut())
            }
            Entry::Vacant(entry) => {
                self.stats.cache_misses += 1;

                let mut page = Box::new(Page::new());
                if page_id.offset() < self.disk_manager.file_length() {
                    self.stats.pages_read += 1;
                }
                self.disk_manager.read_page(page_id, &mut page)?;

                debug!("loaded {}", page_id);
                Ok(&mut **entry.insert(page))
            }
        }
    }
}
