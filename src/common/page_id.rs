//! Page identifier type.

use std::fmt;

/// Identifies a page in the database file.
///
/// Stored on disk as a little-endian `u32` wherever a node refers to another
/// page (parent pointer, sibling pointer, child pointers).
///
/// # Example
/// ```
/// use litlesql::PageId;
///
/// let page_id = PageId::new(42);
/// assert_eq!(page_id.0, 42);
/// assert_eq!(page_id.offset(), 42 * 4096);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(pub u32);

impl PageId {
    /// Create a new PageId.
    #[inline]
    pub fn new(id: u32) -> Self {
        PageId(id)
    }

    /// Byte offset of this page in the database file.
    #[inline]
    pub fn offset(&self) -> u64 {
        self.0 as u64 * crate::common::config::PAGE_SIZE as u64
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Page({})", self.0)
    }
}
