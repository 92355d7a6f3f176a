//! Page buffer.
//!
//! Every read and write against the database file moves exactly one
//! [`Page`]. What the bytes mean is decided by the B+Tree node views.

use crate::common::config::PAGE_SIZE;

/// One page of the database file, held in memory.
///
/// Not `Clone`: duplicating a page goes through [`Page::copy_from`], which
/// is how the root's contents move down a level when the tree grows.
///
/// # Example
/// ```
/// use litlesql::storage::Page;
///
/// let mut page = Page::new();
/// page.as_mut_slice()[0] = 0xFF;
/// assert_eq!(page.as_slice()[0], 0xFF);
/// ```
#[repr(align(4096))]
pub struct Page {
    data: [u8; PAGE_SIZE],
}

impl Page {
    /// Create a new zeroed page.
    #[inline]
    pub fn new() -> Self {
        Self {
            data: [0u8; PAGE_SIZE],
        }
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Zero every byte, e.g. for a page past the end of the file.
    pub fn reset(&mut self) {
        self.data.fill(0);
    }

    /// Overwrite this page with the contents of another.
    pub fn copy_from(&mut self, other: &Page) {
        self.data.copy_from_slice(&other.data);
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<[u8]> for Page {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl AsMut<[u8]> for Page {
    #[inline]
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}
