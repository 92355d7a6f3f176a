//! Configuration constants for litlesql.

use super::PageId;

/// Size of a page in bytes (4KB).
///
/// Pages are the unit of disk I/O and the unit of B+Tree node storage:
/// one node occupies exactly one page.
///
/// # File Layout
/// Page N is stored at file offset `N × PAGE_SIZE`. A healthy database file
/// is therefore always an exact multiple of this size.
pub const PAGE_SIZE: usize = 4096;

/// Page holding the tree root.
///
/// The root never moves: when it splits, its contents are copied to a fresh
/// page and page 0 is re-initialized as the new internal root.
pub const ROOT_PAGE_ID: PageId = PageId(0);

/// Maximum number of keys an internal node may hold.
///
/// Deliberately tiny so that multi-leaf trees appear after a few dozen rows.
/// Splitting a full internal node is not supported; an insert that would
/// require it fails with [`Error::InternalSplitUnsupported`].
///
/// [`Error::InternalSplitUnsupported`]: crate::Error::InternalSplitUnsupported
pub const INTERNAL_NODE_MAX_KEYS: usize = 3;
