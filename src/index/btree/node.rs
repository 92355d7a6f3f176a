//! Typed views over B+Tree node pages.
//!
//! A node is just a page interpreted through one of two views:
//! - [`LeafNode`] - sorted `(key, row)` cells plus a sibling pointer
//! - [`InternalNode`] - sorted `(child, key)` cells plus a rightmost child
//!
//! Both views are generic over the buffer they wrap, so the same accessors
//! work on `&Page` (read-only) and `&mut Page` (mutable):
//!
//! ```
//! use litlesql::index::btree::LeafNode;
//! use litlesql::storage::Page;
//!
//! let mut page = Page::new();
//! let mut leaf = LeafNode::new(&mut page);
//! leaf.initialize();
//! leaf.insert_cell(0, 7, &[0u8; litlesql::table::row::ROW_SIZE]);
//!
//! let leaf = LeafNode::new(&page);
//! assert_eq!(leaf.num_cells(), 1);
//! assert_eq!(leaf.key(0), 7);
//! ```

use crate::common::config::INTERNAL_NODE_MAX_KEYS;
use crate::common::{Error, PageId, Result};

use super::layout::*;

/// Type of a B+Tree node, stored in the first byte of its page.
///
/// Uses `#[repr(u8)]` to guarantee a 1-byte representation for serialization.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeType {
    /// Separator keys and child pointers.
    Internal = 0,
    /// Row cells.
    Leaf = 1,
}

impl NodeType {
    /// Convert from u8, returning None for unknown values.
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(NodeType::Internal),
            1 => Some(NodeType::Leaf),
            _ => None,
        }
    }
}

/// The header shared by every node.
///
/// # Layout (6 bytes)
/// ```text
/// Offset  Size  Field
/// ------  ----  -----
/// 0       1     node_type (NodeType as u8)
/// 1       1     is_root (0 or 1)
/// 2       4     parent page number (little-endian)
/// ```
///
/// The parent pointer is a plain page number, not an owning reference. It is
/// meaningless on the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeHeader {
    pub node_type: NodeType,
    pub is_root: bool,
    pub parent: PageId,
}

impl NodeHeader {
    /// Size of the header in bytes.
    pub const SIZE: usize = COMMON_NODE_HEADER_SIZE;

    /// Read a header from the beginning of a page.
    ///
    /// # Errors
    /// Same as [`node_type`].
    ///
    /// # Panics
    /// Panics if `data.len() < NodeHeader::SIZE`.
    pub fn from_bytes(page_id: PageId, data: &[u8]) -> Result<Self> {
        assert!(data.len() >= Self::SIZE, "buffer too small for NodeHeader");

        Ok(Self {
            node_type: node_type(page_id, data)?,
            is_root: data[IS_ROOT_OFFSET] != 0,
            parent: PageId::new(read_u32(data, PARENT_POINTER_OFFSET)),
        })
    }
}

/// Read the node type tag of a page and check its cell count.
///
/// Every traversal goes through here before it indexes into a node, so a
/// count read from disk never addresses past the end of the page.
///
/// # Errors
/// - `Error::CorruptNode` if the tag is unknown
/// - `Error::CorruptCellCount` if a leaf claims more than
///   `LEAF_NODE_MAX_CELLS` cells or an internal node more than
///   `INTERNAL_NODE_MAX_KEYS` keys
pub fn node_type(page_id: PageId, data: &[u8]) -> Result<NodeType> {
    let tag = data[NODE_TYPE_OFFSET];
    let node_type = NodeType::from_u8(tag).ok_or(Error::CorruptNode {
        page: page_id.0,
        tag,
    })?;

    let (count, max) = match node_type {
        NodeType::Leaf => (
            read_u32(data, LEAF_NODE_NUM_CELLS_OFFSET),
            LEAF_NODE_MAX_CELLS,
        ),
        NodeType::Internal => (
            read_u32(data, INTERNAL_NODE_NUM_KEYS_OFFSET),
            INTERNAL_NODE_MAX_KEYS,
        ),
    };
    if count as usize > max {
        return Err(Error::CorruptCellCount {
            page: page_id.0,
            count,
            max: max as u32,
        });
    }

    Ok(node_type)
}

/// Set or clear the root flag of a node.
pub fn set_root(data: &mut [u8], is_root: bool) {
    data[IS_ROOT_OFFSET] = is_root as u8;
}

/// Point a node at its parent.
pub fn set_parent(data: &mut [u8], parent: PageId) {
    write_u32(data, PARENT_POINTER_OFFSET, parent.0);
}

#[inline]
fn read_u32(data: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ])
}

#[inline]
fn write_u32(data: &mut [u8], offset: usize, value: u32) {
    data[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
}

// ============================================================================
// Leaf nodes
// ============================================================================

/// View of a page as a leaf node.
pub struct LeafNode<B> {
    data: B,
}

impl<B: AsRef<[u8]>> LeafNode<B> {
    /// Wrap a page buffer.
    pub fn new(data: B) -> Self {
        Self { data }
    }

    #[inline]
    fn bytes(&self) -> &[u8] {
        self.data.as_ref()
    }

    #[inline]
    fn cell_offset(cell_num: u32) -> usize {
        LEAF_NODE_HEADER_SIZE + cell_num as usize * LEAF_NODE_CELL_SIZE
    }

    /// Whether this leaf is the tree root.
    pub fn is_root(&self) -> bool {
        self.bytes()[IS_ROOT_OFFSET] != 0
    }

    /// Page number of the parent node.
    pub fn parent(&self) -> PageId {
        PageId::new(read_u32(self.bytes(), PARENT_POINTER_OFFSET))
    }

    /// Number of occupied cells.
    pub fn num_cells(&self) -> u32 {
        read_u32(self.bytes(), LEAF_NODE_NUM_CELLS_OFFSET)
    }

    /// Right sibling, or page 0 when this is the last leaf.
    pub fn next_leaf(&self) -> PageId {
        PageId::new(read_u32(self.bytes(), LEAF_NODE_NEXT_LEAF_OFFSET))
    }

    /// Raw bytes of a cell (key followed by row).
    pub fn cell(&self, cell_num: u32) -> &[u8] {
        let offset = Self::cell_offset(cell_num);
        &self.bytes()[offset..offset + LEAF_NODE_CELL_SIZE]
    }

    /// Key stored in a cell.
    pub fn key(&self, cell_num: u32) -> u32 {
        read_u32(self.bytes(), Self::cell_offset(cell_num) + LEAF_NODE_KEY_OFFSET)
    }

    /// Serialized row stored in a cell.
    pub fn value(&self, cell_num: u32) -> &[u8] {
        let offset = Self::cell_offset(cell_num) + LEAF_NODE_VALUE_OFFSET;
        &self.bytes()[offset..offset + LEAF_NODE_VALUE_SIZE]
    }

    /// Largest key in the leaf, if any.
    pub fn max_key(&self) -> Option<u32> {
        match self.num_cells() {
            0 => None,
            n => Some(self.key(n - 1)),
        }
    }

    /// All keys in cell order.
    pub fn keys(&self) -> impl Iterator<Item = u32> + '_ {
        (0..self.num_cells()).map(move |i| self.key(i))
    }

    /// Binary search for `key`.
    ///
    /// Returns the index of the first cell whose key is `>= key`: the match
    /// index if the key is present, the insertion index otherwise.
    pub fn search(&self, key: u32) -> u32 {
        let mut min = 0;
        let mut max = self.num_cells();

        while min != max {
            let index = min + (max - min) / 2;
            let key_at_index = self.key(index);
            if key == key_at_index {
                return index;
            }
            if key < key_at_index {
                max = index;
            } else {
                min = index + 1;
            }
        }

        min
    }
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> LeafNode<B> {
    #[inline]
    fn bytes_mut(&mut self) -> &mut [u8] {
        self.data.as_mut()
    }

    /// Format the page as an empty, non-root leaf with no sibling.
    ///
    /// The parent pointer is left untouched; the caller sets it (and the root
    /// flag) as needed.
    pub fn initialize(&mut self) {
        let data = self.bytes_mut();
        data[NODE_TYPE_OFFSET] = NodeType::Leaf as u8;
        set_root(data, false);
        write_u32(data, LEAF_NODE_NUM_CELLS_OFFSET, 0);
        write_u32(data, LEAF_NODE_NEXT_LEAF_OFFSET, 0);
    }

    pub fn set_root(&mut self, is_root: bool) {
        set_root(self.bytes_mut(), is_root);
    }

    pub fn set_parent(&mut self, parent: PageId) {
        set_parent(self.bytes_mut(), parent);
    }

    pub fn set_num_cells(&mut self, num_cells: u32) {
        write_u32(self.bytes_mut(), LEAF_NODE_NUM_CELLS_OFFSET, num_cells);
    }

    pub fn set_next_leaf(&mut self, next_leaf: PageId) {
        write_u32(self.bytes_mut(), LEAF_NODE_NEXT_LEAF_OFFSET, next_leaf.0);
    }

    /// Mutable raw bytes of a cell.
    pub fn cell_mut(&mut self, cell_num: u32) -> &mut [u8] {
        let offset = Self::cell_offset(cell_num);
        &mut self.bytes_mut()[offset..offset + LEAF_NODE_CELL_SIZE]
    }

    /// Overwrite a cell with `key` and a serialized row.
    ///
    /// # Panics
    /// Panics if `value` is not exactly one row long.
    pub fn write_cell(&mut self, cell_num: u32, key: u32, value: &[u8]) {
        let cell = self.cell_mut(cell_num);
        cell[LEAF_NODE_KEY_OFFSET..LEAF_NODE_KEY_OFFSET + LEAF_NODE_KEY_SIZE]
            .copy_from_slice(&key.to_le_bytes());
        cell[LEAF_NODE_VALUE_OFFSET..].copy_from_slice(value);
    }

    /// Insert a cell at `index`, shifting later cells one slot to the right.
    ///
    /// The caller guarantees the leaf has room and that `index` keeps the
    /// keys sorted.
    pub fn insert_cell(&mut self, index: u32, key: u32, value: &[u8]) {
        let num_cells = self.num_cells();
        debug_assert!((num_cells as usize) < LEAF_NODE_MAX_CELLS, "leaf is full");
        debug_assert!(index <= num_cells, "insert index past end of leaf");

        if index < num_cells {
            let start = Self::cell_offset(index);
            let end = Self::cell_offset(num_cells);
            self.bytes_mut()
                .copy_within(start..end, start + LEAF_NODE_CELL_SIZE);
        }

        self.write_cell(index, key, value);
        self.set_num_cells(num_cells + 1);
    }

    /// Zero every byte after the last occupied cell.
    pub fn clear_unused_cells(&mut self) {
        let start = Self::cell_offset(self.num_cells());
        self.bytes_mut()[start..].fill(0);
    }
}

// ============================================================================
// Internal nodes
// ============================================================================

/// View of a page as an internal node.
///
/// Key `i` is the largest key in the subtree of child `i`. Every key in the
/// subtree of the right child is larger than all stored keys. Child index
/// `num_keys` denotes the right child.
pub struct InternalNode<B> {
    data: B,
}

impl<B: AsRef<[u8]>> InternalNode<B> {
    /// Wrap a page buffer.
    pub fn new(data: B) -> Self {
        Self { data }
    }

    #[inline]
    fn bytes(&self) -> &[u8] {
        self.data.as_ref()
    }

    #[inline]
    fn cell_offset(cell_num: u32) -> usize {
        INTERNAL_NODE_HEADER_SIZE + cell_num as usize * INTERNAL_NODE_CELL_SIZE
    }

    /// Whether this node is the tree root.
    pub fn is_root(&self) -> bool {
        self.bytes()[IS_ROOT_OFFSET] != 0
    }

    /// Page number of the parent node.
    pub fn parent(&self) -> PageId {
        PageId::new(read_u32(self.bytes(), PARENT_POINTER_OFFSET))
    }

    /// Number of separator keys.
    pub fn num_keys(&self) -> u32 {
        read_u32(self.bytes(), INTERNAL_NODE_NUM_KEYS_OFFSET)
    }

    /// The rightmost child.
    pub fn right_child(&self) -> PageId {
        PageId::new(read_u32(self.bytes(), INTERNAL_NODE_RIGHT_CHILD_OFFSET))
    }

    /// Separator key `key_num`.
    pub fn key(&self, key_num: u32) -> u32 {
        read_u32(
            self.bytes(),
            Self::cell_offset(key_num) + INTERNAL_NODE_CHILD_SIZE,
        )
    }

    /// Child `child_num`, where `num_keys` selects the right child.
    pub fn child(&self, child_num: u32) -> PageId {
        let num_keys = self.num_keys();
        debug_assert!(child_num <= num_keys, "child index past right child");

        if child_num == num_keys {
            self.right_child()
        } else {
            PageId::new(read_u32(self.bytes(), Self::cell_offset(child_num)))
        }
    }

    /// Binary search for the child whose subtree may contain `key`.
    ///
    /// Returns the index of the first key `>= key`, or `num_keys` (the right
    /// child) when every key is smaller.
    pub fn search(&self, key: u32) -> u32 {
        let mut min = 0;
        let mut max = self.num_keys();

        while min != max {
            let index = min + (max - min) / 2;
            if self.key(index) >= key {
                max = index;
            } else {
                min = index + 1;
            }
        }

        min
    }
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> InternalNode<B> {
    #[inline]
    fn bytes_mut(&mut self) -> &mut [u8] {
        self.data.as_mut()
    }

    /// Format the page as an empty, non-root internal node.
    pub fn initialize(&mut self) {
        let data = self.bytes_mut();
        data[NODE_TYPE_OFFSET] = NodeType::Internal as u8;
        set_root(data, false);
        write_u32(data, INTERNAL_NODE_NUM_KEYS_OFFSET, 0);
        write_u32(data, INTERNAL_NODE_RIGHT_CHILD_OFFSET, 0);
    }

    pub fn set_root(&mut self, is_root: bool) {
        set_root(self.bytes_mut(), is_root);
    }

    pub fn set_parent(&mut self, parent: PageId) {
        set_parent(self.bytes_mut(), parent);
    }

    pub fn set_num_keys(&mut self, num_keys: u32) {
        write_u32(self.bytes_mut(), INTERNAL_NODE_NUM_KEYS_OFFSET, num_keys);
    }

    pub fn set_right_child(&mut self, child: PageId) {
        write_u32(self.bytes_mut(), INTERNAL_NODE_RIGHT_CHILD_OFFSET, child.0);
    }

    pub fn set_key(&mut self, key_num: u32, key: u32) {
        let offset = Self::cell_offset(key_num) + INTERNAL_NODE_CHILD_SIZE;
        write_u32(self.bytes_mut(), offset, key);
    }

    /// Overwrite cell `cell_num` regardless of the current key count.
    pub fn write_cell(&mut self, cell_num: u32, child: PageId, key: u32) {
        let offset = Self::cell_offset(cell_num);
        write_u32(self.bytes_mut(), offset, child.0);
        write_u32(self.bytes_mut(), offset + INTERNAL_NODE_CHILD_SIZE, key);
    }

    /// Insert `(child, key)` at `index`, shifting later cells right.
    pub fn insert_cell(&mut self, index: u32, child: PageId, key: u32) {
        let num_keys = self.num_keys();
        debug_assert!(index <= num_keys, "insert index past end of node");

        if index < num_keys {
            let start = Self::cell_offset(index);
            let end = Self::cell_offset(num_keys);
            self.bytes_mut()
                .copy_within(start..end, start + INTERNAL_NODE_CELL_SIZE);
        }

        self.write_cell(index, child, key);
        self.set_num_keys(num_keys + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Page;
    use crate::table::row::ROW_SIZE;

    fn row_bytes(fill: u8) -> [u8; ROW_SIZE] {
        [fill; ROW_SIZE]
    }

    fn leaf_with_keys(keys: &[u32]) -> Page {
        let mut page = Page::new();
        let mut leaf = LeafNode::new(&mut page);
        leaf.initialize();
        for (i, &key) in keys.iter().enumerate() {
            leaf.insert_cell(i as u32, key, &row_bytes(key as u8));
        }
        page
    }

    // --- NodeType / NodeHeader ---

    #[test]
    fn test_node_type_from_u8() {
        assert_eq!(NodeType::from_u8(0), Some(NodeType::Internal));
        assert_eq!(NodeType::from_u8(1), Some(NodeType::Leaf));
        assert_eq!(NodeType::from_u8(2), None);
    }

    #[test]
    fn test_node_header_byte_layout() {
        let mut page = Page::new();
        {
            let mut leaf = LeafNode::new(&mut page);
            leaf.initialize();
            leaf.set_root(true);
            leaf.set_parent(PageId::new(0x04030201));
        }

        assert_eq!(&page.as_slice()[..NodeHeader::SIZE], &[1, 1, 0x01, 0x02, 0x03, 0x04]);
        assert_eq!(
            NodeHeader::from_bytes(PageId::new(0), page.as_slice()).unwrap(),
            NodeHeader {
                node_type: NodeType::Leaf,
                is_root: true,
                parent: PageId::new(0x04030201),
            }
        );
    }

    #[test]
    fn test_unknown_node_type_is_corrupt() {
        let mut page = Page::new();
        page.as_mut_slice()[0] = 9;

        match NodeHeader::from_bytes(PageId::new(4), page.as_slice()) {
            Err(Error::CorruptNode { page: 4, tag: 9 }) => {}
            other => panic!("Expected CorruptNode, got {:?}", other),
        }
    }

    #[test]
    fn test_leaf_cell_count_past_capacity_is_corrupt() {
        let mut page = leaf_with_keys(&[1, 2]);
        LeafNode::new(&mut page).set_num_cells(1000);

        match node_type(PageId::new(3), page.as_slice()) {
            Err(Error::CorruptCellCount {
                page: 3,
                count: 1000,
                max: 13,
            }) => {}
            other => panic!("Expected CorruptCellCount, got {:?}", other),
        }
    }

    #[test]
    fn test_internal_key_count_past_capacity_is_corrupt() {
        let mut page = internal_with(&[(1, 7)], 2);
        InternalNode::new(&mut page).set_num_keys(INTERNAL_NODE_MAX_KEYS as u32 + 1);

        assert!(matches!(
            node_type(PageId::new(0), page.as_slice()),
            Err(Error::CorruptCellCount {
                page: 0,
                count: 4,
                max: 3
            })
        ));

        // a full node is still valid
        InternalNode::new(&mut page).set_num_keys(INTERNAL_NODE_MAX_KEYS as u32);
        assert_eq!(
            node_type(PageId::new(0), page.as_slice()).unwrap(),
            NodeType::Internal
        );
    }

    // --- Leaf nodes ---

    #[test]
    fn test_initialize_leaf() {
        let mut page = Page::new();
        page.as_mut_slice().fill(0xFF);

        let mut leaf = LeafNode::new(&mut page);
        leaf.initialize();

        let header = NodeHeader::from_bytes(PageId::new(0), page.as_slice()).unwrap();
        assert_eq!(header.node_type, NodeType::Leaf);
        assert!(!header.is_root);

        let leaf = LeafNode::new(&page);
        assert_eq!(leaf.num_cells(), 0);
        assert_eq!(leaf.next_leaf(), PageId::new(0));
        assert_eq!(leaf.max_key(), None);
    }

    #[test]
    fn test_leaf_insert_keeps_order() {
        let mut page = leaf_with_keys(&[10, 30]);
        {
            let mut leaf = LeafNode::new(&mut page);
            let index = leaf.search(20);
            assert_eq!(index, 1);
            leaf.insert_cell(index, 20, &row_bytes(20));
        }

        let leaf = LeafNode::new(&page);
        assert_eq!(leaf.keys().collect::<Vec<_>>(), vec![10, 20, 30]);
        assert_eq!(leaf.value(1), &row_bytes(20)[..]);
        assert_eq!(leaf.value(2), &row_bytes(30)[..]);
        assert_eq!(leaf.max_key(), Some(30));
    }

    #[test]
    fn test_leaf_cell_bytes() {
        let page = leaf_with_keys(&[0x0A0B0C0D]);
        let data = page.as_slice();

        let num_cells = &data[LEAF_NODE_NUM_CELLS_OFFSET..LEAF_NODE_NUM_CELLS_OFFSET + 4];
        assert_eq!(num_cells, &[1, 0, 0, 0]);
        assert_eq!(&data[14..18], &[0x0D, 0x0C, 0x0B, 0x0A]);
        assert_eq!(LeafNode::new(&page).cell(0).len(), LEAF_NODE_CELL_SIZE);
    }

    #[test]
    fn test_leaf_search() {
        let page = leaf_with_keys(&[2, 4, 6, 8]);
        let leaf = LeafNode::new(&page);

        assert_eq!(leaf.search(1), 0);
        assert_eq!(leaf.search(2), 0);
        assert_eq!(leaf.search(5), 2);
        assert_eq!(leaf.search(8), 3);
        assert_eq!(leaf.search(9), 4);
    }

    #[test]
    fn test_leaf_search_empty() {
        let page = leaf_with_keys(&[]);
        assert_eq!(LeafNode::new(&page).search(42), 0);
    }

    #[test]
    fn test_leaf_fills_to_max_cells() {
        let keys: Vec<u32> = (1..=LEAF_NODE_MAX_CELLS as u32).collect();
        let page = leaf_with_keys(&keys);
        let leaf = LeafNode::new(&page);

        assert_eq!(leaf.num_cells() as usize, LEAF_NODE_MAX_CELLS);
        assert_eq!(leaf.max_key(), Some(13));
        assert_eq!(leaf.value(12), &row_bytes(13)[..]);
    }

    #[test]
    fn test_clear_unused_cells() {
        let mut page = leaf_with_keys(&[1, 2, 3]);
        {
            let mut leaf = LeafNode::new(&mut page);
            leaf.set_num_cells(1);
            leaf.clear_unused_cells();
        }

        let tail = &page.as_slice()[LEAF_NODE_HEADER_SIZE + LEAF_NODE_CELL_SIZE..];
        assert!(tail.iter().all(|&b| b == 0));
        assert_eq!(LeafNode::new(&page).key(0), 1);
    }

    // --- Internal nodes ---

    fn internal_with(cells: &[(u32, u32)], right: u32) -> Page {
        let mut page = Page::new();
        let mut node = InternalNode::new(&mut page);
        node.initialize();
        for (i, &(child, key)) in cells.iter().enumerate() {
            node.insert_cell(i as u32, PageId::new(child), key);
        }
        node.set_right_child(PageId::new(right));
        page
    }

    #[test]
    fn test_initialize_internal() {
        let mut page = Page::new();
        page.as_mut_slice()[0] = NodeType::Leaf as u8;
        InternalNode::new(&mut page).initialize();

        assert_eq!(
            node_type(PageId::new(0), page.as_slice()).unwrap(),
            NodeType::Internal
        );
        assert_eq!(InternalNode::new(&page).num_keys(), 0);
    }

    #[test]
    fn test_internal_children() {
        let page = internal_with(&[(1, 7), (3, 15)], 2);
        let node = InternalNode::new(&page);

        assert_eq!(node.num_keys(), 2);
        assert_eq!(node.child(0), PageId::new(1));
        assert_eq!(node.child(1), PageId::new(3));
        assert_eq!(node.child(2), PageId::new(2));
    }

    #[test]
    fn test_internal_search() {
        let page = internal_with(&[(1, 7), (3, 15), (4, 22)], 2);
        let node = InternalNode::new(&page);

        assert_eq!(node.search(1), 0);
        assert_eq!(node.search(7), 0);
        assert_eq!(node.search(8), 1);
        assert_eq!(node.search(15), 1);
        assert_eq!(node.search(22), 2);
        assert_eq!(node.search(23), 3);
    }

    #[test]
    fn test_internal_insert_cell_shifts() {
        let mut page = internal_with(&[(1, 7), (4, 22)], 2);
        InternalNode::new(&mut page).insert_cell(1, PageId::new(3), 15);

        let node = InternalNode::new(&page);
        assert_eq!(node.num_keys(), 3);
        assert_eq!((node.child(0), node.key(0)), (PageId::new(1), 7));
        assert_eq!((node.child(1), node.key(1)), (PageId::new(3), 15));
        assert_eq!((node.child(2), node.key(2)), (PageId::new(4), 22));
        assert_eq!(node.right_child(), PageId::new(2));
    }

    #[test]
    fn test_root_and_parent_flags() {
        let mut page = Page::new();
        {
            let mut leaf = LeafNode::new(&mut page);
            leaf.initialize();
            leaf.set_root(true);
            leaf.set_parent(PageId::new(5));
        }

        let leaf = LeafNode::new(&page);
        assert!(leaf.is_root());
        assert_eq!(leaf.parent(), PageId::new(5));
    }
}
