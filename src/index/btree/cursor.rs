//! Cursor - a position inside the tree.
//!
//! A [`Cursor`] is plain data: `(page, cell, end_of_table)`. It does not
//! borrow the pager; every operation takes the pager explicitly, so a cursor
//! can never outlive or alias the pages it points into.

use crate::buffer::Pager;
use crate::common::{Error, PageId, Result};
use crate::storage::Page;
use crate::table::row::Row;

use super::node::{node_type, InternalNode, LeafNode, NodeType};

/// A position within a leaf of the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    /// Leaf page the cursor points into.
    pub page: PageId,
    /// Cell index within the leaf.
    pub cell: u32,
    /// Set once the cursor has moved past the last row of the table.
    pub end_of_table: bool,
}

impl Cursor {
    /// Position at the first row of the table.
    ///
    /// Descends from `root` along the leftmost children.
    pub fn table_start(pager: &mut Pager, root: PageId) -> Result<Self> {
        let mut page_id = root;
        loop {
            let page = pager.get_page(page_id)?;
            match node_type(page_id, page.as_slice())? {
                NodeType::Leaf => {
                    let num_cells = LeafNode::new(page).num_cells();
                    return Ok(Self {
                        page: page_id,
                        cell: 0,
                        end_of_table: num_cells == 0,
                    });
                }
                NodeType::Internal => page_id = InternalNode::new(page).child(0),
            }
        }
    }

    /// Position at `key`, or where `key` would be inserted.
    pub fn table_find(pager: &mut Pager, root: PageId, key: u32) -> Result<Self> {
        let mut page_id = root;
        loop {
            let page = pager.get_page(page_id)?;
            match node_type(page_id, page.as_slice())? {
                NodeType::Leaf => {
                    let leaf = LeafNode::new(page);
                    let cell = leaf.search(key);
                    let end_of_table =
                        cell >= leaf.num_cells() && leaf.next_leaf() == PageId::new(0);
                    return Ok(Self {
                        page: page_id,
                        cell,
                        end_of_table,
                    });
                }
                NodeType::Internal => {
                    let node = InternalNode::new(page);
                    page_id = node.child(node.search(key));
                }
            }
        }
    }

    /// Move to the next row, following the sibling link at the end of a leaf.
    ///
    /// # Errors
    /// Fails with a corruption error if the sibling is not a valid leaf.
    pub fn advance(&mut self, pager: &mut Pager) -> Result<()> {
        let leaf = LeafNode::new(leaf_page(pager, self.page)?);

        self.cell += 1;
        if self.cell >= leaf.num_cells() {
            let next = leaf.next_leaf();
            if next == PageId::new(0) {
                // rightmost leaf
                self.end_of_table = true;
            } else {
                let num_cells = LeafNode::new(leaf_page(pager, next)?).num_cells();
                self.page = next;
                self.cell = 0;
                self.end_of_table = num_cells == 0;
            }
        }
        Ok(())
    }

    /// Key of the cell under the cursor.
    pub fn key(&self, pager: &mut Pager) -> Result<u32> {
        let leaf = LeafNode::new(leaf_page(pager, self.page)?);
        Ok(leaf.key(self.cell))
    }

    /// Decode the row under the cursor.
    pub fn row(&self, pager: &mut Pager) -> Result<Row> {
        let leaf = LeafNode::new(leaf_page(pager, self.page)?);
        Ok(Row::deserialize(leaf.value(self.cell)))
    }
}

/// Load a page that must be a leaf, with its cell count checked.
fn leaf_page(pager: &mut Pager, page_id: PageId) -> Result<&Page> {
    let page = pager.get_page(page_id)?;
    match node_type(page_id, page.as_slice())? {
        NodeType::Leaf => Ok(page),
        NodeType::Internal => Err(Error::CorruptNode {
            page: page_id.0,
            tag: NodeType::Internal as u8,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::btree::insert::leaf_insert;
    use crate::table::row::Row;
    use tempfile::tempdir;

    fn create_tree() -> (Pager, PageId, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let mut pager = Pager::open(dir.path().join("test.db")).unwrap();
        let root = pager.allocate_page();
        let mut leaf = LeafNode::new(pager.get_page_mut(root).unwrap());
        leaf.initialize();
        leaf.set_root(true);
        (pager, root, dir)
    }

    fn insert(pager: &mut Pager, root: PageId, id: i32) {
        let row = Row::new(id, format!("user{}", id), format!("person{}@example.com", id)).unwrap();
        let cursor = Cursor::table_find(pager, root, row.id()).unwrap();
        leaf_insert(pager, &cursor, &row).unwrap();
    }

    fn scan_keys(pager: &mut Pager, root: PageId) -> Vec<u32> {
        let mut cursor = Cursor::table_start(pager, root).unwrap();
        let mut keys = Vec::new();
        while !cursor.end_of_table {
            keys.push(cursor.key(pager).unwrap());
            cursor.advance(pager).unwrap();
        }
        keys
    }

    #[test]
    fn test_start_on_empty_tree() {
        let (mut pager, root, _dir) = create_tree();
        let cursor = Cursor::table_start(&mut pager, root).unwrap();
        assert_eq!(cursor.page, root);
        assert_eq!(cursor.cell, 0);
        assert!(cursor.end_of_table);
    }

    #[test]
    fn test_find_in_single_leaf() {
        let (mut pager, root, _dir) = create_tree();
        for id in [10, 20, 30] {
            insert(&mut pager, root, id);
        }

        let cursor = Cursor::table_find(&mut pager, root, 20).unwrap();
        assert_eq!(cursor.cell, 1);
        assert!(!cursor.end_of_table);
        assert_eq!(cursor.row(&mut pager).unwrap().username(), "user20");

        let cursor = Cursor::table_find(&mut pager, root, 25).unwrap();
        assert_eq!(cursor.cell, 2);

        let cursor = Cursor::table_find(&mut pager, root, 31).unwrap();
        assert_eq!(cursor.cell, 3);
        assert!(cursor.end_of_table);
    }

    #[test]
    fn test_scan_crosses_leaves() {
        let (mut pager, root, _dir) = create_tree();
        for id in (1..=30).rev() {
            insert(&mut pager, root, id);
        }

        assert_eq!(scan_keys(&mut pager, root), (1..=30).collect::<Vec<u32>>());
    }

    #[test]
    fn test_find_descends_to_correct_leaf() {
        let (mut pager, root, _dir) = create_tree();
        for id in 1..=14 {
            insert(&mut pager, root, id);
        }

        let left = Cursor::table_find(&mut pager, root, 7).unwrap();
        let right = Cursor::table_find(&mut pager, root, 8).unwrap();
        assert_ne!(left.page, right.page);
        assert_eq!(left.cell, 6);
        assert_eq!(right.cell, 0);
        assert_eq!(right.key(&mut pager).unwrap(), 8);
    }

    #[test]
    fn test_scan_rejects_corrupt_sibling() {
        let (mut pager, root, _dir) = create_tree();
        for id in 1..=14 {
            insert(&mut pager, root, id);
        }

        // the right leaf claims far more cells than fit in a page
        let right = Cursor::table_find(&mut pager, root, 8).unwrap().page;
        LeafNode::new(pager.get_page_mut(right).unwrap()).set_num_cells(1000);

        let mut cursor = Cursor::table_start(&mut pager, root).unwrap();
        let result = loop {
            if let Err(e) = cursor.advance(&mut pager) {
                break e;
            }
            assert!(!cursor.end_of_table);
        };
        assert!(matches!(
            result,
            Error::CorruptCellCount {
                count: 1000,
                max: 13,
                ..
            }
        ));
    }
}
