//! Insertion: leaf insert, leaf split, root promotion and internal insert.
//!
//! # Leaf split
//! ```text
//! before:   parent [ .. k_old .. ]
//!                       │
//!                   [ 13 cells ] ──▶ next
//!
//! after:    parent [ .. k_left, k_old .. ]
//!                       │        │
//!                   [ 7 cells ]─▶[ 7 cells ] ──▶ next
//!                     old page    new page
//! ```
//!
//! Splitting a full internal node is not supported. Whether the parent has
//! room is checked before anything is allocated or written, so a rejected
//! insert leaves every page exactly as it was.

use log::{debug, warn};

use crate::buffer::Pager;
use crate::common::config::INTERNAL_NODE_MAX_KEYS;
use crate::common::{Error, PageId, Result};
use crate::storage::Page;
use crate::table::row::{Row, ROW_SIZE};

use super::cursor::Cursor;
use super::layout::*;
use super::node::{node_type, set_parent, set_root, InternalNode, LeafNode, NodeHeader, NodeType};

/// Largest key stored under `page_id`.
///
/// For a leaf this is its last key (0 if empty); for an internal node it is
/// the largest key of its rightmost subtree.
pub fn node_max_key(pager: &mut Pager, page_id: PageId) -> Result<u32> {
    let mut page_id = page_id;
    loop {
        let page = pager.get_page(page_id)?;
        match node_type(page_id, page.as_slice())? {
            NodeType::Leaf => return Ok(LeafNode::new(page).max_key().unwrap_or(0)),
            NodeType::Internal => page_id = InternalNode::new(page).right_child(),
        }
    }
}

/// Insert `row` at the position found by `cursor`.
///
/// # Errors
/// - `Error::DuplicateKey` if the key is already present; nothing is written
/// - `Error::InternalSplitUnsupported` if the leaf is full and its parent
///   cannot take another key; nothing is written
pub fn leaf_insert(pager: &mut Pager, cursor: &Cursor, row: &Row) -> Result<()> {
    let key = row.id();
    let num_cells = {
        let leaf = LeafNode::new(pager.get_page(cursor.page)?);
        let num_cells = leaf.num_cells();
        if cursor.cell < num_cells && leaf.key(cursor.cell) == key {
            return Err(Error::DuplicateKey);
        }
        num_cells
    };

    let mut value = [0u8; ROW_SIZE];
    row.serialize(&mut value);

    if num_cells as usize >= LEAF_NODE_MAX_CELLS {
        return leaf_split_and_insert(pager, cursor, key, &value);
    }

    let mut leaf = LeafNode::new(pager.get_page_mut(cursor.page)?);
    leaf.insert_cell(cursor.cell, key, &value);
    Ok(())
}

/// Split a full leaf and place the new cell in whichever half it sorts into.
fn leaf_split_and_insert(
    pager: &mut Pager,
    cursor: &Cursor,
    key: u32,
    value: &[u8; ROW_SIZE],
) -> Result<()> {
    let old_page = cursor.page;

    // Gather the 13 existing cells plus the new one, in key order.
    let (header, old_next, mut cells) = {
        let page = pager.get_page(old_page)?;
        let header = NodeHeader::from_bytes(old_page, page.as_slice())?;
        let leaf = LeafNode::new(page);

        let cells: Vec<[u8; LEAF_NODE_CELL_SIZE]> = (0..leaf.num_cells())
            .map(|i| {
                let mut cell = [0u8; LEAF_NODE_CELL_SIZE];
                cell.copy_from_slice(leaf.cell(i));
                cell
            })
            .collect();
        (header, leaf.next_leaf(), cells)
    };

    if !header.is_root {
        let page = pager.get_page(header.parent)?;
        node_type(header.parent, page.as_slice())?;
        let parent = InternalNode::new(page);
        if parent.num_keys() as usize >= INTERNAL_NODE_MAX_KEYS {
            warn!(
                "rejecting key {}: parent {} already holds {} keys",
                key,
                header.parent,
                parent.num_keys()
            );
            return Err(Error::InternalSplitUnsupported);
        }
    }

    let mut new_cell = [0u8; LEAF_NODE_CELL_SIZE];
    new_cell[LEAF_NODE_KEY_OFFSET..LEAF_NODE_KEY_OFFSET + LEAF_NODE_KEY_SIZE]
        .copy_from_slice(&key.to_le_bytes());
    new_cell[LEAF_NODE_VALUE_OFFSET..].copy_from_slice(value);
    cells.insert(cursor.cell as usize, new_cell);

    let old_max = node_max_key(pager, old_page)?;
    let new_page = pager.allocate_page();
    debug!("splitting leaf {} into {} at key {}", old_page, new_page, key);

    let (left, right) = cells.split_at(LEAF_NODE_LEFT_SPLIT_COUNT);

    {
        let mut new_leaf = LeafNode::new(pager.get_page_mut(new_page)?);
        new_leaf.initialize();
        new_leaf.set_parent(header.parent);
        new_leaf.set_next_leaf(old_next);
        for (i, cell) in right.iter().enumerate() {
            new_leaf.cell_mut(i as u32).copy_from_slice(cell);
        }
        new_leaf.set_num_cells(right.len() as u32);
    }

    {
        let mut old_leaf = LeafNode::new(pager.get_page_mut(old_page)?);
        for (i, cell) in left.iter().enumerate() {
            old_leaf.cell_mut(i as u32).copy_from_slice(cell);
        }
        old_leaf.set_num_cells(left.len() as u32);
        old_leaf.set_next_leaf(new_page);
        old_leaf.clear_unused_cells();
    }

    if header.is_root {
        return create_new_root(pager, old_page, new_page);
    }

    let new_max = node_max_key(pager, old_page)?;
    update_parent_key(pager, header.parent, old_max, new_max)?;
    internal_insert(pager, header.parent, new_page)
}

/// Promote the tree by one level after the root split.
///
/// The old root's contents move to a freshly allocated left child, and the
/// root page is re-initialized as an internal node over `(left, right_child)`.
/// The root page number never changes. Only a leaf root ever splits, so
/// the moved node has no children to re-parent.
pub fn create_new_root(pager: &mut Pager, root: PageId, right_child: PageId) -> Result<()> {
    let left_child = pager.allocate_page();
    debug!("promoting root {}: left {}, right {}", root, left_child, right_child);

    let mut scratch = Page::new();
    scratch.copy_from(pager.get_page(root)?);

    {
        let left = pager.get_page_mut(left_child)?;
        left.copy_from(&scratch);
        set_root(left.as_mut_slice(), false);
        set_parent(left.as_mut_slice(), root);
    }

    let left_max = node_max_key(pager, left_child)?;

    {
        let mut node = InternalNode::new(pager.get_page_mut(root)?);
        node.initialize();
        node.set_root(true);
        node.insert_cell(0, left_child, left_max);
        node.set_right_child(right_child);
    }

    set_parent(pager.get_page_mut(right_child)?.as_mut_slice(), root);
    Ok(())
}

/// Add `child` to `parent`, keyed by the child's max key.
///
/// # Errors
/// Returns `Error::InternalSplitUnsupported` if `parent` is full.
pub fn internal_insert(pager: &mut Pager, parent: PageId, child: PageId) -> Result<()> {
    let child_max = node_max_key(pager, child)?;

    let (index, num_keys, right_child) = {
        let node = InternalNode::new(pager.get_page(parent)?);
        (node.search(child_max), node.num_keys(), node.right_child())
    };

    if num_keys as usize >= INTERNAL_NODE_MAX_KEYS {
        return Err(Error::InternalSplitUnsupported);
    }

    let right_max = node_max_key(pager, right_child)?;

    {
        let mut node = InternalNode::new(pager.get_page_mut(parent)?);
        if child_max > right_max {
            // The new child becomes the right child; the old one moves into
            // the cell array.
            node.write_cell(num_keys, right_child, right_max);
            node.set_num_keys(num_keys + 1);
            node.set_right_child(child);
        } else {
            node.insert_cell(index, child, child_max);
        }
    }

    set_parent(pager.get_page_mut(child)?.as_mut_slice(), parent);
    Ok(())
}

/// Replace the separator key for the child whose max key was `old_max`.
///
/// The right child has no separator, so nothing changes when `old_max`
/// routes there.
pub fn update_parent_key(
    pager: &mut Pager,
    parent: PageId,
    old_max: u32,
    new_max: u32,
) -> Result<()> {
    let index = InternalNode::new(pager.get_page(parent)?).search(old_max);

    let mut node = InternalNode::new(pager.get_page_mut(parent)?);
    if index < node.num_keys() {
        node.set_key(index, new_max);
    }
    Ok(())
}
