//! Tree introspection: structural dump and layout constants.

use crate::buffer::Pager;
use crate::common::{PageId, Result};
use crate::table::row::ROW_SIZE;

use super::layout::*;
use super::node::{node_type, InternalNode, LeafNode, NodeType};

/// Indentation added per tree level.
const INDENT: &str = "  ";

enum Item {
    Node { page: PageId, depth: usize },
    Line(String),
}

/// Depth-first dump of the tree, one line per item.
///
/// Lines are produced lazily: a page is only loaded when the traversal
/// reaches it. After the first error the iterator is exhausted.
///
/// ```text
/// - internal (size 1)
///   - leaf (size 7)
///     - 1
///     ...
///   - key 7
///   - leaf (size 7)
///     - 8
///     ...
/// ```
pub struct TreeDump<'p> {
    pager: &'p mut Pager,
    stack: Vec<Item>,
}

impl<'p> TreeDump<'p> {
    pub fn new(pager: &'p mut Pager, root: PageId) -> Self {
        Self {
            pager,
            stack: vec![Item::Node {
                page: root,
                depth: 0,
            }],
        }
    }

    /// Emit the header line of a node and queue its contents.
    fn expand(&mut self, page_id: PageId, depth: usize) -> Result<String> {
        let page = self.pager.get_page(page_id)?;
        let indent = INDENT.repeat(depth);

        match node_type(page_id, page.as_slice())? {
            NodeType::Leaf => {
                let leaf = LeafNode::new(page);
                let num_cells = leaf.num_cells();
                for i in (0..num_cells).rev() {
                    self.stack
                        .push(Item::Line(format!("{}{}- {}", indent, INDENT, leaf.key(i))));
                }
                Ok(format!("{}- leaf (size {})", indent, num_cells))
            }
            NodeType::Internal => {
                let node = InternalNode::new(page);
                let num_keys = node.num_keys();

                self.stack.push(Item::Node {
                    page: node.right_child(),
                    depth: depth + 1,
                });
                for i in (0..num_keys).rev() {
                    self.stack
                        .push(Item::Line(format!("{}{}- key {}", indent, INDENT, node.key(i))));
                    self.stack.push(Item::Node {
                        page: node.child(i),
                        depth: depth + 1,
                    });
                }
                Ok(format!("{}- internal (size {})", indent, num_keys))
            }
        }
    }
}

impl Iterator for TreeDump<'_> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.stack.pop()? {
            Item::Line(line) => Some(Ok(line)),
            Item::Node { page, depth } => {
                let line = self.expand(page, depth);
                if line.is_err() {
                    self.stack.clear();
                }
                Some(line)
            }
        }
    }
}

/// The fixed layout sizes, by name, for diagnostics.
pub fn report_constants() -> [(&'static str, usize); 6] {
    [
        ("ROW_SIZE", ROW_SIZE),
        ("COMMON_NODE_HEADER_SIZE", COMMON_NODE_HEADER_SIZE),
        ("LEAF_NODE_HEADER_SIZE", LEAF_NODE_HEADER_SIZE),
        ("LEAF_NODE_CELL_SIZE", LEAF_NODE_CELL_SIZE),
        ("LEAF_NODE_SPACE_FOR_CELLS", LEAF_NODE_SPACE_FOR_CELLS),
        ("LEAF_NODE_MAX_CELLS", LEAF_NODE_MAX_CELLS),
    ]
}
