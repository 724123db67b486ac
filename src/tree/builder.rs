//! Tree reconstruction from flat materialized-path records.
//!
//! Nodes are allocated in an arena and indexed by the path their children
//! carry (`path + name + "/"`), so each record is attached to its parent with a
//! single lookup. Sibling order follows the order of the input.

use crate::tree::node::TreeNode;
use crate::types::Record;
use std::collections::HashMap;
use tracing::{debug, warn};

struct ArenaNode {
    name: String,
    path: String,
    children: Vec<usize>,
}

/// Builds nested trees out of flat record lists.
pub struct TreeBuilder;

impl TreeBuilder {
    /// Build a tree rooted at `records[0]`.
    ///
    /// The remaining records may come in any order. A record whose parent is
    /// not part of the input cannot be placed and is left out of the result.
    /// Returns `None` for empty input.
    pub fn build(records: Vec<Record>) -> Option<TreeNode> {
        if records.is_empty() {
            return None;
        }
        let total = records.len();

        let mut arena: Vec<ArenaNode> = Vec::with_capacity(total);
        let mut by_child_path: HashMap<String, usize> = HashMap::with_capacity(total);
        for (idx, record) in records.into_iter().enumerate() {
            by_child_path.entry(record.child_path()).or_insert(idx);
            arena.push(ArenaNode {
                name: record.name,
                path: record.path,
                children: Vec::new(),
            });
        }

        for idx in 1..arena.len() {
            match by_child_path.get(&arena[idx].path) {
                Some(&parent) => arena[parent].children.push(idx),
                None => warn!(
                    name = %arena[idx].name,
                    path = %arena[idx].path,
                    "Record has no parent in the loaded set, skipping"
                ),
            }
        }

        // A child's path is strictly longer than its parent's, so longest-path
        // first guarantees children are assembled before their parents.
        let mut order: Vec<usize> = (0..arena.len()).collect();
        order.sort_by(|a, b| arena[*b].path.len().cmp(&arena[*a].path.len()));

        let mut built: Vec<Option<TreeNode>> = (0..arena.len()).map(|_| None).collect();
        for idx in order {
            let children = arena[idx]
                .children
                .iter()
                .filter_map(|child| built[*child].take())
                .collect();
            let node = &mut arena[idx];
            built[idx] = Some(TreeNode {
                name: std::mem::take(&mut node.name),
                path: std::mem::take(&mut node.path),
                children,
            });
        }

        let tree = built[0].take()?;
        let placed = tree.node_count();
        if placed < total {
            warn!(placed, total, "Tree built with unplaced records");
        } else {
            debug!(placed, "Tree built");
        }
        Some(tree)
    }
}
