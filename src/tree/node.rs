//! Nested tree representation returned by reads.

use crate::types::Record;
use serde::{Deserialize, Serialize};

/// A record plus its direct children, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    pub name: String,
    pub path: String,
    #[serde(default)]
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn leaf(record: Record) -> Self {
        Self {
            name: record.name,
            path: record.path,
            children: Vec::new(),
        }
    }

    pub fn record(&self) -> Record {
        Record::new(self.name.clone(), self.path.clone())
    }

    /// Find a direct child by name.
    pub fn child(&self, name: &str) -> Option<&TreeNode> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Number of nodes in this subtree, including itself.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.iter());
        }
        count
    }

    /// Pre-order flattening back into records.
    pub fn flatten(&self) -> Vec<Record> {
        let mut out = Vec::with_capacity(self.node_count());
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            out.push(node.record());
            stack.extend(node.children.iter().rev());
        }
        out
    }
}
