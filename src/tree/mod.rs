//! Classification tree
//!
//! Path handling for materialized paths and reconstruction of nested trees
//! from flat record sets.

pub mod builder;
pub mod node;
pub mod path;

pub use builder::TreeBuilder;
pub use node::TreeNode;
