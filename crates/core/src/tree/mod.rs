mod builder;
mod render;

pub use builder::{TraversalMode, TreeBuilder};
pub use render::{format_forest, format_tree};

use serde::Serialize;

/// One node of a rendered reference tree: the resource's address (virtual
/// path plus fully-qualified name, both already rendered) and its expanded
/// children. Immutable once the traversal hands it over.
#[derive(Debug, Clone, Serialize)]
pub struct TreeNode {
    pub path: String,
    pub fq_name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    fn label(&self) -> String {
        format!("{}  {}", self.path, self.fq_name)
    }
}
