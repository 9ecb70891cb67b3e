use crate::classifiers::decision_tree::nodes::leaf_node::LeafNode;
use crate::classifiers::decision_tree::nodes::split_node::SplitNode;

/// Leaf reached by a record, with the split that led to it.
///
/// `parent` is `None` when the tree is a single leaf.
#[derive(Debug, Clone, Copy)]
pub struct FoundNode<'a> {
    node: &'a LeafNode,
    parent: Option<&'a SplitNode>,
    parent_branch: Option<usize>,
}

impl<'a> FoundNode<'a> {
    pub fn new(
        node: &'a LeafNode,
        parent: Option<&'a SplitNode>,
        parent_branch: Option<usize>,
    ) -> Self {
        Self {
            node,
            parent,
            parent_branch,
        }
    }

    pub fn get_node(&self) -> &'a LeafNode {
        self.node
    }

    pub fn get_parent(&self) -> Option<&'a SplitNode> {
        self.parent
    }

    pub fn get_parent_branch(&self) -> Option<usize> {
        self.parent_branch
    }
}
