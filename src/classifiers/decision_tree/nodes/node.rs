use crate::classifiers::decision_tree::nodes::found_node::FoundNode;
use crate::classifiers::decision_tree::nodes::leaf_node::LeafNode;
use crate::classifiers::decision_tree::nodes::split_node::SplitNode;
use crate::classifiers::error::ClassifierError;
use crate::core::class_label::ClassCounts;
use crate::core::instances::Instance;

/// A tree node: a leaf or an internal split, never both.
#[derive(Debug)]
pub enum Node {
    Leaf(LeafNode),
    Split(SplitNode),
}

impl Node {
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    /// Value index of the edge from the parent; `None` for the root.
    pub fn edge_value(&self) -> Option<usize> {
        match self {
            Node::Leaf(leaf) => leaf.edge_value(),
            Node::Split(split) => split.edge_value(),
        }
    }

    pub fn get_observed_class_distribution(&self) -> &ClassCounts {
        match self {
            Node::Leaf(leaf) => leaf.get_observed_class_distribution(),
            Node::Split(split) => split.get_observed_class_distribution(),
        }
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::Leaf(_) => &[],
            Node::Split(split) => split.children(),
        }
    }

    pub fn filter_instance_to_leaf<'a>(
        &'a self,
        instance: &dyn Instance,
    ) -> Result<FoundNode<'a>, ClassifierError> {
        match self {
            Node::Leaf(leaf) => Ok(FoundNode::new(leaf, None, None)),
            Node::Split(split) => split.filter_instance_to_leaf(instance),
        }
    }
}

/// Depth-first, pre-order iterator over a subtree.
pub struct NodeIter<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> NodeIter<'a> {
    pub fn new(root: &'a Node) -> Self {
        Self { stack: vec![root] }
    }
}

impl<'a> Iterator for NodeIter<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children().iter().rev());
        Some(node)
    }
}
