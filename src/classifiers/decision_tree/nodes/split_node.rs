use crate::classifiers::decision_tree::instance_conditional_test::InstanceConditionalTest;
use crate::classifiers::decision_tree::nodes::found_node::FoundNode;
use crate::classifiers::decision_tree::nodes::node::Node;
use crate::classifiers::error::ClassifierError;
use crate::core::class_label::ClassCounts;
use crate::core::instances::Instance;

/// Internal node. Child `i` is reached by branch `i` of the split test and
/// there is one child per branch.
#[derive(Debug)]
pub struct SplitNode {
    split_test: Box<dyn InstanceConditionalTest>,
    observed_class_distribution: ClassCounts,
    children: Vec<Node>,
    edge_value: Option<usize>,
}

impl SplitNode {
    pub fn new(
        split_test: Box<dyn InstanceConditionalTest>,
        observed_class_distribution: ClassCounts,
        children: Vec<Node>,
        edge_value: Option<usize>,
    ) -> Self {
        debug_assert_eq!(children.len(), split_test.max_branches());
        Self {
            split_test,
            observed_class_distribution,
            children,
            edge_value,
        }
    }

    pub fn split_test(&self) -> &dyn InstanceConditionalTest {
        self.split_test.as_ref()
    }

    /// Attribute the node splits on.
    pub fn attribute_index(&self) -> Option<usize> {
        self.split_test.get_atts_test_depends_on().first().copied()
    }

    pub fn get_observed_class_distribution(&self) -> &ClassCounts {
        &self.observed_class_distribution
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn get_child(&self, index: usize) -> Option<&Node> {
        self.children.get(index)
    }

    pub fn num_children(&self) -> usize {
        self.children.len()
    }

    pub fn edge_value(&self) -> Option<usize> {
        self.edge_value
    }

    /// Walks `instance` down to a leaf.
    pub fn filter_instance_to_leaf<'a>(
        &'a self,
        instance: &dyn Instance,
    ) -> Result<FoundNode<'a>, ClassifierError> {
        let header = instance.header();
        let attribute = self.attribute_index().unwrap_or_default();

        let branch = self.split_test.branch_for_instance(instance).ok_or_else(|| {
            ClassifierError::IncompleteRecord {
                attribute: header.attribute_name(attribute),
            }
        })?;

        match self.get_child(branch) {
            Some(Node::Leaf(leaf)) => Ok(FoundNode::new(leaf, Some(self), Some(branch))),
            Some(Node::Split(split)) => split.filter_instance_to_leaf(instance),
            None => Err(ClassifierError::UnreachableChild {
                attribute: header.attribute_name(attribute),
                value: instance
                    .label_at_index(attribute)
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("#{branch}")),
            }),
        }
    }
}
