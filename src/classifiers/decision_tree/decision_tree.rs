use crate::classifiers::classifier::Classifier;
use crate::classifiers::decision_tree::builder::TreeBuilder;
use crate::classifiers::decision_tree::nodes::{FoundNode, Node, NodeIter};
use crate::classifiers::decision_tree::options::SplitPolicy;
use crate::classifiers::error::ClassifierError;
use crate::core::class_label::ClassLabel;
use crate::core::dataset::Dataset;
use crate::core::instance_header::InstanceHeader;
use crate::core::instances::Instance;
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

/// An induced decision tree. Read-only once built.
#[derive(Debug)]
pub struct DecisionTree {
    header: Arc<InstanceHeader>,
    root: Node,
    options: TreeBuilder,
    attributes: Vec<usize>,
}

impl DecisionTree {
    /// Builds a tree with the default attribute scope and split information.
    pub fn build(
        dataset: &Dataset,
        attributes: &[usize],
        policy: SplitPolicy,
    ) -> Result<DecisionTree, ClassifierError> {
        TreeBuilder::new().policy(policy).build(dataset, attributes)
    }

    pub fn builder() -> TreeBuilder {
        TreeBuilder::new()
    }

    pub(crate) fn from_parts(
        header: Arc<InstanceHeader>,
        root: Node,
        options: TreeBuilder,
        attributes: Vec<usize>,
    ) -> Self {
        Self {
            header,
            root,
            options,
            attributes,
        }
    }

    pub fn header(&self) -> &InstanceHeader {
        &self.header
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn options(&self) -> TreeBuilder {
        self.options
    }

    /// Candidate attributes the tree was built from.
    pub fn attributes(&self) -> &[usize] {
        &self.attributes
    }

    fn check_header(&self, instance: &dyn Instance) -> Result<(), ClassifierError> {
        let header = instance.header();
        if std::ptr::eq(header, self.header.as_ref()) || *header == *self.header {
            Ok(())
        } else {
            Err(ClassifierError::HeaderMismatch)
        }
    }

    pub fn filter_instance_to_leaf(
        &self,
        instance: &dyn Instance,
    ) -> Result<FoundNode<'_>, ClassifierError> {
        self.check_header(instance)?;
        self.root.filter_instance_to_leaf(instance)
    }

    /// Label of the leaf `instance` reaches.
    pub fn classify(&self, instance: &dyn Instance) -> Result<ClassLabel, ClassifierError> {
        Ok(self.filter_instance_to_leaf(instance)?.get_node().label())
    }

    pub fn iter_nodes(&self) -> NodeIter<'_> {
        NodeIter::new(&self.root)
    }

    pub fn num_nodes(&self) -> usize {
        self.iter_nodes().count()
    }

    pub fn num_leaves(&self) -> usize {
        self.iter_nodes().filter(|n| n.is_leaf()).count()
    }

    /// Number of splits on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        fn depth_of(node: &Node) -> usize {
            match node {
                Node::Leaf(_) => 0,
                Node::Split(split) => {
                    1 + split.children().iter().map(depth_of).max().unwrap_or(0)
                }
            }
        }
        depth_of(&self.root)
    }

    /// Distinct attributes used by some split, in ascending index order.
    pub fn split_attributes(&self) -> Vec<usize> {
        self.iter_nodes()
            .filter_map(|n| match n {
                Node::Split(split) => split.attribute_index(),
                Node::Leaf(_) => None,
            })
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    fn describe_subtree(&self, node: &Node, indent: usize, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match node {
            Node::Leaf(leaf) => {
                let d = leaf.get_observed_class_distribution();
                writeln!(
                    f,
                    "{:indent$}Leaf [class:{}] = <edible: {}, poisonous: {}>",
                    "",
                    leaf.label(),
                    d.edible,
                    d.poisonous
                )
            }
            Node::Split(split) => {
                for (branch, child) in split.children().iter().enumerate() {
                    let condition = split
                        .split_test()
                        .describe_condition_for_branch(branch, &self.header);
                    writeln!(f, "{:indent$}if {condition}:", "")?;
                    self.describe_subtree(child, indent + 2, f)?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for DecisionTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.describe_subtree(&self.root, 0, f)
    }
}

/// [`Classifier`] adapter that rebuilds a [`DecisionTree`] on every
/// training call.
#[derive(Debug, Default)]
pub struct DecisionTreeLearner {
    options: TreeBuilder,
    attributes: Option<Vec<usize>>,
    tree: Option<DecisionTree>,
}

impl DecisionTreeLearner {
    pub fn new(options: TreeBuilder) -> Self {
        Self {
            options,
            attributes: None,
            tree: None,
        }
    }

    /// Restricts the split candidates. By default every input attribute of
    /// the training header is a candidate.
    pub fn with_attributes(mut self, attributes: Vec<usize>) -> Self {
        self.attributes = Some(attributes);
        self
    }

    pub fn tree(&self) -> Option<&DecisionTree> {
        self.tree.as_ref()
    }
}

impl Classifier for DecisionTreeLearner {
    fn train_on_dataset(&mut self, dataset: &Dataset) -> Result<(), ClassifierError> {
        let attributes = match &self.attributes {
            Some(attributes) => attributes.clone(),
            None => dataset.header().input_attribute_indices(),
        };
        self.tree = Some(self.options.build(dataset, &attributes)?);
        Ok(())
    }

    fn predict(&self, instance: &dyn Instance) -> Result<ClassLabel, ClassifierError> {
        self.tree
            .as_ref()
            .ok_or(ClassifierError::NotTrained)?
            .classify(instance)
    }

    fn is_trained(&self) -> bool {
        self.tree.is_some()
    }
}
