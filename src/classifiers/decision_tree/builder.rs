use crate::classifiers::decision_tree::DecisionTree;
use crate::classifiers::decision_tree::information::RecordSet;
use crate::classifiers::decision_tree::nodes::{LeafNode, Node, SplitNode};
use crate::classifiers::decision_tree::options::{AttributeScope, SplitInformation, SplitPolicy};
use crate::classifiers::decision_tree::split_criteria::SplitCriterion;
use crate::classifiers::error::ClassifierError;
use crate::core::class_label::ClassCounts;
use crate::core::dataset::Dataset;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Recursive partitioning with a configurable split policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeBuilder {
    policy: SplitPolicy,
    scope: AttributeScope,
    split_information: SplitInformation,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn policy(mut self, policy: SplitPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn scope(mut self, scope: AttributeScope) -> Self {
        self.scope = scope;
        self
    }

    pub fn split_information(mut self, split_information: SplitInformation) -> Self {
        self.split_information = split_information;
        self
    }

    pub fn get_policy(&self) -> SplitPolicy {
        self.policy
    }

    pub fn get_scope(&self) -> AttributeScope {
        self.scope
    }

    pub fn get_split_information(&self) -> SplitInformation {
        self.split_information
    }

    /// Induces a tree over `dataset` using the input attributes listed in
    /// `attributes` as split candidates, in that order.
    #[instrument(
        level = "info",
        skip_all,
        fields(policy = %self.policy, scope = %self.scope, records = dataset.len())
    )]
    pub fn build(
        &self,
        dataset: &Dataset,
        attributes: &[usize],
    ) -> Result<DecisionTree, ClassifierError> {
        if dataset.is_empty() {
            return Err(ClassifierError::EmptyDataset);
        }
        let header = dataset.header();
        if let Some(&index) = attributes.iter().find(|&&i| !header.is_input_attribute(i)) {
            return Err(ClassifierError::UnknownAttribute { index });
        }
        let mut candidates: Vec<usize> = Vec::with_capacity(attributes.len());
        for &attribute in attributes {
            if candidates.contains(&attribute) {
                return Err(ClassifierError::InvalidParameter(format!(
                    "attribute '{}' listed more than once",
                    header.attribute_name(attribute)
                )));
            }
            candidates.push(attribute);
        }

        let records = RecordSet::from_dataset(dataset);
        let criterion = self
            .policy
            .criterion(&records, &candidates, self.split_information)?;

        let counts = records.class_counts()?;
        let root = self.grow(criterion.as_ref(), &records, counts, &mut candidates, None, 0)?;
        let tree = DecisionTree::from_parts(Arc::clone(header), root, *self, attributes.to_vec());
        info!(
            nodes = tree.num_nodes(),
            leaves = tree.num_leaves(),
            depth = tree.depth(),
            "tree induced"
        );
        Ok(tree)
    }

    fn grow(
        &self,
        criterion: &dyn SplitCriterion,
        records: &RecordSet<'_>,
        counts: ClassCounts,
        candidates: &mut Vec<usize>,
        edge_value: Option<usize>,
        depth: usize,
    ) -> Result<Node, ClassifierError> {
        if counts.is_pure() {
            return Ok(Node::Leaf(LeafNode::new(counts.majority(), counts, edge_value)));
        }
        if candidates.is_empty() {
            debug!(depth, records = records.len(), "no candidates left");
            return Ok(Node::Leaf(LeafNode::new(counts.majority(), counts, edge_value)));
        }

        let Some(suggestion) = criterion.select_attribute(records, candidates)? else {
            debug!(depth, records = records.len(), "no attribute qualifies");
            return Ok(Node::Leaf(LeafNode::new(counts.majority(), counts, edge_value)));
        };

        let attribute = suggestion.attribute();
        debug!(
            depth,
            attribute = %records.header().attribute_name(attribute),
            gain = suggestion.gain(),
            merit = suggestion.get_merit(),
            records = records.len(),
            "split"
        );

        let partitions = records.partition(attribute)?;
        let mut path_candidates;
        let remaining: &mut Vec<usize> = match self.scope {
            AttributeScope::Shared => {
                candidates.retain(|&a| a != attribute);
                candidates
            }
            AttributeScope::PerPath => {
                path_candidates = candidates
                    .iter()
                    .copied()
                    .filter(|&a| a != attribute)
                    .collect::<Vec<_>>();
                &mut path_candidates
            }
        };

        // child distributions were tallied while scoring the split
        let mut children = Vec::with_capacity(suggestion.number_of_splits());
        for (value, partition) in partitions.iter().enumerate() {
            let child_counts = suggestion
                .resulting_class_distribution_from_split(value)
                .unwrap_or_default();
            let child = if child_counts.is_empty() {
                Node::Leaf(LeafNode::new(counts.majority(), child_counts, Some(value)))
            } else {
                let mut own;
                let child_candidates: &mut Vec<usize> = match self.scope {
                    AttributeScope::Shared => &mut *remaining,
                    AttributeScope::PerPath => {
                        own = remaining.clone();
                        &mut own
                    }
                };
                self.grow(
                    criterion,
                    partition,
                    child_counts,
                    child_candidates,
                    Some(value),
                    depth + 1,
                )?
            };
            children.push(child);
        }

        Ok(Node::Split(SplitNode::new(
            suggestion.into_split_test(),
            counts,
            children,
            edge_value,
        )))
    }
}
