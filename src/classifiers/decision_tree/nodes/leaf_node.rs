use crate::core::class_label::{ClassCounts, ClassLabel};

/// Terminal node carrying the predicted label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafNode {
    label: ClassLabel,
    observed_class_distribution: ClassCounts,
    edge_value: Option<usize>,
}

impl LeafNode {
    pub fn new(
        label: ClassLabel,
        observed_class_distribution: ClassCounts,
        edge_value: Option<usize>,
    ) -> Self {
        Self {
            label,
            observed_class_distribution,
            edge_value,
        }
    }

    pub fn label(&self) -> ClassLabel {
        self.label
    }

    /// Training records that reached this leaf. Empty for leaves created for
    /// a value no training record had.
    pub fn get_observed_class_distribution(&self) -> &ClassCounts {
        &self.observed_class_distribution
    }

    pub fn edge_value(&self) -> Option<usize> {
        self.edge_value
    }

    pub fn observed_class_distribution_is_pure(&self) -> bool {
        self.observed_class_distribution.is_pure()
    }
}
