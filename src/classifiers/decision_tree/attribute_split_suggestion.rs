use crate::classifiers::decision_tree::instance_conditional_test::{
    InstanceConditionalTest, NominalAttributeMultiwayTest,
};
use crate::core::class_label::ClassCounts;

/// A scored candidate split.
#[derive(Debug)]
pub struct AttributeSplitSuggestion {
    attribute: usize,
    split_test: Box<dyn InstanceConditionalTest>,
    resulting_class_distribution: Vec<ClassCounts>,
    gain: f64,
    merit: f64,
}

impl AttributeSplitSuggestion {
    /// Multiway split on `attribute`, one resulting distribution per value.
    pub fn multiway(
        attribute: usize,
        resulting_class_distribution: Vec<ClassCounts>,
        gain: f64,
        merit: f64,
    ) -> Self {
        Self {
            attribute,
            split_test: Box::new(NominalAttributeMultiwayTest::new(
                attribute,
                resulting_class_distribution.len(),
            )),
            resulting_class_distribution,
            gain,
            merit,
        }
    }

    pub fn attribute(&self) -> usize {
        self.attribute
    }

    pub fn into_split_test(self) -> Box<dyn InstanceConditionalTest> {
        self.split_test
    }

    /// Information gain of the split, whatever the merit measures.
    pub fn gain(&self) -> f64 {
        self.gain
    }

    pub fn get_merit(&self) -> f64 {
        self.merit
    }

    pub fn number_of_splits(&self) -> usize {
        self.resulting_class_distribution.len()
    }

    /// Class distribution of the records sent down branch `split_index`.
    pub fn resulting_class_distribution_from_split(&self, split_index: usize) -> Option<ClassCounts> {
        self.resulting_class_distribution.get(split_index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiway_keeps_one_distribution_per_branch() {
        let s = AttributeSplitSuggestion::multiway(
            3,
            vec![ClassCounts::new(2, 0), ClassCounts::default(), ClassCounts::new(0, 1)],
            0.9,
            0.45,
        );
        assert_eq!(s.attribute(), 3);
        assert_eq!(s.number_of_splits(), 3);
        assert_eq!(s.resulting_class_distribution_from_split(0), Some(ClassCounts::new(2, 0)));
        assert!(s.resulting_class_distribution_from_split(1).unwrap().is_empty());
        assert_eq!(s.resulting_class_distribution_from_split(3), None);
        assert_eq!(s.gain(), 0.9);
        assert_eq!(s.get_merit(), 0.45);
        assert_eq!(s.into_split_test().max_branches(), 3);
    }
}
