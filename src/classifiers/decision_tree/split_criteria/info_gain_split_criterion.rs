use crate::classifiers::decision_tree::attribute_split_suggestion::AttributeSplitSuggestion;
use crate::classifiers::decision_tree::information::{RecordSet, gain_from_counts};
use crate::classifiers::decision_tree::split_criteria::split_criterion::{
    SplitCriterion, pre_split_distribution,
};
use crate::classifiers::error::ClassifierError;
use crate::core::class_label::ClassCounts;

/// Merit is the raw information gain.
#[derive(Debug, Clone, Default)]
pub struct InfoGainSplitCriterion {}

impl InfoGainSplitCriterion {
    pub fn new() -> Self {
        Self {}
    }

    pub fn get_merit_of_split(&self, pre_split: &ClassCounts, post_split: &[ClassCounts]) -> f64 {
        gain_from_counts(pre_split, post_split)
    }
}

impl SplitCriterion for InfoGainSplitCriterion {
    fn evaluate_split(
        &self,
        records: &RecordSet<'_>,
        attribute: usize,
    ) -> Result<Option<AttributeSplitSuggestion>, ClassifierError> {
        let post_split = records.value_class_counts(attribute)?;
        let gain = self.get_merit_of_split(&pre_split_distribution(&post_split), &post_split);
        Ok(Some(AttributeSplitSuggestion::multiway(
            attribute, post_split, gain, gain,
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::dummies::{dataset, toy_mushroom_header};

    #[test]
    fn picks_largest_gain_and_first_on_ties() {
        let header = toy_mushroom_header();
        let separating = dataset(
            &header,
            &[
                &["a", "s", "e"],
                &["a", "y", "e"],
                &["f", "s", "p"],
                &["f", "y", "p"],
            ],
        );
        let records = RecordSet::from_dataset(&separating);
        let best = InfoGainSplitCriterion::new()
            .select_attribute(&records, &[1, 0])
            .unwrap()
            .unwrap();
        assert_eq!(best.attribute(), 0);
        assert!((best.get_merit() - 1.0).abs() < 1e-12);

        // nothing discriminates: still returns the first candidate
        let flat = dataset(&header, &[&["a", "s", "e"], &["a", "s", "p"]]);
        let records = RecordSet::from_dataset(&flat);
        let best = InfoGainSplitCriterion::new()
            .select_attribute(&records, &[1, 0])
            .unwrap()
            .unwrap();
        assert_eq!(best.attribute(), 1);
        assert_eq!(best.get_merit(), 0.0);
    }

    #[test]
    fn no_candidates_means_no_suggestion() {
        let header = toy_mushroom_header();
        let ds = dataset(&header, &[&["a", "s", "e"]]);
        let records = RecordSet::from_dataset(&ds);
        assert!(
            InfoGainSplitCriterion::new()
                .select_attribute(&records, &[])
                .unwrap()
                .is_none()
        );
    }
}
