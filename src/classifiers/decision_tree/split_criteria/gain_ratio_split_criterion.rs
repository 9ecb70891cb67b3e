use crate::classifiers::decision_tree::attribute_split_suggestion::AttributeSplitSuggestion;
use crate::classifiers::decision_tree::information::{
    RecordSet, average_information_gain, gain_from_counts, gain_ratio,
    split_information_from_sizes,
};
use crate::classifiers::decision_tree::options::SplitInformation;
use crate::classifiers::decision_tree::split_criteria::split_criterion::{
    SplitCriterion, pre_split_distribution,
};
use crate::classifiers::error::ClassifierError;
use crate::core::class_label::ClassCounts;
use tracing::debug;

/// Gain ratio restricted to attributes whose gain reaches a fixed threshold.
///
/// The threshold is the average information gain of the candidate attributes
/// over the full training set. It is computed once when the criterion is
/// created and reused for every split of the tree.
#[derive(Debug, Clone)]
pub struct GainRatioSplitCriterion {
    average_gain: f64,
    split_information: SplitInformation,
}

impl GainRatioSplitCriterion {
    pub fn new(
        root: &RecordSet<'_>,
        attributes: &[usize],
        split_information: SplitInformation,
    ) -> Result<Self, ClassifierError> {
        let average_gain = average_information_gain(root, attributes)?;
        debug!(average_gain, "gain-ratio threshold fixed");
        Ok(Self::with_average_gain(average_gain, split_information))
    }

    pub fn with_average_gain(average_gain: f64, split_information: SplitInformation) -> Self {
        Self {
            average_gain,
            split_information,
        }
    }

    pub fn average_gain(&self) -> f64 {
        self.average_gain
    }

    pub fn split_information(&self) -> SplitInformation {
        self.split_information
    }
}

impl SplitCriterion for GainRatioSplitCriterion {
    fn evaluate_split(
        &self,
        records: &RecordSet<'_>,
        attribute: usize,
    ) -> Result<Option<AttributeSplitSuggestion>, ClassifierError> {
        let post_split = records.value_class_counts(attribute)?;
        let gain = gain_from_counts(&pre_split_distribution(&post_split), &post_split);
        if gain < self.average_gain {
            return Ok(None);
        }

        let sizes: Vec<usize> = post_split.iter().map(ClassCounts::total).collect();
        let split_info = split_information_from_sizes(&sizes, self.split_information);
        let name = records.header().attribute_name(attribute);
        match gain_ratio(gain, split_info, &name) {
            Ok(ratio) => Ok(Some(AttributeSplitSuggestion::multiway(
                attribute, post_split, gain, ratio,
            ))),
            Err(err @ ClassifierError::UndefinedGainRatio { .. }) => {
                debug!(%err, "attribute skipped");
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    fn accepts(&self, suggestion: &AttributeSplitSuggestion) -> bool {
        suggestion.get_merit() > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::dummies::{dataset, toy_mushroom_header};

    #[test]
    fn threshold_is_the_root_average_gain() {
        let header = toy_mushroom_header();
        let ds = dataset(
            &header,
            &[
                &["a", "s", "e"],
                &["a", "y", "e"],
                &["f", "s", "p"],
                &["f", "y", "p"],
            ],
        );
        let records = RecordSet::from_dataset(&ds);
        let criterion =
            GainRatioSplitCriterion::new(&records, &[0, 1], SplitInformation::Additive).unwrap();
        assert!((criterion.average_gain() - 0.5).abs() < 1e-12);

        // cap-surface has no gain, so only odor qualifies
        assert!(criterion.evaluate_split(&records, 1).unwrap().is_none());
        let best = criterion
            .select_attribute(&records, &[1, 0])
            .unwrap()
            .unwrap();
        assert_eq!(best.attribute(), 0);
        // gain 1, additive split info 1
        assert!((best.get_merit() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn product_form_divides_by_the_running_product() {
        let header = toy_mushroom_header();
        let ds = dataset(
            &header,
            &[
                &["a", "s", "e"],
                &["a", "y", "e"],
                &["f", "s", "p"],
                &["f", "y", "p"],
            ],
        );
        let records = RecordSet::from_dataset(&ds);
        let criterion = GainRatioSplitCriterion::with_average_gain(0.0, SplitInformation::Product);
        let suggestion = criterion.evaluate_split(&records, 0).unwrap().unwrap();
        // odor sizes [2, 2, 0] -> 0.5 * 0.5 * 1
        assert!((suggestion.get_merit() - 4.0).abs() < 1e-12);
        assert!((suggestion.gain() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn zero_split_information_is_not_selectable() {
        let header = toy_mushroom_header();
        // every record has odor = a: split information 0
        let ds = dataset(&header, &[&["a", "s", "e"], &["a", "y", "p"]]);
        let records = RecordSet::from_dataset(&ds);
        let criterion = GainRatioSplitCriterion::with_average_gain(0.0, SplitInformation::Product);
        assert!(criterion.evaluate_split(&records, 0).unwrap().is_none());

        // cap-surface separates: it is chosen despite odor coming first
        let best = criterion
            .select_attribute(&records, &[0, 1])
            .unwrap()
            .unwrap();
        assert_eq!(best.attribute(), 1);
    }

    #[test]
    fn signals_none_when_nothing_qualifies() {
        let header = toy_mushroom_header();
        let ds = dataset(&header, &[&["a", "s", "e"], &["a", "s", "p"]]);
        let records = RecordSet::from_dataset(&ds);
        let criterion = GainRatioSplitCriterion::with_average_gain(0.3, SplitInformation::Product);
        assert!(
            criterion
                .select_attribute(&records, &[0, 1])
                .unwrap()
                .is_none()
        );

        // every gain is zero and reaches a zero threshold, but a zero ratio
        // is never selected
        let criterion = GainRatioSplitCriterion::with_average_gain(0.0, SplitInformation::Product);
        let pure = dataset(&header, &[&["a", "s", "e"], &["f", "y", "e"]]);
        let records = RecordSet::from_dataset(&pure);
        assert!(criterion.evaluate_split(&records, 0).unwrap().is_some());
        assert!(
            criterion
                .select_attribute(&records, &[0, 1])
                .unwrap()
                .is_none()
        );
    }
}
