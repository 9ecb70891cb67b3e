use crate::classifiers::decision_tree::attribute_split_suggestion::AttributeSplitSuggestion;
use crate::classifiers::decision_tree::information::RecordSet;
use crate::classifiers::error::ClassifierError;
use crate::core::class_label::ClassCounts;
use std::fmt::Debug;

pub trait SplitCriterion: Debug + Send + Sync {
    /// Scores a split of `records` on `attribute`. `Ok(None)` means the
    /// attribute is not selectable under this criterion.
    fn evaluate_split(
        &self,
        records: &RecordSet<'_>,
        attribute: usize,
    ) -> Result<Option<AttributeSplitSuggestion>, ClassifierError>;

    /// Whether the best-scoring suggestion is good enough to split on.
    fn accepts(&self, _suggestion: &AttributeSplitSuggestion) -> bool {
        true
    }

    /// Highest-merit suggestion over `candidates`, scanned in order. Only a
    /// strictly larger merit replaces the current best, so the first of
    /// equal merits wins.
    fn select_attribute(
        &self,
        records: &RecordSet<'_>,
        candidates: &[usize],
    ) -> Result<Option<AttributeSplitSuggestion>, ClassifierError> {
        let mut best: Option<AttributeSplitSuggestion> = None;
        for &attribute in candidates {
            if let Some(suggestion) = self.evaluate_split(records, attribute)? {
                if best
                    .as_ref()
                    .is_none_or(|b| suggestion.get_merit() > b.get_merit())
                {
                    best = Some(suggestion);
                }
            }
        }
        Ok(best.filter(|b| self.accepts(b)))
    }
}

/// Distribution of the records before the split, rebuilt from the
/// per-value distributions.
pub(crate) fn pre_split_distribution(post_split: &[ClassCounts]) -> ClassCounts {
    post_split.iter().fold(ClassCounts::default(), |acc, c| {
        ClassCounts::new(acc.edible + c.edible, acc.poisonous + c.poisonous)
    })
}
