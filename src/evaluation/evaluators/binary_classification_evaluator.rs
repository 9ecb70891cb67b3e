use crate::core::class_label::ClassLabel;
use crate::core::instances::Instance;
use crate::evaluation::{Measurement, PerformanceEvaluator};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Confusion matrix of an edible/poisonous classifier, with edible as the
/// positive class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusionCounts {
    pub true_positive: usize,
    pub true_negative: usize,
    pub false_positive: usize,
    pub false_negative: usize,
}

impl ConfusionCounts {
    pub fn record(&mut self, actual: ClassLabel, predicted: ClassLabel) {
        match (predicted, actual) {
            (ClassLabel::Edible, ClassLabel::Edible) => self.true_positive += 1,
            (ClassLabel::Edible, ClassLabel::Poisonous) => self.false_positive += 1,
            (ClassLabel::Poisonous, ClassLabel::Edible) => self.false_negative += 1,
            (ClassLabel::Poisonous, ClassLabel::Poisonous) => self.true_negative += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.true_positive + self.true_negative + self.false_positive + self.false_negative
    }

    pub fn correct(&self) -> usize {
        self.true_positive + self.true_negative
    }

    pub fn incorrect(&self) -> usize {
        self.false_positive + self.false_negative
    }

    /// `count` as a percentage of all records; NaN when nothing was counted.
    pub fn percentage(&self, count: usize) -> f64 {
        ratio(count, self.total()) * 100.0
    }
}

fn ratio(num: usize, den: usize) -> f64 {
    if den == 0 {
        f64::NAN
    } else {
        num as f64 / den as f64
    }
}

/// Batch evaluator of edible/poisonous predictions.
///
/// Reports accuracy and the four confusion cells as percentages of the
/// evaluated records. Precision, recall and F1 of the edible class are added
/// when the summary is enabled.
#[derive(Debug, Clone, Default)]
pub struct BinaryClassificationEvaluator {
    counts: ConfusionCounts,
    skipped: usize,
    show_pr_summary: bool,
}

impl BinaryClassificationEvaluator {
    pub fn new(show_pr_summary: bool) -> Self {
        Self {
            show_pr_summary,
            ..Self::default()
        }
    }

    pub fn counts(&self) -> ConfusionCounts {
        self.counts
    }

    /// Records ignored because their class was missing.
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

impl PerformanceEvaluator for BinaryClassificationEvaluator {
    fn reset(&mut self) {
        *self = Self::new(self.show_pr_summary);
    }

    fn add_result(&mut self, example: &dyn Instance, prediction: ClassLabel) {
        let Some(actual) = example.class_label() else {
            self.skipped += 1;
            debug!(skipped = self.skipped, "record without class ignored");
            return;
        };
        self.counts.record(actual, prediction);
    }

    fn performance(&self) -> Vec<Measurement> {
        let c = &self.counts;
        let mut m = vec![
            Measurement::new("accuracy", ratio(c.correct(), c.total())),
            Measurement::new("true_positive_pct", c.percentage(c.true_positive)),
            Measurement::new("true_negative_pct", c.percentage(c.true_negative)),
            Measurement::new("total_true_pct", c.percentage(c.correct())),
            Measurement::new("false_positive_pct", c.percentage(c.false_positive)),
            Measurement::new("false_negative_pct", c.percentage(c.false_negative)),
            Measurement::new("total_false_pct", c.percentage(c.incorrect())),
        ];

        if self.show_pr_summary {
            let precision = ratio(c.true_positive, c.true_positive + c.false_positive);
            let recall = ratio(c.true_positive, c.true_positive + c.false_negative);
            let f1 = {
                let s = precision + recall;
                if precision.is_finite() && recall.is_finite() && s > f64::EPSILON {
                    2.0 * (precision * recall) / s
                } else {
                    f64::NAN
                }
            };
            m.push(Measurement::new("precision", precision));
            m.push(Measurement::new("recall", recall));
            m.push(Measurement::new("f1", f1));
        }
        m
    }
}
