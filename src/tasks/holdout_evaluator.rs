use crate::classifiers::Classifier;
use crate::core::class_label::ClassLabel;
use crate::core::dataset::Dataset;
use crate::core::instances::DenseInstance;
use crate::evaluation::{BinaryClassificationEvaluator, EvaluationReport, PerformanceEvaluator};
use crate::streams::Stream;
use crate::tasks::TaskError;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::{debug, info};

pub const TEST_SPLIT: &str = "test split";
pub const FULL_DATASET: &str = "full dataset";
pub const LEAVE_ONE_OUT: &str = "leave-one-out";

/// How records are divided into a training part and a held-out test part.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HoldoutSplit {
    /// The first `test_head` records are the test set; every `train_step`-th
    /// record starting at `train_start` is used for training.
    Interleaved {
        test_head: usize,
        train_start: usize,
        train_step: usize,
    },
    /// A seeded shuffle; the first `test_fraction` of the shuffled records
    /// are the test set, the rest are used for training.
    Random { test_fraction: f64, seed: u64 },
}

impl Default for HoldoutSplit {
    fn default() -> Self {
        HoldoutSplit::Interleaved {
            test_head: 500,
            train_start: 500,
            train_step: 5,
        }
    }
}

impl HoldoutSplit {
    pub fn validate(&self) -> Result<(), TaskError> {
        match *self {
            HoldoutSplit::Interleaved { train_step, .. } if train_step == 0 => Err(
                TaskError::InvalidSplit("train_step must be > 0".into()),
            ),
            HoldoutSplit::Random { test_fraction, .. }
                if !(test_fraction > 0.0 && test_fraction < 1.0) =>
            {
                Err(TaskError::InvalidSplit(format!(
                    "test_fraction must be in (0, 1), got {test_fraction}"
                )))
            }
            _ => Ok(()),
        }
    }

    /// Returns `(train, test)` record indices for a dataset of `len` records.
    /// Indices past `len` are dropped, so the interleaved split may overlap or
    /// leave parts of short datasets unused.
    pub fn indices(&self, len: usize) -> Result<(Vec<usize>, Vec<usize>), TaskError> {
        self.validate()?;
        match *self {
            HoldoutSplit::Interleaved {
                test_head,
                train_start,
                train_step,
            } => {
                let test = (0..test_head.min(len)).collect();
                let train = (train_start..len).step_by(train_step).collect();
                Ok((train, test))
            }
            HoldoutSplit::Random {
                test_fraction,
                seed,
            } => {
                let mut order: Vec<usize> = (0..len).collect();
                let mut rng = StdRng::seed_from_u64(seed);
                order.shuffle(&mut rng);
                let test_len = ((len as f64) * test_fraction).round() as usize;
                let train = order.split_off(test_len.min(len));
                Ok((train, order))
            }
        }
    }
}

/// Trains a learner once on the training part of a dataset, then scores it
/// on the held-out test part and on the whole dataset. Learners that can
/// relabel their own training records get a third, leave-one-out report.
pub struct HoldoutEvaluator {
    learner: Box<dyn Classifier>,
    learner_name: String,
    dataset: Dataset,
    split: HoldoutSplit,
    show_pr_summary: bool,
}

impl HoldoutEvaluator {
    pub fn new(
        learner: Box<dyn Classifier>,
        learner_name: impl Into<String>,
        dataset: Dataset,
        split: HoldoutSplit,
    ) -> Result<Self, TaskError> {
        split.validate()?;
        Ok(Self {
            learner,
            learner_name: learner_name.into(),
            dataset,
            split,
            show_pr_summary: false,
        })
    }

    /// Drains `stream` into memory before building the evaluator.
    pub fn from_stream(
        learner: Box<dyn Classifier>,
        learner_name: impl Into<String>,
        stream: &mut dyn Stream,
        split: HoldoutSplit,
    ) -> Result<Self, TaskError> {
        let dataset = Dataset::from_stream(stream)?;
        info!(records = dataset.len(), "dataset loaded");
        Self::new(learner, learner_name, dataset, split)
    }

    pub fn with_pr_summary(mut self, show: bool) -> Self {
        self.show_pr_summary = show;
        self
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn learner(&self) -> &dyn Classifier {
        self.learner.as_ref()
    }

    pub fn run(&mut self) -> Result<Vec<EvaluationReport>, TaskError> {
        let (train_idx, test_idx) = self.split.indices(self.dataset.len())?;
        let train = self.dataset.select(train_idx);
        let test = self.dataset.select(test_idx);
        info!(
            learner = %self.learner_name,
            train = train.len(),
            test = test.len(),
            "training set created"
        );

        self.learner.train_on_dataset(&train)?;
        info!(learner = %self.learner_name, "learner trained");

        let mut reports = vec![
            self.evaluate(TEST_SPLIT, &test)?,
            self.evaluate(FULL_DATASET, &self.dataset)?,
        ];
        if let Some(relabels) = self.learner.relabel_training_set()? {
            reports.push(self.report(LEAVE_ONE_OUT, train.iter().zip(relabels)));
        }
        Ok(reports)
    }

    fn evaluate(&self, name: &str, records: &Dataset) -> Result<EvaluationReport, TaskError> {
        let predictions = records
            .iter()
            .map(|instance| self.learner.predict(instance))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(self.report(name, records.iter().zip(predictions)))
    }

    fn report<'a>(
        &self,
        name: &str,
        results: impl Iterator<Item = (&'a DenseInstance, ClassLabel)>,
    ) -> EvaluationReport {
        let mut evaluator = BinaryClassificationEvaluator::new(self.show_pr_summary);
        for (instance, prediction) in results {
            evaluator.add_result(instance, prediction);
        }
        if evaluator.skipped() > 0 {
            debug!(set = name, skipped = evaluator.skipped(), "records without class");
        }
        let report = EvaluationReport::from_evaluator(name, self.learner_name.as_str(), &evaluator);
        info!(
            set = name,
            evaluated = report.evaluated,
            accuracy = report.accuracy(),
            "evaluation finished"
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifiers::decision_tree::{DecisionTreeLearner, TreeBuilder};
    use crate::classifiers::{ClassifierError, knn::KNearestNeighbors};
    use crate::testing::dummies::{dataset, toy_mushroom_header};
    use crate::testing::stubs::VecStream;

    // odor decides the class: foul is poisonous, everything else edible.
    fn rows(n: usize) -> Vec<Vec<&'static str>> {
        (0..n)
            .map(|i| match i % 3 {
                0 => vec!["a", "s", "e"],
                1 => vec!["f", "y", "p"],
                _ => vec!["n", "s", "e"],
            })
            .collect()
    }

    fn toy(n: usize) -> Dataset {
        let header = toy_mushroom_header();
        let rows = rows(n);
        let refs: Vec<&[&str]> = rows.iter().map(|r| r.as_slice()).collect();
        dataset(&header, &refs)
    }

    #[test]
    fn interleaved_indices_match_head_and_stride() {
        let split = HoldoutSplit::Interleaved {
            test_head: 3,
            train_start: 3,
            train_step: 2,
        };
        let (train, test) = split.indices(10).unwrap();
        assert_eq!(test, vec![0, 1, 2]);
        assert_eq!(train, vec![3, 5, 7, 9]);

        let (train, test) = split.indices(2).unwrap();
        assert_eq!(test, vec![0, 1]);
        assert!(train.is_empty());
    }

    #[test]
    fn random_split_is_seeded_and_disjoint() {
        let split = HoldoutSplit::Random {
            test_fraction: 0.25,
            seed: 7,
        };
        let (train_a, test_a) = split.indices(20).unwrap();
        let (train_b, test_b) = split.indices(20).unwrap();
        assert_eq!((train_a.clone(), test_a.clone()), (train_b, test_b));
        assert_eq!(test_a.len(), 5);
        assert_eq!(train_a.len(), 15);

        let mut all: Vec<usize> = train_a.into_iter().chain(test_a).collect();
        all.sort_unstable();
        assert_eq!(all, (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn invalid_splits_are_rejected() {
        let bad_step = HoldoutSplit::Interleaved {
            test_head: 1,
            train_start: 1,
            train_step: 0,
        };
        assert!(matches!(bad_step.validate(), Err(TaskError::InvalidSplit(_))));

        for fraction in [0.0, 1.0, -0.5, f64::NAN] {
            let split = HoldoutSplit::Random {
                test_fraction: fraction,
                seed: 0,
            };
            assert!(matches!(split.indices(10), Err(TaskError::InvalidSplit(_))));
        }
    }

    #[test]
    fn tree_is_perfect_on_separable_records() {
        let split = HoldoutSplit::Interleaved {
            test_head: 6,
            train_start: 6,
            train_step: 1,
        };
        let learner = DecisionTreeLearner::new(TreeBuilder::new());
        let mut task = HoldoutEvaluator::new(Box::new(learner), "id3", toy(30), split).unwrap();
        let reports = task.run().unwrap();

        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].name, TEST_SPLIT);
        assert_eq!(reports[0].evaluated, 6);
        assert_eq!(reports[1].name, FULL_DATASET);
        assert_eq!(reports[1].evaluated, 30);
        for r in &reports {
            assert_eq!(r.accuracy(), 1.0);
            assert_eq!(r.counts.true_positive + r.counts.true_negative, r.evaluated);
        }
        assert!(task.learner().is_trained());
    }

    #[test]
    fn knn_runs_from_stream() {
        let header = toy_mushroom_header();
        let rows = rows(12);
        let refs: Vec<&[&str]> = rows.iter().map(|r| r.as_slice()).collect();
        let mut stream = VecStream::from_rows(header, &refs);
        let split = HoldoutSplit::Random {
            test_fraction: 0.5,
            seed: 1,
        };
        let learner = KNearestNeighbors::new(1).unwrap();
        let mut task = HoldoutEvaluator::from_stream(Box::new(learner), "knn", &mut stream, split)
            .unwrap()
            .with_pr_summary(true);
        assert_eq!(task.dataset().len(), 12);

        let reports = task.run().unwrap();
        assert_eq!(reports[0].evaluated, 6);
        assert_eq!(reports[1].evaluated, 12);
        assert!(reports[1].measurement("f1").is_some());
        assert_eq!(reports.len(), 3);
        assert_eq!(reports[2].name, LEAVE_ONE_OUT);
        assert_eq!(reports[2].evaluated, 6);
        assert!(task.learner().is_trained());
    }

    #[test]
    fn leave_one_out_report_covers_the_training_part() {
        let split = HoldoutSplit::Interleaved {
            test_head: 3,
            train_start: 3,
            train_step: 1,
        };
        let learner = KNearestNeighbors::new(1).unwrap();
        let mut task = HoldoutEvaluator::new(Box::new(learner), "knn", toy(12), split).unwrap();
        let reports = task.run().unwrap();

        // each training record has two identical copies left in
        let loo = &reports[2];
        assert_eq!(loo.name, LEAVE_ONE_OUT);
        assert_eq!(loo.evaluated, 9);
        assert_eq!(loo.counts.true_positive, 6);
        assert_eq!(loo.counts.true_negative, 3);
        assert_eq!(loo.accuracy(), 1.0);
    }

    #[test]
    fn empty_training_split_fails() {
        let split = HoldoutSplit::Interleaved {
            test_head: 5,
            train_start: 50,
            train_step: 5,
        };
        let learner = DecisionTreeLearner::new(TreeBuilder::new());
        let mut task = HoldoutEvaluator::new(Box::new(learner), "id3", toy(9), split).unwrap();
        assert!(matches!(
            task.run(),
            Err(TaskError::Classifier(ClassifierError::EmptyDataset))
        ));
    }
}
