use crate::classifiers::error::ClassifierError;
use crate::core::class_label::ClassLabel;
use crate::core::dataset::Dataset;
use crate::core::instances::Instance;

/// Batch learner over a whole [`Dataset`].
pub trait Classifier {
    /// Replaces any previous model with one fitted to `dataset`.
    fn train_on_dataset(&mut self, dataset: &Dataset) -> Result<(), ClassifierError>;

    fn predict(&self, instance: &dyn Instance) -> Result<ClassLabel, ClassifierError>;

    /// One vote per class, indexed by [`ClassLabel::index`].
    fn get_votes_for_instance(&self, instance: &dyn Instance) -> Result<Vec<f64>, ClassifierError> {
        let mut votes = vec![0.0; 2];
        votes[self.predict(instance)?.index()] = 1.0;
        Ok(votes)
    }

    fn is_trained(&self) -> bool;

    /// Predictions for the training records, each made without that record,
    /// in training order. `None` when the learner has no such pass.
    fn relabel_training_set(&self) -> Result<Option<Vec<ClassLabel>>, ClassifierError> {
        Ok(None)
    }
}
