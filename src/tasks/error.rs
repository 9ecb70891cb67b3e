use crate::classifiers::ClassifierError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("invalid holdout split: {0}")]
    InvalidSplit(String),

    #[error("failed to load records: {0}")]
    Load(#[from] std::io::Error),

    #[error(transparent)]
    Classifier(#[from] ClassifierError),
}
