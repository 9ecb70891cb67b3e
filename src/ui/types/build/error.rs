use crate::classifiers::ClassifierError;
use crate::tasks::TaskError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("unknown attribute '{0}'")]
    UnknownAttribute(String),

    #[error("cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Classifier(#[from] ClassifierError),

    #[error(transparent)]
    Task(#[from] TaskError),
}
