use thiserror::Error;

/// Contract violations raised while training or querying a classifier.
/// None of them is transient.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ClassifierError {
    #[error("cannot train on an empty dataset")]
    EmptyDataset,

    #[error("record has no value for attribute '{attribute}'")]
    IncompleteRecord { attribute: String },

    #[error("split information of attribute '{attribute}' is zero, gain ratio is undefined")]
    UndefinedGainRatio { attribute: String },

    #[error("no child of the split on '{attribute}' matches value '{value}'")]
    UnreachableChild { attribute: String, value: String },

    #[error("attribute index {index} is not an input attribute of the header")]
    UnknownAttribute { index: usize },

    #[error("record does not share the header the model was trained on")]
    HeaderMismatch,

    #[error("model has not been trained")]
    NotTrained,

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}
