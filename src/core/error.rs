use thiserror::Error;

/// Violations of the attribute registry / record contract.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("attribute '{attribute}' has an empty domain")]
    EmptyDomain { attribute: String },

    #[error("attribute '{attribute}' declares value '{value}' more than once")]
    DuplicateValue { attribute: String, value: String },

    #[error("attribute '{attribute}' is declared more than once")]
    DuplicateAttribute { attribute: String },

    #[error("class index {class_index} is out of range for {number_of_attributes} attributes")]
    ClassIndexOutOfRange {
        class_index: usize,
        number_of_attributes: usize,
    },

    #[error("class attribute '{attribute}' must have exactly the values edible and poisonous, got {values:?}")]
    NonBinaryClass {
        attribute: String,
        values: Vec<String>,
    },

    #[error("expected {expected} values per record, found {found}")]
    ArityMismatch { expected: usize, found: usize },

    #[error("value '{value}' is not in the domain of attribute '{attribute}'")]
    UnknownValue { attribute: String, value: String },

    #[error("value index {index} is out of range for attribute '{attribute}'")]
    ValueOutOfRange { attribute: String, index: usize },

    #[error("record does not share the dataset header")]
    HeaderMismatch,
}
