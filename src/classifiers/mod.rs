pub mod classifier;
pub mod decision_tree;
pub mod error;
pub mod knn;

pub use classifier::Classifier;
pub use error::ClassifierError;
