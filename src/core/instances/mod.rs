pub mod dense_instance;
pub mod instance;

pub use dense_instance::{DenseInstance, MISSING_LABEL};
pub use instance::Instance;
