mod datasets;
mod error;
mod learners;
mod splits;
mod tasks;

pub use error::BuildError;

pub use datasets::{build_dataset, build_stream};
pub use learners::{BuiltLearner, build_learner};
pub use tasks::{HoldoutRun, build_task};
