mod error;
mod holdout_evaluator;

pub use error::TaskError;
pub use holdout_evaluator::{
    FULL_DATASET, HoldoutEvaluator, HoldoutSplit, LEAVE_ONE_OUT, TEST_SPLIT,
};
