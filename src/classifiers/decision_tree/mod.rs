pub mod attribute_split_suggestion;
pub mod builder;
pub mod decision_tree;
pub mod information;
pub mod instance_conditional_test;
pub mod nodes;
pub mod options;
pub mod split_criteria;

pub use builder::TreeBuilder;
pub use decision_tree::{DecisionTree, DecisionTreeLearner};
pub use options::{AttributeScope, SplitInformation, SplitPolicy};
