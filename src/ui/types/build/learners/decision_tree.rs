use crate::classifiers::decision_tree::{DecisionTreeLearner, SplitPolicy, TreeBuilder};
use crate::core::instance_header::InstanceHeader;
use crate::ui::types::build::BuildError;
use crate::ui::types::build::learners::resolve_attributes;
use crate::ui::types::choices::{C45Parameters, Id3Parameters};

pub(super) fn id3(p: Id3Parameters, header: &InstanceHeader) -> Result<DecisionTreeLearner, BuildError> {
    let options = TreeBuilder::new()
        .policy(SplitPolicy::MaxGain)
        .scope(p.scope);
    Ok(DecisionTreeLearner::new(options).with_attributes(resolve_attributes(p.attributes, header)?))
}

pub(super) fn c45(p: C45Parameters, header: &InstanceHeader) -> Result<DecisionTreeLearner, BuildError> {
    let options = TreeBuilder::new()
        .policy(SplitPolicy::GainRatioThreshold)
        .scope(p.scope)
        .split_information(p.split_information);
    Ok(DecisionTreeLearner::new(options).with_attributes(resolve_attributes(p.attributes, header)?))
}
