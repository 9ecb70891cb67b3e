use crate::classifiers::decision_tree::information::RecordSet;
use crate::classifiers::decision_tree::split_criteria::{
    GainRatioSplitCriterion, InfoGainSplitCriterion, SplitCriterion,
};
use crate::classifiers::error::ClassifierError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Attribute-selection policy used at every split decision.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum SplitPolicy {
    /// ID3: largest information gain. Always selects an attribute.
    #[default]
    MaxGain,
    /// C4.5-style: largest gain ratio among attributes whose gain reaches the
    /// average gain of the root split. May select nothing.
    GainRatioThreshold,
}

impl SplitPolicy {
    /// Instantiates the criterion for one tree. `root` and `attributes` are
    /// the full training set and candidate list; the gain-ratio threshold is
    /// computed from them once here.
    pub fn criterion(
        self,
        root: &RecordSet<'_>,
        attributes: &[usize],
        split_information: SplitInformation,
    ) -> Result<Box<dyn SplitCriterion>, ClassifierError> {
        Ok(match self {
            SplitPolicy::MaxGain => Box::new(InfoGainSplitCriterion::new()),
            SplitPolicy::GainRatioThreshold => Box::new(GainRatioSplitCriterion::new(
                root,
                attributes,
                split_information,
            )?),
        })
    }
}

/// How an attribute chosen for a split is withdrawn from later decisions.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum AttributeScope {
    /// Only the descendants of the split lose the attribute.
    #[default]
    PerPath,
    /// One candidate list for the whole tree: the first split on an attribute
    /// removes it from every branch built afterwards, siblings included.
    Shared,
}

/// Composition of the per-value split-information terms.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum SplitInformation {
    /// Running product from 1; empty partitions contribute a factor of 1.
    #[default]
    Product,
    /// Sum of `-p log2 p`; empty partitions contribute 0.
    Additive,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn kebab_case_names() {
        assert_eq!(SplitPolicy::GainRatioThreshold.to_string(), "gain-ratio-threshold");
        assert_eq!(SplitPolicy::from_str("max-gain").unwrap(), SplitPolicy::MaxGain);
        assert_eq!(
            serde_json::to_string(&AttributeScope::PerPath).unwrap(),
            "\"per-path\""
        );
        assert_eq!(
            serde_json::from_str::<SplitInformation>("\"additive\"").unwrap(),
            SplitInformation::Additive
        );
    }
}
