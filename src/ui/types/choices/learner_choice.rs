use crate::classifiers::decision_tree::{AttributeScope, SplitInformation};
use crate::ui::types::choices::UIChoice;
use anyhow::Result;
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum_macros::{Display, EnumDiscriminants, EnumIter, EnumMessage, EnumString, IntoStaticStr};

const DEFAULT_K: usize = 3;
fn default_k() -> usize {
    DEFAULT_K
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
pub struct Id3Parameters {
    #[serde(default)]
    #[schemars(
        title = "Attribute Scope",
        description = "per-path: a split attribute is withdrawn only below its node; shared: from the whole tree"
    )]
    pub scope: AttributeScope,

    /// Input attribute names; all non-class attributes when absent.
    #[serde(default)]
    pub attributes: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
pub struct C45Parameters {
    #[serde(default)]
    #[schemars(
        title = "Attribute Scope",
        description = "per-path: a split attribute is withdrawn only below its node; shared: from the whole tree"
    )]
    pub scope: AttributeScope,

    #[serde(default)]
    #[schemars(
        title = "Split Information",
        description = "Denominator of the gain ratio: product of entropy terms or the additive textbook form"
    )]
    pub split_information: SplitInformation,

    #[serde(default)]
    pub attributes: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct KnnParameters {
    #[serde(default = "default_k")]
    #[schemars(
        title = "Neighbours",
        description = "Number of nearest training records that vote",
        range(min = 1),
        default = "default_k"
    )]
    pub k: usize,

    #[serde(default)]
    pub attributes: Option<Vec<String>>,
}

impl Default for KnnParameters {
    fn default() -> Self {
        Self {
            k: DEFAULT_K,
            attributes: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, EnumDiscriminants, PartialEq)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
#[strum_discriminants(name(LearnerKind))]
#[strum_discriminants(derive(EnumIter, EnumString, Display, IntoStaticStr, EnumMessage))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum LearnerChoice {
    #[strum_discriminants(strum(
        message = "ID3 Decision Tree",
        detailed_message = "Splits on the attribute with the largest information gain."
    ))]
    Id3(Id3Parameters),

    #[strum_discriminants(strum(
        message = "C4.5 Decision Tree",
        detailed_message = "Gain ratio among attributes with at least average gain."
    ))]
    C45(C45Parameters),

    #[strum_discriminants(strum(
        message = "k-Nearest Neighbours",
        detailed_message = "Majority vote of the closest training records."
    ))]
    Knn(KnnParameters),
}

impl LearnerChoice {
    /// Short name used in reports and logs.
    pub fn label(&self) -> String {
        match self {
            LearnerChoice::Id3(p) => format!("id3/{}", p.scope),
            LearnerChoice::C45(p) => format!("c45/{}/{}", p.scope, p.split_information),
            LearnerChoice::Knn(p) => format!("knn/k={}", p.k),
        }
    }
}

impl UIChoice for LearnerChoice {
    type Kind = LearnerKind;

    fn schema() -> Schema {
        schema_for!(LearnerChoice)
    }

    fn prompt_label() -> &'static str {
        "Choose a learner:"
    }

    fn default_params(kind: Self::Kind) -> Result<Value> {
        Ok(match kind {
            LearnerKind::Id3 => serde_json::to_value(Id3Parameters::default())?,
            LearnerKind::C45 => serde_json::to_value(C45Parameters::default())?,
            LearnerKind::Knn => serde_json::to_value(KnnParameters::default())?,
        })
    }
}
