use crate::ui::types::choices::UIChoice;
use anyhow::Result;
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum_macros::{Display, EnumDiscriminants, EnumIter, EnumMessage, EnumString, IntoStaticStr};

const DEFAULT_SEED: u64 = 42;
fn default_seed() -> u64 {
    DEFAULT_SEED
}

fn default_test_head() -> usize {
    500
}

fn default_train_step() -> usize {
    5
}

fn default_test_fraction() -> f64 {
    0.2
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct InterleavedParameters {
    #[serde(default = "default_test_head")]
    #[schemars(
        title = "Test Records",
        description = "Leading records held out for testing",
        default = "default_test_head"
    )]
    pub test_head: usize,

    #[serde(default = "default_test_head")]
    #[schemars(
        title = "Training Start",
        description = "Index of the first training record",
        default = "default_test_head"
    )]
    pub train_start: usize,

    #[serde(default = "default_train_step")]
    #[schemars(
        title = "Training Step",
        description = "Take every n-th record from the start index",
        range(min = 1),
        default = "default_train_step"
    )]
    pub train_step: usize,
}

impl Default for InterleavedParameters {
    fn default() -> Self {
        Self {
            test_head: default_test_head(),
            train_start: default_test_head(),
            train_step: default_train_step(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct RandomParameters {
    #[serde(default = "default_test_fraction")]
    #[schemars(
        title = "Test Fraction",
        description = "Share of records held out for testing (0.0–1.0, exclusive)",
        range(min = 0.0, max = 1.0),
        default = "default_test_fraction"
    )]
    pub test_fraction: f64,

    #[serde(default = "default_seed")]
    #[schemars(title = "Seed", description = "PRNG seed", default = "default_seed")]
    pub seed: u64,
}

impl Default for RandomParameters {
    fn default() -> Self {
        Self {
            test_fraction: default_test_fraction(),
            seed: DEFAULT_SEED,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, EnumDiscriminants, PartialEq)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
#[strum_discriminants(name(SplitKind))]
#[strum_discriminants(derive(EnumIter, EnumString, Display, IntoStaticStr, EnumMessage))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum SplitChoice {
    #[strum_discriminants(strum(
        message = "Interleaved",
        detailed_message = "Leading records for testing, every n-th later record for training."
    ))]
    Interleaved(InterleavedParameters),

    #[strum_discriminants(strum(
        message = "Random",
        detailed_message = "Seeded shuffle, then a fixed share held out."
    ))]
    Random(RandomParameters),
}

impl Default for SplitChoice {
    fn default() -> Self {
        SplitChoice::Interleaved(InterleavedParameters::default())
    }
}

impl UIChoice for SplitChoice {
    type Kind = SplitKind;

    fn schema() -> Schema {
        schema_for!(SplitChoice)
    }

    fn prompt_label() -> &'static str {
        "Choose a holdout split:"
    }

    fn default_params(kind: Self::Kind) -> Result<Value> {
        Ok(match kind {
            SplitKind::Interleaved => serde_json::to_value(InterleavedParameters::default())?,
            SplitKind::Random => serde_json::to_value(RandomParameters::default())?,
        })
    }
}
