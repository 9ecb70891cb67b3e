use crate::core::mushroom;
use crate::ui::types::choices::UIChoice;
use anyhow::Result;
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::PathBuf;
use strum_macros::{Display, EnumDiscriminants, EnumIter, EnumMessage, EnumString, IntoStaticStr};

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
pub struct ArffParameters {
    #[schemars(
        with = "String",
        title = "ARFF Path",
        description = "Path to a nominal-only .arff file",
        extend(
            "format" = "path",
            "x-file" = true,
            "x-must-exist" = true,
            "x-extensions" = ["arff"]
        )
    )]
    pub path: PathBuf,

    #[serde(default)]
    #[schemars(
        title = "Class Index",
        description = "Zero-based index of the edible/poisonous column",
        range(min = 0)
    )]
    pub class_index: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
pub struct UciMushroomParameters {
    #[schemars(
        with = "String",
        title = "Data Path",
        description = "Path to agaricus-lepiota.data (class letter first)",
        extend("format" = "path", "x-file" = true, "x-must-exist" = true)
    )]
    pub path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, EnumDiscriminants, PartialEq)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
#[strum_discriminants(name(DatasetKind))]
#[strum_discriminants(derive(EnumIter, EnumString, Display, IntoStaticStr, EnumMessage))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum DatasetChoice {
    #[strum_discriminants(strum(
        message = "UCI Mushroom File",
        detailed_message = "Comma-separated letter codes in the Agaricus-Lepiota layout."
    ))]
    UciMushroom(UciMushroomParameters),

    #[strum_discriminants(strum(
        message = "ARFF File",
        detailed_message = "Records read from an ARFF file with nominal attributes."
    ))]
    ArffFile(ArffParameters),
}

impl UIChoice for DatasetChoice {
    type Kind = DatasetKind;

    fn schema() -> Schema {
        schema_for!(DatasetChoice)
    }

    fn prompt_label() -> &'static str {
        "Choose a dataset:"
    }

    fn default_params(kind: Self::Kind) -> Result<Value> {
        Ok(match kind {
            DatasetKind::UciMushroom => serde_json::to_value(UciMushroomParameters {
                path: PathBuf::from("agaricus-lepiota.data"),
            })?,
            DatasetKind::ArffFile => serde_json::to_value(ArffParameters {
                path: PathBuf::from("mushroom.arff"),
                class_index: mushroom::CLASS_INDEX,
            })?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::types::choices::{FieldKind, specs_for_kind};
    use serde_json::json;

    #[test]
    fn arff_path_is_a_path_field() {
        let specs = specs_for_kind(&DatasetChoice::schema(), "arff-file").unwrap();
        let path = specs.iter().find(|s| s.name == "path").unwrap();
        assert_eq!(path.kind, FieldKind::Path);
        assert!(path.must_exist);
        assert_eq!(path.extensions, vec!["arff".to_string()]);
        assert!(specs.iter().any(|s| s.name == "class_index"));
    }

    #[test]
    fn class_index_defaults_to_zero() {
        let c: DatasetChoice = serde_json::from_value(json!({
            "type": "arff-file",
            "params": {"path": "m.arff"}
        }))
        .unwrap();
        assert_eq!(
            c,
            DatasetChoice::ArffFile(ArffParameters {
                path: PathBuf::from("m.arff"),
                class_index: 0,
            })
        );
    }
}
