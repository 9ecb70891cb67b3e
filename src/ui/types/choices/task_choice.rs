use crate::evaluation::ReportFormat;
use crate::ui::cli::wizard::prompt_choice;
use crate::ui::types::choices::{DatasetChoice, LearnerChoice, SplitChoice, UIChoice};
use anyhow::{Context, Result};
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use std::path::{Path, PathBuf};
use strum_macros::{Display, EnumDiscriminants, EnumIter, EnumMessage, EnumString, IntoStaticStr};

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct HoldoutParameters {
    #[schemars(skip)]
    pub learners: Vec<LearnerChoice>,
    #[schemars(skip)]
    pub dataset: DatasetChoice,
    #[serde(default)]
    #[schemars(skip)]
    pub split: SplitChoice,

    #[serde(default)]
    #[schemars(
        title = "Precision/Recall Summary",
        description = "Add precision, recall and F1 of the edible class to each report"
    )]
    pub show_pr_summary: bool,

    #[serde(default)]
    #[schemars(
        with = "Option<String>",
        title = "Report Path",
        description = "Write all reports to this file",
        extend("format" = "path")
    )]
    pub report_path: Option<PathBuf>,

    #[serde(default)]
    #[schemars(title = "Report Format", description = "Format of the report file")]
    pub report_format: ReportFormat,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, EnumDiscriminants, PartialEq)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
#[strum_discriminants(name(TaskKind))]
#[strum_discriminants(derive(EnumIter, EnumString, Display, IntoStaticStr, EnumMessage))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum TaskChoice {
    #[strum_discriminants(strum(
        message = "Evaluate Holdout",
        detailed_message = "Train once, then score on the held-out records and the whole dataset."
    ))]
    EvaluateHoldout(HoldoutParameters),
}

impl TaskChoice {
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read task file {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("invalid task configuration in {}", path.display()))
    }
}

impl UIChoice for TaskChoice {
    type Kind = TaskKind;

    fn schema() -> Schema {
        schema_for!(TaskChoice)
    }

    fn prompt_label() -> &'static str {
        "Choose a task:"
    }

    fn default_params(kind: Self::Kind) -> Result<Value> {
        Ok(match kind {
            TaskKind::EvaluateHoldout => json!({
                "show_pr_summary": false,
                "report_path": null,
                "report_format": ReportFormat::default(),
            }),
        })
    }

    fn subprompts<D: crate::ui::cli::drivers::PromptDriver>(
        driver: &D,
        kind: Self::Kind,
    ) -> Result<Option<Map<String, Value>>> {
        match kind {
            TaskKind::EvaluateHoldout => {
                let dataset = prompt_choice::<DatasetChoice, _>(driver)?;
                let split = prompt_choice::<SplitChoice, _>(driver)?;

                let mut learners = vec![prompt_choice::<LearnerChoice, _>(driver)?];
                while driver.ask_bool("Add another learner?", "Evaluated on the same split", false)? {
                    learners.push(prompt_choice::<LearnerChoice, _>(driver)?);
                }

                let mut m = Map::new();
                m.insert("dataset".into(), serde_json::to_value(dataset)?);
                m.insert("split".into(), serde_json::to_value(split)?);
                m.insert("learners".into(), serde_json::to_value(learners)?);
                Ok(Some(m))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::types::choices::{FieldKind, specs_for_kind};
    use std::io::Write;
    use tempfile::NamedTempFile;

    const TASK: &str = r#"{
        "type": "evaluate-holdout",
        "params": {
            "learners": [
                {"type": "id3", "params": {}},
                {"type": "knn", "params": {"k": 5}}
            ],
            "dataset": {"type": "uci-mushroom", "params": {"path": "agaricus-lepiota.data"}}
        }
    }"#;

    #[test]
    fn reads_task_file_with_defaults() {
        let mut tf = NamedTempFile::new().unwrap();
        tf.write_all(TASK.as_bytes()).unwrap();

        let TaskChoice::EvaluateHoldout(p) = TaskChoice::from_json_file(tf.path()).unwrap();
        assert_eq!(p.learners.len(), 2);
        assert_eq!(p.learners[1].label(), "knn/k=5");
        assert_eq!(p.split, SplitChoice::default());
        assert_eq!(p.report_format, ReportFormat::Csv);
        assert!(p.report_path.is_none());
        assert!(!p.show_pr_summary);
    }

    #[test]
    fn bad_task_file_names_the_path() {
        let mut tf = NamedTempFile::new().unwrap();
        tf.write_all(b"{\"type\": \"cross-validate\"}").unwrap();
        let err = TaskChoice::from_json_file(tf.path()).unwrap_err();
        assert!(err.to_string().contains("invalid task configuration"));
    }

    #[test]
    fn nested_choices_are_not_prompted_as_fields() {
        let specs = specs_for_kind(&TaskChoice::schema(), "evaluate-holdout").unwrap();
        let names: Vec<_> = specs.iter().map(|s| s.name.as_str()).collect();
        assert!(!names.contains(&"learners"));
        assert!(!names.contains(&"dataset"));

        let format = specs.iter().find(|s| s.name == "report_format").unwrap();
        assert_eq!(
            format.kind,
            FieldKind::Choice(vec!["csv".into(), "tsv".into(), "json".into()])
        );
        let path = specs.iter().find(|s| s.name == "report_path").unwrap();
        assert_eq!(path.kind, FieldKind::Path);
        assert!(!path.required);
    }
}
