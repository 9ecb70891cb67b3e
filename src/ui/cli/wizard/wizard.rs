use anyhow::{Context, Result, bail};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use strum::{EnumMessage, IntoEnumIterator};

use crate::ui::cli::drivers::PromptDriver;
use crate::ui::types::choices::{FieldKind, FieldSpec, UIChoice, schema_for, specs_for_kind};

const DIM_ITALIC: &str = "\x1b[2m\x1b[3m";
const RESET: &str = "\x1b[0m";

fn kind_items<K>() -> Vec<(K, String)>
where
    K: Copy + Into<&'static str> + EnumMessage + IntoEnumIterator,
{
    K::iter()
        .map(|k| {
            let label = k.get_message().unwrap_or_else(|| k.into());
            let desc = k.get_detailed_message().unwrap_or("");
            let text = if desc.is_empty() {
                label.to_string()
            } else {
                format!("{label}  {DIM_ITALIC}{desc}{RESET}")
            };
            (k, text)
        })
        .collect()
}

/// Asks for a variant of `C`, then for each of its parameters, then for any
/// nested choices the variant needs.
pub fn prompt_choice<C: UIChoice, D: PromptDriver>(driver: &D) -> Result<C> {
    let items = kind_items::<C::Kind>();
    let texts: Vec<String> = items.iter().map(|(_, t)| t.clone()).collect();

    let picked = driver.ask_select(C::prompt_label(), C::prompt_help().unwrap_or(""), &texts, 0)?;
    let Some(&(choice_kind, _)) = items.get(picked) else {
        bail!("selection {picked} out of range for {}", C::prompt_label());
    };

    let key: &'static str = choice_kind.into();
    let schema = schema_for::<C>();
    let specs = specs_for_kind(&schema, key)?;
    let defaults = C::default_params(choice_kind)?;

    let mut params = Map::new();
    for s in specs {
        let init = s
            .default
            .clone()
            .or_else(|| defaults.get(&s.name).cloned())
            .filter(|v| !v.is_null());
        if let Some(val) = prompt_field(driver, &s, init)? {
            params.insert(s.name.clone(), val);
        }
    }

    if let Some(extra) = C::subprompts(driver, choice_kind)? {
        params.extend(extra);
    }
    C::from_parts(choice_kind, Value::Object(params))
}

/// `None` leaves the field out so serde applies its default.
fn prompt_field<D: PromptDriver>(
    driver: &D,
    s: &FieldSpec,
    init: Option<Value>,
) -> Result<Option<Value>> {
    let help = s.description.as_deref().unwrap_or("");

    let is_optional_numeric = !s.required
        && matches!(s.kind, FieldKind::Integer | FieldKind::Number)
        && init.is_none();
    if is_optional_numeric {
        let answer = driver.ask_string(&s.title, &format!("{help}\n(leave blank for none)"), "")?;
        let answer = answer.trim();
        if answer.is_empty() {
            return Ok(None);
        }
        let val = if s.kind == FieldKind::Integer {
            let n: u64 = answer
                .parse()
                .with_context(|| format!("invalid integer for {}", s.title))?;
            Value::from(n)
        } else {
            let x: f64 = answer
                .parse()
                .with_context(|| format!("invalid number for {}", s.title))?;
            Value::from(x)
        };
        return Ok(Some(val));
    }

    let val = match &s.kind {
        FieldKind::Boolean => {
            let def = init.and_then(|v| v.as_bool()).unwrap_or(false);
            Value::Bool(driver.ask_bool(&s.title, help, def)?)
        }
        FieldKind::String => {
            let def = init
                .and_then(|v| v.as_str().map(str::to_string))
                .unwrap_or_default();
            Value::String(driver.ask_string(&s.title, help, &def)?)
        }
        FieldKind::Path => {
            let def = init
                .and_then(|v| v.as_str().map(str::to_string))
                .unwrap_or_default();
            match prompt_path_until_ok(driver, s, help, &def)? {
                Some(pb) => Value::String(pb.to_string_lossy().into_owned()),
                None => return Ok(None),
            }
        }
        FieldKind::Integer => {
            let def = init.and_then(|v| v.as_u64()).unwrap_or(0);
            Value::from(driver.ask_u64(
                &s.title,
                help,
                def,
                s.min.map(|x| x as u64),
                s.max.map(|x| x as u64),
            )?)
        }
        FieldKind::Number => {
            let def = init.and_then(|v| v.as_f64()).unwrap_or(0.0);
            Value::from(driver.ask_f64(&s.title, help, def, s.min, s.max)?)
        }
        FieldKind::Choice(values) => {
            let def = init
                .as_ref()
                .and_then(|v| v.as_str())
                .and_then(|d| values.iter().position(|v| v == d))
                .unwrap_or(0);
            let picked = driver.ask_select(&s.title, help, values, def)?;
            let Some(value) = values.get(picked) else {
                bail!("selection {picked} out of range for {}", s.title);
            };
            Value::String(value.clone())
        }
    };
    Ok(Some(val))
}

fn validate_path_str(input: &str, must_exist: bool, allowed_exts: &[String]) -> Result<(), String> {
    let p = Path::new(input);

    if must_exist && !p.exists() {
        return Err(format!("Path does not exist: {}", p.display()));
    }
    if must_exist && !p.is_file() {
        return Err("Expected a file path, not a directory".into());
    }
    if !allowed_exts.is_empty() {
        match p.extension().and_then(|e| e.to_str()) {
            Some(ext) if allowed_exts.iter().any(|e| e.eq_ignore_ascii_case(ext)) => {}
            _ => return Err(format!("Expected a .{} file", allowed_exts.join(" / ."))),
        }
    }
    Ok(())
}

/// Re-asks until the answer is acceptable. A blank answer is accepted only
/// for optional fields and yields `None`.
fn prompt_path_until_ok<D: PromptDriver>(
    driver: &D,
    s: &FieldSpec,
    help: &str,
    default: &str,
) -> Result<Option<PathBuf>> {
    loop {
        let answer = driver.ask_string(&s.title, help, default)?;
        let trimmed = answer.trim();
        if trimmed.is_empty() {
            if !s.required {
                return Ok(None);
            }
            eprintln!("✗ Path cannot be empty");
            continue;
        }
        match validate_path_str(trimmed, s.must_exist, &s.extensions) {
            Ok(()) => return Ok(Some(PathBuf::from(trimmed))),
            Err(msg) => eprintln!("✗ {msg}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::stubs::{Answer, ScriptedDriver};
    use crate::ui::types::choices::{
        DatasetChoice, Id3Parameters, KnnParameters, LearnerChoice, SplitChoice, TaskChoice,
        UciMushroomParameters,
    };
    use crate::classifiers::decision_tree::AttributeScope;
    use crate::evaluation::ReportFormat;
    use tempfile::NamedTempFile;

    #[test]
    fn learner_with_choice_field() {
        // id3 is the first kind, scope offers per-path then shared
        let driver = ScriptedDriver::new([Answer::Select(0), Answer::Select(1)]);
        let c: LearnerChoice = prompt_choice(&driver).unwrap();
        assert_eq!(
            c,
            LearnerChoice::Id3(Id3Parameters {
                scope: AttributeScope::Shared,
                attributes: None,
            })
        );
        assert!(driver.is_exhausted());
    }

    #[test]
    fn knn_integer_field() {
        let driver = ScriptedDriver::new([Answer::Select(2), Answer::U64(7)]);
        let c: LearnerChoice = prompt_choice(&driver).unwrap();
        assert_eq!(
            c,
            LearnerChoice::Knn(KnnParameters {
                k: 7,
                attributes: None,
            })
        );
    }

    #[test]
    fn path_is_asked_again_until_it_exists() {
        let data = NamedTempFile::new().unwrap();
        let good = data.path().to_string_lossy().into_owned();
        let driver = ScriptedDriver::new([
            Answer::Select(0),
            Answer::Text("/definitely/not/here.data".into()),
            Answer::Text(good.clone()),
        ]);
        let c: DatasetChoice = prompt_choice(&driver).unwrap();
        assert_eq!(
            c,
            DatasetChoice::UciMushroom(UciMushroomParameters {
                path: PathBuf::from(good),
            })
        );
    }

    #[test]
    fn full_task_walkthrough() {
        let data = NamedTempFile::new().unwrap();
        let path = data.path().to_string_lossy().into_owned();
        let driver = ScriptedDriver::new([
            // task kind
            Answer::Select(0),
            // fields in declaration order: show_pr_summary, report_path, report_format
            Answer::Bool(true),
            Answer::Text(String::new()),
            Answer::Select(2),
            // dataset: uci-mushroom with a path
            Answer::Select(0),
            Answer::Text(path),
            // split: interleaved with defaults
            Answer::Select(0),
            Answer::U64(500),
            Answer::U64(500),
            Answer::U64(5),
            // first learner c45 with defaults, then a second one
            Answer::Select(1),
            Answer::Select(0),
            Answer::Select(0),
            Answer::Bool(true),
            Answer::Select(2),
            Answer::U64(3),
            Answer::Bool(false),
        ]);

        let TaskChoice::EvaluateHoldout(p) = prompt_choice::<TaskChoice, _>(&driver).unwrap();
        assert_eq!(p.report_format, ReportFormat::Json);
        assert!(p.report_path.is_none());
        assert!(p.show_pr_summary);
        assert_eq!(p.split, SplitChoice::default());
        let labels: Vec<_> = p.learners.iter().map(|l| l.label()).collect();
        assert_eq!(labels, vec!["c45/per-path/product", "knn/k=3"]);
        assert!(driver.is_exhausted());
    }

    #[test]
    fn path_validation_messages() {
        let exts = vec!["arff".to_string()];
        assert!(validate_path_str("/no/such/file.arff", true, &exts).is_err());
        assert!(validate_path_str("out.csv", false, &[]).is_ok());
        let err = validate_path_str("data.csv", false, &exts).unwrap_err();
        assert_eq!(err, "Expected a .arff file");
    }
}
