use anyhow::{Context, Result, anyhow, bail};
use schemars::{Schema, schema_for};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    String,
    Path,
    Integer,
    Number,
    Boolean,
    /// String enum; holds the accepted values in declaration order.
    Choice(Vec<String>),
}

#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: String,
    pub title: String,
    pub description: Option<String>,
    pub required: bool,
    pub kind: FieldKind,
    pub default: Option<Value>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub must_exist: bool,
    pub extensions: Vec<String>,
}

// Return the whole tagged-enum schema for T
pub fn schema_for<T: schemars::JsonSchema>() -> Schema {
    schema_for!(T)
}

/// Lists the prompt-able fields under `params` for the variant tagged
/// `kind_key`. Fields marked `#[schemars(skip)]` and array/object fields are
/// left out; they are filled by subprompts or defaults.
pub fn specs_for_kind(root: &Schema, kind_key: &str) -> Result<Vec<FieldSpec>> {
    let root_obj = root.as_object().context("root schema is not an object")?;

    let alts = root_obj
        .get("oneOf")
        .or_else(|| root_obj.get("anyOf"))
        .and_then(|v| v.as_array())
        .context("missing oneOf/anyOf")?;

    let branch = alts
        .iter()
        .filter_map(|b| b.as_object())
        .filter_map(|b| b.get("properties").and_then(|v| v.as_object()))
        .find(|props| discriminant_matches(props, kind_key));
    let Some(props) = branch else {
        bail!("no branch found for type={kind_key}");
    };

    let Some(params_obj) = props
        .get("params")
        .and_then(|v| v.as_object())
        .and_then(|o| resolve_ref_obj(root_obj, o))
    else {
        return Ok(vec![]);
    };
    let Some(params_props) = params_obj.get("properties").and_then(|v| v.as_object()) else {
        return Ok(vec![]);
    };

    let required: Vec<&str> = params_obj
        .get("required")
        .and_then(|v| v.as_array())
        .map(|a| a.iter().filter_map(|v| v.as_str()).collect())
        .unwrap_or_default();

    let mut out = Vec::new();
    for (name, field_schema) in params_props {
        let outer = field_schema
            .as_object()
            .with_context(|| format!("field schema for '{name}' is not an object"))?;
        let fs_obj = resolve_ref_obj(root_obj, outer)
            .ok_or_else(|| anyhow!("failed to resolve field $ref for '{name}'"))?;

        let Some(kind) = detect_field_kind(fs_obj) else {
            continue;
        };

        // annotations may sit next to the $ref or on the referenced definition
        let lookup = |key: &str| outer.get(key).or_else(|| fs_obj.get(key));

        out.push(FieldSpec {
            name: name.clone(),
            title: lookup("title")
                .and_then(|v| v.as_str())
                .unwrap_or(name)
                .to_string(),
            description: lookup("description")
                .and_then(|v| v.as_str())
                .map(str::to_string),
            required: required.contains(&name.as_str()),
            kind,
            default: lookup("default").cloned(),
            min: lookup("minimum")
                .or_else(|| lookup("exclusiveMinimum"))
                .and_then(|v| v.as_f64()),
            max: lookup("maximum")
                .or_else(|| lookup("exclusiveMaximum"))
                .and_then(|v| v.as_f64()),
            must_exist: lookup("x-must-exist")
                .and_then(|v| v.as_bool())
                .unwrap_or(false),
            extensions: lookup("x-extensions")
                .and_then(|v| v.as_array())
                .map(|a| {
                    a.iter()
                        .filter_map(|v| v.as_str().map(str::to_string))
                        .collect()
                })
                .unwrap_or_default(),
        });
    }

    Ok(out)
}

fn discriminant_matches(props: &Map<String, Value>, kind_key: &str) -> bool {
    let Some(tobj) = props.get("type").and_then(|v| v.as_object()) else {
        return false;
    };

    if tobj.get("const").and_then(|v| v.as_str()) == Some(kind_key) {
        return true;
    }
    matches!(
        tobj.get("enum").and_then(|v| v.as_array()).map(Vec::as_slice),
        Some([only]) if only.as_str() == Some(kind_key)
    )
}

/// Resolve a local $ref like "#/$defs/TreeParameters" against the root object.
/// Returns the referenced object map, or `obj` itself when it holds no $ref.
fn resolve_ref_obj<'a>(
    root_obj: &'a Map<String, Value>,
    obj: &'a Map<String, Value>,
) -> Option<&'a Map<String, Value>> {
    match obj.get("$ref") {
        Some(Value::String(r)) => {
            let path = r.strip_prefix("#/")?;
            let mut cur: &Map<String, Value> = root_obj;
            for raw_seg in path.split('/') {
                // JSON Pointer unescape (~1 => /, ~0 => ~)
                let seg = raw_seg.replace("~1", "/").replace("~0", "~");
                cur = cur.get(&seg)?.as_object()?;
            }
            Some(cur)
        }
        _ => Some(obj),
    }
}

/// String constants of a unit-variant enum, written either as `enum` or as
/// `oneOf` branches with `const` (the form used when variants are documented).
fn string_variants(obj: &Map<String, Value>) -> Option<Vec<String>> {
    if let Some(arr) = obj.get("enum").and_then(|v| v.as_array()) {
        return arr.iter().map(|v| v.as_str().map(str::to_string)).collect();
    }
    let branches = obj.get("oneOf").and_then(|v| v.as_array())?;
    branches
        .iter()
        .map(|b| b.get("const").and_then(|v| v.as_str()).map(str::to_string))
        .collect()
}

fn detect_field_kind(obj: &Map<String, Value>) -> Option<FieldKind> {
    if let Some(values) = string_variants(obj).filter(|v| !v.is_empty()) {
        return Some(FieldKind::Choice(values));
    }

    let scalar = |s: &str| match s {
        "string" => Some(FieldKind::String),
        "integer" => Some(FieldKind::Integer),
        "number" => Some(FieldKind::Number),
        "boolean" => Some(FieldKind::Boolean),
        _ => None,
    };
    let kind = match obj.get("type") {
        Some(Value::String(s)) => scalar(s),
        // unions like ["null","integer"] for Option<T>
        Some(Value::Array(arr)) => arr.iter().filter_map(|v| v.as_str()).find_map(scalar),
        _ => None,
    }?;

    if kind == FieldKind::String && obj.get("format").and_then(|v| v.as_str()) == Some("path") {
        return Some(FieldKind::Path);
    }
    Some(kind)
}
