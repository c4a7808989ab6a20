use anyhow::{Context, Result, anyhow, bail};
use schemars::Schema;
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Integer,
    Number,
}

/// Whether a string field names a file the task reads or writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathRole {
    Input,
    Output,
}

#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: String,
    pub title: String,
    pub description: Option<String>,
    pub required: bool,
    pub kind: FieldKind,
    pub path: Option<PathRole>,
    pub default: Option<Value>,
    pub min: Option<f64>,
    /// `min` itself is not an accepted value.
    pub exclusive_min: bool,
    pub max: Option<f64>,
}

/// Lists the `params` fields of the tagged-enum branch whose `type` is
/// `kind_key`, in declaration order.
pub fn specs_for_kind(root: &Schema, kind_key: &str) -> Result<Vec<FieldSpec>> {
    let root_obj = root.as_object().context("root schema is not an object")?;

    let branches = root_obj
        .get("oneOf")
        .or_else(|| root_obj.get("anyOf"))
        .and_then(Value::as_array)
        .context("missing oneOf/anyOf")?;

    for branch in branches {
        let Some(props) = branch.get("properties").and_then(Value::as_object) else {
            continue;
        };
        if !discriminant_matches(props, kind_key) {
            continue;
        }

        let Some(params) = props.get("params").and_then(Value::as_object) else {
            return Ok(vec![]);
        };
        let params = resolve_ref_obj(root_obj, params)
            .ok_or_else(|| anyhow!("failed to resolve params of '{kind_key}'"))?;

        let Some(fields) = params.get("properties").and_then(Value::as_object) else {
            return Ok(vec![]);
        };
        let required: Vec<&str> = params
            .get("required")
            .and_then(Value::as_array)
            .map(|a| a.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default();

        let mut out = Vec::new();
        for (name, field) in fields {
            let field = field
                .as_object()
                .with_context(|| format!("schema of field '{name}' is not an object"))?;
            let field = resolve_ref_obj(root_obj, field)
                .ok_or_else(|| anyhow!("failed to resolve field $ref for '{name}'"))?;

            let Some(kind) = detect_field_kind(field.get("type")) else {
                continue;
            };

            out.push(FieldSpec {
                name: name.clone(),
                title: field
                    .get("title")
                    .and_then(Value::as_str)
                    .unwrap_or(name)
                    .to_string(),
                description: field
                    .get("description")
                    .and_then(Value::as_str)
                    .map(str::to_string),
                required: required.contains(&name.as_str()),
                kind,
                path: match field.get("x-path").and_then(Value::as_str) {
                    Some("input") => Some(PathRole::Input),
                    Some("output") => Some(PathRole::Output),
                    _ => None,
                },
                default: field.get("default").cloned(),
                min: field
                    .get("minimum")
                    .or_else(|| field.get("exclusiveMinimum"))
                    .and_then(Value::as_f64),
                exclusive_min: field.get("minimum").is_none()
                    && field.get("exclusiveMinimum").is_some(),
                max: field
                    .get("maximum")
                    .or_else(|| field.get("exclusiveMaximum"))
                    .and_then(Value::as_f64),
            });
        }
        return Ok(out);
    }

    bail!("no branch found for type={kind_key}");
}

fn discriminant_matches(props: &Map<String, Value>, kind_key: &str) -> bool {
    let Some(tobj) = props.get("type").and_then(Value::as_object) else {
        return false;
    };
    if tobj.get("const").and_then(Value::as_str) == Some(kind_key) {
        return true;
    }
    matches!(
        tobj.get("enum").and_then(Value::as_array).map(Vec::as_slice),
        Some([only]) if only.as_str() == Some(kind_key)
    )
}

/// Follows a local `$ref` such as `#/$defs/TrainParameters`; objects without
/// one are returned as they are.
fn resolve_ref_obj<'a>(
    root_obj: &'a Map<String, Value>,
    obj: &'a Map<String, Value>,
) -> Option<&'a Map<String, Value>> {
    let Some(Value::String(r)) = obj.get("$ref") else {
        return Some(obj);
    };
    let mut cur = root_obj;
    for raw_seg in r.strip_prefix("#/")?.split('/') {
        let seg = raw_seg.replace("~1", "/").replace("~0", "~");
        cur = cur.get(&seg)?.as_object()?;
    }
    Some(cur)
}

/// Maps a JSON Schema `type` (possibly a `[T, "null"]` union) to a field kind.
fn detect_field_kind(ty: Option<&Value>) -> Option<FieldKind> {
    let kind_of = |s: &str| match s {
        "string" => Some(FieldKind::String),
        "integer" => Some(FieldKind::Integer),
        "number" => Some(FieldKind::Number),
        _ => None,
    };
    match ty? {
        Value::String(s) => kind_of(s),
        Value::Array(arr) => arr.iter().filter_map(Value::as_str).find_map(kind_of),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::types::choices::TaskChoice;

    fn spec<'a>(specs: &'a [FieldSpec], name: &str) -> &'a FieldSpec {
        specs.iter().find(|s| s.name == name).unwrap()
    }

    #[test]
    fn train_fields_carry_metadata() {
        let specs = specs_for_kind(&TaskChoice::schema(), "train-and-evaluate").unwrap();
        let names: Vec<&str> = specs.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "train_path",
                "test_path",
                "shuffle_seed",
                "train_ratio",
                "min_word_count",
                "save_tree_to"
            ]
        );

        let train = spec(&specs, "train_path");
        assert!(train.required);
        assert_eq!(train.kind, FieldKind::String);
        assert_eq!(train.path, Some(PathRole::Input));
        assert_eq!(train.title, "Training file");

        let seed = spec(&specs, "shuffle_seed");
        assert!(!seed.required);
        assert_eq!(seed.kind, FieldKind::Integer);
        assert_eq!(seed.path, None);

        let ratio = spec(&specs, "train_ratio");
        assert_eq!(ratio.kind, FieldKind::Number);
        assert_eq!(ratio.min, Some(0.0));
        assert!(ratio.exclusive_min);
        assert_eq!(ratio.max, Some(1.0));

        let words = spec(&specs, "min_word_count");
        assert_eq!(words.min, Some(1.0));
        assert!(!words.exclusive_min);

        assert_eq!(spec(&specs, "save_tree_to").path, Some(PathRole::Output));
    }

    #[test]
    fn classify_fields_are_required_strings() {
        let specs = specs_for_kind(&TaskChoice::schema(), "classify-text").unwrap();
        assert_eq!(specs.len(), 2);
        assert!(specs.iter().all(|s| s.required && s.kind == FieldKind::String));
        assert_eq!(spec(&specs, "text").path, None);
    }

    #[test]
    fn unknown_kind_is_an_error() {
        assert!(specs_for_kind(&TaskChoice::schema(), "nope").is_err());
    }

    #[test]
    fn detects_nullable_unions() {
        let ty = serde_json::json!(["null", "integer"]);
        assert_eq!(detect_field_kind(Some(&ty)), Some(FieldKind::Integer));
        assert_eq!(detect_field_kind(Some(&serde_json::json!("boolean"))), None);
    }
}
