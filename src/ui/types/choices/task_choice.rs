use anyhow::{Context, Result};
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::path::Path;
use strum_macros::{Display, EnumDiscriminants, EnumIter, EnumMessage, EnumString, IntoStaticStr};

fn default_train_ratio() -> f64 {
    1.0
}

fn default_min_word_count() -> u64 {
    1
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct TrainParameters {
    #[schemars(
        title = "Training file",
        description = "CSV file of label,text rows the tree is grown from",
        extend("x-path" = "input")
    )]
    pub train_path: String,

    #[serde(default)]
    #[schemars(
        title = "Test file",
        description = "CSV file of label,text rows to measure accuracy on",
        extend("x-path" = "input")
    )]
    pub test_path: Option<String>,

    #[serde(default)]
    #[schemars(
        title = "Shuffle seed",
        description = "Shuffle training rows with this seed before training"
    )]
    pub shuffle_seed: Option<u64>,

    #[serde(default = "default_train_ratio")]
    #[schemars(
        title = "Train ratio",
        description = "Share of training rows used to grow the tree; the rest is held out when there is no test file",
        range(max = 1.0),
        extend("exclusiveMinimum" = 0.0)
    )]
    pub train_ratio: f64,

    #[serde(default = "default_min_word_count")]
    #[schemars(
        title = "Minimum word count",
        description = "Ignore words seen fewer times than this in the training texts",
        range(min = 1)
    )]
    pub min_word_count: u64,

    #[serde(default)]
    #[schemars(
        title = "Save tree to",
        description = "Write the trained tree to this file",
        extend("x-path" = "output")
    )]
    pub save_tree_to: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct LoadParameters {
    #[schemars(
        title = "Tree file",
        description = "Tree previously written by a training run",
        extend("x-path" = "input")
    )]
    pub tree_path: String,

    #[schemars(
        title = "Test file",
        description = "CSV file of label,text rows to measure accuracy on",
        extend("x-path" = "input")
    )]
    pub test_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ClassifyParameters {
    #[schemars(
        title = "Tree file",
        description = "Tree previously written by a training run",
        extend("x-path" = "input")
    )]
    pub tree_path: String,

    #[schemars(title = "Text", description = "Text to label")]
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, EnumDiscriminants, PartialEq)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
#[strum_discriminants(name(TaskKind))]
#[strum_discriminants(derive(EnumIter, EnumString, Display, IntoStaticStr, EnumMessage))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum TaskChoice {
    #[strum_discriminants(strum(
        message = "Train and Evaluate",
        detailed_message = "Grow a tree from labeled texts, then measure its accuracy."
    ))]
    TrainAndEvaluate(TrainParameters),
    #[strum_discriminants(strum(
        message = "Load and Evaluate",
        detailed_message = "Measure a saved tree against labeled texts."
    ))]
    LoadAndEvaluate(LoadParameters),
    #[strum_discriminants(strum(
        message = "Classify Text",
        detailed_message = "Label a single text with a saved tree."
    ))]
    ClassifyText(ClassifyParameters),
}

impl TaskChoice {
    /// JSON Schema for the whole tagged enum.
    pub fn schema() -> Schema {
        schema_for!(TaskChoice)
    }

    pub fn prompt_label() -> &'static str {
        "Choose a task:"
    }

    pub fn prompt_help() -> &'static str {
        "↑/↓ to navigate, ↵ to select"
    }

    /// Default `params` JSON for a given kind.
    pub fn default_params(kind: TaskKind) -> Value {
        match kind {
            TaskKind::TrainAndEvaluate => json!({
                "test_path": null,
                "shuffle_seed": null,
                "train_ratio": default_train_ratio(),
                "min_word_count": default_min_word_count(),
                "save_tree_to": null,
            }),
            TaskKind::LoadAndEvaluate | TaskKind::ClassifyText => json!({}),
        }
    }

    /// Builds the typed enum from kind + params.
    pub fn from_parts(kind: TaskKind, params: Value) -> Result<Self> {
        let key: &'static str = kind.into();
        let v = json!({ "type": key, "params": params });
        serde_json::from_value(v).with_context(|| format!("invalid parameters for {key}"))
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        serde_json::from_str(s).context("task configuration is not valid JSON for a task")
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_json_str(&raw).with_context(|| format!("in {}", path.display()))
    }

    pub fn kind(&self) -> TaskKind {
        TaskKind::from(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::{EnumMessage, IntoEnumIterator};

    #[test]
    fn kinds_are_kebab_case_and_described() {
        let keys: Vec<&'static str> = TaskKind::iter().map(Into::into).collect();
        assert_eq!(
            keys,
            vec!["train-and-evaluate", "load-and-evaluate", "classify-text"]
        );
        for kind in TaskKind::iter() {
            assert!(kind.get_message().is_some());
            assert!(kind.get_detailed_message().is_some());
        }
        assert_eq!(
            TaskKind::from_str("classify-text").unwrap(),
            TaskKind::ClassifyText
        );
    }

    #[test]
    fn train_config_applies_defaults() {
        let choice = TaskChoice::from_json_str(
            r#"{"type": "train-and-evaluate", "params": {"train_path": "train.csv"}}"#,
        )
        .unwrap();
        let TaskChoice::TrainAndEvaluate(p) = choice else {
            panic!("expected a training task");
        };
        assert_eq!(p.train_path, "train.csv");
        assert_eq!(p.test_path, None);
        assert_eq!(p.shuffle_seed, None);
        assert_eq!(p.train_ratio, 1.0);
        assert_eq!(p.min_word_count, 1);
        assert_eq!(p.save_tree_to, None);
    }

    #[test]
    fn tagged_serialization_round_trips() {
        let choice = TaskChoice::ClassifyText(ClassifyParameters {
            tree_path: "model.tree".into(),
            text: "free money".into(),
        });
        let v = serde_json::to_value(&choice).unwrap();
        assert_eq!(v["type"], "classify-text");
        assert_eq!(v["params"]["text"], "free money");
        let back: TaskChoice = serde_json::from_value(v).unwrap();
        assert_eq!(back, choice);
        assert_eq!(back.kind(), TaskKind::ClassifyText);
    }

    #[test]
    fn from_parts_merges_kind_and_params() {
        let mut params = TaskChoice::default_params(TaskKind::TrainAndEvaluate);
        params["train_path"] = json!("corpus.csv");
        params["shuffle_seed"] = json!(7);
        let choice = TaskChoice::from_parts(TaskKind::TrainAndEvaluate, params).unwrap();
        let TaskChoice::TrainAndEvaluate(p) = choice else {
            panic!("expected a training task");
        };
        assert_eq!(p.shuffle_seed, Some(7));
        assert_eq!(p.train_path, "corpus.csv");
    }

    #[test]
    fn missing_required_field_is_an_error() {
        let err = TaskChoice::from_parts(TaskKind::LoadAndEvaluate, json!({"tree_path": "t"}));
        assert!(err.is_err());
    }

    #[test]
    fn unknown_type_is_an_error() {
        assert!(TaskChoice::from_json_str(r#"{"type": "fly", "params": {}}"#).is_err());
    }
}
