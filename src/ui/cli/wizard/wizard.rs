use anyhow::{Context, Result, bail};
use serde_json::{Map, Value};
use std::path::Path;
use strum::{EnumMessage, IntoEnumIterator};

use crate::ui::cli::drivers::PromptDriver;
use crate::ui::types::choices::{FieldKind, FieldSpec, PathRole, TaskChoice, TaskKind, specs_for_kind};

const DIM_ITALIC: &str = "\x1b[2m\x1b[3m";
const RESET: &str = "\x1b[0m";

fn kind_items() -> Vec<(TaskKind, String)> {
    TaskKind::iter()
        .map(|k| {
            let label = k.get_message().unwrap_or_else(|| k.into());
            let text = match k.get_detailed_message() {
                Some(desc) => format!("{label}  {DIM_ITALIC}{desc}{RESET}"),
                None => label.to_string(),
            };
            (k, text)
        })
        .collect()
}

/// Walks the user through picking a task and filling in its parameters.
pub fn prompt_task<D: PromptDriver>(driver: &D) -> Result<TaskChoice> {
    let items = kind_items();
    let texts: Vec<String> = items.iter().map(|(_, t)| t.clone()).collect();
    let picked = driver.choose(TaskChoice::prompt_label(), TaskChoice::prompt_help(), &texts)?;
    let Some(&(kind, _)) = items.get(picked) else {
        bail!("no task at index {picked}");
    };

    let key: &'static str = kind.into();
    let specs = specs_for_kind(&TaskChoice::schema(), key)?;
    let defaults = TaskChoice::default_params(kind);

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

    TaskChoice::from_parts(kind, Value::Object(params))
}

/// `None` leaves an optional field unset.
fn prompt_field<D: PromptDriver>(
    driver: &D,
    s: &FieldSpec,
    init: Option<Value>,
) -> Result<Option<Value>> {
    let help = s.description.as_deref().unwrap_or("");

    if s.kind == FieldKind::String {
        let def = init
            .as_ref()
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let answer = match s.path {
            Some(PathRole::Input) => prompt_path_until_ok(driver, s, help, &def)?,
            _ => {
                let help = optional_help(s, help);
                Some(driver.ask_string(&s.title, &help, &def)?)
            }
        };
        return Ok(answer
            .filter(|a| s.required || !a.trim().is_empty())
            .map(Value::String));
    }

    if !s.required && init.is_none() {
        let help = optional_help(s, help);
        let answer = driver.ask_string(&s.title, &help, "")?;
        let answer = answer.trim();
        if answer.is_empty() {
            return Ok(None);
        }
        return Ok(Some(match s.kind {
            FieldKind::Integer => {
                let n: u64 = answer
                    .parse()
                    .with_context(|| format!("invalid integer for {}", s.title))?;
                Value::from(n)
            }
            _ => {
                let x: f64 = answer
                    .parse()
                    .with_context(|| format!("invalid number for {}", s.title))?;
                Value::from(x)
            }
        }));
    }

    Ok(Some(match s.kind {
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
        _ => {
            let def = init.and_then(|v| v.as_f64()).unwrap_or(0.0);
            Value::from(prompt_number_until_ok(driver, s, help, def)?)
        }
    }))
}

/// Re-asks while the answer sits on an exclusive lower bound.
fn prompt_number_until_ok<D: PromptDriver>(
    driver: &D,
    s: &FieldSpec,
    help: &str,
    default: f64,
) -> Result<f64> {
    loop {
        let x = driver.ask_f64(&s.title, help, default, s.min, s.max)?;
        match s.min {
            Some(lo) if s.exclusive_min && x <= lo => eprintln!("✗ Must be > {lo}"),
            _ => return Ok(x),
        }
    }
}

fn optional_help(s: &FieldSpec, help: &str) -> String {
    if s.required {
        help.to_string()
    } else {
        format!("{help}\n(leave blank for none)")
    }
}

fn validate_input_path(input: &str) -> Result<(), String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("Path cannot be empty".into());
    }
    let p = Path::new(trimmed);
    if !p.exists() {
        return Err(format!("Path does not exist: {}", p.display()));
    }
    if !p.is_file() {
        return Err("Expected a file path, not a directory".into());
    }
    Ok(())
}

/// Asks until the answer names an existing file. Optional fields accept a
/// blank answer as `None`.
fn prompt_path_until_ok<D: PromptDriver>(
    driver: &D,
    s: &FieldSpec,
    help: &str,
    default: &str,
) -> Result<Option<String>> {
    let help = optional_help(s, help);
    loop {
        let answer = driver.ask_string(&s.title, &help, default)?;
        if !s.required && answer.trim().is_empty() {
            return Ok(None);
        }
        match validate_input_path(&answer) {
            Ok(()) => return Ok(Some(answer.trim().to_string())),
            Err(msg) => eprintln!("✗ {msg}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedDriver;
    use tempfile::NamedTempFile;

    #[test]
    fn train_wizard_fills_defaults_and_blanks() {
        let corpus = NamedTempFile::new().unwrap();
        let corpus_path = corpus.path().to_string_lossy().into_owned();
        let driver = ScriptedDriver::new([
            "0",
            "/no/such/file.csv",
            corpus_path.as_str(),
            "",
            "11",
            "0.5",
            "",
            "",
        ]);

        let choice = prompt_task(&driver).unwrap();
        let TaskChoice::TrainAndEvaluate(p) = choice else {
            panic!("expected a training task");
        };
        assert_eq!(p.train_path, corpus_path);
        assert_eq!(p.test_path, None);
        assert_eq!(p.shuffle_seed, Some(11));
        assert_eq!(p.train_ratio, 0.5);
        assert_eq!(p.min_word_count, 1);
        assert_eq!(p.save_tree_to, None);
        assert!(driver.is_exhausted());
    }

    #[test]
    fn train_ratio_of_zero_is_asked_again() {
        let corpus = NamedTempFile::new().unwrap();
        let corpus_path = corpus.path().to_string_lossy().into_owned();
        let driver = ScriptedDriver::new([
            "0",
            corpus_path.as_str(),
            "",
            "",
            "0",
            "0.25",
            "",
            "",
        ]);

        let TaskChoice::TrainAndEvaluate(p) = prompt_task(&driver).unwrap() else {
            panic!("expected a training task");
        };
        assert_eq!(p.train_ratio, 0.25);
        assert!(driver.is_exhausted());
    }

    #[test]
    fn classify_wizard_asks_for_tree_and_text() {
        let tree = NamedTempFile::new().unwrap();
        let tree_path = tree.path().to_string_lossy().into_owned();
        let driver = ScriptedDriver::new(["2", tree_path.as_str(), "free money now"]);

        let choice = prompt_task(&driver).unwrap();
        let TaskChoice::ClassifyText(p) = choice else {
            panic!("expected a classify task");
        };
        assert_eq!(p.tree_path, tree_path);
        assert_eq!(p.text, "free money now");
    }

    #[test]
    fn bad_optional_integer_is_an_error() {
        let corpus = NamedTempFile::new().unwrap();
        let corpus_path = corpus.path().to_string_lossy().into_owned();
        let driver = ScriptedDriver::new(["0", corpus_path.as_str(), "", "seven"]);
        assert!(prompt_task(&driver).is_err());
    }

    #[test]
    fn kind_items_describe_every_task() {
        let items = kind_items();
        assert_eq!(items.len(), 3);
        assert!(items[0].1.starts_with("Train and Evaluate"));
    }

    #[test]
    fn directories_are_not_input_files() {
        let dir = std::env::temp_dir();
        assert!(validate_input_path(&dir.to_string_lossy()).is_err());
        assert!(validate_input_path("  ").is_err());
    }
}
