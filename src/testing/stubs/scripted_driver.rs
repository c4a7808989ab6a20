use crate::ui::cli::drivers::PromptDriver;
use anyhow::{Context, Result, anyhow, bail};
use std::cell::RefCell;
use std::collections::VecDeque;

/// Answers prompts from a fixed script, in order.
///
/// `choose` expects an option index. Numeric prompts fall back to their
/// default on a blank answer and check the same bounds the interactive
/// driver does.
pub struct ScriptedDriver {
    answers: RefCell<VecDeque<String>>,
}

impl ScriptedDriver {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: RefCell::new(answers.into_iter().map(Into::into).collect()),
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.answers.borrow().is_empty()
    }

    fn next(&self, title: &str) -> Result<String> {
        self.answers
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| anyhow!("script ran out of answers at '{title}'"))
    }
}

fn check_bounds<T: PartialOrd + std::fmt::Display>(
    title: &str,
    x: T,
    min: Option<T>,
    max: Option<T>,
) -> Result<T> {
    if min.as_ref().is_some_and(|lo| &x < lo) || max.as_ref().is_some_and(|hi| &x > hi) {
        bail!("{x} is out of bounds for '{title}'");
    }
    Ok(x)
}

impl PromptDriver for ScriptedDriver {
    fn choose(&self, title: &str, _help: &str, options: &[String]) -> Result<usize> {
        let answer = self.next(title)?;
        let index: usize = answer
            .trim()
            .parse()
            .with_context(|| format!("'{answer}' is not an option index"))?;
        if index >= options.len() {
            bail!("option {index} out of range for '{title}'");
        }
        Ok(index)
    }

    fn ask_string(&self, title: &str, _help: &str, _default: &str) -> Result<String> {
        self.next(title)
    }

    fn ask_u64(
        &self,
        title: &str,
        _help: &str,
        default: u64,
        min: Option<u64>,
        max: Option<u64>,
    ) -> Result<u64> {
        let answer = self.next(title)?;
        let x = match answer.trim() {
            "" => default,
            s => s.parse()?,
        };
        check_bounds(title, x, min, max)
    }

    fn ask_f64(
        &self,
        title: &str,
        _help: &str,
        default: f64,
        min: Option<f64>,
        max: Option<f64>,
    ) -> Result<f64> {
        let answer = self.next(title)?;
        let x = match answer.trim() {
            "" => default,
            s => s.parse()?,
        };
        check_bounds(title, x, min, max)
    }
}
