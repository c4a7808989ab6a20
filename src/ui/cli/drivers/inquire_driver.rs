use crate::ui::cli::drivers::PromptDriver;
use anyhow::Result;
use inquire::{CustomType, Select, Text, validator::Validation};
use std::fmt::Display;

pub struct InquireDriver;

fn bounds_check<T: PartialOrd + Display>(x: &T, min: &Option<T>, max: &Option<T>) -> Validation {
    match (min, max) {
        (Some(lo), Some(hi)) if x < lo || x > hi => {
            Validation::Invalid(format!("Must be between {lo} and {hi}").into())
        }
        (Some(lo), None) if x < lo => Validation::Invalid(format!("Must be ≥ {lo}").into()),
        (None, Some(hi)) if x > hi => Validation::Invalid(format!("Must be ≤ {hi}").into()),
        _ => Validation::Valid,
    }
}

impl PromptDriver for InquireDriver {
    fn choose(&self, title: &str, help: &str, options: &[String]) -> Result<usize> {
        Ok(Select::new(title, options.to_vec())
            .with_help_message(help)
            .raw_prompt()?
            .index)
    }

    fn ask_string(&self, title: &str, help: &str, default: &str) -> Result<String> {
        Ok(Text::new(title)
            .with_initial_value(default)
            .with_help_message(help)
            .prompt()?)
    }

    fn ask_u64(
        &self,
        title: &str,
        help: &str,
        default: u64,
        min: Option<u64>,
        max: Option<u64>,
    ) -> Result<u64> {
        Ok(CustomType::<u64>::new(title)
            .with_default(default)
            .with_help_message(help)
            .with_validator(move |x: &u64| Ok(bounds_check(x, &min, &max)))
            .prompt()?)
    }

    fn ask_f64(
        &self,
        title: &str,
        help: &str,
        default: f64,
        min: Option<f64>,
        max: Option<f64>,
    ) -> Result<f64> {
        Ok(CustomType::<f64>::new(title)
            .with_default(default)
            .with_help_message(help)
            .with_validator(move |x: &f64| Ok(bounds_check(x, &min, &max)))
            .prompt()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_check_respects_each_side() {
        assert!(matches!(bounds_check(&5u64, &Some(1), &Some(10)), Validation::Valid));
        assert!(matches!(bounds_check(&0u64, &Some(1), &None), Validation::Invalid(_)));
        assert!(matches!(bounds_check(&1.5, &None, &Some(1.0)), Validation::Invalid(_)));
        assert!(matches!(bounds_check(&1.5, &None, &None), Validation::Valid));
    }
}
