use crate::ui::cli::drivers::PromptDriver;
use anyhow::Result;
use inquire::{Confirm, CustomType, CustomUserError, Select, Text, validator::Validation};
use std::fmt::Display;

pub struct InquireDriver;

fn range_validator<T>(
    min: Option<T>,
    max: Option<T>,
) -> impl Fn(&T) -> Result<Validation, CustomUserError> + Clone + 'static
where
    T: PartialOrd + Display + Copy + 'static,
{
    move |x: &T| {
        let msg = match (min, max) {
            (Some(lo), Some(hi)) if *x < lo || *x > hi => format!("Must be between {lo} and {hi}"),
            (Some(lo), None) if *x < lo => format!("Must be ≥ {lo}"),
            (None, Some(hi)) if *x > hi => format!("Must be ≤ {hi}"),
            _ => return Ok(Validation::Valid),
        };
        Ok(Validation::Invalid(msg.into()))
    }
}

impl PromptDriver for InquireDriver {
    fn ask_bool(&self, title: &str, help: &str, default: bool) -> Result<bool> {
        Ok(Confirm::new(title)
            .with_default(default)
            .with_help_message(help)
            .prompt()?)
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
            .with_validator(range_validator(min, max))
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
            .with_validator(range_validator(min, max))
            .prompt()?)
    }

    fn ask_select(
        &self,
        title: &str,
        help: &str,
        options: &[String],
        default: usize,
    ) -> Result<usize> {
        let mut select = Select::new(title, options.to_vec()).with_starting_cursor(default);
        if !help.is_empty() {
            select = select.with_help_message(help);
        }
        Ok(select.raw_prompt()?.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_valid<T: PartialOrd + Display + Copy + 'static>(
        min: Option<T>,
        max: Option<T>,
        x: T,
    ) -> bool {
        matches!(range_validator(min, max)(&x), Ok(Validation::Valid))
    }

    #[test]
    fn range_validator_checks_bounds() {
        assert!(is_valid(Some(1u64), Some(4), 1));
        assert!(is_valid(Some(1u64), Some(4), 4));
        assert!(!is_valid(Some(1u64), Some(4), 5));
        assert!(!is_valid(Some(1u64), None, 0));
        assert!(is_valid(None, Some(1.0), 0.5));
        assert!(!is_valid(None, Some(1.0), 1.5));
        assert!(is_valid::<f64>(None, None, -3.0));
    }
}
