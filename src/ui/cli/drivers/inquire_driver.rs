use crate::ui::cli::drivers::PromptDriver;
use anyhow::{Context, Result};
use inquire::{CustomType, Select, Text, validator::Validation};

pub struct InquireDriver;

fn range_message(min: Option<u64>, max: Option<u64>) -> Option<String> {
    match (min, max) {
        (Some(lo), Some(hi)) => Some(format!("Must be between {lo} and {hi}")),
        (Some(lo), None) => Some(format!("Must be ≥ {lo}")),
        (None, Some(hi)) => Some(format!("Must be ≤ {hi}")),
        (None, None) => None,
    }
}

impl PromptDriver for InquireDriver {
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
        let mut q = CustomType::<u64>::new(title)
            .with_default(default)
            .with_help_message(help);

        if let Some(msg) = range_message(min, max) {
            q = q.with_validator(move |x: &u64| {
                let ok = min.is_none_or(|lo| *x >= lo) && max.is_none_or(|hi| *x <= hi);
                if ok {
                    Ok(Validation::Valid)
                } else {
                    Ok(Validation::Invalid(msg.clone().into()))
                }
            });
        }

        Ok(q.prompt()?)
    }

    fn select(&self, title: &str, help: Option<&str>, options: &[String]) -> Result<usize> {
        let mut s = Select::new(title, options.to_vec());
        if let Some(help) = help {
            s = s.with_help_message(help);
        }
        let picked = s.prompt()?;
        options
            .iter()
            .position(|o| *o == picked)
            .context("selected option not in list")
    }
}

#[cfg(test)]
mod tests {
    use super::range_message;

    #[test]
    fn range_messages() {
        assert_eq!(range_message(Some(1), Some(5)).unwrap(), "Must be between 1 and 5");
        assert_eq!(range_message(Some(1), None).unwrap(), "Must be ≥ 1");
        assert_eq!(range_message(None, Some(9)).unwrap(), "Must be ≤ 9");
        assert!(range_message(None, None).is_none());
    }
}
