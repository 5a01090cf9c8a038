use std::io::ErrorKind;

use dialoguer::{Error as DialoguerError, Input, Select};

use crate::domain::{AppError, Variant};
use crate::ports::FormInput;

/// Terminal form backed by dialoguer prompts.
#[derive(Debug, Clone, Copy, Default)]
pub struct DialoguerForm;

impl DialoguerForm {
    pub fn new() -> Self {
        Self
    }
}

fn cancelled_or<T>(result: Result<T, DialoguerError>, what: &str) -> Result<Option<T>, AppError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::Prompt(format!("Failed to read {}: {}", what, err))),
    }
}

impl FormInput for DialoguerForm {
    fn select_variant(&mut self, variants: &[Variant]) -> Result<Option<Variant>, AppError> {
        let items: Vec<String> = variants
            .iter()
            .map(|variant| format!("{} - {}", variant.name(), variant.display_name()))
            .collect();

        let selection = Select::new()
            .with_prompt("Select generator")
            .items(&items)
            .default(0)
            .interact_opt()
            .map_err(|err| AppError::Prompt(format!("Failed to select generator: {}", err)))?;

        Ok(selection.map(|index| variants[index]))
    }

    fn text(&mut self, prompt: &str, initial: &str) -> Result<Option<String>, AppError> {
        let result = Input::<String>::new()
            .with_prompt(prompt)
            .with_initial_text(initial)
            .allow_empty(true)
            .interact_text();
        cancelled_or(result, prompt)
    }

    fn count(&mut self, prompt: &str, max: usize) -> Result<Option<usize>, AppError> {
        let result = Input::<usize>::new()
            .with_prompt(format!("{} (1-{})", prompt, max))
            .validate_with(move |value: &usize| -> Result<(), String> {
                if (1..=max).contains(value) {
                    Ok(())
                } else {
                    Err(format!("Enter a number between 1 and {}", max))
                }
            })
            .interact_text();
        cancelled_or(result, prompt)
    }
}
