use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Select};

use marks_core::error::Error;
use marks_ops::Prompter;

/// Interactive prompts on the controlling terminal.
pub(crate) struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    pub(crate) fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

fn prompt_error(e: dialoguer::Error) -> Error {
    Error::Prompt(e.to_string())
}

impl Prompter for TerminalPrompter {
    fn select(&self, label: &str, items: &[String]) -> Result<usize, Error> {
        let picked = Select::with_theme(&self.theme)
            .with_prompt(label)
            .items(items)
            .default(0)
            .interact_opt()
            .map_err(prompt_error)?;
        picked.ok_or(Error::Cancelled)
    }

    fn confirm(&self, label: &str) -> Result<bool, Error> {
        Confirm::with_theme(&self.theme)
            .with_prompt(label)
            .default(false)
            .interact()
            .map_err(prompt_error)
    }
}
