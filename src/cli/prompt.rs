//! Terminal prompts backing the flow traits

use std::cell::OnceCell;

use colored::Colorize;
use dialoguer::theme::ColorfulTheme;
use indicatif::ProgressBar;

use super::progress;
use crate::error::{Error, Result};
use crate::flow::Confirm;

/// Delete confirmation on the terminal.
///
/// Starts the `Deleting...` spinner once the user agrees; the spinner is
/// cleared when the prompt is dropped.
pub struct ConfirmDelete {
    assume_yes: bool,
    spinner: OnceCell<ProgressBar>,
}

impl ConfirmDelete {
    /// Ask interactively
    pub fn interactive() -> Self {
        Self {
            assume_yes: false,
            spinner: OnceCell::new(),
        }
    }

    /// Treat the prompt as already answered with yes (`--yes`)
    pub fn assume_yes() -> Self {
        Self {
            assume_yes: true,
            spinner: OnceCell::new(),
        }
    }
}

impl Confirm for ConfirmDelete {
    fn confirm(&self, prompt: &str) -> Result<bool> {
        let agreed = self.assume_yes
            || dialoguer::Confirm::with_theme(&ColorfulTheme::default())
                .with_prompt(prompt)
                .default(false)
                .interact()?;

        if agreed {
            let _ = self.spinner.set(progress::spinner("Deleting..."));
        }
        Ok(agreed)
    }
}

impl Drop for ConfirmDelete {
    fn drop(&mut self) {
        if let Some(pb) = self.spinner.get() {
            pb.finish_and_clear();
        }
    }
}

/// Show an error to the user without leaving the current view
pub fn alert(err: &Error) {
    eprintln!("{} {}", "✗".red(), err);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assume_yes_skips_prompt() {
        let prompt = ConfirmDelete::assume_yes();
        assert!(prompt.confirm("Delete?").unwrap());
        assert!(prompt.spinner.get().is_some());
    }
}
