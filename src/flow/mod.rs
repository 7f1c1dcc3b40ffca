//! UI-independent promotion flows
//!
//! The list and form state machines live here so the interactive console
//! and the one-shot subcommands drive the exact same logic.

pub mod form;
pub mod list;

pub use form::{FormMode, MealDraft, MealField, PromotionForm};
pub use list::{DeleteOutcome, Dialog, PromotionList, load_preview};

use crate::error::Result;

/// Asks the user to confirm a destructive action
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> Result<bool>;
}
