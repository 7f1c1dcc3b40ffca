//! Promotion list flow
//!
//! Keeps the in-memory promotion list in sync with the backend and hosts the
//! create / edit / delete / preview triggers. Closing the create or edit
//! dialog reloads the full list instead of tracking what changed; closing
//! the read-only preview does not.

use super::Confirm;
use super::form::PromotionForm;
use crate::client::PromotionApi;
use crate::client::models::{Promotion, PromotionId, PromotionWithImage};
use crate::error::{Error, FormError, Result};

/// Confirmation text shown before deleting
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this promotion?";

/// The one dialog that may be open on top of the list
#[derive(Debug, Clone, PartialEq)]
pub enum Dialog {
    Closed,
    Create,
    Edit(Promotion),
    Preview(PromotionId),
}

/// Result of a delete trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Cancelled,
}

/// In-memory promotion list plus the currently open dialog
#[derive(Debug, Clone)]
pub struct PromotionList {
    promotions: Vec<Promotion>,
    dialog: Dialog,
    loaded: bool,
}

impl PromotionList {
    pub fn new() -> Self {
        Self {
            promotions: Vec::new(),
            dialog: Dialog::Closed,
            loaded: false,
        }
    }

    pub fn promotions(&self) -> &[Promotion] {
        &self.promotions
    }

    pub fn dialog(&self) -> &Dialog {
        &self.dialog
    }

    /// Whether a first load has finished (successfully or not)
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Replace the list with a fresh fetch.
    ///
    /// A failed fetch is logged and leaves the list empty. Returns whether
    /// the fetch succeeded.
    pub async fn load<A: PromotionApi + ?Sized>(&mut self, api: &A) -> bool {
        let ok = match api.list_promotions().await {
            Ok(promotions) => {
                log::debug!("Loaded {} promotions", promotions.len());
                self.promotions = promotions;
                true
            }
            Err(e) => {
                log::error!("Failed to load promotions: {}", e);
                self.promotions.clear();
                false
            }
        };
        self.loaded = true;
        ok
    }

    fn ensure_closed(&self) -> Result<()> {
        if self.dialog != Dialog::Closed {
            return Err(FormError::DialogOpen.into());
        }
        Ok(())
    }

    /// Open the create dialog with an empty draft
    pub fn open_create(&mut self) -> Result<PromotionForm> {
        self.ensure_closed()?;
        self.dialog = Dialog::Create;
        Ok(PromotionForm::new())
    }

    /// Open the edit dialog seeded with a persisted promotion
    pub fn open_edit(&mut self, promotion: &Promotion) -> Result<PromotionForm> {
        self.ensure_closed()?;
        if !promotion.is_persisted() {
            return Err(Error::Other(
                "Only saved promotions can be edited".to_string(),
            ));
        }
        self.dialog = Dialog::Edit(promotion.clone());
        Ok(PromotionForm::from_promotion(promotion))
    }

    /// Open the read-only image preview for a promotion
    pub fn open_preview(&mut self, id: &PromotionId) -> Result<()> {
        self.ensure_closed()?;
        self.dialog = Dialog::Preview(id.clone());
        Ok(())
    }

    /// Close the create or edit dialog (or any other) and reload the list
    pub async fn close_dialog<A: PromotionApi + ?Sized>(&mut self, api: &A) -> bool {
        self.dialog = Dialog::Closed;
        self.load(api).await
    }

    /// Close the read-only preview. Nothing changed, so nothing is reloaded.
    pub fn close_preview(&mut self) {
        if matches!(self.dialog, Dialog::Preview(_)) {
            self.dialog = Dialog::Closed;
        }
    }

    /// Submit the open form; on success close the dialog (which reloads).
    ///
    /// On failure the dialog stays open and the error is returned so the
    /// caller can show it and let the user retry.
    pub async fn submit_form<A: PromotionApi + ?Sized>(
        &mut self,
        api: &A,
        form: &mut PromotionForm,
    ) -> Result<Promotion> {
        let saved = form.submit(api).await?;
        self.close_dialog(api).await;
        Ok(saved)
    }

    /// Delete a promotion after explicit confirmation.
    ///
    /// Declining sends nothing. A successful delete reloads the list; a
    /// failed one leaves the displayed list untouched.
    pub async fn delete<A: PromotionApi + ?Sized, C: Confirm + ?Sized>(
        &mut self,
        api: &A,
        id: &PromotionId,
        confirm: &C,
    ) -> Result<DeleteOutcome> {
        if !confirm.confirm(DELETE_PROMPT)? {
            log::debug!("Delete of {} cancelled", id);
            return Ok(DeleteOutcome::Cancelled);
        }

        if let Err(e) = api.delete_promotion(id).await {
            log::error!("Failed to delete promotion: {}", e);
            return Err(e);
        }

        self.load(api).await;
        Ok(DeleteOutcome::Deleted)
    }
}

impl Default for PromotionList {
    fn default() -> Self {
        Self::new()
    }
}

/// Fetch the rendered image for the preview dialog.
///
/// Failures are logged and degrade to `None` (a failed preview).
pub async fn load_preview<A: PromotionApi + ?Sized>(
    api: &A,
    id: &PromotionId,
) -> Option<PromotionWithImage> {
    match api.get_promotion(id).await {
        Ok(preview) => Some(preview),
        Err(e) => {
            log::error!("Failed to load image: {}", e);
            None
        }
    }
}
