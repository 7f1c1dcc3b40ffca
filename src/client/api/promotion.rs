//! Promotion API trait for CRUD operations

use async_trait::async_trait;

use crate::client::models::{
    NewPromotion, Promotion, PromotionId, PromotionUpdate, PromotionWithImage,
};
use crate::error::Result;

/// Promotion management operations.
///
/// No method retries; every failure is returned to the caller as-is.
#[async_trait]
pub trait PromotionApi: Send + Sync {
    /// List every promotion
    async fn list_promotions(&self) -> Result<Vec<Promotion>>;

    /// Get one promotion together with its rendered image reference
    async fn get_promotion(&self, id: &PromotionId) -> Result<PromotionWithImage>;

    /// Create a promotion; the backend assigns the id
    async fn create_promotion(&self, promotion: NewPromotion) -> Result<Promotion>;

    /// Partially update a promotion.
    ///
    /// `publishToFacebook` is passed through untouched; publishing happens server-side.
    async fn update_promotion(&self, id: &PromotionId, update: PromotionUpdate)
    -> Result<Promotion>;

    /// Delete a promotion
    async fn delete_promotion(&self, id: &PromotionId) -> Result<()>;
}
