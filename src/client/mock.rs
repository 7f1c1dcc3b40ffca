//! Mock promotion API client for testing
//!
//! Provides a mock implementation of the API traits for unit testing
//! without making real API calls.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::api::{AuthApi, PromotionApi};
use super::models::{
    AccessToken, Meal, NewPromotion, Promotion, PromotionId, PromotionUpdate, PromotionWithImage,
};
use crate::error::{ApiError, Result};

/// Mock API client for testing.
///
/// Configure expected responses via builder methods, then use in tests.
///
/// # Example
/// ```ignore
/// let mock = MockPromoClient::new().with_promotions(vec![promo("1", "Lunch")]).await;
///
/// let promos = mock.list_promotions().await?;
/// assert_eq!(promos.len(), 1);
/// ```
#[derive(Default)]
pub struct MockPromoClient {
    /// Promotions returned from list_promotions / get_promotion
    promotions: Arc<Mutex<Vec<Promotion>>>,
    /// Image reference returned from get_promotion
    image: Arc<Mutex<String>>,
    /// Token returned from login
    access_token: Arc<Mutex<Option<String>>>,
    /// Bearer token currently set on the client
    bearer: Arc<Mutex<Option<String>>>,
    /// Error to return (if any) - consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    /// Track number of calls for verification
    call_count: Arc<Mutex<CallCounts>>,
    /// Captured mutation payloads for test assertions
    captured_requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub login: usize,
    pub list_promotions: usize,
    pub get_promotion: usize,
    pub create_promotion: usize,
    pub update_promotion: usize,
    pub delete_promotion: usize,
}

impl CallCounts {
    /// Get total number of network calls made.
    pub fn total(&self) -> usize {
        self.login
            + self.list_promotions
            + self.get_promotion
            + self.create_promotion
            + self.update_promotion
            + self.delete_promotion
    }

    /// Number of successful or failed mutation calls.
    pub fn mutations(&self) -> usize {
        self.create_promotion + self.update_promotion + self.delete_promotion
    }
}

/// A captured mutation request for test assertions.
#[derive(Debug, Clone)]
pub enum CapturedRequest {
    Create(NewPromotion),
    Update(PromotionId, PromotionUpdate),
    Delete(PromotionId),
}

impl MockPromoClient {
    /// Create a new mock client with default (empty) responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure promotions to return from list_promotions.
    pub async fn with_promotions(self, promotions: Vec<Promotion>) -> Self {
        *self.promotions.lock().await = promotions;
        self
    }

    /// Configure the image reference returned from get_promotion.
    pub async fn with_image(self, image: &str) -> Self {
        *self.image.lock().await = image.to_string();
        self
    }

    /// Configure the access token returned from login.
    pub async fn with_access_token(self, token: &str) -> Self {
        *self.access_token.lock().await = Some(token.to_string());
        self
    }

    /// Configure an error to return on the next API call.
    /// The error is consumed after one use.
    pub async fn with_error(self, error: ApiError) -> Self {
        self.fail_next(error).await;
        self
    }

    /// Arm a one-shot error on an already shared client.
    pub async fn fail_next(&self, error: ApiError) {
        *self.error.lock().await = Some(error);
    }

    /// Get the call counts for verification in tests.
    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    /// Get all captured mutation requests.
    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.captured_requests.lock().await.clone()
    }

    /// Bearer token currently set on the client.
    pub async fn bearer(&self) -> Option<String> {
        self.bearer.lock().await.clone()
    }

    /// Check if there's a pending error and consume it.
    async fn check_error(&self) -> Result<()> {
        let mut error = self.error.lock().await;
        if let Some(e) = error.take() {
            return Err(e.into());
        }
        Ok(())
    }

    async fn capture(&self, request: CapturedRequest) {
        self.captured_requests.lock().await.push(request);
    }
}

// ============================================================================
// AuthApi Implementation
// ============================================================================

#[async_trait]
impl AuthApi for MockPromoClient {
    async fn login(&self, _username: &str, _password: &str) -> Result<AccessToken> {
        self.call_count.lock().await.login += 1;
        self.check_error().await?;

        let token = self.access_token.lock().await;
        Ok(AccessToken {
            access_token: token.clone().unwrap_or_else(|| "mock-token".to_string()),
        })
    }

    async fn set_token(&self, token: Option<String>) {
        *self.bearer.lock().await = token;
    }
}

// ============================================================================
// PromotionApi Implementation
// ============================================================================

#[async_trait]
impl PromotionApi for MockPromoClient {
    async fn list_promotions(&self) -> Result<Vec<Promotion>> {
        self.call_count.lock().await.list_promotions += 1;
        self.check_error().await?;

        Ok(self.promotions.lock().await.clone())
    }

    async fn get_promotion(&self, id: &PromotionId) -> Result<PromotionWithImage> {
        self.call_count.lock().await.get_promotion += 1;
        self.check_error().await?;

        let promotion = self
            .promotions
            .lock()
            .await
            .iter()
            .find(|p| p.id.as_ref() == Some(id))
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("Promotion {}", id)))?;

        Ok(PromotionWithImage {
            promotion,
            image: self.image.lock().await.clone(),
        })
    }

    async fn create_promotion(&self, promotion: NewPromotion) -> Result<Promotion> {
        self.call_count.lock().await.create_promotion += 1;
        self.capture(CapturedRequest::Create(promotion.clone()))
            .await;
        self.check_error().await?;

        let mut promotions = self.promotions.lock().await;
        let created = Promotion {
            id: Some(PromotionId::new(format!("mock-{}", promotions.len() + 1))),
            name: promotion.name,
            meals: promotion
                .meals
                .into_iter()
                .map(Meal::from)
                .collect(),
        };
        promotions.push(created.clone());

        Ok(created)
    }

    async fn update_promotion(
        &self,
        id: &PromotionId,
        update: PromotionUpdate,
    ) -> Result<Promotion> {
        self.call_count.lock().await.update_promotion += 1;
        self.capture(CapturedRequest::Update(id.clone(), update.clone()))
            .await;
        self.check_error().await?;

        let mut promotions = self.promotions.lock().await;
        let existing = promotions
            .iter_mut()
            .find(|p| p.id.as_ref() == Some(id))
            .ok_or_else(|| ApiError::NotFound(format!("Promotion {}", id)))?;

        if let Some(name) = update.name {
            existing.name = name;
        }
        if let Some(meals) = update.meals {
            existing.meals = meals
                .into_iter()
                .map(Meal::from)
                .collect();
        }

        Ok(existing.clone())
    }

    async fn delete_promotion(&self, id: &PromotionId) -> Result<()> {
        self.call_count.lock().await.delete_promotion += 1;
        self.capture(CapturedRequest::Delete(id.clone())).await;
        self.check_error().await?;

        self.promotions
            .lock()
            .await
            .retain(|p| p.id.as_ref() != Some(id));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_one_shot_error_is_consumed() {
        let mock = MockPromoClient::new()
            .with_error(ApiError::Network("down".to_string()))
            .await;

        assert!(mock.list_promotions().await.is_err());
        assert!(mock.list_promotions().await.is_ok());
        assert_eq!(mock.call_counts().await.list_promotions, 2);
    }

    #[tokio::test]
    async fn test_create_assigns_id() {
        let mock = MockPromoClient::new();
        let created = mock
            .create_promotion(NewPromotion {
                name: "New".to_string(),
                meals: vec![],
            })
            .await
            .unwrap();

        assert!(created.is_persisted());
        assert_eq!(mock.list_promotions().await.unwrap().len(), 1);
    }
}
