//! Promotion backend HTTP client

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client as HttpClient, Method, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::RwLock;

use super::models::{
    AccessToken, LoginRequest, NewPromotion, Promotion, PromotionId, PromotionUpdate,
    PromotionWithImage,
};
use super::{AuthApi, PromotionApi};
use crate::error::{ApiError, Result};

/// HTTP client for the promotion backend.
///
/// Holds the bearer token in memory; the token is handed over by the
/// session, which owns its persistence.
pub struct PromoClient {
    http: HttpClient,
    base_url: String,
    token: Arc<RwLock<Option<String>>>,
}

impl PromoClient {
    /// Create a client for the given backend base URL
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        // No client-side timeout: the transport default applies
        let http = HttpClient::builder()
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: Arc::new(RwLock::new(None)),
        })
    }

    /// Backend base URL this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send a request, attaching the bearer token when one is set
    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Response> {
        let url = format!("{}{}", self.base_url, path);
        log::debug!("{} {}", method, url);

        let mut request = self.http.request(method, &url);
        if let Some(token) = self.token.read().await.as_deref() {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(ApiError::from)?;
        check_status(response).await
    }

    async fn request_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T> {
        let response = self.send(method, path, body).await?;
        let data = response
            .json::<T>()
            .await
            .map_err(|e| ApiError::InvalidResponse(format!("Failed to parse response: {}", e)))?;
        Ok(data)
    }
}

/// Map non-success statuses onto the error taxonomy
async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    log::debug!("Request failed with {}: {}", status, body);

    let err = match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ApiError::Unauthorized,
        StatusCode::NOT_FOUND => ApiError::NotFound(non_empty_or(body, "Resource not found")),
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
            ApiError::BadRequest(non_empty_or(body, "Bad request"))
        }
        s if s.is_server_error() => {
            ApiError::ServerError(non_empty_or(body, &format!("Server error: {}", s)))
        }
        s => ApiError::InvalidResponse(format!("Unexpected status code: {}", s)),
    };
    Err(err.into())
}

fn non_empty_or(body: String, fallback: &str) -> String {
    if body.trim().is_empty() {
        fallback.to_string()
    } else {
        body
    }
}

#[async_trait]
impl AuthApi for PromoClient {
    async fn login(&self, username: &str, password: &str) -> Result<AccessToken> {
        let body = LoginRequest { username, password };

        match self
            .request_json::<_, AccessToken>(Method::POST, "/auth/login", Some(&body))
            .await
        {
            Err(crate::error::Error::Api(ApiError::Unauthorized)) => {
                Err(ApiError::InvalidCredentials.into())
            }
            other => other,
        }
    }

    async fn set_token(&self, token: Option<String>) {
        *self.token.write().await = token;
    }
}

#[async_trait]
impl PromotionApi for PromoClient {
    async fn list_promotions(&self) -> Result<Vec<Promotion>> {
        self.request_json::<(), _>(Method::GET, "/promotion", None)
            .await
    }

    async fn get_promotion(&self, id: &PromotionId) -> Result<PromotionWithImage> {
        let path = format!("/promotion/{}", id);
        self.request_json::<(), _>(Method::GET, &path, None).await
    }

    async fn create_promotion(&self, promotion: NewPromotion) -> Result<Promotion> {
        self.request_json(Method::POST, "/promotion", Some(&promotion))
            .await
    }

    async fn update_promotion(
        &self,
        id: &PromotionId,
        update: PromotionUpdate,
    ) -> Result<Promotion> {
        let path = format!("/promotion/{}", id);
        self.request_json(Method::PUT, &path, Some(&update)).await
    }

    async fn delete_promotion(&self, id: &PromotionId) -> Result<()> {
        let path = format!("/promotion/{}", id);
        // The acknowledgement body carries nothing we use
        self.send::<()>(Method::DELETE, &path, None).await?;
        Ok(())
    }
}
