//! Authentication API trait

use async_trait::async_trait;

use crate::client::models::AccessToken;
use crate::error::Result;

/// Authentication operations for the promotion backend
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchange credentials for a credential token.
    ///
    /// Rejected credentials surface as `ApiError::InvalidCredentials`.
    async fn login(&self, username: &str, password: &str) -> Result<AccessToken>;

    /// Set (or clear) the bearer token attached to subsequent requests
    async fn set_token(&self, token: Option<String>);
}
