//! Authentication models

use serde::{Deserialize, Serialize};

/// Credentials posted to the login endpoint
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Credential token issued by the backend on successful login.
///
/// Opaque to the client: no expiry or signature is inspected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessToken {
    /// Bearer value attached to every authenticated request
    pub access_token: String,
}
