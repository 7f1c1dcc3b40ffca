//! Process-wide authentication state
//!
//! A [`Session`] is constructed once per running client and passed by
//! reference to everything that needs to know whether the administrator is
//! logged in. It is the only component allowed to touch the token store.

mod store;

pub use store::{FileTokenStore, TokenStore};
#[cfg(test)]
pub use store::MemoryTokenStore;

use crate::client::AuthApi;
use crate::error::Result;

/// Authentication state of the running client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Persisted token not read yet
    Loading,
    Authenticated,
    Unauthenticated,
}

impl SessionState {
    pub fn is_authenticated(self) -> bool {
        self == SessionState::Authenticated
    }
}

/// Authentication session backed by a durable token store
pub struct Session<S: TokenStore> {
    store: S,
    state: SessionState,
    token: Option<String>,
}

impl<S: TokenStore> Session<S> {
    /// Create a session in the `Loading` state
    pub fn new(store: S) -> Self {
        Self {
            store,
            state: SessionState::Loading,
            token: None,
        }
    }

    /// Current state
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Read the persisted token and leave `Loading`.
    ///
    /// Runs at most once; later calls return the current state untouched.
    /// The token's presence alone counts as authentication.
    pub fn resolve(&mut self) -> SessionState {
        if self.state != SessionState::Loading {
            return self.state;
        }

        self.token = match self.store.load() {
            Ok(token) => token,
            Err(e) => {
                log::warn!("Failed to read credential token: {}", e);
                None
            }
        };

        self.state = if self.token.is_some() {
            SessionState::Authenticated
        } else {
            SessionState::Unauthenticated
        };
        log::debug!("Session resolved: {:?}", self.state);

        self.state
    }

    /// Hand the current token (or its absence) to an API client
    pub async fn attach<A: AuthApi + ?Sized>(&self, api: &A) {
        api.set_token(self.token.clone()).await;
    }

    /// Log in through the API client.
    ///
    /// On success the token is persisted, handed to the client and the
    /// session becomes `Authenticated`. On failure nothing is persisted, the
    /// state is left as it was and the error is returned.
    pub async fn login<A: AuthApi + ?Sized>(
        &mut self,
        api: &A,
        username: &str,
        password: &str,
    ) -> Result<()> {
        let token = api.login(username, password).await?;

        self.store.save(&token.access_token)?;
        api.set_token(Some(token.access_token.clone())).await;

        self.token = Some(token.access_token);
        self.state = SessionState::Authenticated;
        log::debug!("Logged in as {}", username);

        Ok(())
    }

    /// Log out locally: delete the persisted token and become `Unauthenticated`.
    ///
    /// No request is sent to the backend. The state flips even if deleting
    /// the token file fails; that error is still returned.
    pub async fn logout<A: AuthApi + ?Sized>(&mut self, api: &A) -> Result<()> {
        self.token = None;
        self.state = SessionState::Unauthenticated;
        api.set_token(None).await;

        self.store.clear()
    }
}
