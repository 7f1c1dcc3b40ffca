//! Durable storage for the credential token
//!
//! The token lives in one named entry (`auth_token`) as plain text. An
//! absent or blank entry means "not logged in".

use std::path::{Path, PathBuf};

use crate::error::Result;

/// Fixed key under which the credential token is persisted
pub const TOKEN_KEY: &str = "auth_token";

/// Single durable cell holding the credential token.
///
/// Only [`Session`](super::Session) reads or writes it.
pub trait TokenStore: Send + Sync {
    /// Read the persisted token, if any
    fn load(&self) -> Result<Option<String>>;

    /// Persist the token, replacing any previous value
    fn save(&self, token: &str) -> Result<()>;

    /// Delete the persisted token; deleting an absent token is not an error
    fn clear(&self) -> Result<()>;
}

/// Token store backed by a file named [`TOKEN_KEY`] inside a state directory
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Store the token inside `dir` (usually the config directory)
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            path: dir.join(TOKEN_KEY),
        }
    }

    /// Location of the token file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => {
                let token = contents.trim();
                Ok((!token.is_empty()).then(|| token.to_string()))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, token: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&self.path, token)?;

        // The token is a bearer credential: owner read/write only
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(&self.path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(&self.path, perms)?;
        }

        Ok(())
    }

    fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory token store for tests
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct MemoryTokenStore {
    token: std::sync::Arc<std::sync::Mutex<Option<String>>>,
}

#[cfg(test)]
impl MemoryTokenStore {
    pub fn with_token(token: &str) -> Self {
        let store = Self::default();
        *store.token.lock().unwrap() = Some(token.to_string());
        store
    }

    pub fn peek(&self) -> Option<String> {
        self.token.lock().unwrap().clone()
    }
}

#[cfg(test)]
impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<Option<String>> {
        Ok(self
            .token
            .lock()
            .unwrap()
            .clone()
            .filter(|t| !t.trim().is_empty()))
    }

    fn save(&self, token: &str) -> Result<()> {
        *self.token.lock().unwrap() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.token.lock().unwrap() = None;
        Ok(())
    }
}
