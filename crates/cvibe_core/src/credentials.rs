//! Credential storage trait and implementations
//!
//! The access/refresh token pair lives in a JSON key-value file under the
//! fixed keys `accessToken` and `refreshToken`. The session manager is the
//! only writer; the API client reads on every outgoing request.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;
use tokio::fs;
use tokio::sync::RwLock;

pub const ACCESS_TOKEN_KEY: &str = "accessToken";
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";

#[derive(Error, Debug)]
pub enum CredentialStoreError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CredentialStoreError>;

/// The opaque token pair identifying an authenticated session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    pub access_token: String,
    pub refresh_token: String,
}

impl Credential {
    pub fn new(access_token: impl Into<String>, refresh_token: impl Into<String>) -> Self {
        Credential {
            access_token: access_token.into(),
            refresh_token: refresh_token.into(),
        }
    }
}

/// Durable key-value storage for the credential pair.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Load the stored credential, if both keys are present.
    async fn load(&self) -> Option<Credential>;

    /// Persist the credential under the fixed keys.
    async fn store(&self, credential: &Credential) -> Result<()>;

    /// Erase both keys. Erasing an empty store is not an error.
    async fn clear(&self) -> Result<()>;

    /// Current access token, if any.
    async fn access_token(&self) -> Option<String> {
        self.load().await.map(|credential| credential.access_token)
    }
}

/// File-backed credential storage (credentials.json)
#[derive(Debug, Clone)]
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    async fn read_map(&self) -> Option<HashMap<String, String>> {
        let contents = fs::read_to_string(&self.path).await.ok()?;
        serde_json::from_str(&contents).ok()
    }
}

#[async_trait]
impl CredentialStore for FileCredentialStore {
    async fn load(&self) -> Option<Credential> {
        let map = self.read_map().await?;
        let access_token = map.get(ACCESS_TOKEN_KEY)?;
        let refresh_token = map.get(REFRESH_TOKEN_KEY)?;
        if access_token.is_empty() {
            return None;
        }
        Some(Credential::new(access_token, refresh_token))
    }

    async fn store(&self, credential: &Credential) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }
        let map = HashMap::from([
            (ACCESS_TOKEN_KEY, credential.access_token.as_str()),
            (REFRESH_TOKEN_KEY, credential.refresh_token.as_str()),
        ]);
        let contents = serde_json::to_string_pretty(&map)?;
        fs::write(&self.path, contents).await?;
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

/// In-memory credential storage, used by tests.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    inner: RwLock<Option<Credential>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn load(&self) -> Option<Credential> {
        self.inner.read().await.clone()
    }

    async fn store(&self, credential: &Credential) -> Result<()> {
        *self.inner.write().await = Some(credential.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        *self.inner.write().await = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn file_store_save_and_load() {
        let dir = tempdir().unwrap();
        let store = FileCredentialStore::new(dir.path().join("credentials.json"));

        let credential = Credential::new("t1", "r1");
        store.store(&credential).await.unwrap();

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded, credential);
        assert_eq!(store.access_token().await.as_deref(), Some("t1"));
    }

    #[tokio::test]
    async fn file_store_uses_fixed_keys() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("credentials.json");
        let store = FileCredentialStore::new(&path);

        store.store(&Credential::new("t1", "r1")).await.unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        let map: HashMap<String, String> = serde_json::from_str(&raw).unwrap();
        assert_eq!(map.get(ACCESS_TOKEN_KEY).map(String::as_str), Some("t1"));
        assert_eq!(map.get(REFRESH_TOKEN_KEY).map(String::as_str), Some("r1"));
    }

    #[tokio::test]
    async fn file_store_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let store = FileCredentialStore::new(dir.path().join("missing.json"));
        assert!(store.load().await.is_none());
        assert!(store.access_token().await.is_none());
    }

    #[tokio::test]
    async fn file_store_clear_is_idempotent() {
        let dir = tempdir().unwrap();
        let store = FileCredentialStore::new(dir.path().join("credentials.json"));

        store.store(&Credential::new("t1", "r1")).await.unwrap();
        store.clear().await.unwrap();
        assert!(store.load().await.is_none());

        // Clearing again must not fail
        store.clear().await.unwrap();
    }

    #[tokio::test]
    async fn memory_store_round_trip() {
        let store = MemoryCredentialStore::new();
        assert!(store.load().await.is_none());

        store.store(&Credential::new("t1", "r1")).await.unwrap();
        assert_eq!(store.access_token().await.as_deref(), Some("t1"));

        store.clear().await.unwrap();
        assert!(store.load().await.is_none());
    }
}
