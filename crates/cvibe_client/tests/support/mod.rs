#![allow(dead_code)]

use std::sync::Arc;

use cvibe_client::CvibeClient;
use cvibe_core::{Config, Credential, CredentialStore, MemoryCredentialStore};

/// Client with a stored credential, pointed at a mock server.
pub async fn client_with_token(uri: &str, token: &str) -> CvibeClient {
    let store = Arc::new(MemoryCredentialStore::new());
    store
        .store(&Credential::new(token, "refresh"))
        .await
        .expect("store credential");
    CvibeClient::new(&Config::with_api_base(uri), store)
}

/// Client with no stored credential.
pub fn anonymous_client(uri: &str) -> CvibeClient {
    CvibeClient::new(
        &Config::with_api_base(uri),
        Arc::new(MemoryCredentialStore::new()),
    )
}
