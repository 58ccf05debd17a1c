//! # CVibe Core
//!
//! Shared pieces of the CVibe client SDK: configuration loading and the
//! durable credential store read by the API client and written by the
//! session manager.

pub mod config;
pub mod credentials;
pub mod paths;

pub use config::Config;
pub use credentials::{
    Credential, CredentialStore, CredentialStoreError, FileCredentialStore, MemoryCredentialStore,
    ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY,
};
