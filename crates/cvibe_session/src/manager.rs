//! Session Manager service

use std::sync::Arc;

use log::{debug, warn};
use tokio::sync::RwLock;

use cvibe_client::models::{AuthResponse, UserRecord};
use cvibe_client::CvibeClient;
use cvibe_core::{Credential, CredentialStore};

use crate::navigator::{Navigator, Route};

/// Derived, in-memory session state. Never persisted; re-derived at
/// bootstrap from the stored credential plus a "who am I" call.
#[derive(Debug, Clone)]
pub struct SessionState {
    pub user: Option<UserRecord>,
    pub is_loading: bool,
}

impl SessionState {
    fn unknown() -> Self {
        SessionState {
            user: None,
            is_loading: true,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Result of a login/register attempt. Mirrors the API envelope contract:
/// forms branch on `success` and render `error` inline, no exceptions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthOutcome {
    pub success: bool,
    pub error: Option<String>,
}

impl AuthOutcome {
    fn ok() -> Self {
        AuthOutcome {
            success: true,
            error: None,
        }
    }

    fn failed(message: impl Into<String>) -> Self {
        AuthOutcome {
            success: false,
            error: Some(message.into()),
        }
    }
}

/// Owns the credential lifecycle; the single writer of the credential
/// store. Construct once at application start, then call [`bootstrap`]
/// to resolve the initial `Unknown` state.
///
/// [`bootstrap`]: SessionManager::bootstrap
pub struct SessionManager {
    api: Arc<CvibeClient>,
    credentials: Arc<dyn CredentialStore>,
    navigator: Arc<dyn Navigator>,
    state: RwLock<SessionState>,
}

impl SessionManager {
    pub fn new(
        api: Arc<CvibeClient>,
        credentials: Arc<dyn CredentialStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        SessionManager {
            api,
            credentials,
            navigator,
            state: RwLock::new(SessionState::unknown()),
        }
    }

    /// Resolve the initial state: with a stored credential, validate it via
    /// the current-user call; a failed validation erases the credential so
    /// nothing stale survives. Without one, go straight to anonymous.
    pub async fn bootstrap(&self) {
        if self.credentials.load().await.is_some() {
            match self.api.get_current_user().await {
                Ok(user) => {
                    debug!("session restored for {}", user.email);
                    self.state.write().await.user = Some(user);
                }
                Err(err) => {
                    warn!("stored credential rejected, clearing: {err}");
                    self.erase_credential().await;
                }
            }
        }
        self.state.write().await.is_loading = false;
    }

    pub async fn login(&self, email: &str, password: &str) -> AuthOutcome {
        self.state.write().await.is_loading = true;
        let result = self.api.login(email, password).await;
        self.establish("Login failed", result).await
    }

    pub async fn register(&self, email: &str, password: &str, nickname: &str) -> AuthOutcome {
        self.state.write().await.is_loading = true;
        let result = self.api.register(email, password, nickname).await;
        self.establish("Registration failed", result).await
    }

    /// Best-effort remote invalidation, then unconditional local erase.
    pub async fn logout(&self) {
        if let Err(err) = self.api.logout().await {
            debug!("remote logout failed, ignoring: {err}");
        }
        self.erase_credential().await;

        let mut state = self.state.write().await;
        state.user = None;
        state.is_loading = false;
        drop(state);

        self.navigator.navigate(Route::Login);
    }

    pub async fn state(&self) -> SessionState {
        self.state.read().await.clone()
    }

    pub async fn current_user(&self) -> Option<UserRecord> {
        self.state.read().await.user.clone()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.state.read().await.is_authenticated()
    }

    pub async fn is_loading(&self) -> bool {
        self.state.read().await.is_loading
    }

    /// Shared tail of login/register: persist the token pair, cache the
    /// user, and move to the authenticated area.
    async fn establish(
        &self,
        fallback_message: &str,
        result: cvibe_client::ApiResult<AuthResponse>,
    ) -> AuthOutcome {
        let response = match result {
            Ok(response) => response,
            Err(err) => {
                self.state.write().await.is_loading = false;
                let message = err.message();
                if message.is_empty() {
                    return AuthOutcome::failed(fallback_message);
                }
                return AuthOutcome::failed(message);
            }
        };

        let credential = Credential::new(&response.access_token, &response.refresh_token);
        if let Err(err) = self.credentials.store(&credential).await {
            self.state.write().await.is_loading = false;
            return AuthOutcome::failed(format!("Failed to persist session: {err}"));
        }

        let mut state = self.state.write().await;
        state.user = Some(response.user);
        state.is_loading = false;
        drop(state);

        self.navigator.navigate(Route::Dashboard);
        AuthOutcome::ok()
    }

    async fn erase_credential(&self) {
        if let Err(err) = self.credentials.clear().await {
            warn!("failed to erase credential: {err}");
        }
    }
}
