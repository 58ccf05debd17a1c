//! Navigation hook
//!
//! The session manager triggers client-side navigation on auth
//! transitions (dashboard after sign-in, login surface after sign-out).
//! The UI tree plugs in here; tests record routes instead.

use log::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    Login,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Dashboard => "/dashboard",
            Route::Login => "/login",
        }
    }
}

pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

/// Navigator that only logs the transition, for headless consumers.
#[derive(Debug, Default)]
pub struct LogNavigator;

impl Navigator for LogNavigator {
    fn navigate(&self, route: Route) {
        info!("navigating to {}", route.path());
    }
}
