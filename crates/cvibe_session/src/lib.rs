//! # CVibe Session Manager
//!
//! Owns the authentication token lifecycle and the current-user state.
//! The rest of the application asks this crate whether a user is signed
//! in; only this crate writes the credential store.
//!
//! Session states: `Unknown` (initial, loading) resolves at bootstrap into
//! `Authenticated` or `Anonymous`. Login/register move to `Authenticated`,
//! logout unconditionally back to `Anonymous`. A stale access token is
//! detected reactively on the next failing call; there is no proactive
//! refresh timer.

pub mod manager;
pub mod navigator;

pub use manager::{AuthOutcome, SessionManager, SessionState};
pub use navigator::{LogNavigator, Navigator, Route};
