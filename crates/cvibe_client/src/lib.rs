//! # CVibe API Client
//!
//! Single choke point for all network I/O to the CVibe backend. One typed
//! method per backend operation; every call attaches the stored bearer
//! credential (when present) and normalizes transport failures, non-2xx
//! statuses, backend-reported failures, and decode failures into [`ApiError`].
//!
//! This layer carries no business logic: no retry, no caching, no request
//! deduplication. Polling and fan-out fetches are built on top of it in
//! [`generation`] and [`dashboard`].

pub mod api;
pub mod client;
pub mod dashboard;
mod envelope;
pub mod error;
pub mod generation;
pub mod models;

pub use client::CvibeClient;
pub use dashboard::DashboardSnapshot;
pub use error::{ApiError, ApiResult};
pub use generation::{ArtifactSource, ResumeArtifact, MAX_POLL_ATTEMPTS, POLL_INTERVAL};
