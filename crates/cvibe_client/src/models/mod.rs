//! Wire types for the CVibe backend, camelCase on the wire.

pub mod auth;
pub mod builder;
pub mod common;
pub mod community;
pub mod growth;
pub mod interviews;
pub mod jobs;
pub mod mock_interviews;
pub mod notifications;
pub mod profile;
pub mod resumes;
pub mod settings;

pub use auth::*;
pub use builder::*;
pub use common::*;
pub use community::*;
pub use growth::*;
pub use interviews::*;
pub use jobs::*;
pub use mock_interviews::*;
pub use notifications::*;
pub use profile::*;
pub use resumes::*;
pub use settings::*;
