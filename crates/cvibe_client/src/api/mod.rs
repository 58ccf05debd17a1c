//! One module per backend resource area; each adds an impl block of typed
//! operations onto [`crate::CvibeClient`].

mod auth;
mod builder;
mod community;
mod growth;
mod interviews;
mod jobs;
mod mock_interviews;
mod notifications;
mod profile;
mod resumes;
mod settings;

pub(crate) fn page_query(page: Option<u32>, size: Option<u32>) -> Vec<(&'static str, String)> {
    let mut query = Vec::new();
    if let Some(page) = page {
        query.push(("page", page.to_string()));
    }
    if let Some(size) = size {
        query.push(("size", size.to_string()));
    }
    query
}
