use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub salary: Option<String>,
    pub source: String,
    #[serde(default)]
    pub source_url: Option<String>,
    pub is_remote: bool,
    pub posted_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchStatus {
    New,
    Viewed,
    Saved,
    Applied,
    Rejected,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobMatch {
    pub id: String,
    pub job: Job,
    pub match_score: f64,
    #[serde(default)]
    pub match_reasons: Vec<String>,
    pub status: MatchStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobMatchSummary {
    pub total_matches: u64,
    pub new_matches: u64,
    pub saved_jobs: u64,
    pub applied_jobs: u64,
    pub average_match_score: f64,
}

/// Filters for the paged job search.
#[derive(Debug, Clone, Default)]
pub struct JobSearchParams {
    pub page: Option<u32>,
    pub size: Option<u32>,
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
}

impl JobSearchParams {
    pub(crate) fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(page) = self.page {
            query.push(("page", page.to_string()));
        }
        if let Some(size) = self.size {
            query.push(("size", size.to_string()));
        }
        if let Some(title) = &self.title {
            query.push(("title", title.clone()));
        }
        if let Some(company) = &self.company {
            query.push(("company", company.clone()));
        }
        if let Some(location) = &self.location {
            query.push(("location", location.clone()));
        }
        query
    }
}
