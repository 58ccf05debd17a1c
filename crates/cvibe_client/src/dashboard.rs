//! Dashboard fan-out fetch
//!
//! The dashboard needs five independent resources at once. They are issued
//! together and joined; a failing tile degrades to empty state with a log
//! line instead of failing the whole snapshot.

use log::warn;

use crate::client::CvibeClient;
use crate::error::ApiError;
use crate::models::{Job, JobMatch, JobMatchSummary};

#[derive(Debug, Clone, Default)]
pub struct DashboardSnapshot {
    pub latest_jobs: Vec<Job>,
    pub matches: Vec<JobMatch>,
    pub saved_jobs: Vec<JobMatch>,
    pub applied_jobs: Vec<JobMatch>,
    pub summary: Option<JobMatchSummary>,
}

fn or_empty<T>(label: &str, result: Result<Vec<T>, ApiError>) -> Vec<T> {
    match result {
        Ok(items) => items,
        Err(err) => {
            warn!("Dashboard {label} fetch failed: {err}");
            Vec::new()
        }
    }
}

impl CvibeClient {
    pub async fn dashboard_snapshot(&self) -> DashboardSnapshot {
        let (latest_jobs, matches, saved_jobs, applied_jobs, summary) = tokio::join!(
            self.get_latest_jobs(),
            self.get_job_matches(None, None),
            self.get_saved_jobs(),
            self.get_applied_jobs(),
            self.get_job_match_summary(),
        );

        DashboardSnapshot {
            latest_jobs: or_empty("latest jobs", latest_jobs),
            matches: or_empty("matches", matches.map(|page| page.content)),
            saved_jobs: or_empty("saved jobs", saved_jobs),
            applied_jobs: or_empty("applied jobs", applied_jobs),
            summary: match summary {
                Ok(summary) => Some(summary),
                Err(err) => {
                    warn!("Dashboard summary fetch failed: {err}");
                    None
                }
            },
        }
    }
}
