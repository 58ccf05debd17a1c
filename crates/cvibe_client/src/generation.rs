//! Resume generation polling
//!
//! LaTeX generation runs server-side and can take a while. The caller kicks
//! off one generate request, then polls the status endpoint on a fixed
//! interval up to a bounded attempt count. Any failure along the way
//! (kick-off rejected, `FAILED` status, attempt budget exhausted, transport
//! error mid-poll) degrades to a locally built default artifact so the user
//! always reaches an editable document.

use std::time::Duration;

use log::{info, warn};
use tokio::time::sleep;

use crate::client::CvibeClient;
use crate::models::{GenerateResumeRequest, ProcessingStatus};

pub const POLL_INTERVAL: Duration = Duration::from_secs(2);
pub const MAX_POLL_ATTEMPTS: u32 = 30;

/// Where the artifact came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactSource {
    /// The backend finished the generation and returned its content.
    Generated,
    /// The default skeleton, used when generation did not complete.
    Fallback,
}

/// An editable LaTeX document, always produced.
#[derive(Debug, Clone)]
pub struct ResumeArtifact {
    /// Generation id, when the kick-off succeeded.
    pub generation_id: Option<String>,
    pub latex: String,
    pub source: ArtifactSource,
}

impl ResumeArtifact {
    fn fallback(generation_id: Option<String>) -> Self {
        ResumeArtifact {
            generation_id,
            latex: default_latex_artifact(),
            source: ArtifactSource::Fallback,
        }
    }
}

/// Default LaTeX skeleton used when generation fails or times out.
pub fn default_latex_artifact() -> String {
    String::from(
        r"\documentclass{article}
\usepackage{titlesec}
\usepackage{enumitem}

\begin{document}

\section*{Your Name}
\textit{Your Title} \\
Email: you@example.com

\section*{Education}
\textbf{University} \hfill Year \\
Degree

\section*{Experience}
\textbf{Company} -- Role \hfill Dates \\
- Achievement.

\section*{Skills}
Skill one, skill two, skill three

\end{document}
",
    )
}

impl CvibeClient {
    /// Kick off a generation and poll it with the default interval and
    /// attempt budget (2s x 30, roughly a 60s ceiling).
    pub async fn generate_resume_with_fallback(
        &self,
        request: &GenerateResumeRequest,
    ) -> ResumeArtifact {
        self.generate_resume_with_fallback_at(request, POLL_INTERVAL, MAX_POLL_ATTEMPTS)
            .await
    }

    /// Same policy with explicit pacing, used by tests to avoid real sleeps.
    pub async fn generate_resume_with_fallback_at(
        &self,
        request: &GenerateResumeRequest,
        interval: Duration,
        max_attempts: u32,
    ) -> ResumeArtifact {
        let generation = match self.generate_resume(request).await {
            Ok(generation) => generation,
            Err(err) => {
                warn!("Resume generation kick-off failed, using default artifact: {err}");
                return ResumeArtifact::fallback(None);
            }
        };

        if generation.status == ProcessingStatus::Completed {
            if let Some(latex) = non_empty(generation.latex_content) {
                return ResumeArtifact {
                    generation_id: Some(generation.id),
                    latex,
                    source: ArtifactSource::Generated,
                };
            }
        }

        let generation_id = generation.id;
        for attempt in 1..=max_attempts {
            let status = match self.get_generation_by_id(&generation_id).await {
                Ok(generation) => generation,
                Err(err) => {
                    warn!("Generation poll {attempt} failed, using default artifact: {err}");
                    return ResumeArtifact::fallback(Some(generation_id));
                }
            };

            match status.status {
                ProcessingStatus::Completed => {
                    if let Some(latex) = non_empty(status.latex_content) {
                        info!("Generation {generation_id} completed after {attempt} polls");
                        return ResumeArtifact {
                            generation_id: Some(generation_id),
                            latex,
                            source: ArtifactSource::Generated,
                        };
                    }
                    warn!("Generation {generation_id} completed without content");
                    return ResumeArtifact::fallback(Some(generation_id));
                }
                ProcessingStatus::Failed => {
                    warn!("Generation {generation_id} failed server-side");
                    return ResumeArtifact::fallback(Some(generation_id));
                }
                ProcessingStatus::Pending | ProcessingStatus::Processing => {
                    if attempt < max_attempts {
                        sleep(interval).await;
                    }
                }
            }
        }

        warn!("Generation {generation_id} did not finish within {max_attempts} polls");
        ResumeArtifact::fallback(Some(generation_id))
    }
}

fn non_empty(content: Option<String>) -> Option<String> {
    content.filter(|content| !content.trim().is_empty())
}
