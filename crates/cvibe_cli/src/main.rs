use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use colored::Colorize;

use cvibe_client::models::{GenerateResumeRequest, JobSearchParams};
use cvibe_client::{ArtifactSource, CvibeClient};
use cvibe_core::{paths, Config, FileCredentialStore};
use cvibe_session::{LogNavigator, SessionManager};

#[derive(Parser)]
#[command(name = "cvibe")]
#[command(about = "CLI client for the CVibe career platform")]
#[command(version)]
struct Cli {
    /// Backend base URL, e.g. http://localhost:8080/api
    #[arg(long, env = "CVIBE_API_BASE")]
    api_base: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in and persist the session
    Login {
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Create an account and sign in
    Register {
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        nickname: String,
    },
    /// Sign out and erase the stored session
    Logout,
    /// Show the signed-in user
    Whoami,
    /// Search jobs
    Jobs {
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        size: Option<u32>,
    },
    /// Show the dashboard snapshot (jobs, matches, summary)
    Dashboard,
    /// List uploaded resumes
    Resumes,
    /// Upload a resume file
    Upload { file: PathBuf },
    /// Generate a tailored resume and print the LaTeX
    Generate {
        template_id: String,
        #[arg(long)]
        target_job: Option<String>,
        #[arg(long)]
        target_company: Option<String>,
    },
    /// Show recent notifications
    Notifications,
}

fn build_config(api_base: Option<String>) -> Config {
    let mut config = Config::new();
    if let Some(api_base) = api_base {
        config = Config::with_api_base(api_base);
    }
    config
}

fn credentials_path(config: &Config) -> PathBuf {
    match &config.data_dir {
        Some(dir) => dir.join("credentials.json"),
        None => paths::credentials_json_path(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = build_config(cli.api_base);
    if let Err(err) = paths::ensure_cvibe_dir() {
        log::warn!("could not create data directory: {err}");
    }

    let store = Arc::new(FileCredentialStore::new(credentials_path(&config)));
    let client = Arc::new(CvibeClient::new(&config, store.clone()));
    let session = SessionManager::new(client.clone(), store, Arc::new(LogNavigator));

    match cli.command {
        Commands::Login { email, password } => {
            let outcome = session.login(&email, &password).await;
            if outcome.success {
                println!("{}", "Signed in.".green());
            } else {
                print_failure(outcome.error.as_deref().unwrap_or("Login failed"));
            }
        }
        Commands::Register {
            email,
            password,
            nickname,
        } => {
            let outcome = session.register(&email, &password, &nickname).await;
            if outcome.success {
                println!("{}", "Account created, signed in.".green());
            } else {
                print_failure(outcome.error.as_deref().unwrap_or("Registration failed"));
            }
        }
        Commands::Logout => {
            session.logout().await;
            println!("{}", "Signed out.".green());
        }
        Commands::Whoami => {
            session.bootstrap().await;
            match session.current_user().await {
                Some(user) => {
                    let name = user.nickname.as_deref().unwrap_or(&user.email);
                    println!("{} ({}, role {})", name.bold(), user.email, user.role);
                }
                None => println!("{}", "Not signed in.".yellow()),
            }
        }
        Commands::Jobs { title, page, size } => {
            let params = JobSearchParams {
                title,
                page,
                size,
                ..Default::default()
            };
            match client.get_jobs(&params).await {
                Ok(jobs) => {
                    for job in &jobs.content {
                        let remote = if job.is_remote { " [remote]" } else { "" };
                        println!(
                            "{}  {} @ {}{}",
                            job.id.dimmed(),
                            job.title.bold(),
                            job.company,
                            remote.cyan()
                        );
                    }
                    println!(
                        "page {}/{} ({} total)",
                        jobs.page + 1,
                        jobs.total_pages,
                        jobs.total_elements
                    );
                }
                Err(err) => print_failure(&err.message()),
            }
        }
        Commands::Dashboard => {
            let snapshot = client.dashboard_snapshot().await;
            println!("{}: {}", "latest jobs".bold(), snapshot.latest_jobs.len());
            println!("{}: {}", "matches".bold(), snapshot.matches.len());
            println!("{}: {}", "saved".bold(), snapshot.saved_jobs.len());
            println!("{}: {}", "applied".bold(), snapshot.applied_jobs.len());
            if let Some(summary) = snapshot.summary {
                println!(
                    "{}: {:.1} avg score, {} new",
                    "summary".bold(),
                    summary.average_match_score,
                    summary.new_matches
                );
            }
        }
        Commands::Resumes => match client.get_resumes().await {
            Ok(resumes) => {
                for resume in resumes {
                    let primary = if resume.is_primary { " *" } else { "" };
                    println!(
                        "{}  {}{} ({:?})",
                        resume.id.dimmed(),
                        resume.file_name,
                        primary.green(),
                        resume.status
                    );
                }
            }
            Err(err) => print_failure(&err.message()),
        },
        Commands::Upload { file } => {
            let bytes = tokio::fs::read(&file).await?;
            let file_name = file
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_else(|| "resume.pdf".to_string());
            match client.upload_resume(&file_name, bytes).await {
                Ok(resume) => println!("{} {}", "Uploaded".green(), resume.id),
                Err(err) => print_failure(&err.message()),
            }
        }
        Commands::Generate {
            template_id,
            target_job,
            target_company,
        } => {
            let request = GenerateResumeRequest {
                template_id,
                target_job,
                target_company,
                custom_instructions: None,
            };
            let artifact = client.generate_resume_with_fallback(&request).await;
            if artifact.source == ArtifactSource::Fallback {
                eprintln!("{}", "Generation unavailable, using default template.".yellow());
            }
            println!("{}", artifact.latex);
        }
        Commands::Notifications => match client.get_recent_notifications(5).await {
            Ok(notifications) => {
                for item in notifications {
                    let marker = if item.is_read { " " } else { "*" };
                    println!("{} {}  {}", marker.cyan(), item.title.bold(), item.content);
                }
            }
            Err(err) => print_failure(&err.message()),
        },
    }

    Ok(())
}

fn print_failure(message: &str) {
    eprintln!("{} {}", "Error:".red(), message);
}
