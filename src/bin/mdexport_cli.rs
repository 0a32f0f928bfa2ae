//! Terminal client: submits a markdown file for export and waits for the result.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};

use mdexport::application::ports::ExportApi;
use mdexport::application::services::{JobPoller, PollOutcome};
use mdexport::domain::ExportTarget;
use mdexport::infrastructure::client::HttpExportClient;
use mdexport::infrastructure::observability::{TracingConfig, init_tracing};

#[derive(Parser)]
#[command(name = "mdexport-cli", about = "Submit markdown exports and follow their status")]
struct Cli {
    /// Base URL of the export API
    #[arg(long, env = "MDEXPORT_URL", default_value = "http://localhost:3000")]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Submit a markdown file and poll until the export finishes
    Submit {
        file: PathBuf,
        #[arg(long, value_parser = parse_target, default_value = "pdf")]
        target: ExportTarget,
        /// Seconds between status polls
        #[arg(long, default_value_t = 2)]
        interval: u64,
    },
    /// Print the current state of a job
    Status { job_id: String },
}

fn parse_target(raw: &str) -> Result<ExportTarget, String> {
    raw.parse()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing(&TracingConfig::default());

    let cli = Cli::parse();
    let client = Arc::new(HttpExportClient::new(cli.base_url));

    match cli.command {
        Command::Submit {
            file,
            target,
            interval,
        } => {
            let markdown = tokio::fs::read_to_string(&file)
                .await
                .with_context(|| format!("Failed to read {}", file.display()))?;

            let poller = JobPoller::new(client, Duration::from_secs(interval.max(1)));
            match poller.submit_and_wait(&markdown, target).await? {
                PollOutcome::Ready { artifact_url } => {
                    println!(
                        "Export completed: {}",
                        artifact_url.as_deref().unwrap_or("(no artifact url)")
                    );
                }
                PollOutcome::Failed { error } => {
                    anyhow::bail!(
                        "Export failed: {}",
                        error.as_deref().unwrap_or("unknown error")
                    );
                }
            }
        }
        Command::Status { job_id } => match client.fetch_job(&job_id).await? {
            Some(job) => println!(
                "{} [{}] {} artifact={} error={}",
                job.id,
                job.target,
                job.status,
                job.artifact_url.as_deref().unwrap_or("-"),
                job.error.as_deref().unwrap_or("-"),
            ),
            None => anyhow::bail!("Job not found: {}", job_id),
        },
    }

    Ok(())
}
