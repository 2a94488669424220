//! CLI for the Validation Followup Notifier.
//!
//! This tool runs as a GitHub Actions step: it reads the card event payload
//! and the Action inputs, then files a follow-up test issue when the card's
//! issue is closed and tracked on the validation board.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use validation_followup_notifier::{CardEvent, Inputs, RunConfig, RunOutcome, Runner, RunnerError};

/// Validation Followup Notifier - File a follow-up test issue when a validated board issue is closed.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Repository the card belongs to, in "owner/name" form.
    #[arg(long, env = "INPUT_REPOSITORY")]
    repository: String,

    /// GitHub token used for API calls.
    #[arg(long, env = "INPUT_GITHUB_TOKEN", hide_env_values = true)]
    github_token: String,

    /// Number of the board that receives the follow-up issue.
    #[arg(long, env = "INPUT_TARGETPROJECT")]
    target_project: String,

    /// Number of the board whose membership marks an issue as validated.
    #[arg(long, env = "INPUT_VALIDATIONPROJECT")]
    validation_project: String,

    /// Text appended to the follow-up issue title.
    #[arg(long, env = "INPUT_NEWISSUESUFFIX", default_value = "")]
    new_issue_suffix: String,

    /// Comma-separated usernames assigned to the follow-up issue.
    #[arg(long, env = "INPUT_ASSIGNEES")]
    assignees: String,

    /// Comma-separated label names applied to the follow-up issue.
    #[arg(long, env = "INPUT_LABELS")]
    labels: String,

    /// Path to the event payload written by the Actions runner.
    #[arg(long, env = "GITHUB_EVENT_PATH")]
    event_path: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    init_tracing();

    // Parse arguments
    let args = Args::parse();

    // Run the main logic
    match run(args).await {
        Ok(outcome) => {
            report_outcome(&outcome);
            ExitCode::from(0)
        }
        Err(e) => {
            error!(error = %e, "Run failed");
            // Failure annotation picked up by the Actions runner.
            println!("::error::{e}");
            ExitCode::from(1)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output)
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        // Use compact formatting without module target paths for cleaner output
        .with(fmt::layer().compact().with_target(false))
        // Allow runtime log filtering via RUST_LOG env var (e.g., RUST_LOG=debug)
        // Falls back to "info" level if RUST_LOG is not set or invalid
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        // Register as the global default subscriber
        .init();
}

/// Main execution logic.
async fn run(args: Args) -> Result<RunOutcome, RunnerError> {
    let event = CardEvent::from_file(&args.event_path)?;
    let config = RunConfig::from_inputs(Inputs {
        repository: args.repository,
        github_token: args.github_token,
        target_board: args.target_project,
        validation_board: args.validation_project,
        title_suffix: args.new_issue_suffix,
        assignees: args.assignees,
        labels: args.labels,
    })?;
    let runner = Runner::new(config)?;
    runner.run(&event).await
}

/// Prints the terminal state of the run.
fn report_outcome(outcome: &RunOutcome) {
    match outcome {
        RunOutcome::Created {
            original_issue,
            title,
        } => {
            info!(issue = original_issue, title = %title, "Follow-up issue filed");
            println!("Done!");
        }
        RunOutcome::SkippedNotIssueCard => {
            println!("Card does not reference an issue, nothing to do.");
        }
        RunOutcome::SkippedIneligible { reason } => {
            println!("Skipped: {reason}.");
        }
    }
}
