//! Orchestrates the validation-and-creation workflow.
//!
//! Control flows strictly top to bottom: filter the card event, look up
//! the issue, check eligibility, resolve every identifier, create the
//! follow-up issue. Each step is a precondition for the next; benign skips
//! end the run successfully while any other failure aborts it.

mod error;
mod outcome;

pub use error::RunnerError;
pub use outcome::RunOutcome;

use crate::api::GraphQlClient;
use crate::card::{self, CardEvent};
use crate::config::RunConfig;
use crate::issues::{
    compose_body, compose_title, create_followup_issue, fetch_issue, NewIssueRequest,
};
use crate::resolve::resolve_all;
use tracing::info;

/// Drives a single run of the workflow.
pub struct Runner {
    config: RunConfig,
    client: GraphQlClient,
}

impl Runner {
    /// Builds a runner from the provided configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] if the API client cannot be constructed.
    pub fn new(config: RunConfig) -> Result<Self, RunnerError> {
        let client = GraphQlClient::new(config.token())?;
        Ok(Self { config, client })
    }

    /// Builds a runner with an externally constructed client.
    ///
    /// Used by tests to point the run at a mock server.
    #[must_use]
    pub fn with_client(config: RunConfig, client: GraphQlClient) -> Self {
        Self { config, client }
    }

    /// Executes the workflow for one card event.
    ///
    /// The run is a pure function of the event and the configuration; no
    /// ambient state is consulted. Exactly one follow-up issue is created
    /// on the happy path, none otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] on the first fatal condition: issue not
    /// found, unresolved identifier, or gateway fault.
    pub async fn run(&self, event: &CardEvent) -> Result<RunOutcome, RunnerError> {
        let Some(content_url) = event.content_url() else {
            info!("Card has no linked content, nothing to do");
            return Ok(RunOutcome::SkippedNotIssueCard);
        };

        if !card::is_issue_card(content_url) {
            info!(content_url, "Not an issue card, nothing to do");
            return Ok(RunOutcome::SkippedNotIssueCard);
        }

        let segment = card::issue_number_segment(content_url);
        let number: u64 = segment
            .parse()
            .map_err(|_| RunnerError::InvalidIssueNumber {
                segment: segment.to_string(),
            })?;

        let owner = self.config.repository_owner();
        let name = self.config.repository_name();

        let issue = fetch_issue(&self.client, owner, name, number)
            .await?
            .ok_or(RunnerError::IssueNotFound { number })?;

        if let Some(reason) = issue.ineligibility(self.config.validation_board()) {
            info!(issue = number, %reason, "Skipping, nothing to do");
            return Ok(RunOutcome::SkippedIneligible { reason });
        }

        let ids = resolve_all(&self.client, &self.config).await?;

        let title = compose_title(&issue.title, self.config.title_suffix());
        let body = compose_body(number);
        let request = NewIssueRequest::from_parts(title.clone(), body, &ids);

        create_followup_issue(&self.client, &request).await?;

        info!("Done!");
        Ok(RunOutcome::Created {
            original_issue: number,
            title,
        })
    }
}
