//! Issue lookup and follow-up creation.
//!
//! This module fetches the issue referenced by a card, decides whether it
//! qualifies for a follow-up, and issues the single creation mutation.

mod record;
mod request;

pub use record::{Ineligibility, IssueRecord};
pub use request::NewIssueRequest;

use crate::api::{ApiError, GraphQlClient};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, info_span, Instrument};

const ISSUE_QUERY: &str = r"
query IssueWithBoards($owner: String!, $name: String!, $number: Int!) {
  repository(owner: $owner, name: $name) {
    issue(number: $number) {
      id
      state
      title
      projectCards {
        nodes {
          project {
            number
          }
        }
      }
    }
  }
}";

const CREATE_ISSUE_MUTATION: &str = r"
mutation CreateFollowupIssue($createIssue: CreateIssueInput!) {
  createIssue(input: $createIssue) {
    issue {
      id
      number
    }
  }
}";

#[derive(Serialize)]
struct IssueVariables<'a> {
    owner: &'a str,
    name: &'a str,
    number: u64,
}

#[derive(Debug, Deserialize)]
struct IssueData {
    repository: Option<IssueRepository>,
}

#[derive(Debug, Deserialize)]
struct IssueRepository {
    issue: Option<IssueNode>,
}

#[derive(Debug, Deserialize)]
struct IssueNode {
    id: String,
    state: String,
    title: String,
    #[serde(rename = "projectCards")]
    project_cards: CardConnection,
}

#[derive(Debug, Deserialize)]
struct CardConnection {
    nodes: Vec<CardNode>,
}

#[derive(Debug, Deserialize)]
struct CardNode {
    project: BoardRef,
}

#[derive(Debug, Deserialize)]
struct BoardRef {
    number: u64,
}

#[derive(Serialize)]
struct CreateIssueVariables<'a> {
    #[serde(rename = "createIssue")]
    create_issue: &'a NewIssueRequest,
}

#[derive(Debug, Deserialize)]
struct CreateIssueData {
    #[serde(rename = "createIssue")]
    create_issue: Option<CreateIssuePayload>,
}

#[derive(Debug, Deserialize)]
struct CreateIssuePayload {
    issue: Option<CreatedIssueRef>,
}

/// Reference to the issue created by the mutation.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedIssueRef {
    /// Opaque GraphQL node id.
    pub id: String,
    /// Issue number in the target repository.
    pub number: u64,
}

/// Fetches the issue's id, state, title and board memberships.
///
/// Returns `None` if the issue does not exist; callers treat that as a
/// fatal condition for the run.
///
/// # Errors
///
/// Returns [`ApiError`] if the lookup fails.
pub async fn fetch_issue(
    client: &GraphQlClient,
    owner: &str,
    name: &str,
    number: u64,
) -> Result<Option<IssueRecord>, ApiError> {
    let span = info_span!("fetch_issue", owner, name, issue = number);

    async {
        info!("Fetching issue");

        let variables = IssueVariables {
            owner,
            name,
            number,
        };
        let data: IssueData = client
            .run("IssueWithBoards", ISSUE_QUERY, &variables)
            .await?;

        let record = data
            .repository
            .and_then(|repository| repository.issue)
            .map(|issue| IssueRecord {
                id: issue.id,
                state: issue.state,
                title: issue.title,
                board_numbers: issue
                    .project_cards
                    .nodes
                    .into_iter()
                    .map(|node| node.project.number)
                    .collect(),
            });

        debug!(?record, "Issue data");
        Ok(record)
    }
    .instrument(span)
    .await
}

/// Creates the follow-up issue via a single mutation.
///
/// The created issue is not read back; success is assumed when the call
/// does not fault.
///
/// # Errors
///
/// Returns [`ApiError`] if the mutation fails.
pub async fn create_followup_issue(
    client: &GraphQlClient,
    request: &NewIssueRequest,
) -> Result<Option<CreatedIssueRef>, ApiError> {
    let span = info_span!("create_followup_issue", title = %request.title);

    async {
        info!("Creating follow-up issue");

        let variables = CreateIssueVariables {
            create_issue: request,
        };
        let data: CreateIssueData = client
            .run("CreateFollowupIssue", CREATE_ISSUE_MUTATION, &variables)
            .await?;

        let created = data.create_issue.and_then(|payload| payload.issue);
        if let Some(issue) = &created {
            info!(id = %issue.id, number = issue.number, "Follow-up issue created");
        }
        Ok(created)
    }
    .instrument(span)
    .await
}

/// Composes the follow-up issue title: original title plus suffix,
/// space-joined.
#[must_use]
pub fn compose_title(original: &str, suffix: &str) -> String {
    format!("{original} {suffix}")
}

/// Composes the follow-up issue body referencing the original issue.
#[must_use]
pub fn compose_body(number: u64) -> String {
    format!("A new issue has been completed, #{number}. Please test it.")
}
