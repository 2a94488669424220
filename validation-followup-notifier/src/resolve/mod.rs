//! Resolution of human-readable names to opaque API ids.
//!
//! Every identifier used by the creation mutation is resolved here through
//! independent lookups: target board, each assignee, each label, and the
//! repository. Lookups run strictly sequentially and abort on the first
//! unresolved identifier.

mod error;

pub use error::ResolveError;

use crate::api::GraphQlClient;
use crate::config::RunConfig;
use serde::{Deserialize, Serialize};
use tracing::{info, info_span, Instrument};

const BOARD_ID_QUERY: &str = r"
query BoardId($owner: String!, $name: String!, $number: Int!) {
  repository(owner: $owner, name: $name) {
    project(number: $number) {
      id
    }
  }
}";

const ASSIGNEE_ID_QUERY: &str = r"
query AssigneeId($login: String!) {
  user(login: $login) {
    id
  }
}";

const LABEL_ID_QUERY: &str = r"
query LabelId($owner: String!, $name: String!, $label: String!) {
  repository(owner: $owner, name: $name) {
    label(name: $label) {
      id
    }
  }
}";

const REPOSITORY_ID_QUERY: &str = r"
query RepositoryId($owner: String!, $name: String!) {
  repository(owner: $owner, name: $name) {
    id
  }
}";

#[derive(Serialize)]
struct BoardVariables<'a> {
    owner: &'a str,
    name: &'a str,
    number: u64,
}

#[derive(Serialize)]
struct AssigneeVariables<'a> {
    login: &'a str,
}

#[derive(Serialize)]
struct LabelVariables<'a> {
    owner: &'a str,
    name: &'a str,
    label: &'a str,
}

#[derive(Serialize)]
struct RepositoryVariables<'a> {
    owner: &'a str,
    name: &'a str,
}

#[derive(Debug, Deserialize)]
struct Node {
    id: String,
}

#[derive(Debug, Deserialize)]
struct BoardData {
    repository: Option<BoardRepository>,
}

#[derive(Debug, Deserialize)]
struct BoardRepository {
    project: Option<Node>,
}

#[derive(Debug, Deserialize)]
struct AssigneeData {
    user: Option<Node>,
}

#[derive(Debug, Deserialize)]
struct LabelData {
    repository: Option<LabelRepository>,
}

#[derive(Debug, Deserialize)]
struct LabelRepository {
    label: Option<Node>,
}

#[derive(Debug, Deserialize)]
struct RepositoryData {
    repository: Option<Node>,
}

/// The full identifier set required by the creation mutation.
///
/// Built incrementally; the absence of any one mapping aborts the run
/// before it is complete.
#[derive(Debug, Clone)]
pub struct ResolvedIds {
    /// Target board id.
    pub board_id: String,
    /// Assignee ids, in configured order, duplicates preserved.
    pub assignee_ids: Vec<String>,
    /// Label ids, in configured order.
    pub label_ids: Vec<String>,
    /// Repository id.
    pub repository_id: String,
}

/// Resolves the target board id by repository and board number.
///
/// # Errors
///
/// Returns [`ResolveError::BoardNotFound`] if the board does not exist,
/// or a gateway error.
pub async fn board_id(
    client: &GraphQlClient,
    owner: &str,
    name: &str,
    number: u64,
) -> Result<String, ResolveError> {
    let variables = BoardVariables {
        owner,
        name,
        number,
    };
    let data: BoardData = client.run("BoardId", BOARD_ID_QUERY, &variables).await?;

    data.repository
        .and_then(|repository| repository.project)
        .map(|node| node.id)
        .ok_or(ResolveError::BoardNotFound { number })
}

/// Resolves a user id by login.
///
/// # Errors
///
/// Returns [`ResolveError::AssigneeNotFound`] if the user does not exist,
/// or a gateway error.
pub async fn user_id(client: &GraphQlClient, login: &str) -> Result<String, ResolveError> {
    let variables = AssigneeVariables { login };
    let data: AssigneeData = client
        .run("AssigneeId", ASSIGNEE_ID_QUERY, &variables)
        .await?;

    data.user
        .map(|node| node.id)
        .ok_or_else(|| ResolveError::AssigneeNotFound {
            login: login.to_string(),
        })
}

/// Resolves a label id by repository and label name.
///
/// # Errors
///
/// Returns [`ResolveError::LabelNotFound`] if the label does not exist,
/// or a gateway error.
pub async fn label_id(
    client: &GraphQlClient,
    owner: &str,
    name: &str,
    label: &str,
) -> Result<String, ResolveError> {
    let variables = LabelVariables { owner, name, label };
    let data: LabelData = client.run("LabelId", LABEL_ID_QUERY, &variables).await?;

    data.repository
        .and_then(|repository| repository.label)
        .map(|node| node.id)
        .ok_or_else(|| ResolveError::LabelNotFound {
            name: label.to_string(),
        })
}

/// Resolves the repository id.
///
/// # Errors
///
/// Returns [`ResolveError::RepositoryNotFound`] if the repository does not
/// exist, or a gateway error.
pub async fn repository_id(
    client: &GraphQlClient,
    owner: &str,
    name: &str,
) -> Result<String, ResolveError> {
    let variables = RepositoryVariables { owner, name };
    let data: RepositoryData = client
        .run("RepositoryId", REPOSITORY_ID_QUERY, &variables)
        .await?;

    data.repository
        .map(|node| node.id)
        .ok_or_else(|| ResolveError::RepositoryNotFound {
            owner: owner.to_string(),
            name: name.to_string(),
        })
}

/// Resolves every identifier the creation mutation needs.
///
/// Lookups run strictly sequentially: target board, then each assignee in
/// configured order, then each label in configured order, then the
/// repository. The first unresolved identifier aborts resolution; the
/// remaining lookups are never attempted.
///
/// # Errors
///
/// Returns [`ResolveError`] naming the first unresolved identifier, or a
/// gateway error.
pub async fn resolve_all(
    client: &GraphQlClient,
    config: &RunConfig,
) -> Result<ResolvedIds, ResolveError> {
    let span = info_span!(
        "resolve_identifiers",
        target_board = config.target_board(),
        assignees = config.assignees().len(),
        labels = config.labels().len()
    );

    async {
        let owner = config.repository_owner();
        let name = config.repository_name();

        let board_id = board_id(client, owner, name, config.target_board()).await?;
        info!(board = config.target_board(), "Resolved target board");

        let mut assignee_ids = Vec::with_capacity(config.assignees().len());
        for login in config.assignees() {
            assignee_ids.push(user_id(client, login).await?);
        }
        info!(count = assignee_ids.len(), "Resolved assignees");

        let mut label_ids = Vec::with_capacity(config.labels().len());
        for label in config.labels() {
            label_ids.push(label_id(client, owner, name, label).await?);
        }
        info!(count = label_ids.len(), "Resolved labels");

        let repository_id = repository_id(client, owner, name).await?;
        info!("Resolved repository");

        Ok(ResolvedIds {
            board_id,
            assignee_ids,
            label_ids,
            repository_id,
        })
    }
    .instrument(span)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_errors_name_the_offending_key() {
        assert_eq!(
            ResolveError::BoardNotFound { number: 9 }.to_string(),
            "Target board 9 not found"
        );
        assert_eq!(
            ResolveError::AssigneeNotFound {
                login: "alice".to_string()
            }
            .to_string(),
            "Invalid assignee 'alice'"
        );
        assert_eq!(
            ResolveError::LabelNotFound {
                name: "qa-verified".to_string()
            }
            .to_string(),
            "Invalid label 'qa-verified'"
        );
    }

    #[test]
    fn absent_board_decodes_to_none() {
        let data: BoardData = serde_json::from_str(r#"{"repository":{"project":null}}"#).unwrap();
        assert!(data.repository.unwrap().project.is_none());
    }
}
