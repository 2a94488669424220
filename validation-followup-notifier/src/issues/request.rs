//! Write-only payload for the follow-up issue mutation.

use crate::resolve::ResolvedIds;
use serde::Serialize;

/// `CreateIssueInput` payload for the creation mutation.
///
/// Milestone and client mutation id are carried as explicit nulls rather
/// than omitted, matching the wire payload the API expects.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewIssueRequest {
    /// Composed title (original title plus suffix).
    pub title: String,
    /// Generated body referencing the original issue.
    pub body: String,
    /// Resolved assignee ids, in configured order.
    pub assignee_ids: Vec<String>,
    /// Resolved label ids, in configured order.
    pub label_ids: Vec<String>,
    /// The target board id, as the sole board association.
    pub project_ids: Vec<String>,
    /// Resolved repository id.
    pub repository_id: String,
    /// Always null.
    pub milestone_id: Option<String>,
    /// Always null.
    pub client_mutation_id: Option<String>,
}

impl NewIssueRequest {
    /// Composes the mutation payload from a resolved identifier set.
    #[must_use]
    pub fn from_parts(title: String, body: String, ids: &ResolvedIds) -> Self {
        Self {
            title,
            body,
            assignee_ids: ids.assignee_ids.clone(),
            label_ids: ids.label_ids.clone(),
            project_ids: vec![ids.board_id.clone()],
            repository_id: ids.repository_id.clone(),
            milestone_id: None,
            client_mutation_id: None,
        }
    }
}
