//! Gateway error types.

use thiserror::Error;

/// Errors that can occur while talking to the GraphQL endpoint.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport or protocol error from the underlying GitHub client.
    #[error("GitHub API error: {0}")]
    GitHub(#[from] octocrab::Error),

    /// The response carried a non-empty `errors` array.
    #[error("GraphQL operation '{operation}' failed: {}", .messages.join("; "))]
    Graphql {
        operation: &'static str,
        messages: Vec<String>,
    },

    /// The response envelope had no `data` field to decode.
    #[error("GraphQL operation '{operation}' returned no data")]
    MissingData { operation: &'static str },
}
