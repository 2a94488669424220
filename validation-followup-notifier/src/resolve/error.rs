//! Identifier resolution error types.

use thiserror::Error;

/// Errors that can occur while resolving names to opaque ids.
///
/// Every not-found variant names the offending key; resolution aborts at
/// the first failure.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Gateway failure during a lookup.
    #[error(transparent)]
    Api(#[from] crate::api::ApiError),

    /// The target board does not exist.
    #[error("Target board {number} not found")]
    BoardNotFound { number: u64 },

    /// An assignee username did not resolve.
    #[error("Invalid assignee '{login}'")]
    AssigneeNotFound { login: String },

    /// A label name did not resolve.
    #[error("Invalid label '{name}'")]
    LabelNotFound { name: String },

    /// The repository itself did not resolve.
    #[error("Repository {owner}/{name} not found")]
    RepositoryNotFound { owner: String, name: String },
}
