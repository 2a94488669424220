//! Runner error types.

/// Fatal conditions that abort a run.
///
/// Raised at the point of detection and caught once at the top level,
/// where the message is reported to the host.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Operator input parsing errors.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// Event payload loading errors.
    #[error(transparent)]
    Event(#[from] crate::card::CardError),

    /// Gateway errors.
    #[error(transparent)]
    Api(#[from] crate::api::ApiError),

    /// Identifier resolution errors.
    #[error(transparent)]
    Resolve(#[from] crate::resolve::ResolveError),

    /// The referenced issue does not exist.
    #[error("Issue {number} not found")]
    IssueNotFound { number: u64 },

    /// The locator's final segment was not a number.
    #[error("Invalid issue number '{segment}' in card content URL")]
    InvalidIssueNumber { segment: String },
}
