//! Configuration error types.

use thiserror::Error;

/// Errors that can occur while parsing operator inputs.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The repository input was not in "owner/name" form.
    #[error("Invalid repository '{value}', expected owner/name")]
    InvalidRepository { value: String },

    /// A board number input did not parse as an integer.
    #[error("Invalid {input} '{value}', expected a board number")]
    InvalidBoardNumber {
        input: &'static str,
        value: String,
    },

    /// The assignee list was empty.
    #[error("Assignees missing")]
    NoAssignees,

    /// The label list was empty.
    #[error("Labels missing")]
    NoLabels,
}
