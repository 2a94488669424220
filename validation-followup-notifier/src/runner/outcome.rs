//! Terminal states of a run.

use crate::issues::Ineligibility;

/// How a run ended.
///
/// Skips are successful terminal states with no side effects, distinct
/// from a fatal abort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// A follow-up issue was created.
    Created {
        /// Number of the original issue.
        original_issue: u64,
        /// Title of the follow-up issue.
        title: String,
    },

    /// The card does not reference an issue.
    SkippedNotIssueCard,

    /// The issue did not qualify for a follow-up.
    SkippedIneligible {
        /// Why the issue did not qualify.
        reason: Ineligibility,
    },
}
