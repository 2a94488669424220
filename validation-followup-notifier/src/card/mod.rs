//! Project board card event handling.
//!
//! This module parses the triggering Actions event payload and classifies
//! the card's content locator. Only cards whose locator contains an
//! `issues` path segment reference an issue; note and pull request cards
//! are filtered out before any API call is made.

mod error;

pub use error::CardError;

use serde::Deserialize;
use std::path::Path;

/// The inbound project board card event.
///
/// Only the card's content locator is of interest; the rest of the payload
/// is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct CardEvent {
    #[serde(default)]
    project_card: Option<ProjectCard>,
}

#[derive(Debug, Clone, Deserialize)]
struct ProjectCard {
    /// Locator of the linked content. Absent for note cards.
    #[serde(default)]
    content_url: Option<String>,
}

impl CardEvent {
    /// Parses an event from its raw JSON payload.
    ///
    /// # Errors
    ///
    /// Returns [`CardError`] if the payload is not valid JSON.
    pub fn from_payload(payload: &str) -> Result<Self, CardError> {
        serde_json::from_str(payload).map_err(|source| CardError::Parse { source })
    }

    /// Loads and parses the event payload file written by the Actions
    /// runner (the `GITHUB_EVENT_PATH` file).
    ///
    /// # Errors
    ///
    /// Returns [`CardError`] if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, CardError> {
        let payload = std::fs::read_to_string(path).map_err(|source| CardError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_payload(&payload)
    }

    /// Returns the card's content locator, if the card links any content.
    pub fn content_url(&self) -> Option<&str> {
        self.project_card
            .as_ref()
            .and_then(|card| card.content_url.as_deref())
    }
}

/// Returns true if the locator references an issue.
///
/// A locator is issue-linked iff one of its `/`-separated segments is the
/// literal `issues`.
#[must_use]
pub fn is_issue_card(content_url: &str) -> bool {
    content_url.split('/').any(|segment| segment == "issues")
}

/// Extracts the issue number as the final path segment of the locator.
///
/// The segment is returned verbatim; callers parse it into a number.
#[must_use]
pub fn issue_number_segment(content_url: &str) -> &str {
    content_url.rsplit('/').next().unwrap_or(content_url)
}
