//! Operator configuration.
//!
//! The Actions input surface arrives as raw strings; this module parses it
//! into a typed [`RunConfig`], fixed for the duration of the run. Empty
//! assignee or label lists are rejected here, before any remote call.

mod error;

pub use error::ConfigError;

/// Raw operator inputs as supplied by the hosting runner.
///
/// All fields are strings, mirroring the Actions input surface; parsing
/// and validation happen in [`RunConfig::from_inputs`].
#[derive(Debug, Clone)]
pub struct Inputs {
    /// Repository in "owner/name" form.
    pub repository: String,
    /// Bearer credential for API calls.
    pub github_token: String,
    /// Number of the board that receives the follow-up issue.
    pub target_board: String,
    /// Number of the board whose membership marks an issue as validated.
    pub validation_board: String,
    /// Text appended to the follow-up issue title.
    pub title_suffix: String,
    /// Comma-separated usernames to assign.
    pub assignees: String,
    /// Comma-separated label names to apply.
    pub labels: String,
}

/// Parsed configuration for a single run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Repository owner (user or organization).
    repository_owner: String,
    /// Repository name.
    repository_name: String,
    /// GitHub token used for API calls.
    token: String,
    /// Board number that receives the follow-up issue.
    target_board: u64,
    /// Board number whose membership marks an issue as validated.
    validation_board: u64,
    /// Text appended to the follow-up issue title.
    title_suffix: String,
    /// Usernames to assign, in configured order.
    assignees: Vec<String>,
    /// Label names to apply, in configured order.
    labels: Vec<String>,
}

impl RunConfig {
    /// Parses and validates raw operator inputs.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the repository is not "owner/name", a
    /// board number does not parse, or either list is empty.
    pub fn from_inputs(inputs: Inputs) -> Result<Self, ConfigError> {
        let (repository_owner, repository_name) = split_repository(&inputs.repository)?;
        let target_board = parse_board("targetProject", &inputs.target_board)?;
        let validation_board = parse_board("validationProject", &inputs.validation_board)?;

        let assignees = split_list(&inputs.assignees);
        if assignees.is_empty() {
            return Err(ConfigError::NoAssignees);
        }

        let labels = split_list(&inputs.labels);
        if labels.is_empty() {
            return Err(ConfigError::NoLabels);
        }

        Ok(Self {
            repository_owner,
            repository_name,
            token: inputs.github_token,
            target_board,
            validation_board,
            title_suffix: inputs.title_suffix,
            assignees,
            labels,
        })
    }

    /// Returns the repository owner.
    pub fn repository_owner(&self) -> &str {
        &self.repository_owner
    }

    /// Returns the repository name.
    pub fn repository_name(&self) -> &str {
        &self.repository_name
    }

    /// Returns the configured GitHub token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns the target board number.
    pub fn target_board(&self) -> u64 {
        self.target_board
    }

    /// Returns the validation board number.
    pub fn validation_board(&self) -> u64 {
        self.validation_board
    }

    /// Returns the title suffix.
    pub fn title_suffix(&self) -> &str {
        &self.title_suffix
    }

    /// Returns the configured assignees, order preserved.
    pub fn assignees(&self) -> &[String] {
        &self.assignees
    }

    /// Returns the configured labels, order preserved.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}

/// Splits a "owner/name" repository input.
fn split_repository(value: &str) -> Result<(String, String), ConfigError> {
    let invalid = || ConfigError::InvalidRepository {
        value: value.to_string(),
    };

    let (owner, name) = value.split_once('/').ok_or_else(invalid)?;
    if owner.is_empty() || name.is_empty() || name.contains('/') {
        return Err(invalid());
    }

    Ok((owner.to_string(), name.to_string()))
}

/// Parses a board number input, naming the input on failure.
fn parse_board(input: &'static str, value: &str) -> Result<u64, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidBoardNumber {
            input,
            value: value.to_string(),
        })
}

/// Splits a comma-separated list, trimming entries and dropping empties.
fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_inputs() -> Inputs {
        Inputs {
            repository: "octo/widgets".to_string(),
            github_token: "token".to_string(),
            target_board: "9".to_string(),
            validation_board: "3".to_string(),
            title_suffix: "(validated)".to_string(),
            assignees: "alice,bob".to_string(),
            labels: "qa-verified".to_string(),
        }
    }

    #[test]
    fn can_parse_inputs() {
        let config = RunConfig::from_inputs(sample_inputs()).unwrap();

        assert_eq!(config.repository_owner(), "octo");
        assert_eq!(config.repository_name(), "widgets");
        assert_eq!(config.target_board(), 9);
        assert_eq!(config.validation_board(), 3);
        assert_eq!(config.title_suffix(), "(validated)");
        assert_eq!(config.assignees(), ["alice", "bob"]);
        assert_eq!(config.labels(), ["qa-verified"]);
    }

    #[test]
    fn rejects_repository_without_owner() {
        let mut inputs = sample_inputs();
        inputs.repository = "widgets".to_string();

        let result = RunConfig::from_inputs(inputs);
        assert!(matches!(result, Err(ConfigError::InvalidRepository { .. })));
    }

    #[test]
    fn rejects_non_numeric_board() {
        let mut inputs = sample_inputs();
        inputs.target_board = "board-nine".to_string();

        let result = RunConfig::from_inputs(inputs);
        assert!(matches!(
            result,
            Err(ConfigError::InvalidBoardNumber {
                input: "targetProject",
                ..
            })
        ));
    }

    #[test]
    fn rejects_empty_assignees() {
        let mut inputs = sample_inputs();
        inputs.assignees = " , ".to_string();

        let result = RunConfig::from_inputs(inputs);
        assert!(matches!(result, Err(ConfigError::NoAssignees)));
    }

    #[test]
    fn rejects_empty_labels() {
        let mut inputs = sample_inputs();
        inputs.labels = String::new();

        let result = RunConfig::from_inputs(inputs);
        assert!(matches!(result, Err(ConfigError::NoLabels)));
    }

    #[test]
    fn list_entries_are_trimmed_in_order() {
        assert_eq!(split_list(" alice , bob ,, carol"), ["alice", "bob", "carol"]);
    }

    #[test]
    fn duplicate_assignees_are_preserved() {
        assert_eq!(split_list("alice,alice"), ["alice", "alice"]);
    }
}
