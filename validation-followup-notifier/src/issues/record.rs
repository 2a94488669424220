//! Snapshot of the issue referenced by the card.

use std::fmt;

/// Read-only snapshot of an issue, fetched once per run.
#[derive(Debug, Clone)]
pub struct IssueRecord {
    /// Opaque GraphQL node id.
    pub id: String,
    /// Wire state, casing preserved (e.g. "CLOSED").
    pub state: String,
    /// Issue title.
    pub title: String,
    /// Numbers of the boards the issue currently belongs to.
    pub board_numbers: Vec<u64>,
}

/// Why an issue does not qualify for a follow-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ineligibility {
    /// The issue is not closed.
    NotClosed {
        /// The issue's actual state.
        state: String,
    },

    /// The issue is not tracked on the validation board.
    NotOnValidationBoard {
        /// The configured validation board number.
        board: u64,
    },
}

impl fmt::Display for Ineligibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotClosed { state } => write!(f, "issue is not closed (state is {state})"),
            Self::NotOnValidationBoard { board } => {
                write!(f, "issue is not on validation board {board}")
            }
        }
    }
}

impl IssueRecord {
    /// Returns true if the issue state is "closed", compared
    /// case-insensitively.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.state.eq_ignore_ascii_case("closed")
    }

    /// Returns true if the issue belongs to the given board.
    #[must_use]
    pub fn on_board(&self, number: u64) -> bool {
        self.board_numbers.contains(&number)
    }

    /// Decides whether the issue qualifies for a follow-up.
    ///
    /// Returns `None` when eligible, or the reason it is not. Ineligibility
    /// is a benign skip, never an error.
    #[must_use]
    pub fn ineligibility(&self, validation_board: u64) -> Option<Ineligibility> {
        if !self.is_closed() {
            return Some(Ineligibility::NotClosed {
                state: self.state.clone(),
            });
        }
        if !self.on_board(validation_board) {
            return Some(Ineligibility::NotOnValidationBoard {
                board: validation_board,
            });
        }
        None
    }
}
