#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod api;
pub mod card;
pub mod config;
pub mod issues;
pub mod resolve;
pub mod runner;

pub use api::{ApiError, GraphQlClient};
pub use card::{is_issue_card, issue_number_segment, CardError, CardEvent};
pub use config::{ConfigError, Inputs, RunConfig};
pub use issues::{
    compose_body, compose_title, create_followup_issue, fetch_issue, CreatedIssueRef,
    Ineligibility, IssueRecord, NewIssueRequest,
};
pub use resolve::{resolve_all, ResolveError, ResolvedIds};
pub use runner::{RunOutcome, Runner, RunnerError};
