//! GraphQL gateway over the GitHub API.
//!
//! A single operation: execute a named query or mutation with typed
//! variables and decode a typed response. The gateway knows nothing about
//! the domain schema beyond the `{data, errors}` envelope; callers hand it
//! query text and variables. No retry, no timeout tuning, no rate limiting:
//! faults propagate to the caller.

mod error;

pub use error::ApiError;

use octocrab::Octocrab;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Response envelope returned by the GraphQL endpoint.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: Option<T>,
    errors: Option<Vec<GraphQlError>>,
}

/// A single entry of the `errors` array.
#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

/// Authenticated client for the GitHub GraphQL endpoint.
pub struct GraphQlClient {
    octocrab: Octocrab,
}

impl GraphQlClient {
    /// Builds a client authenticated with a personal token.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the underlying client cannot be constructed.
    pub fn new(token: &str) -> Result<Self, ApiError> {
        let octocrab = Octocrab::builder()
            .personal_token(token.to_string())
            .build()?;
        Ok(Self { octocrab })
    }

    /// Builds a client against a custom base URI.
    ///
    /// Used by tests to point the gateway at a mock server.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the URI is invalid or the client cannot be
    /// constructed.
    pub fn with_base_uri(token: &str, base_uri: &str) -> Result<Self, ApiError> {
        let octocrab = Octocrab::builder()
            .personal_token(token.to_string())
            .base_uri(base_uri)?
            .build()?;
        Ok(Self { octocrab })
    }

    /// Executes a named query or mutation and decodes its `data` payload.
    ///
    /// The request body is `{query, variables}`; authorization and JSON
    /// content negotiation are handled by the underlying client.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, a non-empty `errors`
    /// array, or an absent `data` field.
    pub async fn run<V, T>(
        &self,
        operation: &'static str,
        query: &'static str,
        variables: &V,
    ) -> Result<T, ApiError>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        debug!(operation, "Dispatching GraphQL request");

        let payload = serde_json::json!({
            "query": query,
            "variables": variables,
        });

        let envelope: Envelope<T> = self.octocrab.graphql(&payload).await?;

        if let Some(errors) = envelope.errors {
            if !errors.is_empty() {
                return Err(ApiError::Graphql {
                    operation,
                    messages: errors.into_iter().map(|e| e.message).collect(),
                });
            }
        }

        envelope.data.ok_or(ApiError::MissingData { operation })
    }
}
