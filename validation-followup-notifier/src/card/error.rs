//! Event payload error types.

use thiserror::Error;

/// Errors that can occur while loading the card event payload.
#[derive(Debug, Error)]
pub enum CardError {
    /// Failed to read the payload file.
    #[error("Failed to read event payload '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the payload JSON.
    #[error("Failed to parse event payload: {source}")]
    Parse {
        #[source]
        source: serde_json::Error,
    },
}
