//! Error types returned by the job board client.

use reqwest::{header::InvalidHeaderValue, StatusCode};
use thiserror::Error;

/// Result type for job board operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents all the ways a request to the job board API can fail.
///
/// None of these errors are retried or translated by the client. They are
/// handed to the caller exactly as they were encountered.
#[derive(Debug, Error)]
pub enum Error {
    /// The HTTP request could not be sent, or its response could not be read.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status, without a GraphQL body.
    #[error("HTTP {status}: {body}")]
    Status {
        /// The response status.
        status: StatusCode,

        /// The raw response body.
        body: String,
    },

    /// The server returned one or more GraphQL errors.
    #[error("GraphQL error: {}", join_messages(.0))]
    GraphQL(Vec<graphql_client::Error>),

    /// The response did not contain the requested field.
    #[error("missing `{0}` in response data")]
    MissingData(&'static str),

    /// A cache-only read found nothing under the given key.
    #[error("no cached result for {0}")]
    CacheMiss(String),

    /// The request or response payload could not be (de)serialized.
    #[error("invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),

    /// The configured endpoint is not a valid URL.
    #[error("invalid endpoint URL: {0}")]
    Url(#[from] url::ParseError),

    /// A request header (most likely the access token) has an invalid format.
    #[error("invalid header value: {0}")]
    Header(#[from] InvalidHeaderValue),

    /// The configuration could not be loaded.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// Returns `true` if the server rejected the request because of missing or
    /// expired credentials.
    ///
    /// This only classifies the error, it is still up to the caller to act on
    /// it (for example by logging out the session).
    pub fn is_unauthorized(&self) -> bool {
        match self {
            Error::Status { status, .. } => *status == StatusCode::UNAUTHORIZED,
            Error::GraphQL(errors) => errors.iter().any(|e| e.message == "Unauthorized"),
            _ => false,
        }
    }
}

fn join_messages(errors: &[graphql_client::Error]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
