//! Error types for the client layer.

use thiserror::Error;

/// Result type for remote client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors that can occur talking to the remote record store.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Required configuration attributes are missing.
    #[error(
        "invalid environment: oauth_token, refresh_token, instance_url, client_id and client_secret must all be set"
    )]
    InvalidEnvironment,

    /// Transport-level failure.
    #[error("network error: {0}")]
    Network(String),

    /// Authentication or token refresh failure.
    #[error("authentication error: {0}")]
    Auth(String),

    /// The remote API rejected the request.
    #[error("remote api error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Update attributes carry no identity field.
    #[error("update attributes must include the `Id` field")]
    MissingId,
}
