//! Registry client error types
//!
//! Errors raised while talking to the remote registry: transport failures,
//! non-success HTTP statuses, JSON-RPC error objects and undecodable bodies.

use thiserror::Error;

/// Result type alias for registry operations
pub type RpcResult<T> = Result<T, RpcError>;

/// Registry client errors
#[derive(Debug, Error)]
pub enum RpcError {
    /// Connection, TLS or timeout failure
    #[error("Transport error: {0}")]
    Transport(String),

    /// Request timed out
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// Endpoint answered with a non-success HTTP status
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// Endpoint answered with a JSON-RPC error object
    #[error("JSON-RPC error {code}: {message}")]
    JsonRpc { code: i64, message: String },

    /// Response body could not be decoded
    #[error("Decode error: {0}")]
    Decode(String),

    /// Response carried neither a result nor an error
    #[error("Response for {0} carried no result")]
    MissingResult(String),

    /// Client configuration is unusable
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl RpcError {
    /// Check whether retrying the same request could succeed
    pub fn is_retryable(&self) -> bool {
        match self {
            RpcError::Transport(_) | RpcError::Timeout(_) => true,
            RpcError::Status { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }

    /// Check if the registry rejected the request parameters
    pub fn is_invalid_params(&self) -> bool {
        matches!(self, RpcError::JsonRpc { code, .. } if *code == -32602)
    }
}

impl From<reqwest::Error> for RpcError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            RpcError::Timeout(err.to_string())
        } else if err.is_decode() {
            RpcError::Decode(err.to_string())
        } else {
            RpcError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for RpcError {
    fn from(err: serde_json::Error) -> Self {
        RpcError::Decode(err.to_string())
    }
}

impl From<url::ParseError> for RpcError {
    fn from(err: url::ParseError) -> Self {
        RpcError::Configuration(format!("Invalid endpoint URL: {}", err))
    }
}
