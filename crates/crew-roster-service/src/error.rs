//! Service-layer error types
//!
//! Only systemic failures are errors here. An asset whose name does not yield
//! an identifier is filtered out by the extractor and never reaches this type.

use crew_roster_rpc::RpcError;
use thiserror::Error;

/// Result type alias for service operations
pub type ServiceResult<T> = std::result::Result<T, ServiceError>;

/// Service-layer error types
#[derive(Error, Debug)]
pub enum ServiceError {
    /// The registry query for an owner failed
    #[error("Remote query failed for owner {owner}: {source}")]
    RemoteQueryFailed {
        owner: String,
        #[source]
        source: RpcError,
    },

    /// The registry kept returning full pages past the page limit
    #[error("Owner {owner} still had full pages after {max_pages} pages")]
    PageLimitExceeded { owner: String, max_pages: u32 },

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Writing the roster failed
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}

impl ServiceError {
    /// Check if this error came from the remote registry
    pub fn is_remote(&self) -> bool {
        matches!(self, ServiceError::RemoteQueryFailed { .. })
    }
}
