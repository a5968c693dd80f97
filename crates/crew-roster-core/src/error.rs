//! Error types for crew-roster domain types

use thiserror::Error;

/// Result type alias for domain operations
pub type Result<T> = std::result::Result<T, RosterError>;

/// Main error type for domain operations
#[derive(Error, Debug)]
pub enum RosterError {
    /// Collection identifier is unusable
    #[error("Invalid collection id: {0}")]
    InvalidCollectionId(String),
}
