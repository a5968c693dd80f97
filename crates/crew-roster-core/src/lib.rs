//! Core domain models and types for crew-roster
//!
//! This crate contains the data structures that describe assets returned by a
//! Digital Asset Standard (DAS) registry, the collection identifier used to
//! select crew members, and the error type shared by the other crates.

pub mod asset;
pub mod error;
pub mod types;

// Re-exports for convenience
pub use asset::{Asset, AssetContent, AssetMetadata, Grouping};
pub use error::{Result, RosterError};
pub use types::{CollectionId, Identifier, DEFAULT_COLLECTION_ID, DEFAULT_NAME_PREFIX};
