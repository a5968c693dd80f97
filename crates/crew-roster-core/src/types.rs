//! Core type definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, RosterError};

/// Collection that every crew member asset is grouped under
pub const DEFAULT_COLLECTION_ID: &str = "CREWSAACJTKHKhZi96pLRJXsxiGbdZaQHdFW9r7qGJkB";

/// Label that precedes the crew number in an asset's display name
pub const DEFAULT_NAME_PREFIX: &str = "CREW #";

/// Numeric identifier parsed from an asset's display name
pub type Identifier = u64;

/// Opaque identifier of a collection, compared by exact string equality
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CollectionId(String);

impl CollectionId {
    /// Create a collection id, rejecting empty or blank values
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(RosterError::InvalidCollectionId(
                "Collection id cannot be empty".to_string(),
            ));
        }
        Ok(Self(id))
    }

    /// Get the raw string value
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check whether a grouping value refers to this collection
    pub fn matches(&self, group_value: &str) -> bool {
        self.0 == group_value
    }
}

impl Default for CollectionId {
    fn default() -> Self {
        Self(DEFAULT_COLLECTION_ID.to_string())
    }
}

impl fmt::Display for CollectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CollectionId {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self> {
        CollectionId::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_id_default() {
        let id = CollectionId::default();
        assert_eq!(id.as_str(), DEFAULT_COLLECTION_ID);
    }

    #[test]
    fn test_collection_id_rejects_blank() {
        assert!(CollectionId::new("").is_err());
        assert!(CollectionId::new("   ").is_err());
    }

    #[test]
    fn test_collection_id_matches_exactly() {
        let id: CollectionId = "abc".parse().unwrap();
        assert!(id.matches("abc"));
        assert!(!id.matches("ABC"));
        assert!(!id.matches("abc "));
    }

    #[test]
    fn test_collection_id_serde_transparent() {
        let id = CollectionId::new("abc").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"abc\"");
    }
}
