//! Asset records returned by a DAS registry
//!
//! Registry responses vary a lot between asset interfaces (compressed NFTs,
//! Core assets, fungibles), so every field here is optional. Code that reads an
//! asset goes through the accessors, which return `None` instead of failing
//! when a field is missing. A field of the wrong JSON type is read as missing,
//! so one odd record never spoils the rest of a page.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// Deserialize an optional field, reading a value of the wrong shape as `None`
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Grouping key the registry uses for collection membership
pub const COLLECTION_GROUP_KEY: &str = "collection";

/// One `{group_key, group_value}` pair from an asset's grouping list
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Grouping {
    /// Kind of grouping, usually "collection"
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub group_key: Option<String>,

    /// Identifier of the group the asset belongs to
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub group_value: Option<String>,
}

impl Grouping {
    /// Create a collection grouping entry
    pub fn collection(collection_id: impl Into<String>) -> Self {
        Self {
            group_key: Some(COLLECTION_GROUP_KEY.to_string()),
            group_value: Some(collection_id.into()),
        }
    }
}

/// Off-chain metadata block of an asset
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AssetMetadata {
    /// Display name, e.g. "CREW #42"
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,

    /// Ticker-like symbol
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub symbol: Option<String>,
}

/// Content block of an asset
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AssetContent {
    /// URI of the JSON metadata document
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub json_uri: Option<String>,

    /// Parsed metadata
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub metadata: Option<AssetMetadata>,
}

/// A digital asset as reported by the registry
///
/// Read-only from this crate's point of view. Unknown fields in the registry
/// response are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Asset {
    /// Asset address
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,

    /// Asset interface, e.g. "V1_NFT" or "MplCoreAsset"
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub interface: Option<String>,

    /// Content and metadata
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub content: Option<AssetContent>,

    /// Ordered grouping entries
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub grouping: Option<Vec<Grouping>>,
}

impl Asset {
    /// Create a builder for constructing an asset
    pub fn builder() -> AssetBuilder {
        AssetBuilder::default()
    }

    /// Grouping entries, empty when the registry omitted them
    pub fn groupings(&self) -> &[Grouping] {
        self.grouping.as_deref().unwrap_or(&[])
    }

    /// Group value of the first grouping entry
    ///
    /// Collection membership is decided on this entry alone.
    pub fn first_group_value(&self) -> Option<&str> {
        self.groupings().first()?.group_value.as_deref()
    }

    /// Display name from `content.metadata.name`
    pub fn display_name(&self) -> Option<&str> {
        self.content.as_ref()?.metadata.as_ref()?.name.as_deref()
    }

    /// Identifier used in log output
    pub fn label(&self) -> &str {
        self.id.as_deref().unwrap_or("<unknown>")
    }
}

/// Builder for Asset
#[derive(Debug, Default)]
pub struct AssetBuilder {
    id: Option<String>,
    name: Option<String>,
    grouping: Option<Vec<Grouping>>,
}

impl AssetBuilder {
    /// Set the asset address
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the display name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Append a collection grouping entry
    pub fn collection(self, collection_id: impl Into<String>) -> Self {
        self.grouping(Grouping::collection(collection_id))
    }

    /// Append a grouping entry
    pub fn grouping(mut self, grouping: Grouping) -> Self {
        self.grouping.get_or_insert_with(Vec::new).push(grouping);
        self
    }

    /// Build the asset
    pub fn build(self) -> Asset {
        let content = self.name.map(|name| AssetContent {
            json_uri: None,
            metadata: Some(AssetMetadata {
                name: Some(name),
                symbol: None,
            }),
        });

        Asset {
            id: self.id,
            interface: None,
            content,
            grouping: self.grouping,
        }
    }
}
