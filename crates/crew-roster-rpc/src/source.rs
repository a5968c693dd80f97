//! Asset source trait abstraction
//!
//! This module defines the AssetSource trait that abstracts the registry's
//! "assets by owner" query, allowing for different implementations (DAS
//! JSON-RPC, in-memory fakes for tests, etc.).

use async_trait::async_trait;
use crew_roster_core::Asset;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::RpcResult;

/// Largest page the DAS API will serve
pub const MAX_PAGE_SIZE: u32 = 1000;

/// Parameters of one "assets by owner" page request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetsByOwnerRequest {
    /// Wallet address whose assets are listed
    pub owner_address: String,

    /// Page size
    pub limit: u32,

    /// 1-based page index
    pub page: u32,
}

impl AssetsByOwnerRequest {
    /// Create a request for one page
    pub fn new(owner_address: impl Into<String>, limit: u32, page: u32) -> Self {
        Self {
            owner_address: owner_address.into(),
            limit,
            page,
        }
    }
}

/// One page of assets returned by the registry
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AssetPage {
    /// Total number of assets the registry reports for this page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,

    /// Page size echoed back by the registry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,

    /// Page index echoed back by the registry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u64>,

    /// Assets on this page
    ///
    /// Items that are not asset records at all are dropped while decoding.
    #[serde(default, deserialize_with = "asset_items")]
    pub items: Vec<Asset>,
}

fn asset_items<'de, D>(deserializer: D) -> Result<Vec<Asset>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();

    Ok(raw
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value::<Asset>(value) {
            Ok(asset) => Some(asset),
            Err(e) => {
                debug!(index, error = %e, "Dropping undecodable asset record");
                None
            }
        })
        .collect())
}

impl AssetPage {
    /// Create a page holding the given items
    pub fn new(items: Vec<Asset>) -> Self {
        Self {
            items,
            ..Default::default()
        }
    }

    /// Number of assets on this page
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if this page holds no assets
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Registry operation the roster pipeline depends on
#[async_trait]
pub trait AssetSource: Send + Sync {
    /// Fetch one page of assets owned by `request.owner_address`
    async fn assets_by_owner(&self, request: AssetsByOwnerRequest) -> RpcResult<AssetPage>;
}
