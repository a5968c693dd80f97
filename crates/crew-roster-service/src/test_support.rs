//! In-memory asset sources shared by the unit tests

use async_trait::async_trait;
use crew_roster_core::Asset;
use crew_roster_rpc::{AssetPage, AssetSource, AssetsByOwnerRequest, RpcError, RpcResult};
use std::sync::Mutex;

/// Serves a fixed asset list in `limit`-sized pages and records each request
pub struct PagedSource {
    assets: Vec<Asset>,
    requests: Mutex<Vec<AssetsByOwnerRequest>>,
}

impl PagedSource {
    pub fn new(assets: Vec<Asset>) -> Self {
        Self {
            assets,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<AssetsByOwnerRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl AssetSource for PagedSource {
    async fn assets_by_owner(&self, request: AssetsByOwnerRequest) -> RpcResult<AssetPage> {
        let limit = request.limit as usize;
        let start = (request.page as usize - 1) * limit;
        let items = self
            .assets
            .iter()
            .skip(start)
            .take(limit)
            .cloned()
            .collect();
        self.requests.lock().unwrap().push(request);
        Ok(AssetPage::new(items))
    }
}

/// Fails every request with a JSON-RPC invalid-params error
pub struct RejectingSource;

#[async_trait]
impl AssetSource for RejectingSource {
    async fn assets_by_owner(&self, request: AssetsByOwnerRequest) -> RpcResult<AssetPage> {
        Err(RpcError::JsonRpc {
            code: -32602,
            message: format!("Invalid owner address: {}", request.owner_address),
        })
    }
}

/// Crew asset in the given collection
pub fn crew(collection: &str, name: &str) -> Asset {
    Asset::builder().name(name).collection(collection).build()
}

/// `count` crew assets numbered from 1 in the given collection
pub fn numbered_crew(collection: &str, count: usize) -> Vec<Asset> {
    (1..=count)
        .map(|n| crew(collection, &format!("CREW #{}", n)))
        .collect()
}
