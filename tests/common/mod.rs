//! Common test utilities and helpers
//!
//! This module provides a wiremock-backed DAS registry and helpers to build a
//! roster pipeline against it.

#![allow(dead_code)]

use crew_roster_core::CollectionId;
use crew_roster_rpc::{DasRpcClient, RpcClientConfig};
use crew_roster_service::{RosterPipeline, ServiceResult};
use serde_json::{json, Value};
use std::sync::Arc;
use wiremock::matchers::{body_partial_json, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub mod fixtures;

/// Mock DAS registry
pub struct TestRegistry {
    pub server: MockServer,
}

impl TestRegistry {
    /// Start a registry on a random port
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Registry endpoint URL
    pub fn url(&self) -> String {
        self.server.uri()
    }

    /// Serve `assets` for `owner` in pages of `limit`
    ///
    /// Mounts one response per page up to and including the first short page,
    /// which is empty when the asset count is a multiple of `limit`. Each page
    /// answers exactly once, so mounting twice serves two full walks.
    pub async fn mount_owner(&self, owner: &str, assets: Vec<Value>, limit: usize) {
        let pages = assets.len() / limit + 1;

        for page in 1..=pages {
            let items: Vec<Value> = assets
                .iter()
                .skip((page - 1) * limit)
                .take(limit)
                .cloned()
                .collect();

            Mock::given(method("POST"))
                .and(body_partial_json(json!({
                    "method": "getAssetsByOwner",
                    "params": { "ownerAddress": owner, "limit": limit, "page": page }
                })))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                    "jsonrpc": "2.0",
                    "id": 1,
                    "result": {
                        "total": items.len(),
                        "limit": limit,
                        "page": page,
                        "items": items
                    }
                })))
                .up_to_n_times(1)
                .expect(1)
                .mount(&self.server)
                .await;
        }
    }

    /// Answer every request with a JSON-RPC error object
    pub async fn mount_rpc_error(&self, code: i64, message: &str) {
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "jsonrpc": "2.0",
                "id": 1,
                "error": { "code": code, "message": message }
            })))
            .mount(&self.server)
            .await;
    }

    /// Answer every request with an HTTP error status
    pub async fn mount_http_error(&self, status: u16) {
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(status).set_body_string("unavailable"))
            .mount(&self.server)
            .await;
    }

    /// Page numbers of every request received so far, in arrival order
    pub async fn requested_pages(&self) -> Vec<u64> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter_map(|request| {
                let body: Value = serde_json::from_slice(&request.body).ok()?;
                body["params"]["page"].as_u64()
            })
            .collect()
    }

    /// Build a pipeline targeting the test collection
    pub fn pipeline(&self, page_size: u32) -> RosterPipeline {
        let client = DasRpcClient::new(RpcClientConfig::new(self.url()))
            .expect("Failed to build registry client");

        RosterPipeline::builder(Arc::new(client))
            .collection(
                CollectionId::new(fixtures::TARGET_COLLECTION).expect("Invalid collection"),
            )
            .page_size(page_size)
            .build()
            .expect("Failed to build pipeline")
    }
}

/// Run a pipeline for `owner` and capture what it writes
pub async fn run_to_string(pipeline: &RosterPipeline, owner: &str) -> ServiceResult<String> {
    let mut out = Vec::new();
    pipeline.run_and_emit(owner, &mut out).await?;
    Ok(String::from_utf8(out).expect("Roster output is not UTF-8"))
}
