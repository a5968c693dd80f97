//! DAS JSON-RPC client
//!
//! Implements [`AssetSource`] on top of reqwest by posting JSON-RPC 2.0
//! `getAssetsByOwner` calls to a registry endpoint. The client never retries;
//! a failed call is returned to the caller as-is.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tracing::{debug, instrument};
use url::Url;

use crate::error::{RpcError, RpcResult};
use crate::source::{AssetPage, AssetSource, AssetsByOwnerRequest};

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// JSON-RPC method name of the "assets by owner" query
pub const GET_ASSETS_BY_OWNER: &str = "getAssetsByOwner";

/// Longest response body kept in a `Status` error
const MAX_ERROR_BODY_LEN: usize = 512;

/// Configuration for the registry client
#[derive(Debug, Clone)]
pub struct RpcClientConfig {
    /// Registry endpoint URL
    pub endpoint: String,

    /// Timeout applied to each request
    pub timeout: Duration,

    /// User-Agent header sent with each request
    pub user_agent: String,
}

impl RpcClientConfig {
    /// Create a new client configuration with sensible defaults
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: format!("crew-roster/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Set request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set User-Agent header
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Validate the configuration and return the parsed endpoint
    pub fn validate(&self) -> RpcResult<Url> {
        if self.endpoint.trim().is_empty() {
            return Err(RpcError::Configuration(
                "Endpoint URL cannot be empty".to_string(),
            ));
        }

        let url = Url::parse(&self.endpoint)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(RpcError::Configuration(format!(
                "Unsupported endpoint scheme: {}",
                url.scheme()
            )));
        }

        if self.timeout.is_zero() {
            return Err(RpcError::Configuration(
                "Timeout must be greater than 0".to_string(),
            ));
        }

        Ok(url)
    }
}

impl Default for RpcClientConfig {
    fn default() -> Self {
        Self::new(crate::DEFAULT_RPC_ENDPOINT)
    }
}

#[derive(Debug, Serialize)]
struct JsonRpcRequest<'a, P> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    params: P,
}

#[derive(Debug, Deserialize)]
struct JsonRpcResponse<R> {
    result: Option<R>,
    #[serde(default)]
    error: Option<JsonRpcErrorObject>,
}

#[derive(Debug, Deserialize)]
struct JsonRpcErrorObject {
    code: i64,
    #[serde(default)]
    message: String,
}

/// reqwest-backed DAS registry client
#[derive(Debug)]
pub struct DasRpcClient {
    http: reqwest::Client,
    endpoint: Url,
    next_id: AtomicU64,
}

impl DasRpcClient {
    /// Create a client from configuration
    pub fn new(config: RpcClientConfig) -> RpcResult<Self> {
        let endpoint = config.validate()?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent)
            .build()
            .map_err(|e| RpcError::Configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            endpoint,
            next_id: AtomicU64::new(1),
        })
    }

    /// Issue one JSON-RPC call and decode its result
    async fn call<P, R>(&self, method: &str, params: P) -> RpcResult<R>
    where
        P: Serialize + Send,
        R: DeserializeOwned,
    {
        let request = JsonRpcRequest {
            jsonrpc: "2.0",
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            method,
            params,
        };

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        debug!(method, status = status.as_u16(), bytes = body.len(), "registry responded");

        // Some providers send JSON-RPC errors with a 4xx status, so the
        // envelope is inspected before the status code.
        match serde_json::from_str::<JsonRpcResponse<R>>(&body) {
            Ok(JsonRpcResponse {
                error: Some(error), ..
            }) => Err(RpcError::JsonRpc {
                code: error.code,
                message: error.message,
            }),
            Ok(_) if !status.is_success() => Err(status_error(status.as_u16(), body)),
            Ok(JsonRpcResponse {
                result: Some(result),
                ..
            }) => Ok(result),
            Ok(_) => Err(RpcError::MissingResult(method.to_string())),
            Err(_) if !status.is_success() => Err(status_error(status.as_u16(), body)),
            Err(e) => Err(e.into()),
        }
    }
}

fn status_error(status: u16, mut body: String) -> RpcError {
    if body.len() > MAX_ERROR_BODY_LEN {
        let mut cut = MAX_ERROR_BODY_LEN;
        while !body.is_char_boundary(cut) {
            cut -= 1;
        }
        body.truncate(cut);
    }
    RpcError::Status { status, body }
}

#[async_trait]
impl AssetSource for DasRpcClient {
    #[instrument(skip(self, request), fields(owner = %request.owner_address, page = request.page, limit = request.limit))]
    async fn assets_by_owner(&self, request: AssetsByOwnerRequest) -> RpcResult<AssetPage> {
        self.call(GET_ASSETS_BY_OWNER, request).await
    }
}
