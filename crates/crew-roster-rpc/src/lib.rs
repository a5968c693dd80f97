//! Registry access layer for crew-roster
//!
//! This crate provides the boundary between the roster pipeline and the remote
//! asset registry:
//! - The [`AssetSource`] trait, the single "assets by owner" operation the
//!   pipeline depends on
//! - [`DasRpcClient`], a reqwest-based implementation speaking the Digital
//!   Asset Standard JSON-RPC API (`getAssetsByOwner`)
//! - Client configuration and error handling
//!
//! # Example
//!
//! ```rust,no_run
//! use crew_roster_rpc::{AssetSource, AssetsByOwnerRequest, DasRpcClient, RpcClientConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = RpcClientConfig::new("https://api.devnet.solana.com");
//! let client = DasRpcClient::new(config)?;
//!
//! let page = client
//!     .assets_by_owner(AssetsByOwnerRequest::new("owner-address", 1000, 1))
//!     .await?;
//! println!("{} assets on page 1", page.items.len());
//! # Ok(())
//! # }
//! ```

// Re-export core domain types for convenience
pub use crew_roster_core;

pub mod client;
pub mod error;
pub mod source;

pub use client::{DasRpcClient, RpcClientConfig};
pub use error::{RpcError, RpcResult};
pub use source::{AssetPage, AssetSource, AssetsByOwnerRequest, MAX_PAGE_SIZE};

/// Default registry endpoint
pub const DEFAULT_RPC_ENDPOINT: &str = "https://api.devnet.solana.com";

/// Environment variable naming the registry endpoint
pub const RPC_ENDPOINT_ENV: &str = "REMOTE_RPC_ENDPOINT";
