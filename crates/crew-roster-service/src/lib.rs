//! Service layer for crew-roster
//!
//! This crate implements the roster pipeline on top of an [`AssetSource`]:
//!
//! - **AssetFetcher**: pages through "assets by owner" until a short page
//! - **CollectionFilter**: keeps assets whose first grouping is the target collection
//! - **IdentifierExtractor**: parses the number out of each display name
//! - **emitter**: numeric sort and newline-separated output
//! - **RosterPipeline**: the stages above, run in order for one owner
//!
//! # Example
//!
//! ```rust,no_run
//! use crew_roster_rpc::{DasRpcClient, RpcClientConfig};
//! use crew_roster_service::RosterPipeline;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = DasRpcClient::new(RpcClientConfig::new("https://api.devnet.solana.com"))?;
//! let pipeline = RosterPipeline::builder(Arc::new(client))
//!     .page_size(1000)
//!     .build()?;
//!
//! let mut stdout = std::io::stdout().lock();
//! pipeline.run_and_emit("owner-address", &mut stdout).await?;
//! # Ok(())
//! # }
//! ```
//!
//! [`AssetSource`]: crew_roster_rpc::AssetSource

pub mod emitter;
pub mod error;
pub mod extractor;
pub mod fetcher;
pub mod filter;
pub mod pipeline;

#[cfg(test)]
mod test_support;

// Re-export main types for convenience
pub use emitter::{emit, render, sort_identifiers};
pub use error::{ServiceError, ServiceResult};
pub use extractor::IdentifierExtractor;
pub use fetcher::{AssetFetcher, DEFAULT_MAX_PAGES, DEFAULT_PAGE_SIZE};
pub use filter::CollectionFilter;
pub use pipeline::{RosterPipeline, RosterPipelineBuilder};
