//! Asset fetching
//!
//! Walks the registry's "assets by owner" pages in order, starting at page 1,
//! until a page comes back shorter than the requested page size.

use crew_roster_core::Asset;
use crew_roster_rpc::{AssetSource, AssetsByOwnerRequest, MAX_PAGE_SIZE};
use std::sync::Arc;
use tracing::{debug, info, instrument};

use crate::error::{ServiceError, ServiceResult};

/// Default number of assets requested per page
pub const DEFAULT_PAGE_SIZE: u32 = MAX_PAGE_SIZE;

/// Default upper bound on pages fetched for one owner
pub const DEFAULT_MAX_PAGES: u32 = 10_000;

/// Retrieves every asset an owner holds
#[derive(Clone)]
pub struct AssetFetcher {
    source: Arc<dyn AssetSource>,
    page_size: u32,
    max_pages: u32,
}

impl AssetFetcher {
    /// Create a fetcher with default paging
    pub fn new(source: Arc<dyn AssetSource>) -> Self {
        Self {
            source,
            page_size: DEFAULT_PAGE_SIZE,
            max_pages: DEFAULT_MAX_PAGES,
        }
    }

    /// Set the number of assets requested per page
    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set the page limit
    pub fn max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// Validate paging parameters
    pub fn validate(&self) -> ServiceResult<()> {
        if self.page_size == 0 || self.page_size > MAX_PAGE_SIZE {
            return Err(ServiceError::InvalidInput(format!(
                "page size must be between 1 and {}, got {}",
                MAX_PAGE_SIZE, self.page_size
            )));
        }

        if self.max_pages == 0 {
            return Err(ServiceError::InvalidInput(
                "max pages must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Fetch all assets held by `owner`, in page order
    ///
    /// The owner address is passed through unvalidated; the registry decides
    /// whether it is well formed. Any failed page aborts the whole fetch.
    #[instrument(skip(self), fields(page_size = self.page_size))]
    pub async fn fetch_all(&self, owner: &str) -> ServiceResult<Vec<Asset>> {
        self.validate()?;

        if owner.is_empty() {
            return Err(ServiceError::InvalidInput(
                "owner address cannot be empty".to_string(),
            ));
        }

        let mut assets = Vec::new();

        for page in 1..=self.max_pages {
            let request = AssetsByOwnerRequest::new(owner, self.page_size, page);
            let batch = self
                .source
                .assets_by_owner(request)
                .await
                .map_err(|source| ServiceError::RemoteQueryFailed {
                    owner: owner.to_string(),
                    source,
                })?;

            let count = batch.len();
            debug!(page, count, total = ?batch.total, "fetched asset page");
            assets.extend(batch.items);

            if count < self.page_size as usize {
                info!(pages = page, assets = assets.len(), "fetched all assets");
                return Ok(assets);
            }
        }

        Err(ServiceError::PageLimitExceeded {
            owner: owner.to_string(),
            max_pages: self.max_pages,
        })
    }
}
