//! Collection filtering

use crew_roster_core::{Asset, CollectionId};
use tracing::debug;

/// Keeps the assets that belong to one collection
///
/// Membership is decided by the first grouping entry only. An asset whose
/// collection grouping appears later in the list is not a member.
#[derive(Debug, Clone, Default)]
pub struct CollectionFilter {
    collection: CollectionId,
}

impl CollectionFilter {
    /// Create a filter for the given collection
    pub fn new(collection: CollectionId) -> Self {
        Self { collection }
    }

    /// Collection this filter selects
    pub fn collection(&self) -> &CollectionId {
        &self.collection
    }

    /// Check whether an asset belongs to the collection
    pub fn matches(&self, asset: &Asset) -> bool {
        asset
            .first_group_value()
            .is_some_and(|value| self.collection.matches(value))
    }

    /// Retain matching assets, preserving their order
    pub fn retain(&self, mut assets: Vec<Asset>) -> Vec<Asset> {
        let before = assets.len();
        assets.retain(|asset| self.matches(asset));
        debug!(
            collection = %self.collection,
            kept = assets.len(),
            dropped = before - assets.len(),
            "filtered assets by collection"
        );
        assets
    }
}
