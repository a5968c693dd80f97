//! Identifier extraction
//!
//! Turns a display name such as `CREW #42` into the identifier `42`. Names that
//! do not produce an identifier are skipped, never reported as errors.

use crew_roster_core::{Asset, Identifier, DEFAULT_NAME_PREFIX};
use tracing::debug;

/// Parses the numeric suffix out of asset display names
#[derive(Debug, Clone)]
pub struct IdentifierExtractor {
    prefix: String,
}

impl IdentifierExtractor {
    /// Create an extractor that strips `prefix` from the start of each name
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Prefix removed before parsing
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Parse an identifier from a display name
    ///
    /// The prefix is removed only when the name starts with it; otherwise the
    /// whole name is parsed. The remainder must be a non-empty run of ASCII
    /// digits that fits in an [`Identifier`]. This is deliberately stricter
    /// than lenient leading-digits parsing: `"CREW #12 "`, `"CREW #12abc"`
    /// and `"CREW #+12"` are all rejected rather than read as 12.
    pub fn parse_name(&self, name: &str) -> Option<Identifier> {
        let digits = name.strip_prefix(self.prefix.as_str()).unwrap_or(name);

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        digits.parse().ok()
    }

    /// Extract the identifier of one asset
    pub fn extract(&self, asset: &Asset) -> Option<Identifier> {
        let Some(name) = asset.display_name() else {
            debug!(asset = asset.label(), "skipping asset without a display name");
            return None;
        };

        let identifier = self.parse_name(name);
        if identifier.is_none() {
            debug!(asset = asset.label(), name, "skipping asset with unparseable name");
        }
        identifier
    }

    /// Extract identifiers from every asset that yields one, in input order
    pub fn extract_all(&self, assets: &[Asset]) -> Vec<Identifier> {
        assets.iter().filter_map(|asset| self.extract(asset)).collect()
    }
}

impl Default for IdentifierExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_NAME_PREFIX)
    }
}
