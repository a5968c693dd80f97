//! Test fixtures
//!
//! DAS-shaped JSON records for integration tests.

use serde_json::{json, Value};

/// Collection used as the roster target in tests
pub const TARGET_COLLECTION: &str = "CREWSAACJTKHKhZi96pLRJXsxiGbdZaQHdFW9r7qGJkB";

/// A collection the roster must ignore
pub const OTHER_COLLECTION: &str = "PASSxR8MjeVNgpBXqEXo3TtvBq4Xu5BKBrGPBdg3Vrw";

/// Asset record as `getAssetsByOwner` returns it
pub fn asset_json(id: &str, collection: &str, name: &str) -> Value {
    json!({
        "interface": "V1_NFT",
        "id": id,
        "content": {
            "$schema": "https://schema.metaplex.com/nft1.0.json",
            "json_uri": format!("https://example.com/{}.json", id),
            "files": [],
            "metadata": { "name": name, "symbol": "CREW" }
        },
        "authorities": [],
        "compression": { "compressed": false },
        "grouping": [
            { "group_key": "collection", "group_value": collection }
        ],
        "royalty": { "basis_points": 500 },
        "creators": [],
        "ownership": { "frozen": false, "delegated": false, "owner": "owner" },
        "mutable": true,
        "burnt": false
    })
}

/// Crew asset in the target collection
pub fn crew_json(n: usize) -> Value {
    asset_json(&format!("crew-{}", n), TARGET_COLLECTION, &format!("CREW #{}", n))
}

/// Asset with no grouping entries at all
pub fn ungrouped_json(id: &str, name: &str) -> Value {
    json!({
        "interface": "FungibleToken",
        "id": id,
        "content": { "metadata": { "name": name } }
    })
}
