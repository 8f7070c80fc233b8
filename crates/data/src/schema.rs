use serde::{Deserialize, Serialize};

pub use remint_core::{
    Catalog, CostFlags, CostType, ItemCategory, ItemDef, MoveDef, MoveType, Placement,
    RandomizerConfig, ShopClass,
};

/// Row shape of `moves.json`. Type tags use the catalog's historical
/// uppercase vocabulary (`"BADGE"`, `"BP"`, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveRow {
    pub key: String,
    pub name: String,
    pub move_type: String,
    pub cost_type: String,
    pub cost_value: i64,
}

/// Row shape of `items.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemRow {
    pub key: String,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub base_price: i64,
}

/// Row shape of `placements.json`. `shop` is absent for non-vendor nodes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacementRow {
    pub node: String,
    pub item: String,
    #[serde(default)]
    pub shop: Option<String>,
}
