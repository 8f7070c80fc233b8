use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemCategory {
    Item,
    Badge,
    KeyItem,
    Partner,
    Coin,
    StarPiece,
    Other,
}

#[derive(Debug, Clone)]
pub struct ItemDef {
    pub key: String,
    pub display_name: String,
    pub category: ItemCategory,
    pub base_price: i64,
}

/// Shop classification of a placement node. Assigned by the world-graph
/// collaborator; the core never inspects node identifier text itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShopClass {
    Regular,
    TradingPost,
}

/// An item placed at a world-graph node. `shop` is `None` for nodes that are
/// not vendors; those are left unpriced.
#[derive(Debug, Clone)]
pub struct Placement {
    pub node: String,
    pub item: String,
    pub shop: Option<ShopClass>,
}

/// New buy price for the item at one node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodePrice {
    pub node: String,
    pub price: i64,
}
