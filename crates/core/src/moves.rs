use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveType {
    Badge,
    Partner,
    StarPower,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CostType {
    Bp,
    Fp,
    Sp,
}

/// One move-cost record from the catalog. Read-only input; randomization
/// never mutates it, only reads `cost_value` to produce a [`NewCost`].
#[derive(Debug, Clone)]
pub struct MoveDef {
    pub key: String,
    pub display_name: String,
    pub move_type: MoveType,
    pub cost_type: CostType,
    pub cost_value: i64,
}

/// A randomized cost paired with the catalog key it belongs to. The patch
/// writer downstream consumes these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCost {
    pub key: String,
    pub value: i64,
}
