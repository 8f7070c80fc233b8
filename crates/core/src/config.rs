use serde::{Deserialize, Serialize};

fn enabled() -> bool {
    true
}

/// Which move-cost pools get randomized. Each flag is independent; a false
/// flag simply omits that pool from the result.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CostFlags {
    #[serde(default = "enabled")]
    pub badge_bp: bool,
    #[serde(default = "enabled")]
    pub badge_fp: bool,
    #[serde(default = "enabled")]
    pub partner_fp: bool,
    #[serde(default = "enabled")]
    pub starpower: bool,
}

impl Default for CostFlags {
    fn default() -> Self {
        Self {
            badge_bp: true,
            badge_fp: true,
            partner_fp: true,
            starpower: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomizerConfig {
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub costs: CostFlags,
    #[serde(default = "enabled")]
    pub shop_prices: bool,
}

impl Default for RandomizerConfig {
    fn default() -> Self {
        Self {
            seed: None,
            costs: CostFlags::default(),
            shop_prices: true,
        }
    }
}
