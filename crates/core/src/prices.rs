use crate::rng::pick;
use crate::{Catalog, ItemCategory, NodePrice, Placement, RngState, ShopClass};

const BUY_MARKUP: f64 = 1.5;
const ITEM_PRICE_NOISE: [f64; 5] = [0.75, 0.9, 1.0, 1.1, 1.25];
const GEAR_PRICES: [i64; 5] = [10, 15, 20, 25, 30];
const STAR_PIECE_PRICES: [i64; 5] = [2, 4, 6, 8, 10];
const COIN_PRICE: i64 = 1;
const FALLBACK_PRICE: i64 = 35;
const TRADE_PRICE: i64 = 2;

/// Computes a new buy price for every shop placement. Non-shop nodes get no
/// entry; input structures are never mutated. Callers apply the returned
/// node -> price mapping downstream.
pub fn price_placements(
    placements: &[Placement],
    catalog: &Catalog,
    rng: &mut RngState,
) -> Vec<NodePrice> {
    let mut prices = Vec::new();
    for placement in placements {
        let Some(class) = placement.shop else {
            continue;
        };
        let category = catalog.category_of(&placement.item);
        let price = match class {
            ShopClass::TradingPost => trading_post_price(category),
            ShopClass::Regular => shop_price(category, catalog, &placement.item, rng),
        };
        prices.push(NodePrice {
            node: placement.node.clone(),
            price,
        });
    }
    prices
}

/// The trading post sells anything for a token 2 coins, and pays out coin
/// placements for free.
pub fn trading_post_price(category: ItemCategory) -> i64 {
    if category == ItemCategory::Coin {
        0
    } else {
        TRADE_PRICE
    }
}

fn shop_price(
    category: ItemCategory,
    catalog: &Catalog,
    item_key: &str,
    rng: &mut RngState,
) -> i64 {
    match category {
        ItemCategory::Item => {
            let base = catalog.item(item_key).map(|def| def.base_price).unwrap_or(0);
            item_buy_price(base, pick(&ITEM_PRICE_NOISE, rng))
        }
        ItemCategory::Badge | ItemCategory::KeyItem | ItemCategory::Partner => {
            pick(&GEAR_PRICES, rng)
        }
        ItemCategory::Coin => COIN_PRICE,
        ItemCategory::StarPiece => pick(&STAR_PIECE_PRICES, rng),
        ItemCategory::Other => FALLBACK_PRICE,
    }
}

/// Buy price for a consumable: 1.5x markup over the sell price with a noise
/// factor applied, rounded once. A zero result is floored to 1, and anything
/// from 5 up snaps to the nearest multiple of 5.
pub fn item_buy_price(base_price: i64, factor: f64) -> i64 {
    let mut buy = (base_price as f64 * BUY_MARKUP * factor).round() as i64;
    if buy == 0 {
        buy = 1;
    }
    if buy >= 5 {
        buy = round_to_five(buy);
    }
    buy
}

// buy / 5 has a fractional part in {0, .2, .4, .6, .8}, so no tie-breaking
// rule is needed here.
fn round_to_five(value: i64) -> i64 {
    ((value as f64 / 5.0).round() as i64) * 5
}
