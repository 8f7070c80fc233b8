use crate::schema::{ItemRow, MoveRow, PlacementRow};
use anyhow::{bail, Context};
use remint_core::{
    Catalog, CostType, ItemCategory, ItemDef, MoveDef, MoveType, Placement, RandomizerConfig,
    ShopClass,
};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

const MOVES_FILE: &str = "moves.json";
const ITEMS_FILE: &str = "items.json";
const PLACEMENTS_FILE: &str = "placements.json";

pub fn load_catalog(dir: &Path) -> anyhow::Result<Catalog> {
    let move_rows: Vec<MoveRow> = load_json(dir.join(MOVES_FILE))?;
    let item_rows: Vec<ItemRow> = load_json(dir.join(ITEMS_FILE))?;

    let mut moves = Vec::with_capacity(move_rows.len());
    for row in move_rows {
        moves.push(move_def(row)?);
    }
    let mut items = Vec::with_capacity(item_rows.len());
    for row in item_rows {
        items.push(item_def(row)?);
    }

    Ok(Catalog::new(moves, items)?)
}

pub fn load_placements(dir: &Path, catalog: &Catalog) -> anyhow::Result<Vec<Placement>> {
    let rows: Vec<PlacementRow> = load_json(dir.join(PLACEMENTS_FILE))?;
    let mut placements = Vec::with_capacity(rows.len());
    for row in rows {
        if catalog.item(&row.item).is_none() {
            bail!("placement {} references unknown item {}", row.node, row.item);
        }
        let shop = row.shop.as_deref().map(parse_shop_class).transpose()?;
        placements.push(Placement {
            node: row.node,
            item: row.item,
            shop,
        });
    }
    Ok(placements)
}

/// Missing config file falls back to defaults (everything enabled, no
/// pinned seed).
pub fn load_config(path: &Path) -> anyhow::Result<RandomizerConfig> {
    if !path.exists() {
        return Ok(RandomizerConfig::default());
    }
    load_json(path.to_path_buf())
}

fn load_json<T: DeserializeOwned>(path: PathBuf) -> anyhow::Result<T> {
    let raw = fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parse {}", path.display()))
}

fn move_def(row: MoveRow) -> anyhow::Result<MoveDef> {
    if row.cost_value < 0 {
        bail!("move {} has negative cost {}", row.key, row.cost_value);
    }
    Ok(MoveDef {
        move_type: parse_move_type(&row.move_type)
            .with_context(|| format!("move {}", row.key))?,
        cost_type: parse_cost_type(&row.cost_type)
            .with_context(|| format!("move {}", row.key))?,
        key: row.key,
        display_name: row.name,
        cost_value: row.cost_value,
    })
}

fn item_def(row: ItemRow) -> anyhow::Result<ItemDef> {
    if row.base_price < 0 {
        bail!("item {} has negative base price {}", row.key, row.base_price);
    }
    Ok(ItemDef {
        category: parse_category(&row.category),
        key: row.key,
        display_name: row.name,
        base_price: row.base_price,
    })
}

fn parse_move_type(raw: &str) -> anyhow::Result<MoveType> {
    match raw {
        "BADGE" => Ok(MoveType::Badge),
        "PARTNER" => Ok(MoveType::Partner),
        "STARPOWER" => Ok(MoveType::StarPower),
        _ => bail!("unknown move type {raw}"),
    }
}

fn parse_cost_type(raw: &str) -> anyhow::Result<CostType> {
    match raw {
        "BP" => Ok(CostType::Bp),
        "FP" => Ok(CostType::Fp),
        "SP" => Ok(CostType::Sp),
        _ => bail!("unknown cost type {raw}"),
    }
}

// Unrecognized categories deliberately collapse to Other; pricing treats
// them with the fixed fallback price instead of failing.
fn parse_category(raw: &str) -> ItemCategory {
    match raw {
        "ITEM" => ItemCategory::Item,
        "BADGE" => ItemCategory::Badge,
        "KEYITEM" => ItemCategory::KeyItem,
        "PARTNER" => ItemCategory::Partner,
        "COIN" => ItemCategory::Coin,
        "STARPIECE" => ItemCategory::StarPiece,
        _ => ItemCategory::Other,
    }
}

fn parse_shop_class(raw: &str) -> anyhow::Result<ShopClass> {
    match raw {
        "regular" => Ok(ShopClass::Regular),
        "trading_post" => Ok(ShopClass::TradingPost),
        _ => bail!("unknown shop class {raw}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_tags_parse() {
        assert_eq!(parse_category("ITEM"), ItemCategory::Item);
        assert_eq!(parse_category("STARPIECE"), ItemCategory::StarPiece);
        assert_eq!(parse_category("GADGET"), ItemCategory::Other);
    }

    #[test]
    fn unknown_move_type_is_an_error() {
        assert!(parse_move_type("WEAPON").is_err());
        assert!(parse_cost_type("MP").is_err());
        assert!(parse_shop_class("market").is_err());
    }
}
