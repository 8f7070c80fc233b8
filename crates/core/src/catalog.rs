use crate::{CostType, ItemCategory, ItemDef, MoveDef, MoveType};
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("duplicate move key {0}")]
    DuplicateMove(String),
    #[error("duplicate item key {0}")]
    DuplicateItem(String),
}

/// In-memory move and item catalog. Iteration order is insertion order,
/// which the shuffler relies on to pair keys back with permuted values.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    moves: Vec<MoveDef>,
    items: Vec<ItemDef>,
}

impl Catalog {
    pub fn new(moves: Vec<MoveDef>, items: Vec<ItemDef>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for def in &moves {
            if !seen.insert(def.key.as_str()) {
                return Err(CatalogError::DuplicateMove(def.key.clone()));
            }
        }
        let mut seen = HashSet::new();
        for def in &items {
            if !seen.insert(def.key.as_str()) {
                return Err(CatalogError::DuplicateItem(def.key.clone()));
            }
        }
        Ok(Self { moves, items })
    }

    pub fn moves(&self) -> &[MoveDef] {
        &self.moves
    }

    pub fn items(&self) -> &[ItemDef] {
        &self.items
    }

    pub fn moves_by(
        &self,
        move_type: MoveType,
        cost_type: CostType,
    ) -> impl Iterator<Item = &MoveDef> {
        self.moves
            .iter()
            .filter(move |def| def.move_type == move_type && def.cost_type == cost_type)
    }

    pub fn item(&self, key: &str) -> Option<&ItemDef> {
        self.items.iter().find(|def| def.key == key)
    }

    pub fn category_of(&self, key: &str) -> ItemCategory {
        self.item(key)
            .map(|def| def.category)
            .unwrap_or(ItemCategory::Other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn badge(key: &str, cost_type: CostType, cost_value: i64) -> MoveDef {
        MoveDef {
            key: key.to_string(),
            display_name: key.to_string(),
            move_type: MoveType::Badge,
            cost_type,
            cost_value,
        }
    }

    #[test]
    fn duplicate_move_key_rejected() {
        let moves = vec![badge("m1", CostType::Bp, 3), badge("m1", CostType::Fp, 2)];
        assert!(matches!(
            Catalog::new(moves, Vec::new()),
            Err(CatalogError::DuplicateMove(key)) if key == "m1"
        ));
    }

    #[test]
    fn moves_by_preserves_insertion_order() {
        let moves = vec![
            badge("a", CostType::Bp, 1),
            badge("b", CostType::Fp, 2),
            badge("c", CostType::Bp, 3),
        ];
        let catalog = Catalog::new(moves, Vec::new()).expect("catalog");
        let keys: Vec<&str> = catalog
            .moves_by(MoveType::Badge, CostType::Bp)
            .map(|def| def.key.as_str())
            .collect();
        assert_eq!(keys, ["a", "c"]);
    }

    #[test]
    fn unknown_item_maps_to_other() {
        let catalog = Catalog::new(Vec::new(), Vec::new()).expect("catalog");
        assert_eq!(catalog.category_of("missing"), ItemCategory::Other);
    }
}
