use remint_core::{
    price_placements, randomize, CostFlags, CostType, EventBus, ItemCategory, MoveType,
    RandomizerConfig, RngState,
};
use remint_data::{load_catalog, load_config, load_placements};
use std::fs;
use std::path::PathBuf;

fn assets_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("assets")
}

#[test]
fn assets_catalog_loads() {
    let catalog = load_catalog(&assets_root()).expect("load catalog");
    assert!(catalog.moves_by(MoveType::Badge, CostType::Bp).count() >= 5);
    assert!(catalog.moves_by(MoveType::Partner, CostType::Fp).count() >= 3);
    assert_eq!(catalog.category_of("star_piece"), ItemCategory::StarPiece);
    // Unrecognized category tag in the data collapses to Other.
    assert_eq!(catalog.category_of("strange_leaf"), ItemCategory::Other);
}

#[test]
fn assets_placements_load_with_classification() {
    let catalog = load_catalog(&assets_root()).expect("load catalog");
    let placements = load_placements(&assets_root(), &catalog).expect("load placements");
    assert!(placements.iter().any(|p| p.shop.is_none()));
    assert!(placements
        .iter()
        .any(|p| p.node.starts_with("HOS_06") && p.shop.is_some()));
}

#[test]
fn missing_config_uses_defaults() {
    let config = load_config(&assets_root().join("no_such_config.json")).expect("defaults");
    assert!(config.seed.is_none());
    assert!(config.costs.badge_bp);
    assert!(config.shop_prices);
}

#[test]
fn full_pipeline_runs_over_assets() {
    let catalog = load_catalog(&assets_root()).expect("load catalog");
    let placements = load_placements(&assets_root(), &catalog).expect("load placements");
    let config = RandomizerConfig::default();
    let mut rng = RngState::from_seed(0xBADBAD);
    let mut events = EventBus::default();

    let costs = randomize(&catalog, &config.costs, &mut rng, &mut events);
    let bp_count = catalog.moves_by(MoveType::Badge, CostType::Bp).count();
    assert_eq!(events.drain().count(), bp_count);
    assert!(costs.len() >= bp_count);

    let prices = price_placements(&placements, &catalog, &mut rng);
    let shop_count = placements.iter().filter(|p| p.shop.is_some()).count();
    assert_eq!(prices.len(), shop_count);
}

fn write_fixture(dir: &PathBuf, file: &str, body: &str) {
    fs::create_dir_all(dir).expect("mkdir");
    fs::write(dir.join(file), body).expect("write fixture");
}

#[test]
fn placement_with_unknown_item_is_rejected() {
    let dir = std::env::temp_dir().join("remint_data_unknown_item");
    write_fixture(&dir, "moves.json", "[]");
    write_fixture(
        &dir,
        "items.json",
        r#"[{ "key": "mushroom", "name": "Mushroom", "category": "ITEM", "base_price": 5 }]"#,
    );
    write_fixture(
        &dir,
        "placements.json",
        r#"[{ "node": "MAC_01:shop_slot_1", "item": "ghost_item", "shop": "regular" }]"#,
    );

    let catalog = load_catalog(&dir).expect("load catalog");
    let err = load_placements(&dir, &catalog).expect_err("unknown item");
    assert!(err.to_string().contains("ghost_item"));
}

#[test]
fn duplicate_move_keys_are_rejected() {
    let dir = std::env::temp_dir().join("remint_data_duplicate_key");
    let row = r#"{ "key": "power_jump.bp", "name": "Power Jump", "move_type": "BADGE", "cost_type": "BP", "cost_value": 1 }"#;
    write_fixture(&dir, "moves.json", &format!("[{row},{row}]"));
    write_fixture(&dir, "items.json", "[]");

    let err = load_catalog(&dir).expect_err("duplicate key");
    assert!(err.to_string().contains("power_jump.bp"));
}

#[test]
fn negative_base_price_is_rejected() {
    let dir = std::env::temp_dir().join("remint_data_negative_price");
    write_fixture(&dir, "moves.json", "[]");
    write_fixture(
        &dir,
        "items.json",
        r#"[{ "key": "mushroom", "name": "Mushroom", "category": "ITEM", "base_price": -5 }]"#,
    );

    assert!(load_catalog(&dir).is_err());
}
