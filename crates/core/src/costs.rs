use crate::rng::{one_in, pick, pick_range};
use crate::{Catalog, CostFlags, CostType, Event, EventBus, MoveType, NewCost, RngState};

pub const BP_MIN: i64 = 1;
pub const BP_MAX: i64 = 8;

const BP_DELTAS: [i64; 5] = [-2, -1, 0, 1, 2];
const BP_REROLL_ODDS: u64 = 10;

/// Redistributes the cost values of every move matching the given type pair.
/// The output multiset of values equals the input multiset; only the pairing
/// with keys changes. A key may keep its original value.
pub fn shuffle_costs(
    catalog: &Catalog,
    move_type: MoveType,
    cost_type: CostType,
    rng: &mut RngState,
) -> Vec<NewCost> {
    let mut keys = Vec::new();
    let mut values = Vec::new();
    for def in catalog.moves_by(move_type, cost_type) {
        keys.push(def.key.clone());
        values.push(def.cost_value);
    }
    rng.shuffle(&mut values);
    keys.into_iter()
        .zip(values)
        .map(|(key, value)| NewCost { key, value })
        .collect()
}

/// Adjusts each badge's BP cost independently: a 1-in-10 roll replaces the
/// default with a fresh uniform draw from [1, 8]; otherwise the default
/// shifts by a uniform delta in {-2..=2}, clamped to [1, 8]. Emits one trace
/// event per badge.
pub fn perturb_bp_costs(
    catalog: &Catalog,
    rng: &mut RngState,
    events: &mut EventBus,
) -> Vec<NewCost> {
    let mut costs = Vec::new();
    for def in catalog.moves_by(MoveType::Badge, CostType::Bp) {
        let value = if one_in(BP_REROLL_ODDS, rng) {
            pick_range(BP_MIN, BP_MAX, rng)
        } else {
            clamp_bp(def.cost_value + pick(&BP_DELTAS, rng))
        };
        events.push(Event::BpCostRolled {
            name: def.display_name.clone(),
            before: def.cost_value,
            after: value,
        });
        costs.push(NewCost {
            key: def.key.clone(),
            value,
        });
    }
    costs
}

pub fn clamp_bp(value: i64) -> i64 {
    value.clamp(BP_MIN, BP_MAX)
}

/// Runs the enabled cost randomizations and concatenates their results in a
/// fixed order. Each pool filters a disjoint (move type, cost type) pair, so
/// no key appears twice.
///
/// The star-power pool is queried with [`CostType::Fp`], matching the
/// behavior existing seeds were generated with.
pub fn randomize(
    catalog: &Catalog,
    flags: &CostFlags,
    rng: &mut RngState,
    events: &mut EventBus,
) -> Vec<NewCost> {
    let mut costs = Vec::new();

    if flags.badge_bp {
        costs.extend(perturb_bp_costs(catalog, rng, events));
    }
    if flags.badge_fp {
        costs.extend(shuffle_costs(catalog, MoveType::Badge, CostType::Fp, rng));
    }
    if flags.partner_fp {
        costs.extend(shuffle_costs(catalog, MoveType::Partner, CostType::Fp, rng));
    }
    if flags.starpower {
        costs.extend(shuffle_costs(
            catalog,
            MoveType::StarPower,
            CostType::Fp,
            rng,
        ));
    }

    costs
}
