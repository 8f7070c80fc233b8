//! Cost and price randomization policies. Keep this crate free of IO and
//! platform concerns; callers supply the catalog, placements and RNG seed.

pub mod catalog;
pub mod config;
pub mod costs;
pub mod events;
pub mod items;
pub mod moves;
pub mod prices;
pub mod rng;

pub use catalog::*;
pub use config::*;
pub use costs::*;
pub use events::*;
pub use items::*;
pub use moves::*;
pub use prices::*;
pub use rng::*;
