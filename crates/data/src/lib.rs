//! Loading and validation of randomizer inputs: the move/item catalog, the
//! placement list produced by the world graph, and the randomizer config.

pub mod load;
pub mod schema;

pub use load::*;
pub use schema::*;
