//! Game entities.

mod creature;

pub use creature::{Creature, Role};
