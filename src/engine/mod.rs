// src/engine/mod.rs
//
// Stat normalizer + comparison engine. Pure functions over `TableBlock`s;
// no I/O, no GUI.

pub mod compare;
pub mod normalize;
pub mod selection;

pub use compare::{compare, compare_players, ComparisonRow, Relation};
pub use normalize::{lookup, PlayerRecord};
pub use selection::{Slot, TeamSelection};
