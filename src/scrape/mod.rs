// src/scrape/mod.rs
mod locator;
mod team;

pub use locator::TeamPages;
pub use team::{fetch, load_live, load_team, TeamData, FETCHES_PER_TEAM};
