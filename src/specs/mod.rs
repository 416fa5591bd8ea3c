// src/specs/mod.rs
//! # Page region specs
//!
//! Each spec knows *where one resource lives in the markup* and how to copy it
//! out as text. Specs are pure: they take an already parsed `scraper::Html`
//! and return a `TableBlock` or `GroupedList`. Navigation, URLs, logging of
//! fetches and error locators live in `scrape`.
//!
//! ## Resources
//! - Team page: roster, coaching staff, team updates, retired numbers,
//!   hall of fame, all-time records, achievements.
//! - Players stats page: per-player traditional stats.
//! - Team stats page: overall team stats (three splits merged).
//!
//! ## Conventions
//! - Region missing → `Error::missing(spec.name())`; the fetch layer attaches
//!   the URL.
//! - Cell text is whitespace-normalized and otherwise left as rendered. No
//!   numeric parsing happens here.
//! - Specs are testable offline against small HTML fixtures.

use scraper::Html;

use crate::error::Result;

pub mod lists;
pub mod overall;
pub mod tables;

pub use lists::{ACHIEVEMENTS, COACHING_STAFF, TEAM_UPDATES};
pub use overall::OVERALL_STATS;
pub use tables::{ALL_TIME_RECORDS, HALL_OF_FAME, PLAYER_STATS, RETIRED_NUMBERS, ROSTER};

/// Which remote page a spec reads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageKind {
    /// `/team/{id}/{slug}`
    Team,
    /// `/stats/team/{id}/players-traditional`
    PlayerStats,
    /// `/stats/team/{id}/traditional`
    TeamStats,
}

pub trait Spec {
    type Output;

    /// Resource name for logs and `ResourceNotFound`.
    fn name(&self) -> &'static str;

    fn page(&self) -> PageKind;

    fn extract(&self, doc: &Html) -> Result<Self::Output>;
}
