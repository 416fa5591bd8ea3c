// src/specs/tables.rs
//! Tabular regions: one `TableSpec` value per resource.

use scraper::{ElementRef, Html};

use crate::config::consts::*;
use crate::core::html::{data_rows, heading_cells, selector};
use crate::error::{Error, Result};
use crate::table::TableBlock;

use super::{PageKind, Spec};

/// How to pick the region among all `css` matches.
#[derive(Clone, Copy, Debug)]
pub enum Locator {
    First(&'static str),
    Last(&'static str),
}

#[derive(Clone, Copy, Debug)]
pub enum HeaderMode {
    /// Every `<th>` in the region, document order.
    Headings,
    /// The region has no heading cells; use these labels.
    Fixed(&'static [&'static str]),
}

#[derive(Clone, Copy, Debug)]
pub struct TableSpec {
    pub name: &'static str,
    pub page: PageKind,
    pub locator: Locator,
    pub header: HeaderMode,
    /// An empty body counts as a missing region.
    pub require_rows: bool,
}

pub static ROSTER: TableSpec = TableSpec {
    name: "roster",
    page: PageKind::Team,
    locator: Locator::First(ROSTER_TABLE),
    header: HeaderMode::Headings,
    require_rows: true,
};

pub static PLAYER_STATS: TableSpec = TableSpec {
    name: "player stats",
    page: PageKind::PlayerStats,
    locator: Locator::Last(STATS_TABLE),
    header: HeaderMode::Headings,
    require_rows: false,
};

pub static RETIRED_NUMBERS: TableSpec = TableSpec {
    name: "retired numbers",
    page: PageKind::Team,
    locator: Locator::First(RETIRED_SECTION),
    header: HeaderMode::Headings,
    require_rows: false,
};

pub static HALL_OF_FAME: TableSpec = TableSpec {
    name: "hall of fame",
    page: PageKind::Team,
    locator: Locator::First(HALL_OF_FAME_SECTION),
    header: HeaderMode::Headings,
    require_rows: false,
};

pub static ALL_TIME_RECORDS: TableSpec = TableSpec {
    name: "all-time records",
    page: PageKind::Team,
    locator: Locator::First(RECORDS_TABLE),
    header: HeaderMode::Fixed(&["RECORD", "PLAYER", "TOTAL"]),
    require_rows: false,
};

impl TableSpec {
    fn locate<'a>(&self, doc: &'a Html) -> Result<ElementRef<'a>> {
        let found = match self.locator {
            Locator::First(css) => doc.select(&selector(css)?).next(),
            Locator::Last(css) => doc.select(&selector(css)?).last(),
        };
        found.ok_or_else(|| Error::missing(self.name))
    }
}

impl Spec for TableSpec {
    type Output = TableBlock;

    fn name(&self) -> &'static str { self.name }
    fn page(&self) -> PageKind { self.page }

    fn extract(&self, doc: &Html) -> Result<TableBlock> {
        let region = self.locate(doc)?;

        let header = match self.header {
            HeaderMode::Headings => heading_cells(region)?,
            HeaderMode::Fixed(labels) => labels.iter().map(|l| s!(*l)).collect(),
        };
        if header.is_empty() {
            return Err(Error::missing(self.name));
        }

        let rows = data_rows(region)?;
        if self.require_rows && rows.is_empty() {
            return Err(Error::missing(self.name));
        }

        Ok(TableBlock::new(header, rows))
    }
}
