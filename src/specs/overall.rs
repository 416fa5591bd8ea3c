// src/specs/overall.rs
//! Overall team stats: the team stats page renders consecutive stat tables
//! (base, advanced, misc). The header comes from the first table only, with
//! its leading label cleared; data rows of all tables are concatenated in
//! encounter order.

use scraper::Html;

use crate::config::consts::{OVERALL_STATS_TABLES, STATS_TABLE};
use crate::core::html::{data_rows, heading_cells, selector};
use crate::error::{Error, Result};
use crate::table::TableBlock;

use super::{PageKind, Spec};

pub struct OverallStatsSpec {
    pub css: &'static str,
    pub tables: usize,
}

pub static OVERALL_STATS: OverallStatsSpec = OverallStatsSpec {
    css: STATS_TABLE,
    tables: OVERALL_STATS_TABLES,
};

impl Spec for OverallStatsSpec {
    type Output = TableBlock;

    fn name(&self) -> &'static str { "overall stats" }
    fn page(&self) -> PageKind { PageKind::TeamStats }

    fn extract(&self, doc: &Html) -> Result<TableBlock> {
        let sel = selector(self.css)?;
        let regions: Vec<_> = doc.select(&sel).take(self.tables).collect();

        let Some(&first) = regions.first() else {
            return Err(Error::missing(self.name()));
        };

        let mut header = heading_cells(first)?;
        match header.first_mut() {
            Some(lead) => lead.clear(),
            None => return Err(Error::missing(self.name())),
        }

        let mut rows = Vec::new();
        for region in regions {
            rows.extend(data_rows(region)?);
        }

        Ok(TableBlock::new(header, rows))
    }
}
