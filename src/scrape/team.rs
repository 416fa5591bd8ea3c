// src/scrape/team.rs
//
// One team view = nine sequential fetches. The first failure aborts the
// whole load; there is no partial result and no retry.

use scraper::Html;

use crate::{
    config::ScrapeOptions,
    core::net::{HttpSession, Source},
    error::Result,
    progress::Progress,
    specs::{self, Spec},
    table::{GroupedList, TableBlock},
};

use super::TeamPages;

pub const FETCHES_PER_TEAM: usize = 9;

/// Everything the four team tabs display.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TeamData {
    pub roster: TableBlock,
    pub coaching: GroupedList,
    pub updates: GroupedList,
    pub player_stats: TableBlock,
    pub overall_stats: TableBlock,
    pub retired_numbers: TableBlock,
    pub hall_of_fame: TableBlock,
    pub all_time: TableBlock,
    pub achievements: GroupedList,
}

/// Navigate to the spec's page and extract its region.
pub fn fetch<S: Spec>(source: &mut dyn Source, pages: &TeamPages, spec: &S) -> Result<S::Output> {
    let url = pages.url(spec.page());
    logd!("Fetch: {} ← {url}", spec.name());

    let html = source.fetch(url)?;
    let doc = Html::parse_document(&html);
    spec.extract(&doc).map_err(|e| e.at(url))
}

/// Resolve `slug`, then fetch and extract every resource of the team view.
pub fn load_team(
    source: &mut dyn Source,
    base_url: &str,
    slug: &str,
    progress: Option<&mut dyn Progress>,
) -> Result<TeamData> {
    let pages = TeamPages::resolve(base_url, slug)?;
    load_pages(source, &pages, slug, progress)
}

/// Same as [`load_team`] against the live site. The session is only opened
/// once the slug has resolved, and is closed before this returns.
pub fn load_live(
    opts: &ScrapeOptions,
    slug: &str,
    progress: Option<&mut dyn Progress>,
) -> Result<TeamData> {
    let pages = TeamPages::resolve(&opts.base_url, slug)?;
    let mut session = HttpSession::open(opts)?;
    load_pages(&mut session, &pages, slug, progress)
}

fn load_pages(
    source: &mut dyn Source,
    pages: &TeamPages,
    slug: &str,
    mut progress: Option<&mut dyn Progress>,
) -> Result<TeamData> {
    logf!("Scrape: Begin team={slug}");

    if let Some(p) = progress.as_deref_mut() {
        p.begin(FETCHES_PER_TEAM);
        p.log(&format!("Loading {slug}…"));
    }

    let result = fetch_all(source, pages, progress.as_deref_mut());

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    match &result {
        Ok(data) => logf!(
            "Scrape: OK team={slug} roster={} stats={} overall={}",
            data.roster.nrows(), data.player_stats.nrows(), data.overall_stats.nrows()
        ),
        Err(e) => loge!("Scrape: Error team={slug}: {e}"),
    }
    result
}

fn fetch_all<'p>(
    source: &mut dyn Source,
    pages: &TeamPages,
    mut progress: Option<&mut (dyn Progress + 'p)>,
) -> Result<TeamData> {
    // Evaluate one spec and tick the progress sink.
    macro_rules! step {
        ($spec:expr) => {{
            let spec = &$spec;
            let out = fetch(source, pages, spec)?;
            if let Some(p) = progress.as_deref_mut() {
                p.item_done(spec.name());
            }
            out
        }};
    }

    Ok(TeamData {
        roster: step!(specs::ROSTER),
        coaching: step!(specs::COACHING_STAFF),
        updates: step!(specs::TEAM_UPDATES),
        player_stats: step!(specs::PLAYER_STATS),
        overall_stats: step!(specs::OVERALL_STATS),
        retired_numbers: step!(specs::RETIRED_NUMBERS),
        hall_of_fame: step!(specs::HALL_OF_FAME),
        all_time: step!(specs::ALL_TIME_RECORDS),
        achievements: step!(specs::ACHIEVEMENTS),
    })
}
