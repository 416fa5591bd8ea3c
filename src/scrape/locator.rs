// src/scrape/locator.rs
use crate::directory;
use crate::error::{Error, Result};
use crate::specs::PageKind;

/// The three remote pages one team view reads from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TeamPages {
    pub team: String,
    pub player_stats: String,
    pub team_stats: String,
}

impl TeamPages {
    /// Resolve `slug` through the directory and build the page URLs.
    /// An unknown slug fails here, before anything is fetched.
    pub fn resolve(base_url: &str, slug: &str) -> Result<Self> {
        let id = directory::resolve_id(slug).ok_or_else(|| Error::ResourceNotFound {
            resource: "team id",
            locator: s!(slug),
        })?;
        Ok(Self::build(base_url, id, slug))
    }

    fn build(base_url: &str, id: u32, slug: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        Self {
            team: format!("{base}/team/{id}/{slug}"),
            player_stats: format!("{base}/stats/team/{id}/players-traditional"),
            team_stats: format!("{base}/stats/team/{id}/traditional"),
        }
    }

    pub fn url(&self, page: PageKind) -> &str {
        match page {
            PageKind::Team => &self.team,
            PageKind::PlayerStats => &self.player_stats,
            PageKind::TeamStats => &self.team_stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_three_pages() {
        let p = TeamPages::resolve("https://www.nba.com/", "celtics").unwrap();
        assert_eq!(p.team, "https://www.nba.com/team/1610612738/celtics");
        assert_eq!(p.url(PageKind::PlayerStats), "https://www.nba.com/stats/team/1610612738/players-traditional");
        assert_eq!(p.url(PageKind::TeamStats), "https://www.nba.com/stats/team/1610612738/traditional");
    }

    #[test]
    fn unknown_slug_fails_fast() {
        let err = TeamPages::resolve("https://www.nba.com", "Martians").unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().contains("Martians"));
    }
}
