// src/directory.rs
//! Static team directory: 6 divisions × 5 teams, slug → numeric site id.
//! Pure lookup, nothing here touches the network.

use crate::core::sanitize::nickname;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Team {
    /// Display name, e.g. "Boston Celtics"
    pub name: &'static str,
    /// Lower-cased last word of the name, e.g. "celtics"
    pub slug: &'static str,
    pub id: u32,
}

impl Team {
    /// "Celtics": the logo file stem.
    pub fn nickname(&self) -> &'static str { nickname(self.name) }
}

#[derive(Clone, Copy, Debug)]
pub struct Division {
    pub name: &'static str,
    pub teams: [Team; 5],
}

const fn team(name: &'static str, slug: &'static str, id: u32) -> Team {
    Team { name, slug, id }
}

pub static DIVISIONS: [Division; 6] = [
    Division { name: "Atlantic Division", teams: [
        team("Boston Celtics", "celtics", 1610612738),
        team("Brooklyn Nets", "nets", 1610612751),
        team("New York Knicks", "knicks", 1610612752),
        team("Philadelphia 76ers", "76ers", 1610612755),
        team("Toronto Raptors", "raptors", 1610612761),
    ]},
    Division { name: "Central Division", teams: [
        team("Chicago Bulls", "bulls", 1610612741),
        team("Cleveland Cavaliers", "cavaliers", 1610612739),
        team("Detroit Pistons", "pistons", 1610612765),
        team("Indiana Pacers", "pacers", 1610612754),
        team("Milwaukee Bucks", "bucks", 1610612749),
    ]},
    Division { name: "Southeast Division", teams: [
        team("Atlanta Hawks", "hawks", 1610612737),
        team("Charlotte Hornets", "hornets", 1610612766),
        team("Miami Heat", "heat", 1610612748),
        team("Orlando Magic", "magic", 1610612753),
        team("Washington Wizards", "wizards", 1610612764),
    ]},
    Division { name: "Northwest Division", teams: [
        team("Denver Nuggets", "nuggets", 1610612743),
        team("Minnesota Timberwolves", "timberwolves", 1610612750),
        team("Oklahoma City Thunder", "thunder", 1610612760),
        team("Portland Trail Blazers", "blazers", 1610612757),
        team("Utah Jazz", "jazz", 1610612762),
    ]},
    Division { name: "Pacific Division", teams: [
        team("Golden State Warriors", "warriors", 1610612744),
        team("LA Clippers", "clippers", 1610612746),
        team("Los Angeles Lakers", "lakers", 1610612747),
        team("Phoenix Suns", "suns", 1610612756),
        team("Sacramento Kings", "kings", 1610612758),
    ]},
    Division { name: "Southwest Division", teams: [
        team("Dallas Mavericks", "mavericks", 1610612742),
        team("Houston Rockets", "rockets", 1610612745),
        team("Memphis Grizzlies", "grizzlies", 1610612763),
        team("New Orleans Pelicans", "pelicans", 1610612740),
        team("San Antonio Spurs", "spurs", 1610612759),
    ]},
];

pub fn divisions() -> &'static [Division] {
    &DIVISIONS
}

pub fn all_teams() -> impl Iterator<Item = &'static Team> {
    DIVISIONS.iter().flat_map(|d| d.teams.iter())
}

/// Slug of a display name: last word, lower-cased.
pub fn slug_for(team_name: &str) -> String {
    nickname(team_name).to_lowercase()
}

/// Exact match on the lower-case slug; anything outside the 30 is `None`.
pub fn resolve_id(slug: &str) -> Option<u32> {
    find_by_slug(slug).map(|t| t.id)
}

pub fn find_by_slug(slug: &str) -> Option<&'static Team> {
    all_teams().find(|t| t.slug == slug)
}

/// Accepts a display name ("Boston Celtics") or a slug ("celtics").
pub fn find(name_or_slug: &str) -> Option<&'static Team> {
    let q = name_or_slug.trim();
    all_teams()
        .find(|t| t.name.eq_ignore_ascii_case(q))
        .or_else(|| find_by_slug(&q.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn thirty_teams_six_divisions() {
        assert_eq!(divisions().len(), 6);
        assert_eq!(all_teams().count(), 30);
    }

    #[test]
    fn every_slug_resolves_to_a_unique_id() {
        let mut ids = HashSet::new();
        for t in all_teams() {
            assert_eq!(resolve_id(t.slug), Some(t.id), "{}", t.name);
            assert!(ids.insert(t.id), "duplicate id for {}", t.name);
        }
    }

    #[test]
    fn slugs_derive_from_names() {
        for t in all_teams() {
            assert_eq!(slug_for(t.name), t.slug);
        }
    }

    #[test]
    fn unknown_slugs_are_absent() {
        assert_eq!(resolve_id("Martians"), None);
        assert_eq!(resolve_id("martians"), None);
        assert_eq!(resolve_id("Celtics"), None); // slugs are lower-case
        assert_eq!(resolve_id(""), None);
    }

    #[test]
    fn find_accepts_name_or_slug() {
        assert_eq!(find("Portland Trail Blazers").map(|t| t.slug), Some("blazers"));
        assert_eq!(find("Blazers").map(|t| t.id), Some(1610612757));
        assert!(find("Seattle SuperSonics").is_none());
    }
}
