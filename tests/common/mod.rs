// tests/common/mod.rs
#![allow(dead_code)]

use std::collections::HashMap;

use hoop_metrics::core::Source;
use hoop_metrics::scrape::TeamPages;
use hoop_metrics::{Error, Result};

pub const BASE: &str = "http://fixture.test";

pub const TEAM_PAGE: &str = r#"
<html><body>
  <table>
    <tr><th>PLAYER</th><th>#</th><th>POS</th><th>HEIGHT</th></tr>
    <tr><td>Alice</td><td>1</td><td>G</td><td>6-2</td></tr>
    <tr><td>Bob</td><td>2</td><td>F</td><td>6-8</td></tr>
    <tr><td>Carol</td><td>3</td><td>C</td><td>7-0</td></tr>
  </table>
  <section class="TeamProfile_sectionCoaches__e66bL">
    <h3>Head Coach</h3><ul><li>Dana Smith</li></ul>
    <h3>Assistant Coaches</h3><ul><li>Eve Jones</li><li>Frank Lee</li></ul>
  </section>
  <article>
    <p class="TeamFantasyNews_articleDate__SrBm7">Apr 12</p>
    <h4 class="TeamFantasyNews_articleHeadline__02sbs">Alice scores 40</h4>
    <p class="TeamFantasyNews_articleContent__x7vps">Career night.</p>
  </article>
  <div class="TeamRetired_content__nb7Qt"><table>
    <tr><th>PLAYER</th><th>NO.</th><th>SEASONS</th></tr>
    <tr><td>Old Timer</td><td>6</td><td>1956-69</td></tr>
  </table></div>
  <div class="TeamHallOfFame_content__IZSl2"><table>
    <tr><th>INDUCTEE</th><th>POSITION</th><th>YEAR</th></tr>
    <tr><td>Great Coach</td><td>Coach</td><td>1980</td></tr>
  </table></div>
  <table class="TeamRecords_table__0iapO">
    <tr><td>POINTS</td><td>Old Timer</td><td>26,395</td></tr>
  </table>
  <div class="TeamAwards_group__XU0o9"><h3>Championships</h3>
    <ul><li>1957</li><li>1959</li></ul></div>
</body></html>
"#;

pub const PLAYERS_PAGE: &str = r#"
<html><body>
  <table class="Crom_table__p1iZz">
    <tr><th>TEAM</th><th>GP</th></tr>
    <tr><td>Team</td><td>82</td></tr>
  </table>
  <table class="Crom_table__p1iZz">
    <tr><th>PLAYER</th><th>PTS</th><th>REB</th><th>AST</th></tr>
    <tr><td>Alice</td><td>20</td><td>5</td><td>7</td></tr>
    <tr><td>Bob</td><td>18</td><td>5</td><td>9</td></tr>
  </table>
</body></html>
"#;

pub const TEAM_STATS_PAGE: &str = r#"
<html><body>
  <table class="Crom_table__p1iZz">
    <tr><th>Season</th><th>GP</th><th>W</th></tr>
    <tr><td>2023-24</td><td>82</td><td>64</td></tr>
  </table>
  <table class="Crom_table__p1iZz">
    <tr><th>Season</th><th>GP</th><th>W</th></tr>
    <tr><td>Home</td><td>41</td><td>37</td></tr>
  </table>
  <table class="Crom_table__p1iZz">
    <tr><th>Season</th><th>GP</th><th>W</th></tr>
    <tr><td>Road</td><td>41</td><td>27</td></tr>
  </table>
</body></html>
"#;

/// Serves canned pages by URL and records every fetch.
#[derive(Default)]
pub struct FixtureSource {
    pages: HashMap<String, String>,
    pub fetched: Vec<String>,
}

impl FixtureSource {
    /// All three pages of `slug` served from the fixtures above.
    pub fn for_team(slug: &str) -> Self {
        let urls = TeamPages::resolve(BASE, slug).expect("known slug");
        let mut src = Self::default();
        src.serve(&urls.team, TEAM_PAGE);
        src.serve(&urls.player_stats, PLAYERS_PAGE);
        src.serve(&urls.team_stats, TEAM_STATS_PAGE);
        src
    }

    pub fn serve(&mut self, url: &str, html: &str) {
        self.pages.insert(url.to_string(), html.to_string());
    }

    pub fn remove(&mut self, url: &str) {
        self.pages.remove(url);
    }
}

impl Source for FixtureSource {
    fn fetch(&mut self, url: &str) -> Result<String> {
        self.fetched.push(url.to_string());
        self.pages.get(url).cloned().ok_or_else(|| Error::NavigationFailure {
            url: url.to_string(),
            reason: "HTTP 404 Not Found".to_string(),
        })
    }
}
