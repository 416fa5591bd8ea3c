// tests/live_session.rs
mod common;

use common::{PLAYERS_PAGE, TEAM_PAGE, TEAM_STATS_PAGE};
use hoop_metrics::config::ScrapeOptions;
use hoop_metrics::scrape::{load_live, FETCHES_PER_TEAM};
use hoop_metrics::Error;
use mockito::Matcher;

fn options(base_url: &str) -> ScrapeOptions {
    let mut o = ScrapeOptions { timeout_secs: 5, ..ScrapeOptions::default() };
    o.set_base_url(base_url);
    o
}

#[test]
fn loads_a_team_over_http() {
    let mut server = mockito::Server::new();
    let team = server
        .mock("GET", "/team/1610612738/celtics")
        .with_body(TEAM_PAGE)
        .expect(FETCHES_PER_TEAM - 2)
        .create();
    let players = server
        .mock("GET", "/stats/team/1610612738/players-traditional")
        .with_body(PLAYERS_PAGE)
        .expect(1)
        .create();
    let totals = server
        .mock("GET", "/stats/team/1610612738/traditional")
        .with_body(TEAM_STATS_PAGE)
        .expect(1)
        .create();

    let data = load_live(&options(&server.url()), "celtics", None).unwrap();

    assert_eq!(data.roster.nrows(), 3);
    assert_eq!(data.player_stats.header, vec!["PLAYER", "PTS", "REB", "AST"]);
    assert_eq!(data.overall_stats.nrows(), 3);
    team.assert();
    players.assert();
    totals.assert();
}

#[test]
fn server_error_surfaces_as_navigation_failure() {
    let mut server = mockito::Server::new();
    let _team = server.mock("GET", "/team/1610612738/celtics").with_status(500).create();

    let err = load_live(&options(&server.url()), "celtics", None).unwrap_err();

    match err {
        Error::NavigationFailure { url, reason } => {
            assert!(url.ends_with("/team/1610612738/celtics"));
            assert!(reason.starts_with("HTTP 500"), "{reason}");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn unknown_team_is_rejected_before_a_session_opens() {
    let mut server = mockito::Server::new();
    let any = server.mock("GET", Matcher::Any).expect(0).create();
    // Opening a session with this agent fails, so only a resolve error can come back first.
    let opts = ScrapeOptions { user_agent: "bad\nagent".into(), ..options(&server.url()) };

    let err = load_live(&opts, "Martians", None).unwrap_err();
    assert!(matches!(err, Error::ResourceNotFound { resource: "team id", .. }));

    let err = load_live(&opts, "celtics", None).unwrap_err();
    assert!(matches!(err, Error::NavigationFailure { .. }));
    any.assert();
}
