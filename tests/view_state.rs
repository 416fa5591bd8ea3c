// tests/view_state.rs
mod common;

use common::{FixtureSource, BASE};
use hoop_metrics::directory;
use hoop_metrics::engine::{Relation, Slot};
use hoop_metrics::scrape::load_team;
use hoop_metrics::view::{TeamTab, ViewState};

fn opened() -> ViewState {
    let team = directory::find("celtics").unwrap();
    let mut src = FixtureSource::for_team(team.slug);
    let data = load_team(&mut src, BASE, team.slug, None).unwrap();
    ViewState::open(team, data)
}

#[test]
fn opening_a_team_selects_the_first_two_players() {
    let state = opened();
    let view = state.team_view().unwrap();

    assert_eq!(view.team.name, "Boston Celtics");
    assert_eq!(view.tab, TeamTab::About);
    let sel = view.selection.as_ref().unwrap();
    assert_eq!((sel.first.as_str(), sel.second.as_str()), ("Alice", "Bob"));

    let rows = view.comparison.as_ref().unwrap();
    let rel: Vec<_> = rows.iter().map(|r| r.relation).collect();
    assert_eq!(
        rel,
        vec![None, Some(Relation::AGreater), Some(Relation::Equal), Some(Relation::BGreater)]
    );
}

#[test]
fn selection_event_recomputes_from_scratch() {
    let mut state = opened();
    let view = state.team_view_mut().unwrap();

    // Carol is on the roster but has no stats row
    view.select_player(Slot::Second, "Carol");
    let rows = view.comparison.as_ref().unwrap();
    assert_eq!(rows[0].value_b, "Carol");
    assert!(rows[1..].iter().all(|r| r.value_b == "0" && r.relation == Some(Relation::AGreater)));

    view.select_player(Slot::First, "Carol");
    let rows = view.comparison.as_ref().unwrap();
    assert!(rows[1..].iter().all(|r| r.relation == Some(Relation::Equal)));
}

#[test]
fn disabled_tab_is_never_entered() {
    let mut state = opened();
    let view = state.team_view_mut().unwrap();

    view.select_tab(TeamTab::PlayerStats);
    assert_eq!(view.tab, TeamTab::PlayerStats);
    view.select_tab(TeamTab::GameToGame);
    assert_eq!(view.tab, TeamTab::PlayerStats);
}

#[test]
fn back_discards_the_team_view() {
    let state = opened().back();
    assert!(state.is_directory());
    assert!(state.team_view().is_none());
}
