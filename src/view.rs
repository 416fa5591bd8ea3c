// src/view.rs
//! Presentation state, independent of the widget toolkit.
//!
//! `ViewState` is either the team directory or one open team view. Opening a
//! team builds a fresh `TeamView` from freshly scraped `TeamData`; going back
//! drops it entirely. Player selection events produce a new `TeamSelection`
//! and a comparison recomputed from scratch.

use crate::directory::Team;
use crate::engine::{compare_players, ComparisonRow, Slot, TeamSelection};
use crate::error::Result;
use crate::scrape::TeamData;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TeamTab {
    #[default]
    About,
    Franchise,
    PlayerStats,
    GameToGame,
}

impl TeamTab {
    pub const ALL: [TeamTab; 4] = [TeamTab::About, TeamTab::Franchise, TeamTab::PlayerStats, TeamTab::GameToGame];

    pub fn title(self) -> &'static str {
        match self {
            TeamTab::About => "ABOUT",
            TeamTab::Franchise => "FRANCHISE",
            TeamTab::PlayerStats => "PLAYER STATS",
            TeamTab::GameToGame => "GAME-TO-GAME",
        }
    }

    /// Game-to-Game is listed but not implemented.
    pub fn enabled(self) -> bool {
        !matches!(self, TeamTab::GameToGame)
    }
}

pub struct TeamView {
    pub team: &'static Team,
    pub data: TeamData,
    pub tab: TeamTab,
    /// `None` when the roster is empty.
    pub selection: Option<TeamSelection>,
    pub comparison: Result<Vec<ComparisonRow>>,
}

impl TeamView {
    pub fn new(team: &'static Team, data: TeamData) -> Self {
        let selection = TeamSelection::from_roster(&data.roster);
        let comparison = compute(selection.as_ref(), &data);
        Self { team, data, tab: TeamTab::default(), selection, comparison }
    }

    /// Selection event from one of the two roster pickers.
    pub fn select_player(&mut self, slot: Slot, name: &str) {
        let Some(current) = self.selection.take() else { return };
        let next = current.with(slot, name);
        logf!("UI: Compare {:?} vs {:?}", next.first, next.second);
        self.comparison = compute(Some(&next), &self.data);
        self.selection = Some(next);
    }

    pub fn select_tab(&mut self, tab: TeamTab) {
        if tab.enabled() && tab != self.tab {
            logd!("UI: Tab {:?} → {:?}", self.tab, tab);
            self.tab = tab;
        }
    }
}

fn compute(selection: Option<&TeamSelection>, data: &TeamData) -> Result<Vec<ComparisonRow>> {
    match selection {
        Some(sel) => compare_players(sel, &data.player_stats),
        None => Ok(Vec::new()),
    }
}

#[derive(Default)]
pub enum ViewState {
    #[default]
    Directory,
    Team(Box<TeamView>),
}

impl ViewState {
    pub fn open(team: &'static Team, data: TeamData) -> Self {
        logf!("UI: Directory → {}", team.name);
        ViewState::Team(Box::new(TeamView::new(team, data)))
    }

    /// Drop the team view and everything in it.
    pub fn back(self) -> Self {
        if let ViewState::Team(view) = &self {
            logf!("UI: {} → Directory", view.team.name);
        }
        ViewState::Directory
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, ViewState::Directory)
    }

    pub fn team_view(&self) -> Option<&TeamView> {
        match self {
            ViewState::Team(v) => Some(v),
            ViewState::Directory => None,
        }
    }

    pub fn team_view_mut(&mut self) -> Option<&mut TeamView> {
        match self {
            ViewState::Team(v) => Some(v),
            ViewState::Directory => None,
        }
    }
}
