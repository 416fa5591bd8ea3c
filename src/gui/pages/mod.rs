// src/gui/pages/mod.rs
use eframe::egui;

use crate::view::{TeamTab, TeamView};

pub mod about;
pub mod directory;
pub mod franchise;
pub mod player_stats;

/// One tab of the team view. Pages only read `TeamData`; selection events
/// go back through `TeamView`.
pub trait TeamPage: Send + Sync + 'static {
    fn tab(&self) -> TeamTab;

    fn title(&self) -> &'static str { self.tab().title() }

    fn draw(&self, ui: &mut egui::Ui, view: &mut TeamView);
}

pub static PAGES: &[&'static dyn TeamPage] = &[
    &about::PAGE,
    &franchise::PAGE,
    &player_stats::PAGE,
];

/// `None` for tabs that have no page yet (Game-to-Game).
pub fn page_for(tab: TeamTab) -> Option<&'static dyn TeamPage> {
    PAGES.iter().copied().find(|p| p.tab() == tab)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_enabled_tab_has_a_page() {
        for tab in TeamTab::ALL {
            assert_eq!(page_for(tab).is_some(), tab.enabled(), "{tab:?}");
        }
    }
}
