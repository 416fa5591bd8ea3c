// src/gui/pages/player_stats.rs
//
// Two roster pickers with the comparison panel between them, and the team's
// overall stats underneath. A click in either picker is a selection event.

use eframe::egui;

use crate::engine::Slot;
use crate::gui::components::{comparison, data_table, heading};
use crate::table::TableBlock;
use crate::view::{TeamTab, TeamView};

use super::TeamPage;

const PICKER_COLUMNS: usize = 3;
const PICKER_WIDTHS: &[f32] = &[170.0, 40.0, 60.0];

pub struct PlayerStatsPage;
pub static PAGE: PlayerStatsPage = PlayerStatsPage;

fn row_of(roster: &TableBlock, name: Option<&str>) -> Option<usize> {
    let name = name?;
    roster.keys().position(|k| k == name)
}

impl TeamPage for PlayerStatsPage {
    fn tab(&self) -> TeamTab { TeamTab::PlayerStats }

    fn draw(&self, ui: &mut egui::Ui, view: &mut TeamView) {
        let pickers = view.data.roster.leading_columns(PICKER_COLUMNS);
        let sel = view.selection.as_ref();
        let first = row_of(&pickers, sel.map(|s| s.get(Slot::First)));
        let second = row_of(&pickers, sel.map(|s| s.get(Slot::Second)));

        let upper = ui.available_height() * 0.5;
        let mut event: Option<(Slot, usize)> = None;

        ui.columns(3, |cols| {
            heading(&mut cols[0], "CHOOSE PLAYER 1");
            if let Some(ix) = data_table::draw_selectable(&mut cols[0], "picker_1", &pickers, PICKER_WIDTHS, upper, first) {
                event = Some((Slot::First, ix));
            }

            comparison::draw(&mut cols[1], &view.comparison);

            heading(&mut cols[2], "CHOOSE PLAYER 2");
            if let Some(ix) = data_table::draw_selectable(&mut cols[2], "picker_2", &pickers, PICKER_WIDTHS, upper, second) {
                event = Some((Slot::Second, ix));
            }
        });

        if let Some((slot, ix)) = event {
            if let Some(name) = pickers.keys().nth(ix) {
                view.select_player(slot, name);
            }
        }

        ui.separator();
        heading(ui, "OVERALL TEAM STATS");
        let rest = ui.available_height();
        data_table::draw(ui, "overall_stats", &view.data.overall_stats, &[140.0], rest);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selected_rows_follow_names() {
        let roster = TableBlock::new(
            vec![s!("PLAYER"), s!("#")],
            vec![vec![s!("Alice"), s!("1")], vec![s!("Bob"), s!("2")]],
        );
        assert_eq!(row_of(&roster, Some("Bob")), Some(1));
        assert_eq!(row_of(&roster, Some("Carol")), None);
        assert_eq!(row_of(&roster, None), None);
    }
}
