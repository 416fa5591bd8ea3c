// src/gui/pages/about.rs
use eframe::egui;

use crate::gui::components::{data_table, heading, panels};
use crate::view::{TeamTab, TeamView};

use super::TeamPage;

const ROSTER_WIDTHS: &[f32] = &[180.0, 40.0, 60.0, 60.0, 60.0, 110.0, 50.0, 50.0, 160.0];

pub struct AboutPage;
pub static PAGE: AboutPage = AboutPage;

impl TeamPage for AboutPage {
    fn tab(&self) -> TeamTab { TeamTab::About }

    fn draw(&self, ui: &mut egui::Ui, view: &mut TeamView) {
        let data = &view.data;
        let h = ui.available_height();

        heading(ui, "ROSTER");
        data_table::draw(ui, "roster", &data.roster, ROSTER_WIDTHS, h * 0.45);
        ui.separator();

        let lower = ui.available_height() * 0.85;
        ui.columns(2, |cols| {
            panels::coaching(&mut cols[0], &data.coaching);
            panels::updates(&mut cols[1], &data.updates, lower);
        });
    }
}
