// src/gui/pages/franchise.rs
use eframe::egui;

use crate::gui::components::{data_table, heading, panels};
use crate::view::{TeamTab, TeamView};

use super::TeamPage;

const RETIRED_WIDTHS: &[f32] = &[160.0, 40.0, 80.0, 120.0];
const HOF_WIDTHS: &[f32] = &[160.0, 80.0, 80.0, 140.0];

pub struct FranchisePage;
pub static PAGE: FranchisePage = FranchisePage;

impl TeamPage for FranchisePage {
    fn tab(&self) -> TeamTab { TeamTab::Franchise }

    fn draw(&self, ui: &mut egui::Ui, view: &mut TeamView) {
        let data = &view.data;
        let half = ui.available_height() * 0.4;

        ui.columns(2, |cols| {
            heading(&mut cols[0], "RETIRED NUMBERS");
            data_table::draw(&mut cols[0], "retired", &data.retired_numbers, RETIRED_WIDTHS, half);
            heading(&mut cols[1], "HALL OF FAME");
            data_table::draw(&mut cols[1], "hall_of_fame", &data.hall_of_fame, HOF_WIDTHS, half);
        });
        ui.separator();

        egui::ScrollArea::vertical().id_salt("franchise_lower").show(ui, |ui| {
            ui.columns(2, |cols| {
                panels::records(&mut cols[0], &data.all_time);
                panels::achievements(&mut cols[1], &data.achievements);
            });
        });
    }
}
