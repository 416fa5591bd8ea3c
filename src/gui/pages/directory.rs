// src/gui/pages/directory.rs
//
// Landing view: one row of buttons per division.

use eframe::egui::{self, RichText, TextureHandle};

use crate::directory::{self, Team};
use crate::gui::logo;

const BUTTON: [f32; 2] = [220.0, 44.0];

/// Returns the team whose button was clicked this frame.
pub fn draw(ui: &mut egui::Ui, league_logo: Option<&TextureHandle>) -> Option<&'static Team> {
    let mut picked = None;

    ui.vertical_centered(|ui| {
        ui.add_space(24.0);
        logo::show(ui, league_logo, egui::vec2(60.0, 120.0));
        ui.label(RichText::new("NBA Team Statistics").size(40.0).strong());
        ui.add_space(12.0);
        ui.label(RichText::new("Welcome, please select a team from below:").size(26.0));
        ui.add_space(32.0);
    });

    egui::ScrollArea::vertical().id_salt("divisions").show(ui, |ui| {
        egui::Grid::new("division_grid")
            .spacing([16.0, 18.0])
            .show(ui, |ui| {
                for div in directory::divisions() {
                    ui.label(RichText::new(format!("{}:", div.name)).size(20.0).strong());
                    for team in &div.teams {
                        let button = egui::Button::new(RichText::new(team.name).size(16.0));
                        if ui.add_sized(BUTTON, button).clicked() {
                            picked = Some(team);
                        }
                    }
                    ui.end_row();
                }
            });
    });

    picked
}
