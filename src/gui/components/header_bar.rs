// src/gui/components/header_bar.rs
use eframe::egui::{self, RichText, TextureHandle};

use crate::directory::Team;
use crate::gui::logo;

/// Back button, team label, team logo. Returns true when Back was clicked.
pub fn draw(ui: &mut egui::Ui, team: &Team, team_logo: Option<&TextureHandle>) -> bool {
    let mut back = false;
    ui.columns(3, |cols| {
        cols[0].vertical_centered(|ui| {
            ui.add_space(24.0);
            let button = egui::Button::new(RichText::new("Back").size(16.0));
            back = ui.add_sized([160.0, 40.0], button).clicked();
        });
        cols[1].vertical_centered(|ui| {
            ui.add_space(28.0);
            ui.label(RichText::new(format!("Selected: {}", team.name)).size(28.0).strong());
        });
        cols[2].vertical_centered(|ui| {
            logo::show(ui, team_logo, egui::vec2(100.0, 100.0));
        });
    });
    back
}
