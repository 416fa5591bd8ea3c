// src/gui/components/tabs.rs
//
// Renders the team tabs and performs the switch itself.
// Disabled tabs are drawn but never become active.

use eframe::egui::{self, RichText};

use crate::view::{TeamTab, TeamView};

pub fn draw(ui: &mut egui::Ui, view: &mut TeamView) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        for tab in TeamTab::ALL {
            let selected = view.tab == tab;
            let label = RichText::new(tab.title()).size(16.0).strong();
            let resp = ui
                .add_enabled_ui(tab.enabled(), |ui| ui.selectable_label(selected, label))
                .inner;
            if resp.clicked() && !selected {
                view.select_tab(tab);
            }
        }
    });
}
