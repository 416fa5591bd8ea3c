// src/gui/components/panels.rs
//
// List-shaped sections of the About and Franchise tabs.

use eframe::egui::{self, Color32, RichText};

use crate::specs::lists;
use crate::table::{GroupedList, TableBlock};

use super::heading;

fn boxed<R>(ui: &mut egui::Ui, fill: Color32, add: impl FnOnce(&mut egui::Ui) -> R) -> R {
    egui::Frame::new()
        .fill(fill)
        .inner_margin(egui::Margin::same(8))
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            add(ui)
        })
        .inner
}

/// Role title on the left, one name per line on the right.
pub fn coaching(ui: &mut egui::Ui, staff: &GroupedList) {
    heading(ui, "COACHING STAFF");
    boxed(ui, Color32::from_gray(0x40), |ui| {
        egui::Grid::new("coaching_grid").spacing([24.0, 4.0]).show(ui, |ui| {
            for (role, names) in staff.iter() {
                ui.label(RichText::new(format!("{role}:")).strong());
                ui.label(names.first().map(String::as_str).unwrap_or(""));
                ui.end_row();
                for name in names.iter().skip(1) {
                    ui.label("");
                    ui.label(name.as_str());
                    ui.end_row();
                }
            }
        });
    });
}

pub fn updates(ui: &mut egui::Ui, news: &GroupedList, max_height: f32) {
    heading(ui, "TEAM UPDATES");
    boxed(ui, Color32::BLACK, |ui| {
        egui::ScrollArea::vertical().id_salt("updates").max_height(max_height).show(ui, |ui| {
            for item in lists::updates(news) {
                ui.label(RichText::new(item.date).small().color(Color32::GRAY));
                ui.label(RichText::new(item.headline).strong().color(Color32::WHITE));
                ui.label(item.content);
                ui.add_space(10.0);
            }
        });
    });
}

/// Award title followed by its comma-joined entries.
pub fn achievements(ui: &mut egui::Ui, awards: &GroupedList) {
    heading(ui, "ACHIEVEMENTS");
    boxed(ui, Color32::BLACK, |ui| {
        for (title, entries) in awards.iter() {
            ui.label(RichText::new(title).strong());
            ui.label(entries.join(", "));
            ui.add_space(6.0);
        }
    });
}

/// All-time records: stat, holder, total.
pub fn records(ui: &mut egui::Ui, records: &TableBlock) {
    heading(ui, "ALL-TIME RECORDS");
    boxed(ui, Color32::from_gray(0x40), |ui| {
        egui::Grid::new("records_grid").striped(true).spacing([24.0, 4.0]).show(ui, |ui| {
            for h in &records.header {
                ui.label(RichText::new(h.as_str()).strong().color(Color32::LIGHT_GRAY));
            }
            ui.end_row();
            for row in &records.rows {
                for (ci, cell) in row.iter().enumerate() {
                    let text = RichText::new(cell.as_str());
                    ui.label(if ci == 0 { text.strong() } else { text });
                }
                ui.end_row();
            }
        });
    });
}
