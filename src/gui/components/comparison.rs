// src/gui/components/comparison.rs
//
// Player 1 value | stat | player 2 value, coloured by relation, plus the legend.

use eframe::egui::{self, Align, Color32, Layout, RichText};

use crate::engine::{ComparisonRow, Relation};
use crate::error::Result;

use super::heading;

pub const GREATER: Color32 = Color32::GREEN;
pub const LESS: Color32 = Color32::RED;
pub const EQUAL: Color32 = Color32::WHITE;

/// Colour of player 1's value; player 2 gets the opposite.
pub fn colors(relation: Option<Relation>) -> (Color32, Color32) {
    match relation {
        Some(Relation::AGreater) => (GREATER, LESS),
        Some(Relation::BGreater) => (LESS, GREATER),
        Some(Relation::Equal) | None => (EQUAL, EQUAL),
    }
}

pub fn draw(ui: &mut egui::Ui, comparison: &Result<Vec<ComparisonRow>>) {
    heading(ui, "PLAYER COMPARISON");
    match comparison {
        Err(e) => {
            ui.colored_label(Color32::LIGHT_RED, format!("Cannot compare: {e}"));
        }
        Ok(rows) if rows.is_empty() => {
            ui.weak("No players to compare");
        }
        Ok(rows) => {
            egui::ScrollArea::vertical().id_salt("comparison_scroll").max_height(ui.available_height() * 0.8).show(ui, |ui| {
                egui::Grid::new("comparison_grid")
                    .striped(true)
                    .num_columns(3)
                    .min_col_width(90.0)
                    .show(ui, |ui| {
                        for row in rows {
                            cells(ui, row);
                            ui.end_row();
                        }
                    });
            });
        }
    }
    ui.separator();
    legend(ui);
}

fn cells(ui: &mut egui::Ui, row: &ComparisonRow) {
    let (ca, cb) = colors(row.relation);
    let mut a = RichText::new(&row.value_a).color(ca);
    let mut b = RichText::new(&row.value_b).color(cb);
    if row.is_identity() {
        a = a.strong();
        b = b.strong();
    }
    ui.with_layout(Layout::right_to_left(Align::Center), |ui| { ui.label(a); });
    ui.vertical_centered(|ui| { ui.label(RichText::new(&row.label).strong()); });
    ui.label(b);
}

fn legend(ui: &mut egui::Ui) {
    ui.label(RichText::new("Legend").strong());
    ui.label(RichText::new("Green: player 1 greater than player 2").color(GREATER));
    ui.label(RichText::new("Red: player 1 less than player 2").color(LESS));
    ui.label(RichText::new("White: equal").color(EQUAL));
}
