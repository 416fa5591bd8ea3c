// src/gui/components/data_table.rs
//
// Draws one TableBlock. Purely a view; a selectable table reports the
// clicked row and leaves the selection itself to the caller.

use eframe::egui::{self, Align, Layout, RichText, Sense, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::table::TableBlock;

const DEFAULT_WIDTH: f32 = 60.0;
const ROW_H: f32 = 20.0;

pub fn draw(ui: &mut egui::Ui, id: &str, table: &TableBlock, widths: &[f32], max_height: f32) {
    build(ui, id, table, widths, max_height, None);
}

/// Rows are clickable; `selected` is highlighted. Returns the clicked row.
pub fn draw_selectable(
    ui: &mut egui::Ui,
    id: &str,
    table: &TableBlock,
    widths: &[f32],
    max_height: f32,
    selected: Option<usize>,
) -> Option<usize> {
    build(ui, id, table, widths, max_height, Some(selected))
}

fn build(
    ui: &mut egui::Ui,
    id: &str,
    table: &TableBlock,
    widths: &[f32],
    max_height: f32,
    selection: Option<Option<usize>>,
) -> Option<usize> {
    if table.ncols() == 0 {
        ui.weak("(no data)");
        return None;
    }

    let selected = selection.flatten();
    let mut clicked = None;

    let mut builder = TableBuilder::new(ui)
        .id_salt(id)
        .striped(true)
        .resizable(true)
        .cell_layout(Layout::left_to_right(Align::Center))
        .min_scrolled_height(0.0)
        .max_scroll_height(max_height);
    if selection.is_some() {
        builder = builder.sense(Sense::click());
    }
    for ci in 0..table.ncols() {
        let w = widths.get(ci).copied().unwrap_or(DEFAULT_WIDTH);
        builder = builder.column(Column::initial(w).at_least(20.0).clip(true));
    }

    builder
        .header(24.0, |mut header| {
            for h in &table.header {
                header.col(|ui| {
                    ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                    ui.label(RichText::new(h.as_str()).strong());
                });
            }
        })
        .body(|body| {
            body.rows(ROW_H, table.nrows(), |mut row| {
                let ix = row.index();
                row.set_selected(selected == Some(ix));
                for cell in &table.rows[ix] {
                    row.col(|ui| {
                        ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                        ui.label(cell.as_str());
                    });
                }
                if row.response().clicked() {
                    clicked = Some(ix);
                }
            });
        });

    clicked
}
