// src/gui/components/mod.rs
use eframe::egui::{self, Color32, RichText};

pub mod comparison;
pub mod data_table;
pub mod header_bar;
pub mod panels;
pub mod tabs;

/// "--ROSTER--" style section label.
pub fn heading(ui: &mut egui::Ui, text: &str) {
    ui.label(RichText::new(format!("--{text}--")).size(15.0).strong().color(Color32::LIGHT_GRAY));
}
